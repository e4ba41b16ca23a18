use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "resmap_server=info,resmap_api=info,resmap_provider=info,\
resmap_routing=info,resmap_resolver=info,resmap_config=info,resmap_watcher=info,\
resmap_filesystem=info,resmap_events=info,tower_http=info";

/// Installs the global subscriber, `RUST_LOG` overriding the default filter
pub fn initialize() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
