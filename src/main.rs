mod bootstrap;

use resmap_events::{AppEvent, EventBus};
use resmap_watcher::ConfigWatcher;
use crate::bootstrap::{config, logging, router, server};
use anyhow::Result;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    logging::initialize();

    let events = EventBus::new(true);
    events.emit(AppEvent::Starting);

    let config_path = std::env::var("RESMAP_CONFIG").unwrap_or_else(|_| "config.toml".to_string());
    let config = config::load(&config_path, &events).await?;

    let app_state = server::initialize_state(&config, &events).await?;

    let app = router::build(&config, app_state.clone());
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let tcp_nodelay = config.server.tcp_nodelay;
    let base_url = config.server.base_url.clone();

    let config_watcher = Arc::new(ConfigWatcher::new(
        Arc::new(tokio::sync::RwLock::new(config)),
        config_path,
        app_state,
        Arc::clone(&events),
    ));
    let config_watcher_handle = config_watcher.start_watching().await?;

    let listener = server::bind(&addr).await?;

    events.emit(AppEvent::Ready {
        addr: addr.to_string(),
        base_url,
    });

    let shutdown_events = Arc::clone(&events);
    let shutdown_signal = async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            shutdown_events.emit(AppEvent::Error {
                context: "Failed to listen for Ctrl+C".to_string(),
                error: e.to_string(),
            });
            std::future::pending::<()>().await;
        }
        tracing::info!("Shutdown signal received, initiating graceful shutdown...");
    };

    axum::serve(listener, app.into_make_service())
        .tcp_nodelay(tcp_nodelay)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    config_watcher_handle.abort();
    let _ = config_watcher_handle.await;

    events.emit(AppEvent::Shutdown);
    Ok(())
}
