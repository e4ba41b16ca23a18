use super::models::AppState;
use crate::errors::ApiError;
use crate::routes::build_route_table;
use parking_lot::RwLock;
use resmap_config::Config;
use resmap_provider::ResourceUrlProvider;
use resmap_resolver::ResourceHandler;
use resmap_routing::{AntPathMatcher, PathMatcher, RouteTable, UrlPathHelper};
use std::collections::HashMap;
use std::sync::Arc;

impl AppState {
    pub fn new(context_path: String, streaming_threshold_mb: u64) -> Self {
        let matcher: Arc<dyn PathMatcher> = Arc::new(AntPathMatcher::new());
        let mut provider = ResourceUrlProvider::new();
        provider.set_path_matcher(Arc::clone(&matcher));

        Self {
            routes: Arc::new(RwLock::new(RouteTable::new())),
            provider: Arc::new(RwLock::new(provider)),
            matcher,
            context_path: Arc::from(context_path),
            streaming_threshold_bytes: streaming_threshold_mb.saturating_mul(1024 * 1024),
        }
    }

    /// State for a freshly loaded configuration, routes built and provider refreshed
    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        let state = Self::new(
            config.server.context_path.clone(),
            config.server.streaming_threshold_mb,
        );
        state.apply_config(config)?;
        Ok(state)
    }

    /// Rebuilds the route table from `config` and refreshes the provider.
    ///
    /// Returns the patterns available for public URL lookup afterwards.
    pub fn apply_config(&self, config: &Config) -> Result<Vec<String>, ApiError> {
        let table = build_route_table(&config.resources)?;
        let resources = &config.resources;
        let path_helper = UrlPathHelper::new()
            .with_always_use_full_path(resources.always_use_full_path)
            .with_url_decode(resources.url_decode)
            .with_remove_semicolon_content(resources.remove_semicolon_content);

        *self.routes.write() = table;

        let routes = self.routes.read();
        let mut provider = self.provider.write();
        provider.set_url_path_helper(path_helper);

        match &resources.public_patterns {
            Some(patterns) => {
                provider.set_handler_map(explicit_handler_map(&routes, patterns));
            }
            None => {
                if !provider.is_autodetect() {
                    tracing::warn!(
                        "Public URL mappings were configured explicitly; restart to detect them again"
                    );
                }
                provider.on_refresh(&*routes);
            }
        }

        let mut patterns: Vec<String> = provider.handler_map().keys().cloned().collect();
        patterns.sort();
        Ok(patterns)
    }

    pub fn is_autodetect(&self) -> bool {
        self.provider.read().is_autodetect()
    }

    pub fn context_path(&self) -> &str {
        &self.context_path
    }
}

/// Resource handlers of the route table registered under `patterns`
fn explicit_handler_map(
    routes: &RouteTable,
    patterns: &[String],
) -> HashMap<String, Arc<ResourceHandler>> {
    let mut handler_map = HashMap::new();

    for pattern in patterns {
        let key = if pattern.starts_with('/') {
            pattern.clone()
        } else {
            format!("/{}", pattern)
        };

        let handler = routes
            .mappings()
            .iter()
            .find_map(|mapping| mapping.url_map().get(&key))
            .and_then(|handler| handler.as_resource());

        match handler {
            Some(handler) => {
                handler_map.insert(key, Arc::clone(handler));
            }
            None => tracing::warn!("Public pattern '{}' is not a resource mapping", pattern),
        }
    }

    handler_map
}
