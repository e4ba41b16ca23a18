use resmap_api::AppState;
use resmap_config::Config;
use resmap_events::EventBus;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Reloads the configuration file on change and pushes the new resource
/// mappings into the shared application state
pub struct ConfigWatcher {
    pub(super) config: Arc<RwLock<Config>>,
    pub(super) config_path: String,
    pub(super) state: AppState,
    pub(super) events: Arc<EventBus>,
}
