use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AppEvent {
    // Application lifecycle
    Starting,
    Ready { addr: String, base_url: String },
    Shutdown,

    // Configuration
    ConfigLoading { path: String },
    ConfigLoaded { mappings_count: usize },
    ConfigCreated { path: String },
    ConfigMigrated { added_fields: Vec<String> },
    ConfigReloaded,
    ConfigError { error: String },

    // Resource locations
    LocationCreated { path: String },
    LocationMissing { pattern: String, path: String },

    // Resource URL mappings
    MappingsRefreshed { patterns: Vec<String> },
    MappingsConfigured { patterns: Vec<String> },

    // Errors
    Error { context: String, error: String },
}

pub struct EventBus {
    pub(super) silent_mode: bool,
}
