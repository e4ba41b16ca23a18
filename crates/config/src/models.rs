use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub server: ServerSettings,
    #[serde(default = "super::defaults::resource_settings")]
    pub resources: ResourceSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub base_url: String,
    /// Prefix the whole application is mounted under ("" for the root)
    #[serde(default)]
    pub context_path: String,
    #[serde(default = "super::defaults::tcp_nodelay")]
    pub tcp_nodelay: bool,
    #[serde(default = "super::defaults::timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "super::defaults::max_body_size")]
    pub max_body_size_mb: usize,
    #[serde(default = "super::defaults::allowed_origins")]
    pub allowed_origins: Vec<String>,
    #[serde(default = "super::defaults::max_concurrent_requests")]
    pub max_concurrent_requests: usize,
    #[serde(default = "super::defaults::streaming_threshold_mb")]
    pub streaming_threshold_mb: u64,
    #[serde(default = "super::defaults::enable_compression")]
    pub enable_compression: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResourceSettings {
    #[serde(default = "super::defaults::config_watch_debounce_ms")]
    pub config_watch_debounce_ms: u64,
    #[serde(default = "super::defaults::url_decode")]
    pub url_decode: bool,
    #[serde(default = "super::defaults::remove_semicolon_content")]
    pub remove_semicolon_content: bool,
    #[serde(default)]
    pub always_use_full_path: bool,
    #[serde(default = "super::defaults::create_locations")]
    pub create_locations: bool,
    /// Patterns to expose for public URL lookup; when set, mappings are no
    /// longer detected from the route table
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_patterns: Option<Vec<String>>,
    #[serde(default)]
    pub mappings: Vec<ResourceMapping>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ResourceMapping {
    pub pattern: String,
    pub locations: Vec<String>,
    #[serde(default = "super::defaults::mapping_enabled")]
    pub enabled: bool,
}

impl ResourceSettings {
    /// Mappings that take part in routing
    pub fn enabled_mappings(&self) -> impl Iterator<Item = &ResourceMapping> {
        self.mappings.iter().filter(|m| m.enabled)
    }
}
