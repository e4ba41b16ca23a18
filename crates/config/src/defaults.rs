/// Default values for configuration fields

pub fn tcp_nodelay() -> bool {
    true
}

pub fn timeout_secs() -> u64 {
    60
}

pub fn max_body_size() -> usize {
    10
}

pub fn max_concurrent_requests() -> usize {
    1000
}

pub fn allowed_origins() -> Vec<String> {
    vec!["*".to_string()]
}

pub fn streaming_threshold_mb() -> u64 {
    8  // Files larger than 8MB are streamed instead of read into memory
}

pub fn enable_compression() -> bool {
    true
}

pub fn config_watch_debounce_ms() -> u64 {
    500
}

pub fn url_decode() -> bool {
    true
}

pub fn remove_semicolon_content() -> bool {
    true
}

pub fn create_locations() -> bool {
    true
}

pub fn mapping_enabled() -> bool {
    true
}

pub fn resource_settings() -> super::models::ResourceSettings {
    super::models::ResourceSettings {
        config_watch_debounce_ms: config_watch_debounce_ms(),
        url_decode: url_decode(),
        remove_semicolon_content: remove_semicolon_content(),
        always_use_full_path: false,
        create_locations: create_locations(),
        public_patterns: None,
        mappings: Vec::new(),
    }
}

pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# ===============================================================================
# resmap Configuration
# ===============================================================================

[server]
# Network
host = "0.0.0.0"                     # Server bind address (0.0.0.0 = all interfaces)
port = 8080                          # Server port
base_url = "http://localhost:8080"   # Public base URL
context_path = ""                    # Mount prefix for every route ("" = root, e.g. "/app")

# Performance
tcp_nodelay = true                   # Disable Nagle's algorithm (lower latency)
timeout_secs = 60                    # Request timeout in seconds
max_concurrent_requests = 1000       # Max simultaneous connections
max_body_size_mb = 10                # Max request body size in MB
streaming_threshold_mb = 8           # Files >8MB streamed, smaller files read into memory
enable_compression = true            # HTTP compression (gzip/brotli/deflate)

# CORS
allowed_origins = ["*"]              # "*" = all origins | ["https://example.com"] for production

[resources]
config_watch_debounce_ms = 500       # Config file change debounce (milliseconds)
url_decode = true                    # Percent-decode request paths before matching
remove_semicolon_content = true      # Strip ";name=value" path parameters before matching
always_use_full_path = false         # Match on the full path within the application
create_locations = true              # Create missing location directories on startup

# Explicit public URL mappings. When set, the patterns listed here are the only
# ones used for public URL lookup, and they are no longer refreshed from the
# mappings below when the configuration reloads.
#public_patterns = ["/resources/**"]

# ===============================================================================
# RESOURCE MAPPINGS
# ===============================================================================
# Requests matching `pattern` are served from the first location containing the
# path matched by the pattern's wildcard part.

[[resources.mappings]]
pattern = "/resources/**"            # Ant-style pattern: ? * ** {name}
locations = ["public"]               # Directories searched in order
enabled = true
"#;
