// Re-export all public APIs from the workspace crates

pub use resmap_events::*;
pub use resmap_filesystem::*;
pub use resmap_config::*;
pub use resmap_routing::*;
pub use resmap_resolver::*;
pub use resmap_provider::*;
pub use resmap_watcher::*;
pub use resmap_api::*;

/// Prelude module for convenient imports
pub mod prelude {
    // Routing
    pub use resmap_routing::{AntPathMatcher, PathMatcher, ResourceRequest, RouteTable, UrlPathHelper};

    // Resolution
    pub use resmap_resolver::{ResourceHandler, ResourceResolver, ResolverChain};

    // Public URL lookup
    pub use resmap_provider::ResourceUrlProvider;

    // Events
    pub use resmap_events::{AppEvent, EventBus};

    // Configuration
    pub use resmap_config::Config;

    // Watcher
    pub use resmap_watcher::ConfigWatcher;

    // Filesystem
    pub use resmap_filesystem::FileSystem;

    // HTTP
    pub use resmap_api::AppState;
}
