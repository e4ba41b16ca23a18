use parking_lot::RwLock;
use resmap_provider::ResourceUrlProvider;
use resmap_routing::{PathMatcher, RouteTable};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub(super) routes: Arc<RwLock<RouteTable>>,
    pub(super) provider: Arc<RwLock<ResourceUrlProvider>>,
    pub(super) matcher: Arc<dyn PathMatcher>,
    pub(super) context_path: Arc<str>,
    pub(super) streaming_threshold_bytes: u64,
}
