use resmap_resolver::ResourceHandler;
use resmap_routing::{PathMatcher, UrlPathHelper};
use std::collections::HashMap;
use std::sync::Arc;

/// Knows which URL patterns serve static resources and computes the public
/// URL path a client should use for a given resource.
///
/// The map of patterns is either detected from the application's handler
/// mappings on every refresh, or set explicitly, which turns detection off.
pub struct ResourceUrlProvider {
    pub(super) path_helper: UrlPathHelper,
    pub(super) path_matcher: Arc<dyn PathMatcher>,
    pub(super) handler_map: HashMap<String, Arc<ResourceHandler>>,
    pub(super) autodetect: bool,
}
