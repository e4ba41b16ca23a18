use super::models::ResourceUrlProvider;
use resmap_resolver::ResourceHandler;
use resmap_routing::{AntPathMatcher, Handler, MappingContext, PathMatcher, UrlPathHelper};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

impl ResourceUrlProvider {
    pub fn new() -> Self {
        Self {
            path_helper: UrlPathHelper::default(),
            path_matcher: Arc::new(AntPathMatcher::new()),
            handler_map: HashMap::new(),
            autodetect: true,
        }
    }

    /// Helper used by `get_for_request_url` to derive lookup paths
    pub fn set_url_path_helper(&mut self, path_helper: UrlPathHelper) {
        self.path_helper = path_helper;
    }

    pub fn url_path_helper(&self) -> &UrlPathHelper {
        &self.path_helper
    }

    /// Matcher used to compare lookup paths against resource mappings
    pub fn set_path_matcher(&mut self, path_matcher: Arc<dyn PathMatcher>) {
        self.path_matcher = path_matcher;
    }

    pub fn path_matcher(&self) -> &dyn PathMatcher {
        self.path_matcher.as_ref()
    }

    /// Replaces the resource mappings and turns off detection on refresh
    pub fn set_handler_map(&mut self, handler_map: HashMap<String, Arc<ResourceHandler>>) {
        self.handler_map.clear();
        self.handler_map.extend(handler_map);
        self.autodetect = false;
        tracing::debug!(
            "Resource mappings configured explicitly ({} patterns), detection disabled",
            self.handler_map.len()
        );
    }

    /// Resource mappings, either configured or detected on the last refresh
    pub fn handler_map(&self) -> &HashMap<String, Arc<ResourceHandler>> {
        &self.handler_map
    }

    /// `false` once mappings were configured explicitly
    pub fn is_autodetect(&self) -> bool {
        self.autodetect
    }

    /// Rebuilds the resource mappings from the application's handler mappings
    pub fn on_refresh(&mut self, context: &dyn MappingContext) {
        if !self.autodetect {
            tracing::trace!("Resource mappings configured explicitly, ignoring refresh");
            return;
        }

        self.handler_map.clear();
        self.detect_resource_handlers(context);

        if self.handler_map.is_empty() {
            tracing::debug!("No resource handling mappings found");
        }
    }

    pub fn detect_resource_handlers(&mut self, context: &dyn MappingContext) {
        tracing::debug!("Looking for resource handler mappings");

        for mapping in context.handler_mappings() {
            for (pattern, handler) in mapping.url_map() {
                let Handler::Resource(resource_handler) = handler else {
                    continue;
                };

                tracing::debug!(
                    "Found pattern=\"{}\" mapped to locations {:?} with resolvers: {:?}",
                    pattern,
                    resource_handler.locations(),
                    resource_handler.resolvers()
                );
                self.handler_map
                    .insert(pattern.clone(), Arc::clone(resource_handler));
            }
        }
    }
}

impl Default for ResourceUrlProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ResourceUrlProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut patterns: Vec<&String> = self.handler_map.keys().collect();
        patterns.sort();
        f.debug_struct("ResourceUrlProvider")
            .field("path_helper", &self.path_helper)
            .field("patterns", &patterns)
            .field("autodetect", &self.autodetect)
            .finish()
    }
}
