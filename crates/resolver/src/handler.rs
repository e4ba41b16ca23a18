use crate::chain::{ResolverChain, ResourceResolver};
use crate::PathResourceResolver;
use std::path::PathBuf;
use std::sync::Arc;

/// Serves static resources from a list of locations through a resolver chain
#[derive(Debug, Clone)]
pub struct ResourceHandler {
    locations: Vec<PathBuf>,
    resolvers: Vec<Arc<dyn ResourceResolver>>,
}

impl ResourceHandler {
    /// Creates a handler that resolves resources straight from its locations
    pub fn new(locations: Vec<PathBuf>) -> Self {
        Self {
            locations,
            resolvers: vec![Arc::new(PathResourceResolver::new())],
        }
    }

    pub fn with_resolvers(mut self, resolvers: Vec<Arc<dyn ResourceResolver>>) -> Self {
        self.resolvers = resolvers;
        self
    }

    pub fn locations(&self) -> &[PathBuf] {
        &self.locations
    }

    pub fn resolvers(&self) -> &[Arc<dyn ResourceResolver>] {
        &self.resolvers
    }

    pub fn create_resolver_chain(&self) -> ResolverChain<'_> {
        ResolverChain::new(&self.resolvers)
    }

    /// Finds the file to serve for a path within this handler's mapping
    pub fn resolve_resource(&self, request_path: &str) -> Option<PathBuf> {
        // Exact mappings hand over the full lookup path
        let path = request_path.trim_start_matches('/');
        self.create_resolver_chain()
            .resolve_resource(path, &self.locations)
    }
}
