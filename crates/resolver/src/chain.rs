use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// A step in a resource resolution pipeline.
///
/// Each resolver either answers itself or delegates to the rest of the
/// chain it is handed, which lets a resolver rewrite the path before and
/// after the remaining resolvers run (e.g. strip a version on the way in,
/// add it back on the way out).
pub trait ResourceResolver: Send + Sync + fmt::Debug {
    /// Resolves a request path within the handler's mapping to a file on disk.
    fn resolve_resource(
        &self,
        request_path: &str,
        locations: &[PathBuf],
        chain: &ResolverChain<'_>,
    ) -> Option<PathBuf>;

    /// Resolves an internal resource path to the path clients should use.
    fn resolve_url_path(
        &self,
        resource_path: &str,
        locations: &[PathBuf],
        chain: &ResolverChain<'_>,
    ) -> Option<String>;
}

/// Cursor over the resolvers that have not run yet
#[derive(Clone, Copy)]
pub struct ResolverChain<'a> {
    resolvers: &'a [Arc<dyn ResourceResolver>],
}

impl<'a> ResolverChain<'a> {
    pub fn new(resolvers: &'a [Arc<dyn ResourceResolver>]) -> Self {
        Self { resolvers }
    }

    pub fn resolve_resource(&self, request_path: &str, locations: &[PathBuf]) -> Option<PathBuf> {
        let (head, tail) = self.resolvers.split_first()?;
        head.resolve_resource(request_path, locations, &ResolverChain::new(tail))
    }

    pub fn resolve_url_path(&self, resource_path: &str, locations: &[PathBuf]) -> Option<String> {
        let (head, tail) = self.resolvers.split_first()?;
        head.resolve_url_path(resource_path, locations, &ResolverChain::new(tail))
    }

    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }
}

impl fmt::Debug for ResolverChain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.resolvers.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Prepends a fixed segment to whatever the rest of the chain returns
    #[derive(Debug)]
    struct PrefixResolver(&'static str);

    impl ResourceResolver for PrefixResolver {
        fn resolve_resource(&self, path: &str, locations: &[PathBuf], chain: &ResolverChain<'_>) -> Option<PathBuf> {
            chain.resolve_resource(path, locations)
        }

        fn resolve_url_path(&self, path: &str, locations: &[PathBuf], chain: &ResolverChain<'_>) -> Option<String> {
            chain
                .resolve_url_path(path, locations)
                .map(|resolved| format!("{}/{}", self.0, resolved))
        }
    }

    #[derive(Debug)]
    struct Identity;

    impl ResourceResolver for Identity {
        fn resolve_resource(&self, path: &str, _: &[PathBuf], _: &ResolverChain<'_>) -> Option<PathBuf> {
            Some(PathBuf::from(path))
        }

        fn resolve_url_path(&self, path: &str, _: &[PathBuf], _: &ResolverChain<'_>) -> Option<String> {
            Some(path.to_string())
        }
    }

    #[test]
    fn test_empty_chain_resolves_nothing() {
        let chain = ResolverChain::new(&[]);
        assert!(chain.is_empty());
        assert_eq!(chain.resolve_url_path("app.js", &[]), None);
        assert_eq!(chain.resolve_resource("app.js", &[]), None);
    }

    #[test]
    fn test_resolvers_run_in_order() {
        let resolvers: Vec<Arc<dyn ResourceResolver>> = vec![
            Arc::new(PrefixResolver("outer")),
            Arc::new(PrefixResolver("inner")),
            Arc::new(Identity),
        ];
        let chain = ResolverChain::new(&resolvers);

        assert_eq!(chain.len(), 3);
        assert_eq!(
            chain.resolve_url_path("app.js", &[]),
            Some("outer/inner/app.js".to_string())
        );
    }

    #[test]
    fn test_chain_without_terminal_resolver() {
        let resolvers: Vec<Arc<dyn ResourceResolver>> = vec![Arc::new(PrefixResolver("v1"))];
        let chain = ResolverChain::new(&resolvers);

        assert_eq!(chain.resolve_url_path("app.js", &[]), None);
    }
}
