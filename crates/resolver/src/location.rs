use crate::chain::{ResolverChain, ResourceResolver};
use crate::validate_resource_path;
use std::path::{Path, PathBuf};

/// Terminal resolver that looks the resource up in the handler's locations.
///
/// The public URL path of a resource that exists is the path itself, so this
/// resolver sits at the end of every chain and the resolvers in front of it
/// decorate its answer.
#[derive(Debug, Default, Clone, Copy)]
pub struct PathResourceResolver;

impl PathResourceResolver {
    pub fn new() -> Self {
        Self
    }

    fn find_in_locations(&self, path: &str, locations: &[PathBuf]) -> Option<PathBuf> {
        if let Err(e) = validate_resource_path(path) {
            tracing::warn!("Rejected resource path '{}': {}", path, e);
            return None;
        }

        locations
            .iter()
            .find_map(|location| Self::get_resource(path, location))
    }

    fn get_resource(path: &str, location: &Path) -> Option<PathBuf> {
        let candidate = location.join(path);
        if !candidate.is_file() {
            return None;
        }

        // Symlinks may still point outside the location
        let canonical_location = location.canonicalize().ok()?;
        let canonical = candidate.canonicalize().ok()?;
        if !canonical.starts_with(&canonical_location) {
            tracing::warn!(
                "Resource '{}' resolves outside of location '{}'",
                path,
                location.display()
            );
            return None;
        }

        tracing::trace!("Found resource '{}' in '{}'", path, location.display());
        Some(canonical)
    }
}

impl ResourceResolver for PathResourceResolver {
    fn resolve_resource(
        &self,
        request_path: &str,
        locations: &[PathBuf],
        _chain: &ResolverChain<'_>,
    ) -> Option<PathBuf> {
        self.find_in_locations(request_path, locations)
    }

    fn resolve_url_path(
        &self,
        resource_path: &str,
        locations: &[PathBuf],
        _chain: &ResolverChain<'_>,
    ) -> Option<String> {
        self.find_in_locations(resource_path, locations)
            .map(|_| resource_path.to_string())
    }
}
