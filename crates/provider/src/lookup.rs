use super::models::ResourceUrlProvider;
use crate::ProviderError;
use resmap_routing::ResourceRequest;

impl ResourceUrlProvider {
    /// Variant of [`get_for_lookup_path`](Self::get_for_lookup_path) taking a
    /// full request URL path (context prefix included) and returning the full
    /// public URL path.
    ///
    /// The prefix is found by locating the current request's lookup path in
    /// its request URI; the same split is applied to `request_url`.
    pub fn get_for_request_url(
        &self,
        request: &ResourceRequest,
        request_url: &str,
    ) -> Result<Option<String>, ProviderError> {
        tracing::debug!("Checking request URL: {}", request_url);

        let path_within_mapping = match request.path_within_handler_mapping() {
            Some(path) => path.to_string(),
            None => {
                tracing::debug!("Request has no lookup path attached, calculating instead");
                self.path_helper.lookup_path_for_request(request)
            }
        };

        let request_uri = self.path_helper.request_uri(request);
        let index = if request_uri.ends_with(&path_within_mapping) {
            Some(request_uri.len() - path_within_mapping.len())
        } else {
            request_uri.find(&path_within_mapping)
        };

        let mismatch = || ProviderError::LookupPathMismatch {
            request_url: request_url.to_string(),
        };
        let index = index
            .filter(|&index| index < request_url.len())
            .ok_or_else(mismatch)?;

        let (Some(prefix), Some(lookup_path)) = (request_url.get(..index), request_url.get(index..)) else {
            return Err(mismatch());
        };

        let resolved = self.get_for_lookup_path(lookup_path)?;
        Ok(resolved.map(|resolved| format!("{}{}", prefix, resolved)))
    }

    /// Compares a lookup path (context prefix excluded) against the resource
    /// mappings and, for the most specific match, asks the mapped handler's
    /// resolver chain for the public URL path.
    ///
    /// Returns `Ok(None)` when no mapping matches. A match whose chain
    /// cannot produce a path is a configuration error.
    pub fn get_for_lookup_path(&self, lookup_path: &str) -> Result<Option<String>, ProviderError> {
        tracing::debug!("Checking lookup path: {}", lookup_path);

        let matcher = self.path_matcher.as_ref();
        let Some((pattern, handler)) = self
            .handler_map
            .iter()
            .filter(|(pattern, _)| matcher.matches(pattern, lookup_path))
            .min_by(|(a, _), (b, _)| matcher.compare_patterns(lookup_path, a, b))
        else {
            tracing::debug!("No matching resource mapping");
            return Ok(None);
        };

        let (path_mapping, path_within_mapping) = split_lookup_path(
            lookup_path,
            !matcher.is_pattern(pattern),
            matcher.extract_path_within_pattern(pattern, lookup_path),
        );

        tracing::debug!(
            "Found matching resource mapping=\"{}\", resource URL path=\"{}\"",
            pattern,
            path_within_mapping
        );

        let resolved = handler
            .create_resolver_chain()
            .resolve_url_path(&path_within_mapping, handler.locations())
            .ok_or_else(|| ProviderError::UnresolvedPublicPath {
                path: path_within_mapping.clone(),
            })?;

        tracing::debug!("Returning public resource URL path=\"{}\"", resolved);
        Ok(Some(format!("{}{}", path_mapping, resolved)))
    }
}

/// Splits a lookup path into the static mapping prefix and the resource path
fn split_lookup_path(
    lookup_path: &str,
    literal_pattern: bool,
    path_within_mapping: String,
) -> (&str, String) {
    if literal_pattern && path_within_mapping.is_empty() {
        // Literal pattern: the whole path names the resource
        let resource = lookup_path.trim_start_matches('/');
        let prefix = &lookup_path[..lookup_path.len() - resource.len()];
        return (prefix, resource.to_string());
    }

    let prefix = match lookup_path.strip_suffix(path_within_mapping.as_str()) {
        Some(prefix) => prefix,
        None => lookup_path
            .find(path_within_mapping.as_str())
            .map_or("", |index| &lookup_path[..index]),
    };

    (prefix, path_within_mapping)
}
