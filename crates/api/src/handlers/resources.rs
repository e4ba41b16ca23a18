use super::disk;
use crate::errors::ApiError;
use crate::handlers::models::AppState;
use axum::{
    extract::{OriginalUri, State},
    response::Response,
};
use resmap_resolver::validate_resource_path;
use resmap_routing::ResourceRequest;
use std::path::PathBuf;

/// Fallback route: serves static resources through the matched handler's
/// resolver chain
pub async fn serve_resource(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
) -> Result<Response, ApiError> {
    let file = resolve_file(&state, uri.path())?;
    tracing::debug!("serve_resource: resolved '{}' to '{}'", uri.path(), file.display());

    disk::serve_from_disk(file, state.streaming_threshold_bytes).await
}

fn resolve_file(state: &AppState, request_uri: &str) -> Result<PathBuf, ApiError> {
    let request = ResourceRequest::new(request_uri).with_context_path(state.context_path());
    let lookup_path = state
        .provider
        .read()
        .url_path_helper()
        .lookup_path_for_request(&request);

    let routes = state.routes.read();
    let found = routes
        .lookup(&lookup_path, state.matcher.as_ref())
        .ok_or_else(|| {
            tracing::debug!("serve_resource: no mapping for '{}'", lookup_path);
            ApiError::NotFound
        })?;

    let Some(handler) = found.handler.as_resource() else {
        return Err(ApiError::NotFound);
    };

    validate_resource_path(found.path_within_mapping.trim_start_matches('/'))?;

    handler
        .resolve_resource(&found.path_within_mapping)
        .ok_or_else(|| {
            tracing::debug!(
                "serve_resource: '{}' not found in {:?}",
                found.path_within_mapping,
                handler.locations()
            );
            ApiError::NotFound
        })
}
