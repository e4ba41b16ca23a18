use crate::errors::ApiError;
use crate::handlers::models::AppState;
use crate::models::{ResourceUrlQuery, ResourceUrlResponse};
use axum::{
    extract::{OriginalUri, Query, State},
    response::Json,
};
use resmap_routing::ResourceRequest;

/// Public URL for a resource, looked up either by lookup path (`?path=`) or
/// by full request URL path (`?url=`)
pub async fn resource_url(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Query(query): Query<ResourceUrlQuery>,
) -> Result<Json<ResourceUrlResponse>, ApiError> {
    let public_url = lookup_public_url(&state, uri.path(), query)?.ok_or(ApiError::NotFound)?;
    Ok(Json(ResourceUrlResponse { public_url }))
}

fn lookup_public_url(
    state: &AppState,
    request_uri: &str,
    query: ResourceUrlQuery,
) -> Result<Option<String>, ApiError> {
    let provider = state.provider.read();

    let resolved = match (query.path, query.url) {
        (Some(path), _) => provider.get_for_lookup_path(&path)?,
        (None, Some(url)) => {
            let request = ResourceRequest::new(request_uri).with_context_path(state.context_path());
            provider.get_for_request_url(&request, &url)?
        }
        (None, None) => {
            return Err(ApiError::BadRequest(
                "either 'path' or 'url' is required".to_string(),
            ))
        }
    };

    Ok(resolved)
}
