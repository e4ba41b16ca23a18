use crate::handlers::models::AppState;
use crate::models::{MappingInfo, MappingListResponse};
use axum::{extract::State, response::Json};

/// Patterns currently available for public URL lookup
pub async fn list_mappings(State(state): State<AppState>) -> Json<MappingListResponse> {
    let provider = state.provider.read();

    let mut mappings: Vec<MappingInfo> = provider
        .handler_map()
        .iter()
        .map(|(pattern, handler)| MappingInfo {
            pattern: pattern.clone(),
            locations: handler
                .locations()
                .iter()
                .map(|location| location.display().to_string())
                .collect(),
        })
        .collect();
    mappings.sort_by(|a, b| a.pattern.cmp(&b.pattern));

    Json(MappingListResponse {
        autodetect: provider.is_autodetect(),
        mappings,
    })
}
