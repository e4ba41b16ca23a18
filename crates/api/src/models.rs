use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct ResourceUrlQuery {
    /// Lookup path, context prefix excluded
    pub path: Option<String>,
    /// Full request URL path, context prefix included
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceUrlResponse {
    pub public_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MappingListResponse {
    pub autodetect: bool,
    pub mappings: Vec<MappingInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MappingInfo {
    pub pattern: String,
    pub locations: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}
