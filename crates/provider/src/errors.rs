use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// A mapping matched but its resolver chain produced nothing: the chain
    /// and the mapping disagree about which resources exist
    #[error("Failed to get public resource URL path for '{path}'")]
    UnresolvedPublicPath { path: String },

    #[error("Failed to determine lookup path: {request_url}")]
    LookupPathMismatch { request_url: String },
}
