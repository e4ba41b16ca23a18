use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolverError {
    #[error("Invalid resource path: {0}")]
    InvalidPath(String),
}
