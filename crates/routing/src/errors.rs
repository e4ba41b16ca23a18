use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoutingError {
    #[error("Pattern '{pattern}' is already mapped in '{mapping}'")]
    DuplicatePattern { pattern: String, mapping: String },

    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),
}
