use thiserror::Error;

#[derive(Error, Debug)]
pub enum WatcherError {
    #[error("Config error: {0}")]
    ConfigError(#[from] anyhow::Error),

    #[error("Failed to apply mappings: {0}")]
    ApplyFailed(#[from] resmap_api::ApiError),

    #[error("Notify error: {0}")]
    NotifyError(#[from] notify::Error),

    #[error("Config file missing: {0}")]
    ConfigMissing(String),
}
