use super::models::FileSystem;
use anyhow::Result;
use std::path::{Path, PathBuf};
use tokio::fs;

impl FileSystem {
    /// Creates a location directory if missing, returns its absolute path and
    /// whether it had to be created
    pub async fn ensure_location(location: &str) -> Result<(PathBuf, bool)> {
        let abs_path = Self::resolve_location(location)?;
        let created = Self::create_directory(&abs_path, "Resource location").await?;
        Ok((abs_path, created))
    }

    /// Absolute path of a configured location, relative ones resolved
    /// against the working directory
    pub fn resolve_location(location: &str) -> Result<PathBuf> {
        Self::get_absolute_path(Path::new(location))
    }

    async fn create_directory(path: &Path, description: &str) -> Result<bool> {
        if !path.exists() {
            fs::create_dir_all(path).await?;
            tracing::debug!("    Created: {} ({})", path.display(), description);
            Ok(true)
        } else {
            tracing::debug!("    Exists:  {} ({})", path.display(), description);
            Ok(false)
        }
    }

    fn get_absolute_path(path: &Path) -> Result<PathBuf> {
        let abs_path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir()?.join(path)
        };
        Ok(abs_path)
    }

    pub fn get_absolute_path_string(path: &str) -> Result<String> {
        let path_buf = PathBuf::from(path);
        let abs = Self::get_absolute_path(&path_buf)?;
        Ok(abs.to_string_lossy().to_string())
    }
}
