use super::defaults::DEFAULT_CONFIG_TEMPLATE;
use super::migration::migrate_config_if_needed;
use super::models::Config;
use crate::ConfigError;
use std::path::Path;
use std::sync::Arc;

impl Config {
    /// Loads configuration from a file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        Self::from_file_with_events(path, None).await
    }

    /// Loads configuration from a file with optional event bus for notifications
    pub async fn from_file_with_events<P: AsRef<Path>>(
        path: P,
        events: Option<&Arc<resmap_events::EventBus>>,
    ) -> anyhow::Result<Self> {
        let path = path.as_ref();

        // Create default config if it doesn't exist
        if !path.exists() {
            create_default_config(path).await?;
        }

        // Migrate config if needed
        migrate_config_if_needed(path, events).await?;

        let content = tokio::fs::read_to_string(path).await?;
        let config = Self::from_toml(&content)?;

        Ok(config)
    }

    /// Parses and validates configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}

/// Creates a default configuration file
async fn create_default_config<P: AsRef<Path>>(path: P) -> anyhow::Result<()> {
    tokio::fs::write(path, DEFAULT_CONFIG_TEMPLATE).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_template_parses() {
        let config = Config::from_toml(DEFAULT_CONFIG_TEMPLATE).unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.context_path, "");
        assert!(config.resources.url_decode);
        assert!(config.resources.public_patterns.is_none());
        assert_eq!(config.resources.mappings.len(), 1);
        assert_eq!(config.resources.mappings[0].pattern, "/resources/**");
        assert_eq!(config.resources.mappings[0].locations, vec!["public"]);
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = Config::from_toml(
            r#"
            [server]
            host = "127.0.0.1"
            port = 9000
            base_url = "http://localhost:9000"
            "#,
        )
        .unwrap();

        assert!(config.server.tcp_nodelay);
        assert_eq!(config.server.streaming_threshold_mb, 8);
        assert_eq!(config.resources.config_watch_debounce_ms, 500);
        assert!(config.resources.mappings.is_empty());
    }

    #[test]
    fn test_disabled_mappings_are_skipped() {
        let config = Config::from_toml(
            r#"
            [server]
            host = "127.0.0.1"
            port = 9000
            base_url = "http://localhost:9000"

            [[resources.mappings]]
            pattern = "/resources/**"
            locations = ["public"]

            [[resources.mappings]]
            pattern = "/old/**"
            locations = ["old"]
            enabled = false
            "#,
        )
        .unwrap();

        let enabled: Vec<_> = config
            .resources
            .enabled_mappings()
            .map(|m| m.pattern.as_str())
            .collect();
        assert_eq!(enabled, vec!["/resources/**"]);
    }

    #[tokio::test]
    async fn test_missing_file_is_created_from_template() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = Config::from_file(&path).await.unwrap();

        assert!(path.exists());
        assert_eq!(config.resources.mappings.len(), 1);
    }
}
