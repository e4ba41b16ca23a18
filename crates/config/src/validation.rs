use super::models::Config;
use crate::ConfigError;
use std::collections::HashSet;

impl Config {
    /// Checks the cross-field rules serde cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        let context_path = &self.server.context_path;
        if !context_path.is_empty() && (!context_path.starts_with('/') || context_path.ends_with('/')) {
            return Err(ConfigError::InvalidConfig(format!(
                "server.context_path '{}' must start with '/' and must not end with '/'",
                context_path
            )));
        }

        let mut seen = HashSet::new();
        for mapping in self.resources.enabled_mappings() {
            if mapping.pattern.trim().is_empty() {
                return Err(ConfigError::InvalidConfig(
                    "resource mapping with empty pattern".to_string(),
                ));
            }
            if mapping.locations.is_empty() {
                return Err(ConfigError::InvalidConfig(format!(
                    "resource mapping '{}' has no locations",
                    mapping.pattern
                )));
            }
            if !seen.insert(mapping.pattern.as_str()) {
                return Err(ConfigError::InvalidConfig(format!(
                    "resource mapping '{}' is defined twice",
                    mapping.pattern
                )));
            }
        }

        if let Some(public_patterns) = &self.resources.public_patterns {
            for pattern in public_patterns {
                if !seen.contains(pattern.as_str()) {
                    return Err(ConfigError::InvalidConfig(format!(
                        "public pattern '{}' does not name an enabled resource mapping",
                        pattern
                    )));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{Config, ConfigError};

    const SERVER: &str = r#"
        [server]
        host = "127.0.0.1"
        port = 9000
        base_url = "http://localhost:9000"
    "#;

    fn parse(extra: &str) -> Result<Config, ConfigError> {
        Config::from_toml(&format!("{}\n{}", SERVER, extra))
    }

    #[test]
    fn test_context_path_shape() {
        let config = Config::from_toml(&SERVER.replace(
            "base_url = \"http://localhost:9000\"",
            "base_url = \"http://localhost:9000\"\ncontext_path = \"/app\"",
        ))
        .unwrap();
        assert_eq!(config.server.context_path, "/app");

        let err = Config::from_toml(&SERVER.replace(
            "base_url = \"http://localhost:9000\"",
            "base_url = \"http://localhost:9000\"\ncontext_path = \"app/\"",
        ));
        assert!(matches!(err, Err(ConfigError::InvalidConfig(_))));
    }

    #[test]
    fn test_mapping_rules() {
        let no_locations = parse(
            r#"
            [[resources.mappings]]
            pattern = "/resources/**"
            locations = []
            "#,
        );
        assert!(matches!(no_locations, Err(ConfigError::InvalidConfig(_))));

        let duplicate = parse(
            r#"
            [[resources.mappings]]
            pattern = "/resources/**"
            locations = ["a"]

            [[resources.mappings]]
            pattern = "/resources/**"
            locations = ["b"]
            "#,
        );
        assert!(matches!(duplicate, Err(ConfigError::InvalidConfig(_))));
    }

    #[test]
    fn test_public_patterns_must_exist() {
        let unknown = parse(
            r#"
            [resources]
            public_patterns = ["/static/**"]

            [[resources.mappings]]
            pattern = "/resources/**"
            locations = ["public"]
            "#,
        );
        assert!(matches!(unknown, Err(ConfigError::InvalidConfig(_))));

        let known = parse(
            r#"
            [resources]
            public_patterns = ["/resources/**"]

            [[resources.mappings]]
            pattern = "/resources/**"
            locations = ["public"]
            "#,
        )
        .unwrap();
        assert_eq!(
            known.resources.public_patterns,
            Some(vec!["/resources/**".to_string()])
        );
    }
}
