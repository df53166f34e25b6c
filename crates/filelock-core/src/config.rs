//! Per-repository lock configuration.

use serde::{Deserialize, Serialize};

/// Whether file locking is enabled for a repository.
///
/// Missing values deserialize to the default, so a config is never partial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositoryConfig {
    pub enabled: bool,
}

impl RepositoryConfig {
    pub fn enabled() -> Self {
        RepositoryConfig { enabled: true }
    }

    pub fn disabled() -> Self {
        RepositoryConfig { enabled: false }
    }
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self::enabled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_enabled() {
        assert!(RepositoryConfig::default().enabled);
    }

    #[test]
    fn missing_field_deserializes_to_default() {
        let config: RepositoryConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, RepositoryConfig::enabled());

        let config: RepositoryConfig = serde_json::from_str(r#"{"enabled":false}"#).unwrap();
        assert_eq!(config, RepositoryConfig::disabled());
    }
}
