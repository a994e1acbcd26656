use serde::{Deserialize, Serialize};

/// Default REST API root used when no configuration is present.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

/// Fixed storage key for the persisted credential.
pub const DEFAULT_TOKEN_KEY: &str = "token";

/// Connection settings for the school REST API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds. Ignored on the web target, where the
    /// browser owns request lifetimes.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Where the session credential is persisted between runs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StorageConfig {
    #[serde(default = "default_token_key")]
    pub token_key: String,
    /// Directory for the file-backed token store (desktop only).
    /// `None` means the platform data directory.
    #[serde(default)]
    pub dir: Option<String>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            token_key: default_token_key(),
            dir: None,
        }
    }
}

/// Top-level config file structure matching `config.toml`.
///
/// Every field has a default so that a missing or partial file still
/// yields a usable configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_token_key() -> String {
    DEFAULT_TOKEN_KEY.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_local_api() {
        let config = ClientConfig::default();
        assert_eq!(config.api.base_url, "http://localhost:8000/api");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.storage.token_key, "token");
        assert!(config.storage.dir.is_none());
    }

    #[test]
    fn deserialize_empty_toml_uses_defaults() {
        let config: ClientConfig = toml::from_str("").unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn deserialize_partial_toml_keeps_missing_defaults() {
        let config: ClientConfig = toml::from_str(
            r#"
            [api]
            base_url = "https://school.example.org/api"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://school.example.org/api");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.storage, StorageConfig::default());
    }

    #[test]
    fn deserialize_full_toml() {
        let config: ClientConfig = toml::from_str(
            r#"
            [api]
            base_url = "http://10.0.0.5:9000/api"
            timeout_secs = 5

            [storage]
            token_key = "school_token"
            dir = "/tmp/school"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.timeout_secs, 5);
        assert_eq!(config.storage.token_key, "school_token");
        assert_eq!(config.storage.dir.as_deref(), Some("/tmp/school"));
    }
}
