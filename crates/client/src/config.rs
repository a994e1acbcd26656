use shared_types::ClientConfig;
use std::sync::OnceLock;
use tracing::{info, warn};

static CONFIG: OnceLock<ClientConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
const CONFIG_PATH: &str = "config.toml";

/// Overrides `api.base_url` when set.
pub const API_URL_ENV: &str = "SCHOOL_API_URL";

/// Read `config.toml` once and cache it. Later calls return the cached value.
///
/// A missing or unparseable file yields the defaults. On the web target
/// there is no filesystem, so the defaults always apply.
pub fn load_config() -> &'static ClientConfig {
    CONFIG.get_or_init(|| {
        let mut config = match std::fs::read_to_string(CONFIG_PATH) {
            Ok(contents) => parse_config(&contents),
            Err(e) => {
                info!("{CONFIG_PATH} not found ({e}), using default client config");
                ClientConfig::default()
            }
        };
        apply_api_url_override(&mut config, std::env::var(API_URL_ENV).ok());
        info!(base_url = %config.api.base_url, "client config loaded");
        config
    })
}

/// Parse TOML, falling back to defaults on error.
pub fn parse_config(contents: &str) -> ClientConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        warn!("failed to parse {CONFIG_PATH}: {e}, using default client config");
        ClientConfig::default()
    })
}

/// Apply the `SCHOOL_API_URL` override. Blank values are ignored.
pub fn apply_api_url_override(config: &mut ClientConfig, url: Option<String>) {
    if let Some(url) = url.map(|u| u.trim().to_string()).filter(|u| !u.is_empty()) {
        config.api.base_url = url;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_config_falls_back_on_garbage() {
        assert_eq!(parse_config("api = [[["), ClientConfig::default());
    }

    #[test]
    fn parse_config_reads_storage_section() {
        let config = parse_config("[storage]\ntoken_key = \"portal\"\n");
        assert_eq!(config.storage.token_key, "portal");
        assert_eq!(config.api, shared_types::ApiConfig::default());
    }

    #[test]
    fn env_override_replaces_base_url() {
        let mut config = ClientConfig::default();
        apply_api_url_override(&mut config, Some(" https://api.school.test ".into()));
        assert_eq!(config.api.base_url, "https://api.school.test");
    }

    #[test]
    fn blank_env_override_is_ignored() {
        let mut config = ClientConfig::default();
        apply_api_url_override(&mut config, Some("   ".into()));
        apply_api_url_override(&mut config, None);
        assert_eq!(config, ClientConfig::default());
    }
}
