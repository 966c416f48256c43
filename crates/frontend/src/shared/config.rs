//! Runtime configuration of the dashboard.
//!
//! Values are embedded at build time: the JSON default below, overridden by
//! `PLAYPRO_API_URL` / `PLAYPRO_PAGE_SIZE` when those are set for the build.

use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Backend base URL, e.g. "https://api.playpro.id". `None` means
    /// "same host as the page, port 8000".
    #[serde(default)]
    pub api_base_url: Option<String>,
    pub page_size: usize,
    pub toast_timeout_ms: u32,
    pub session_max_age_secs: i64,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"{
    "api_base_url": null,
    "page_size": 10,
    "toast_timeout_ms": 4000,
    "session_max_age_secs": 86400
}"#;

static CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    let config = load_config(option_env!("PLAYPRO_API_URL"), option_env!("PLAYPRO_PAGE_SIZE"));
    log::debug!("Loaded config: {:?}", config);
    config
});

/// Global configuration, resolved once.
pub fn config() -> &'static AppConfig {
    &CONFIG
}

/// Build the configuration from the embedded default plus overrides.
///
/// Invalid overrides are ignored with a warning.
pub fn load_config(api_url: Option<&str>, page_size: Option<&str>) -> AppConfig {
    let mut config: AppConfig = match serde_json::from_str(DEFAULT_CONFIG) {
        Ok(c) => c,
        Err(e) => {
            log::error!("Embedded config is invalid: {}", e);
            AppConfig {
                api_base_url: None,
                page_size: 10,
                toast_timeout_ms: 4000,
                session_max_age_secs: 86400,
            }
        }
    };

    if let Some(url) = api_url.map(str::trim).filter(|u| !u.is_empty()) {
        config.api_base_url = Some(url.trim_end_matches('/').to_string());
    }

    if let Some(raw) = page_size {
        match raw.trim().parse::<usize>() {
            Ok(n) if n > 0 => config.page_size = n,
            _ => log::warn!("Ignoring invalid PLAYPRO_PAGE_SIZE: {:?}", raw),
        }
    }

    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config(None, None);
        assert_eq!(config.api_base_url, None);
        assert_eq!(config.page_size, 10);
        assert_eq!(config.toast_timeout_ms, 4000);
    }

    #[test]
    fn test_overrides() {
        let config = load_config(Some("https://api.playpro.id/"), Some("25"));
        assert_eq!(config.api_base_url.as_deref(), Some("https://api.playpro.id"));
        assert_eq!(config.page_size, 25);
    }

    #[test]
    fn test_invalid_overrides_are_ignored() {
        let config = load_config(Some("   "), Some("zero"));
        assert_eq!(config.api_base_url, None);
        assert_eq!(config.page_size, 10);

        let config = load_config(None, Some("0"));
        assert_eq!(config.page_size, 10);
    }
}
