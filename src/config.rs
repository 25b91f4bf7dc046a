const DEFAULT_API_URL: &str = "http://localhost:8000/api";
const DEFAULT_TOKEN_KEY: &str = "token";
const DEFAULT_LOG_FILTER: &str = "info";

/// Seconds a seat selection may wait on the payment screen.
pub const PAYMENT_WINDOW_SECS: u32 = 15 * 60;

/// Client settings, baked in at build time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub token_key: String,
    pub payment_window_secs: u32,
    pub log_filter: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            token_key: DEFAULT_TOKEN_KEY.to_string(),
            payment_window_secs: PAYMENT_WINDOW_SECS,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ClientConfig {
    /// Read `CINEHALL_API_URL` and `CINEHALL_LOG` from the build environment.
    pub fn from_build_env() -> Self {
        Self::from_overrides(option_env!("CINEHALL_API_URL"), option_env!("CINEHALL_LOG"))
    }

    fn from_overrides(api_url: Option<&str>, log_filter: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(url) = api_url.map(str::trim).filter(|u| !u.is_empty()) {
            config.api_base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(filter) = log_filter.map(str::trim).filter(|f| !f.is_empty()) {
            config.log_filter = filter.to_string();
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_overrides() {
        let config = ClientConfig::from_overrides(None, None);
        assert_eq!(config.api_base_url, "http://localhost:8000/api");
        assert_eq!(config.token_key, "token");
        assert_eq!(config.payment_window_secs, 900);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_api_url_override_drops_trailing_slash() {
        let config = ClientConfig::from_overrides(Some("https://cinema.example/api/"), None);
        assert_eq!(config.api_base_url, "https://cinema.example/api");
    }

    #[test]
    fn test_blank_overrides_fall_back_to_defaults() {
        let config = ClientConfig::from_overrides(Some("  "), Some(""));
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_log_filter_override() {
        let config = ClientConfig::from_overrides(None, Some("cinehall=debug"));
        assert_eq!(config.log_filter, "cinehall=debug");
    }
}
