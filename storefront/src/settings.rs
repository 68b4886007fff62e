//! Client configuration loaded via OrthoConfig.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
const DEFAULT_USER_AGENT: &str = "storefront-client/0.1";

/// Settings controlling how the client reaches the marketplace API.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "STOREFRONT")]
pub struct StorefrontSettings {
    /// Base URL of the marketplace API.
    pub api_base_url: Option<String>,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: Option<u64>,
    /// User-agent header sent with each request.
    pub user_agent: Option<String>,
}

impl StorefrontSettings {
    /// Parse the configured base URL, falling back to the local default.
    ///
    /// # Errors
    ///
    /// Returns [`url::ParseError`] when the configured value is not a valid
    /// absolute URL.
    pub fn api_base_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(
            self.api_base_url
                .as_deref()
                .unwrap_or(DEFAULT_API_BASE_URL),
        )
    }

    /// Return the request timeout. A configured zero is treated as unset.
    pub fn request_timeout(&self) -> Duration {
        let secs = self
            .request_timeout_secs
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);
        Duration::from_secs(secs)
    }

    /// Return the configured user agent, falling back to the default.
    pub fn user_agent(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for client configuration parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> StorefrontSettings {
        StorefrontSettings::load_from_iter([OsString::from("storefront")])
            .expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("STOREFRONT_API_BASE_URL", None::<String>),
            ("STOREFRONT_REQUEST_TIMEOUT_SECS", None::<String>),
            ("STOREFRONT_USER_AGENT", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.api_base_url().expect("default url parses").as_str(),
            "http://localhost:8080/"
        );
        assert_eq!(settings.request_timeout(), Duration::from_secs(10));
        assert_eq!(settings.user_agent(), DEFAULT_USER_AGENT);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            (
                "STOREFRONT_API_BASE_URL",
                Some("https://shop.example/market".to_owned()),
            ),
            ("STOREFRONT_REQUEST_TIMEOUT_SECS", Some("3".to_owned())),
            ("STOREFRONT_USER_AGENT", Some("storefront-tests".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.api_base_url().expect("override parses").as_str(),
            "https://shop.example/market"
        );
        assert_eq!(settings.request_timeout(), Duration::from_secs(3));
        assert_eq!(settings.user_agent(), "storefront-tests");
    }

    #[rstest]
    fn zero_timeout_falls_back_to_default() {
        let settings = StorefrontSettings {
            api_base_url: None,
            request_timeout_secs: Some(0),
            user_agent: None,
        };
        assert_eq!(settings.request_timeout(), Duration::from_secs(10));
    }

    #[rstest]
    fn relative_base_url_is_rejected() {
        let settings = StorefrontSettings {
            api_base_url: Some("shop.example".to_owned()),
            request_timeout_secs: None,
            user_agent: None,
        };
        assert!(settings.api_base_url().is_err());
    }
}
