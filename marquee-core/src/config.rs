//! Centralized configuration for Marquee.
//!
//! Every tunable used by the search client and the web front end lives here.
//! Values come from defaults, then environment overrides, then CLI flags.

use std::time::Duration;

/// Default location of the movie-finder backend.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Central configuration for all Marquee components.
#[derive(Debug, Clone, Default)]
pub struct MarqueeConfig {
    pub api: ApiConfig,
    pub web: WebConfig,
}

/// Backend API connection settings.
///
/// All three providers are reached through the same base URL and differ only
/// by path, so a single client configuration covers them.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL the provider paths are resolved against
    pub base_url: String,
    /// Overall request timeout; `None` leaves the transport default (no timeout)
    pub request_timeout: Option<Duration>,
    /// User agent for outbound requests
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout: None,
            user_agent: concat!("marquee/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Bind settings for the browser front end.
#[derive(Debug, Clone)]
pub struct WebConfig {
    pub host: String,
    pub port: u16,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl MarqueeConfig {
    /// Creates configuration with environment variable overrides.
    ///
    /// Unparseable values are ignored and the default is kept.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(base_url) = std::env::var("MARQUEE_API_BASE_URL") {
            let trimmed = base_url.trim();
            if !trimmed.is_empty() {
                config.api.base_url = trimmed.to_string();
            }
        }

        if let Ok(timeout) = std::env::var("MARQUEE_REQUEST_TIMEOUT_SECS") {
            if let Ok(seconds) = timeout.trim().parse::<u64>() {
                config.api.request_timeout = Some(Duration::from_secs(seconds));
            }
        }

        if let Ok(user_agent) = std::env::var("MARQUEE_USER_AGENT") {
            if !user_agent.trim().is_empty() {
                config.api.user_agent = user_agent;
            }
        }

        if let Ok(host) = std::env::var("MARQUEE_WEB_HOST") {
            if !host.trim().is_empty() {
                config.web.host = host.trim().to_string();
            }
        }

        if let Ok(port) = std::env::var("MARQUEE_WEB_PORT") {
            if let Ok(port) = port.trim().parse::<u16>() {
                config.web.port = port;
            }
        }

        config
    }

    /// Replaces the backend base URL, keeping everything else.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// Checks settings that cannot be corrected silently.
    ///
    /// # Errors
    ///
    /// - `MarqueeError::Configuration` - Base URL is not an http(s) URL or the user agent is empty
    pub fn validate(&self) -> crate::Result<()> {
        let base = self.api.base_url.as_str();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(crate::MarqueeError::Configuration {
                reason: format!("API base URL must start with http:// or https://, got '{base}'"),
            });
        }

        if self.api.user_agent.trim().is_empty() {
            return Err(crate::MarqueeError::Configuration {
                reason: "user agent must not be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Address string the web front end binds to.
    pub fn web_bind_address(&self) -> String {
        format!("{}:{}", self.web.host, self.web.port)
    }
}
