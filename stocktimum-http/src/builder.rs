use std::time::Duration;

use stocktimum_core::{DashboardConfig, DashboardError};
use url::Url;

use crate::HttpSource;

const DEFAULT_USER_AGENT: &str = concat!("stocktimum/", env!("CARGO_PKG_VERSION"));

/// Builder for [`HttpSource`].
#[derive(Debug, Clone)]
pub struct HttpSourceBuilder {
    base_url: String,
    timeout: Duration,
    user_agent: String,
    client: Option<reqwest::Client>,
}

impl Default for HttpSourceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpSourceBuilder {
    /// Builder seeded with the [`DashboardConfig`] defaults.
    #[must_use]
    pub fn new() -> Self {
        let cfg = DashboardConfig::default();
        Self {
            base_url: cfg.base_url,
            timeout: cfg.request_timeout,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            client: None,
        }
    }

    /// Provider base URL.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Per-request timeout, applied to each call on top of any client-level limit.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// `User-Agent` header for the internally constructed client.
    ///
    /// Ignored when a custom client is supplied.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = ua.into();
        self
    }

    /// Use a pre-configured reqwest client (proxies, TLS roots, pooling).
    #[must_use]
    pub fn client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Build the source.
    ///
    /// # Errors
    /// Returns `Config` if the base URL is not an absolute http(s) URL, the
    /// timeout is zero, or the HTTP client cannot be constructed.
    pub fn build(self) -> Result<HttpSource, DashboardError> {
        let base = Url::parse(self.base_url.trim()).map_err(|e| {
            DashboardError::Config(format!("invalid base URL {:?}: {e}", self.base_url))
        })?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(DashboardError::Config(format!(
                "base URL must be http or https: {base}"
            )));
        }
        if self.timeout.is_zero() {
            return Err(DashboardError::Config(
                "request timeout must be greater than zero".to_string(),
            ));
        }

        let client = match self.client {
            Some(c) => c,
            None => reqwest::Client::builder()
                .user_agent(self.user_agent)
                .build()
                .map_err(|e| DashboardError::Config(format!("http client: {e}")))?,
        };

        Ok(HttpSource {
            client,
            base,
            timeout: self.timeout,
        })
    }
}
