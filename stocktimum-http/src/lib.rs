//! stocktimum-http
//!
//! [`SeriesSource`] implementation that talks to a Stocktimum-compatible
//! provider over HTTP.
//!
//! - `GET {base}/api/data?ticker=..&period=..&interval=..[&force=true]` returns the
//!   six-column series, validated here before it reaches any caller.
//! - `GET {base}/api/hello` returns the banner.
//!
//! Transport failures, timeouts and non-2xx statuses become the network-class
//! [`DashboardError`] variants; bodies that break the series contract become
//! [`DashboardError::Malformed`].
#![warn(missing_docs)]

use std::time::Duration;

use async_trait::async_trait;
use stocktimum_core::{
    DashboardConfig, DashboardError, Endpoint, Hello, MalformedData, Query, Series, SeriesSource,
    endpoint_url,
};
use url::Url;

mod builder;
mod error;

pub use builder::HttpSourceBuilder;

/// HTTP-backed series source.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    base: Url,
    timeout: Duration,
}

impl HttpSource {
    /// Source for `base_url` with default timeout and client.
    ///
    /// # Errors
    /// Returns `Config` if `base_url` is not an absolute http(s) URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self, DashboardError> {
        Self::builder().base_url(base_url).build()
    }

    /// Source configured from a [`DashboardConfig`].
    ///
    /// # Errors
    /// Returns `Config` if the configured base URL is invalid.
    pub fn from_config(cfg: &DashboardConfig) -> Result<Self, DashboardError> {
        Self::builder()
            .base_url(cfg.base_url.clone())
            .timeout(cfg.request_timeout)
            .build()
    }

    /// Start building a source with custom settings.
    #[must_use]
    pub fn builder() -> HttpSourceBuilder {
        HttpSourceBuilder::new()
    }

    /// Provider base URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base
    }

    /// Per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn get(&self, endpoint: Endpoint, url: Url) -> Result<Vec<u8>, DashboardError> {
        let resp = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| error::normalize_transport(endpoint, self.timeout, &e))?;

        let status = resp.status();
        if !status.is_success() {
            let body = match resp.text().await {
                Ok(body) => body,
                Err(e) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(
                        error = %e,
                        status = status.as_u16(),
                        "could not read error body; using reason phrase"
                    );
                    drop(e);
                    String::new()
                }
            };
            return Err(DashboardError::status(
                endpoint.as_str(),
                status.as_u16(),
                error::status_message(status, &body),
            ));
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| error::normalize_transport(endpoint, self.timeout, &e))?;
        Ok(body.to_vec())
    }
}

#[async_trait]
impl SeriesSource for HttpSource {
    fn name(&self) -> &'static str {
        "stocktimum-http"
    }

    fn vendor(&self) -> &'static str {
        "HTTP"
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "stocktimum_http::fetch_series",
            skip(self, query),
            fields(
                ticker = %query.ticker(),
                period = %query.period(),
                interval = %query.interval(),
                force = query.force(),
            ),
        )
    )]
    async fn fetch_series(&self, query: &Query) -> Result<Series, DashboardError> {
        let url = query.url(&self.base)?;
        let body = self.get(Endpoint::Data, url).await?;
        let series = Series::from_json_slice(&body)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(bars = series.len(), "series validated");
        Ok(series)
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "stocktimum_http::hello", skip(self))
    )]
    async fn hello(&self) -> Result<Hello, DashboardError> {
        let url = endpoint_url(&self.base, Endpoint::Hello)?;
        let body = self.get(Endpoint::Hello, url).await?;
        serde_json::from_slice::<Hello>(&body)
            .map_err(|e| DashboardError::Malformed(MalformedData::NotJson(e.to_string())))
    }
}
