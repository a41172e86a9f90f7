//! Deterministic series sources for tests and demos.
//!
//! - [`MockSource`]: static fixtures for a handful of tickers, plus magic tickers
//!   that force failure modes (`FAIL`, `TIMEOUT`, `MALFORMED`).
//! - [`DynamicMockSource`]: behavior scripted per ticker from a
//!   [`DynamicMockController`], with a request log.

use std::time::Duration;

use async_trait::async_trait;
use stocktimum_core::{DashboardError, Hello, MalformedData, Query, Series, SeriesSource};

mod dynamic;
mod fixtures;

pub use dynamic::{DynamicMockController, DynamicMockSource, MockBehavior};

/// Banner returned by the mock sources.
pub const MOCK_HELLO: &str = "Hello from Stocktimum (mock)";

/// Mock source for CI-safe demos. Serves deterministic data from static fixtures.
pub struct MockSource {
    latency: Duration,
}

impl Default for MockSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSource {
    /// Mock that answers immediately.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            latency: Duration::ZERO,
        }
    }

    /// Mock that waits `latency` before every answer.
    #[must_use]
    pub const fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }

    /// Fixture series for `ticker`, if one exists.
    #[must_use]
    pub fn fixture(ticker: &str) -> Option<Series> {
        fixtures::series::by_symbol(ticker)
    }

    async fn maybe_fail_or_timeout(ticker: &str) -> Result<(), DashboardError> {
        match ticker {
            "FAIL" => Err(DashboardError::network(
                "data",
                "forced failure: connection refused",
            )),
            "TIMEOUT" => {
                // Long enough to trip a short dashboard deadline, short enough for tests.
                tokio::time::sleep(Duration::from_millis(200)).await;
                Ok(())
            }
            "MALFORMED" => Err(MalformedData::LengthMismatch {
                column: stocktimum_core::Column::Close,
                expected: 3,
                found: 2,
            }
            .into()),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl SeriesSource for MockSource {
    fn name(&self) -> &'static str {
        "stocktimum-mock"
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    async fn fetch_series(&self, query: &Query) -> Result<Series, DashboardError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        let ticker = query.ticker();
        Self::maybe_fail_or_timeout(ticker).await?;
        Self::fixture(ticker).ok_or_else(|| {
            DashboardError::status("data", 404, format!("No data found for ticker {ticker}"))
        })
    }

    async fn hello(&self) -> Result<Hello, DashboardError> {
        Ok(Hello {
            message: MOCK_HELLO.to_string(),
            cache_ttl_seconds: Some(3600),
            data_dir: None,
        })
    }
}
