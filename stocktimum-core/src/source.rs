use async_trait::async_trait;

use crate::{DashboardError, Endpoint, Hello, Query, Series};

/// A provider of ticker series.
///
/// Implementations issue exactly one request per `fetch_series` call and return
/// either a validated [`Series`] or a typed error; they never panic on bad input.
/// Overlapping calls are allowed and are not cancelled by the source; ordering
/// is the caller's concern.
#[async_trait]
pub trait SeriesSource: Send + Sync {
    /// A stable identifier for logs (e.g. "stocktimum-http").
    fn name(&self) -> &'static str;

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Fetch and validate the series described by `query`.
    async fn fetch_series(&self, query: &Query) -> Result<Series, DashboardError>;

    /// Fetch the informational banner.
    ///
    /// Default: `Unsupported`.
    async fn hello(&self) -> Result<Hello, DashboardError> {
        Err(DashboardError::unsupported(Endpoint::Hello.as_str()))
    }
}
