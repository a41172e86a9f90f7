use std::sync::Arc;
use std::time::Duration;

use stocktimum_core::{DashboardError, Endpoint, Query, Series, SeriesSource};

/// Monotonic identifier stamped on every submission.
///
/// Tokens from one dashboard are strictly increasing in issue order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    /// Raw sequence number.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Issues tokens and admits only the newest one.
#[derive(Debug, Default)]
pub(crate) struct TokenGate {
    latest: u64,
}

impl TokenGate {
    pub(crate) const fn issue(&mut self) -> RequestToken {
        self.latest += 1;
        RequestToken(self.latest)
    }

    pub(crate) const fn admits(&self, token: RequestToken) -> bool {
        token.0 == self.latest
    }
}

/// A fetch that has been issued a token but not yet run.
///
/// Holds its own handle to the source, so it can be awaited while the
/// dashboard stays free for further submissions.
#[must_use = "a pending fetch does nothing until `run` is awaited"]
pub struct PendingFetch {
    token: RequestToken,
    query: Query,
    source: Arc<dyn SeriesSource>,
    timeout: Duration,
}

impl PendingFetch {
    pub(crate) fn new(
        token: RequestToken,
        query: Query,
        source: Arc<dyn SeriesSource>,
        timeout: Duration,
    ) -> Self {
        Self {
            token,
            query,
            source,
            timeout,
        }
    }

    /// Token assigned at submission.
    #[must_use]
    pub const fn token(&self) -> RequestToken {
        self.token
    }

    /// The query that will be sent.
    #[must_use]
    pub const fn query(&self) -> &Query {
        &self.query
    }

    /// Perform the request, bounded by the dashboard's request timeout.
    ///
    /// Never fails: errors are carried inside the returned [`Completion`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "stocktimum::fetch::run",
            skip(self),
            fields(
                token = self.token.get(),
                ticker = %self.query.ticker(),
                period = %self.query.period(),
                interval = %self.query.interval(),
                source = self.source.name(),
            ),
        )
    )]
    pub async fn run(self) -> Completion {
        let result = tokio::time::timeout(self.timeout, self.source.fetch_series(&self.query))
            .await
            .unwrap_or_else(|_| Err(DashboardError::timeout(Endpoint::Data.as_str(), self.timeout)));
        #[cfg(feature = "tracing")]
        if let Err(e) = &result {
            tracing::warn!(error = %e, "fetch failed");
        }
        Completion {
            token: self.token,
            query: self.query,
            result,
        }
    }
}

/// Outcome of a [`PendingFetch`], ready to be applied to the dashboard.
#[derive(Debug, Clone)]
pub struct Completion {
    token: RequestToken,
    query: Query,
    result: Result<Series, DashboardError>,
}

impl Completion {
    /// Token of the originating submission.
    #[must_use]
    pub const fn token(&self) -> RequestToken {
        self.token
    }

    /// The query that was sent.
    #[must_use]
    pub const fn query(&self) -> &Query {
        &self.query
    }

    /// The validated series or the failure.
    #[must_use]
    pub const fn result(&self) -> &Result<Series, DashboardError> {
        &self.result
    }

    pub(crate) fn into_parts(self) -> (RequestToken, Query, Result<Series, DashboardError>) {
        (self.token, self.query, self.result)
    }
}
