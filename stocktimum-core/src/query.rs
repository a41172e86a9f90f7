use url::Url;

use crate::{DashboardError, Endpoint, Interval, Period, Selection};

/// A request for one ticker's series.
///
/// Built from a [`Selection`]; the selection's fields are passed through to the
/// provider unmodified. There is no way to build a `Query` with an empty ticker.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Query {
    ticker: String,
    period: Period,
    interval: Interval,
    force: bool,
}

impl Query {
    /// Build a query, rejecting an empty ticker.
    ///
    /// # Errors
    /// Returns `InvalidArg` if `ticker` is empty or whitespace.
    pub fn new(
        ticker: impl Into<String>,
        period: Period,
        interval: Interval,
    ) -> Result<Self, DashboardError> {
        let ticker = ticker.into();
        if ticker.trim().is_empty() {
            return Err(DashboardError::InvalidArg(
                "ticker must not be empty".to_string(),
            ));
        }
        Ok(Self {
            ticker,
            period,
            interval,
            force: false,
        })
    }

    /// Query for the current selection, or `None` when no ticker is selected.
    #[must_use]
    pub fn from_selection(selection: &Selection) -> Option<Self> {
        Self::new(
            selection.ticker.clone(),
            selection.period,
            selection.interval,
        )
        .ok()
    }

    /// Ask the provider to bypass its server-side cache.
    #[must_use]
    pub const fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    /// Ticker symbol.
    #[must_use]
    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    /// Historical window.
    #[must_use]
    pub const fn period(&self) -> Period {
        self.period
    }

    /// Sampling interval.
    #[must_use]
    pub const fn interval(&self) -> Interval {
        self.interval
    }

    /// Whether the cache-bypass flag is set.
    #[must_use]
    pub const fn force(&self) -> bool {
        self.force
    }

    /// Query parameters in wire order. `force` is only present when set.
    #[must_use]
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut out = vec![
            ("ticker", self.ticker.clone()),
            ("period", self.period.as_str().to_string()),
            ("interval", self.interval.as_str().to_string()),
        ];
        if self.force {
            out.push(("force", "true".to_string()));
        }
        out
    }

    /// Full `GET` URL for this query against the provider at `base`.
    ///
    /// # Errors
    /// Returns `Config` if `base` cannot carry a path (e.g. `mailto:` URLs).
    pub fn url(&self, base: &Url) -> Result<Url, DashboardError> {
        let mut url = endpoint_url(base, Endpoint::Data)?;
        url.query_pairs_mut()
            .clear()
            .extend_pairs(self.params().iter().map(|(k, v)| (*k, v.as_str())));
        Ok(url)
    }
}

/// Resolve `endpoint` against the provider base URL.
///
/// A base without a trailing slash is treated as a directory, so
/// `http://host/prefix` resolves to `http://host/prefix/api/data`.
///
/// # Errors
/// Returns `Config` if `base` cannot be a base URL.
pub fn endpoint_url(base: &Url, endpoint: Endpoint) -> Result<Url, DashboardError> {
    if base.cannot_be_a_base() {
        return Err(DashboardError::Config(format!(
            "base URL cannot carry a path: {base}"
        )));
    }
    let mut dir = base.clone();
    if !dir.path().ends_with('/') {
        let path = format!("{}/", dir.path());
        dir.set_path(&path);
    }
    dir.set_query(None);
    dir.join(endpoint.path())
        .map_err(|e| DashboardError::Config(format!("invalid endpoint URL: {e}")))
}
