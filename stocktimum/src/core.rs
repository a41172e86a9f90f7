use std::sync::Arc;
use std::time::Duration;

use futures::future::{self, Either};
use stocktimum_core::{
    Catalog, DashboardConfig, DashboardError, Endpoint, Hello, Query, Selection, SeriesSource,
};

use crate::fetch::{Completion, PendingFetch, RequestToken, TokenGate};
use crate::view::{
    Banner, ChartBackend, ChartSlot, ChartSpec, Controls, Event, Table, ViewState,
};

/// What [`Dashboard::apply`] did with a completion.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub enum Applied {
    /// Chart and table were replaced with `rows` bars.
    Rendered {
        /// Token of the applied submission.
        token: RequestToken,
        /// Number of table rows now shown.
        rows: usize,
    },
    /// The fetch failed; previous chart and table were kept.
    Failed {
        /// Token of the failed submission.
        token: RequestToken,
        /// The failure.
        error: DashboardError,
    },
    /// A newer submission exists, or this one was already applied. Nothing changed.
    Stale {
        /// Token of the discarded completion.
        token: RequestToken,
    },
    /// No ticker was selected, so no request was issued.
    Skipped,
}

/// Headless stock dashboard: controls, a single chart, a table, and a banner.
pub struct Dashboard<B: ChartBackend> {
    source: Arc<dyn SeriesSource>,
    cfg: DashboardConfig,
    controls: Controls,
    gate: TokenGate,
    state: ViewState,
    table: Table,
    chart: ChartSlot<B>,
    banner: Banner,
}

/// Builder for constructing a [`Dashboard`].
pub struct DashboardBuilder<B: ChartBackend> {
    source: Option<Arc<dyn SeriesSource>>,
    backend: Option<B>,
    catalog: Catalog,
    cfg: DashboardConfig,
}

impl<B: ChartBackend> Default for DashboardBuilder<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: ChartBackend> DashboardBuilder<B> {
    /// Create a new builder with default configuration and the built-in catalog.
    ///
    /// A source and a chart backend must be supplied before [`build`](Self::build).
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: None,
            backend: None,
            catalog: Catalog::builtin(),
            cfg: DashboardConfig::default(),
        }
    }

    /// Register the series source.
    #[must_use]
    pub fn with_source(mut self, source: Arc<dyn SeriesSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Register the chart backend.
    #[must_use]
    pub fn chart_backend(mut self, backend: B) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Replace the ticker catalog.
    #[must_use]
    pub fn catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: DashboardConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Selection loaded on mount.
    #[must_use]
    pub fn default_selection(mut self, selection: Selection) -> Self {
        self.cfg.default_selection = selection;
        self
    }

    /// Deadline for each fetch.
    ///
    /// When exceeded the fetch completes with a `Timeout` error.
    #[must_use]
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.request_timeout = timeout;
        self
    }

    /// Whether `mount` fetches the hello banner.
    #[must_use]
    pub fn show_banner(mut self, yes: bool) -> Self {
        self.cfg.show_banner = yes;
        self
    }

    /// Build the dashboard in the `Idle` state.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no source or chart backend was registered, the
    /// request timeout is zero, or the default ticker is not in the catalog.
    pub fn build(self) -> Result<Dashboard<B>, DashboardError> {
        let source = self.source.ok_or_else(|| {
            DashboardError::InvalidArg(
                "no source registered; add one via with_source(...)".to_string(),
            )
        })?;
        let backend = self.backend.ok_or_else(|| {
            DashboardError::InvalidArg(
                "no chart backend registered; add one via chart_backend(...)".to_string(),
            )
        })?;
        if self.cfg.request_timeout.is_zero() {
            return Err(DashboardError::InvalidArg(
                "request timeout must be greater than zero".to_string(),
            ));
        }
        let controls = Controls::new(self.catalog, self.cfg.default_selection.clone())?;
        let banner = if self.cfg.show_banner {
            Banner::Loading
        } else {
            Banner::Hidden
        };

        Ok(Dashboard {
            source,
            cfg: self.cfg,
            controls,
            gate: TokenGate::default(),
            state: ViewState::Idle,
            table: Table::default(),
            chart: ChartSlot::new(backend),
            banner,
        })
    }
}

impl<B: ChartBackend> Dashboard<B> {
    /// Start building a new `Dashboard`.
    ///
    /// ```rust,ignore
    /// let dash = stocktimum::Dashboard::builder()
    ///     .with_source(Arc::new(stocktimum_mock::MockSource::new()))
    ///     .chart_backend(stocktimum::HeadlessChart::new())
    ///     .request_timeout(Duration::from_secs(5))
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> DashboardBuilder<B> {
        DashboardBuilder::new()
    }

    /// Current view state.
    #[must_use]
    pub const fn state(&self) -> &ViewState {
        &self.state
    }

    /// Selectors.
    #[must_use]
    pub const fn controls(&self) -> &Controls {
        &self.controls
    }

    /// Mutable selectors. Changes take effect on the next submission.
    pub const fn controls_mut(&mut self) -> &mut Controls {
        &mut self.controls
    }

    /// The data table.
    #[must_use]
    pub const fn table(&self) -> &Table {
        &self.table
    }

    /// Spec of the live chart, if one has been rendered.
    #[must_use]
    pub fn chart(&self) -> Option<&ChartSpec> {
        self.chart.spec()
    }

    /// The chart backend.
    #[must_use]
    pub const fn chart_backend(&self) -> &B {
        self.chart.backend()
    }

    /// The banner.
    #[must_use]
    pub const fn banner(&self) -> &Banner {
        &self.banner
    }

    /// Inline error text while in the `Error` state.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.state.error()
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &DashboardConfig {
        &self.cfg
    }

    /// Submit the current selection.
    ///
    /// Returns `None` without touching any state when no ticker is selected.
    /// Otherwise issues a fresh token, moves to `Loading`, and returns the fetch
    /// to run.
    pub fn submit(&mut self) -> Option<PendingFetch> {
        let query = self.query_or_skip()?;
        Some(self.begin(query))
    }

    /// Like [`submit`](Self::submit), but asks the provider to bypass its cache.
    pub fn refresh(&mut self) -> Option<PendingFetch> {
        let query = self.query_or_skip()?.with_force(true);
        Some(self.begin(query))
    }

    fn query_or_skip(&self) -> Option<Query> {
        let query = Query::from_selection(self.controls.selection());
        #[cfg(feature = "tracing")]
        if query.is_none() {
            tracing::debug!("no ticker selected; skipping fetch");
        }
        query
    }

    fn begin(&mut self, query: Query) -> PendingFetch {
        let token = self.gate.issue();
        self.state = std::mem::take(&mut self.state).handle(Event::Submitted(token));
        PendingFetch::new(
            token,
            query,
            Arc::clone(&self.source),
            self.cfg.request_timeout,
        )
    }

    /// Fold a completed fetch into the view.
    ///
    /// Completions from superseded or already-applied submissions are dropped.
    /// A success replaces chart and table together; a failure leaves both as
    /// they were and switches to `Error`.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "stocktimum::dashboard::apply",
            skip(self, completion),
            fields(token = completion.token().get(), state = self.state.label()),
        )
    )]
    pub fn apply(&mut self, completion: Completion) -> Applied {
        let (token, query, result) = completion.into_parts();
        if !self.gate.admits(token) || self.state.awaiting() != Some(token) {
            #[cfg(feature = "tracing")]
            tracing::debug!(token = token.get(), "discarding stale response");
            return Applied::Stale { token };
        }

        match result {
            Ok(series) => {
                let spec = ChartSpec::from_series(query.ticker(), query.period(), &series);
                self.table.replace(series.rows());
                self.chart.replace(spec);
                let rows = self.table.len();
                self.state = std::mem::take(&mut self.state).handle(Event::Succeeded(token, series));
                Applied::Rendered { token, rows }
            }
            Err(error) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(error = %error, ticker = %query.ticker(), "keeping previous data");
                let message = error.user_message();
                self.state = std::mem::take(&mut self.state).handle(Event::Failed(token, message));
                Applied::Failed { token, error }
            }
        }
    }

    /// Submit the current selection, wait for it, and apply it.
    pub async fn update(&mut self) -> Applied {
        match self.submit() {
            Some(pending) => {
                let done = pending.run().await;
                self.apply(done)
            }
            None => Applied::Skipped,
        }
    }

    /// Fetch the hello banner and replace the banner text.
    ///
    /// Does nothing when the banner is hidden. The request is bounded by the
    /// request timeout.
    pub async fn load_banner(&mut self) {
        if matches!(self.banner, Banner::Hidden) {
            return;
        }
        let res = fetch_hello(Arc::clone(&self.source), self.cfg.request_timeout).await;
        self.banner = Banner::from_result(res);
    }

    /// First load: fetch the banner and the default selection concurrently.
    ///
    /// Whichever settles first is applied first, so a slow banner never holds
    /// back the chart and table.
    pub async fn mount(&mut self) -> Applied {
        let hello = (!matches!(self.banner, Banner::Hidden))
            .then(|| fetch_hello(Arc::clone(&self.source), self.cfg.request_timeout));
        let Some(pending) = self.submit() else {
            if let Some(hello) = hello {
                self.banner = Banner::from_result(hello.await);
            }
            return Applied::Skipped;
        };
        let Some(hello) = hello else {
            let done = pending.run().await;
            return self.apply(done);
        };

        let data = pending.run();
        futures::pin_mut!(hello, data);
        match future::select(hello, data).await {
            Either::Left((res, data)) => {
                self.banner = Banner::from_result(res);
                let done = data.await;
                self.apply(done)
            }
            Either::Right((done, hello)) => {
                let applied = self.apply(done);
                self.banner = Banner::from_result(hello.await);
                applied
            }
        }
    }
}

async fn fetch_hello(
    source: Arc<dyn SeriesSource>,
    timeout: Duration,
) -> Result<Hello, DashboardError> {
    tokio::time::timeout(timeout, source.hello())
        .await
        .unwrap_or_else(|_| Err(DashboardError::timeout(Endpoint::Hello.as_str(), timeout)))
}
