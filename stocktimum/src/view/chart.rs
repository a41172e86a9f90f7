use std::fmt;

use chrono::NaiveDateTime;
use stocktimum_core::{Period, Series};

/// X-axis tick granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    /// One tick per day.
    Day,
    /// One tick per month.
    Month,
}

impl TimeUnit {
    /// Month ticks for 5y and 10y windows, day ticks otherwise.
    #[must_use]
    pub const fn for_period(period: Period) -> Self {
        if period.is_long() { Self::Month } else { Self::Day }
    }

    /// Lowercase identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Month => "month",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything a backend needs to draw the closing-price line.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    /// Dataset label, `"{ticker} Price"`.
    pub dataset_label: String,
    /// X labels: the dates as received.
    pub labels: Vec<String>,
    /// Parsed dates, aligned with `labels`.
    pub timestamps: Vec<NaiveDateTime>,
    /// Y values: closing prices.
    pub values: Vec<f64>,
    /// X tick granularity.
    pub time_unit: TimeUnit,
    /// X axis title.
    pub x_title: &'static str,
    /// Y axis title.
    pub y_title: &'static str,
}

impl ChartSpec {
    /// X axis title.
    pub const X_TITLE: &'static str = "Date";
    /// Y axis title.
    pub const Y_TITLE: &'static str = "Price (USD)";

    /// Project a series into a closing-price line chart.
    #[must_use]
    pub fn from_series(ticker: &str, period: Period, series: &Series) -> Self {
        Self {
            dataset_label: format!("{ticker} Price"),
            labels: series.dates().to_vec(),
            timestamps: series.timestamps().to_vec(),
            values: series.closes().to_vec(),
            time_unit: TimeUnit::for_period(period),
            x_title: Self::X_TITLE,
            y_title: Self::Y_TITLE,
        }
    }

    /// Number of plotted points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when there is nothing to plot.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A concrete chart renderer.
///
/// `create` draws a new chart instance and returns a handle to it; `dispose`
/// tears that instance down. The dashboard never holds more than one handle.
pub trait ChartBackend {
    /// Handle to a live chart instance.
    type Handle;

    /// Draw a new chart for `spec`.
    fn create(&mut self, spec: &ChartSpec) -> Self::Handle;

    /// Tear down a chart previously returned by `create`.
    fn dispose(&mut self, handle: Self::Handle);
}

struct LiveChart<H> {
    handle: H,
    spec: ChartSpec,
}

/// Exclusive owner of the single live chart instance.
///
/// `replace` disposes the current instance before creating the next, and
/// dropping the slot disposes whatever is live.
pub struct ChartSlot<B: ChartBackend> {
    backend: B,
    live: Option<LiveChart<B::Handle>>,
}

impl<B: ChartBackend> ChartSlot<B> {
    /// Empty slot drawing through `backend`.
    pub const fn new(backend: B) -> Self {
        Self {
            backend,
            live: None,
        }
    }

    /// Dispose the current chart (if any), then create one for `spec`.
    pub fn replace(&mut self, spec: ChartSpec) {
        self.clear();
        let handle = self.backend.create(&spec);
        #[cfg(feature = "tracing")]
        tracing::debug!(label = %spec.dataset_label, points = spec.len(), unit = %spec.time_unit, "chart created");
        self.live = Some(LiveChart { handle, spec });
    }

    /// Dispose the current chart, leaving the slot empty.
    pub fn clear(&mut self) {
        if let Some(old) = self.live.take() {
            self.backend.dispose(old.handle);
        }
    }

    /// Spec of the live chart.
    #[must_use]
    pub fn spec(&self) -> Option<&ChartSpec> {
        self.live.as_ref().map(|l| &l.spec)
    }

    /// Whether a chart is currently live.
    #[must_use]
    pub const fn is_live(&self) -> bool {
        self.live.is_some()
    }

    /// The backend.
    #[must_use]
    pub const fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: ChartBackend> Drop for ChartSlot<B> {
    fn drop(&mut self) {
        self.clear();
    }
}
