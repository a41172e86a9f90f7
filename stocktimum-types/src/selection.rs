//! User-facing selection primitives: period, interval, ticker, and table columns.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::DashboardError;

/// Historical window requested from the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Period {
    /// One month.
    #[serde(rename = "1mo")]
    M1,
    /// Six months.
    #[serde(rename = "6mo")]
    M6,
    /// One year.
    #[serde(rename = "1y")]
    Y1,
    /// Five years.
    #[serde(rename = "5y")]
    Y5,
    /// Ten years.
    #[default]
    #[serde(rename = "10y")]
    Y10,
}

impl Period {
    /// Every selectable period, in selector order.
    pub const ALL: [Self; 5] = [Self::M1, Self::M6, Self::Y1, Self::Y5, Self::Y10];

    /// Wire identifier sent as the `period` query parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::M1 => "1mo",
            Self::M6 => "6mo",
            Self::Y1 => "1y",
            Self::Y5 => "5y",
            Self::Y10 => "10y",
        }
    }

    /// Periods long enough that the chart should tick by month.
    #[must_use]
    pub const fn is_long(self) -> bool {
        matches!(self, Self::Y5 | Self::Y10)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s.trim())
            .ok_or_else(|| DashboardError::InvalidArg(format!("unknown period: {s:?}")))
    }
}

/// Sampling interval between bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Interval {
    /// Daily bars.
    #[default]
    #[serde(rename = "1d")]
    D1,
    /// Weekly bars.
    #[serde(rename = "1wk")]
    W1,
    /// Monthly bars.
    #[serde(rename = "1mo")]
    M1,
}

impl Interval {
    /// Every selectable interval, in selector order.
    pub const ALL: [Self; 3] = [Self::D1, Self::W1, Self::M1];

    /// Wire identifier sent as the `interval` query parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::D1 => "1d",
            Self::W1 => "1wk",
            Self::M1 => "1mo",
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Interval {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|i| i.as_str() == s.trim())
            .ok_or_else(|| DashboardError::InvalidArg(format!("unknown interval: {s:?}")))
    }
}

/// The controls' current value: which ticker, over which window, at which cadence.
///
/// An empty ticker means "nothing selected" and never produces a request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    /// Ticker symbol, or empty for no selection.
    pub ticker: String,
    /// Historical window.
    pub period: Period,
    /// Sampling interval.
    pub interval: Interval,
}

impl Selection {
    /// Ticker shown on first load.
    pub const DEFAULT_TICKER: &'static str = "AAPL";

    /// Build a selection from its parts.
    pub fn new(ticker: impl Into<String>, period: Period, interval: Interval) -> Self {
        Self {
            ticker: ticker.into(),
            period,
            interval,
        }
    }

    /// True when no ticker is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ticker.trim().is_empty()
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TICKER, Period::default(), Interval::default())
    }
}

/// The six columns of a series response, in wire and table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Column {
    /// Bar date.
    Date,
    /// Opening price.
    Open,
    /// High price.
    High,
    /// Low price.
    Low,
    /// Closing price.
    Close,
    /// Traded volume.
    Volume,
}

impl Column {
    /// All columns in wire order.
    pub const ALL: [Self; 6] = [
        Self::Date,
        Self::Open,
        Self::High,
        Self::Low,
        Self::Close,
        Self::Volume,
    ];

    /// Table header text.
    #[must_use]
    pub const fn header(self) -> &'static str {
        match self {
            Self::Date => "Date",
            Self::Open => "Open",
            Self::High => "High",
            Self::Low => "Low",
            Self::Close => "Close",
            Self::Volume => "Volume",
        }
    }

    /// Position of this column in the response array.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}
