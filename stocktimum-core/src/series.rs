use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Column, MalformedData};

const DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Parse a wire date string.
///
/// Accepts `YYYY-MM-DD`, `YYYY-MM-DD HH:MM` (with optional seconds, space or `T`
/// separated), and RFC 3339. Offsets are normalised to UTC.
#[must_use]
pub fn parse_date(raw: &str) -> Option<NaiveDateTime> {
    let s = raw.trim();
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return d.and_hms_opt(0, 0, 0);
    }
    if let Some(dt) = DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
    {
        return Some(dt);
    }
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.naive_utc())
}

/// One bar of a series: the i-th element of each column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    /// Date exactly as received.
    pub date: String,
    /// Opening price.
    pub open: f64,
    /// High price.
    pub high: f64,
    /// Low price.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Traded volume.
    pub volume: f64,
}

impl Row {
    /// Display text for one column of this row.
    #[must_use]
    pub fn cell(&self, column: Column) -> String {
        match column {
            Column::Date => self.date.clone(),
            Column::Open => self.open.to_string(),
            Column::High => self.high.to_string(),
            Column::Low => self.low.to_string(),
            Column::Close => self.close.to_string(),
            Column::Volume => self.volume.to_string(),
        }
    }

    /// Display text for every column, in table order.
    #[must_use]
    pub fn cells(&self) -> [String; 6] {
        Column::ALL.map(|c| self.cell(c))
    }
}

/// A validated, column-oriented OHLCV series.
///
/// All six columns have the same length, every price and volume is a finite
/// number, and dates never go backwards. Construction is the only place these
/// are checked; a `Series` in hand is safe to project.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Series {
    dates: Vec<String>,
    stamps: Vec<NaiveDateTime>,
    open: Vec<f64>,
    high: Vec<f64>,
    low: Vec<f64>,
    close: Vec<f64>,
    volume: Vec<f64>,
}

impl Series {
    /// Number of columns in the wire format.
    pub const COLUMNS: usize = Column::ALL.len();

    /// Build a series from already-typed columns.
    ///
    /// # Errors
    /// Returns a [`MalformedData`] describing the first violation found.
    pub fn from_columns(
        dates: Vec<String>,
        open: Vec<f64>,
        high: Vec<f64>,
        low: Vec<f64>,
        close: Vec<f64>,
        volume: Vec<f64>,
    ) -> Result<Self, MalformedData> {
        let expected = dates.len();
        for (column, values) in [
            (Column::Open, &open),
            (Column::High, &high),
            (Column::Low, &low),
            (Column::Close, &close),
            (Column::Volume, &volume),
        ] {
            if values.len() != expected {
                return Err(MalformedData::LengthMismatch {
                    column,
                    expected,
                    found: values.len(),
                });
            }
            if let Some(index) = values.iter().position(|v| !v.is_finite()) {
                return Err(MalformedData::NonNumeric { column, index });
            }
        }

        let mut stamps = Vec::with_capacity(expected);
        for (index, raw) in dates.iter().enumerate() {
            let ts = parse_date(raw).ok_or_else(|| MalformedData::BadDate {
                index,
                value: Value::String(raw.clone()).to_string(),
            })?;
            if stamps.last().is_some_and(|prev| ts < *prev) {
                return Err(MalformedData::OutOfOrder { index });
            }
            stamps.push(ts);
        }

        Ok(Self {
            dates,
            stamps,
            open,
            high,
            low,
            close,
            volume,
        })
    }

    /// Decode and validate a response body.
    ///
    /// # Errors
    /// Returns `NotJson` for undecodable bytes, otherwise see [`from_json_value`](Self::from_json_value).
    pub fn from_json_slice(body: &[u8]) -> Result<Self, MalformedData> {
        let value: Value =
            serde_json::from_slice(body).map_err(|e| MalformedData::NotJson(e.to_string()))?;
        Self::from_json_value(&value)
    }

    /// Validate a decoded `[dates, opens, highs, lows, closes, volumes]` array.
    ///
    /// # Errors
    /// Returns a [`MalformedData`] describing the first violation found.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "stocktimum_core::series::from_json_value", skip(value), err)
    )]
    pub fn from_json_value(value: &Value) -> Result<Self, MalformedData> {
        let columns = value.as_array().ok_or(MalformedData::NotTabular)?;
        if columns.len() != Self::COLUMNS {
            return Err(MalformedData::Arity {
                expected: Self::COLUMNS,
                found: columns.len(),
            });
        }

        let cells = |column: Column| -> Result<&Vec<Value>, MalformedData> {
            columns[column.index()]
                .as_array()
                .ok_or(MalformedData::NotAnArray { column })
        };

        let raw_dates = cells(Column::Date)?;
        let expected = raw_dates.len();
        let mut dates = Vec::with_capacity(expected);
        for (index, v) in raw_dates.iter().enumerate() {
            match v.as_str() {
                Some(s) => dates.push(s.to_string()),
                None => {
                    return Err(MalformedData::BadDate {
                        index,
                        value: v.to_string(),
                    });
                }
            }
        }

        let numeric = |column: Column| -> Result<Vec<f64>, MalformedData> {
            let raw = cells(column)?;
            if raw.len() != expected {
                return Err(MalformedData::LengthMismatch {
                    column,
                    expected,
                    found: raw.len(),
                });
            }
            raw.iter()
                .enumerate()
                .map(|(index, v)| {
                    v.as_f64()
                        .filter(|f| f.is_finite())
                        .ok_or(MalformedData::NonNumeric { column, index })
                })
                .collect()
        };

        let open = numeric(Column::Open)?;
        let high = numeric(Column::High)?;
        let low = numeric(Column::Low)?;
        let close = numeric(Column::Close)?;
        let volume = numeric(Column::Volume)?;

        Self::from_columns(dates, open, high, low, close, volume)
    }

    /// Number of bars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// True when the series has no bars.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Dates exactly as received.
    #[must_use]
    pub fn dates(&self) -> &[String] {
        &self.dates
    }

    /// Parsed timestamps, aligned with [`dates`](Self::dates).
    #[must_use]
    pub fn timestamps(&self) -> &[NaiveDateTime] {
        &self.stamps
    }

    /// Closing prices.
    #[must_use]
    pub fn closes(&self) -> &[f64] {
        &self.close
    }

    /// A numeric column, or `None` for [`Column::Date`].
    #[must_use]
    pub fn values(&self, column: Column) -> Option<&[f64]> {
        match column {
            Column::Date => None,
            Column::Open => Some(&self.open),
            Column::High => Some(&self.high),
            Column::Low => Some(&self.low),
            Column::Close => Some(&self.close),
            Column::Volume => Some(&self.volume),
        }
    }

    /// The bar at `index`.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<Row> {
        (index < self.len()).then(|| self.row_unchecked(index))
    }

    /// Zip the six columns into rows.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = Row> + '_ {
        (0..self.len()).map(move |i| self.row_unchecked(i))
    }

    // Columns share one length, so any index below `len()` is valid in all six.
    fn row_unchecked(&self, i: usize) -> Row {
        Row {
            date: self.dates[i].clone(),
            open: self.open[i],
            high: self.high[i],
            low: self.low[i],
            close: self.close[i],
            volume: self.volume[i],
        }
    }
}
