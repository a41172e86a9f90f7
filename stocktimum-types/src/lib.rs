//! Stocktimum data transfer objects and configuration primitives.
#![warn(missing_docs)]

mod config;
mod endpoint;
mod hello;
mod selection;

pub use config::DashboardConfig;
pub use endpoint::Endpoint;
pub use hello::Hello;
pub use selection::{Column, Interval, Period, Selection};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ways a series response can violate the six-column contract.
///
/// Each variant carries enough position information to point at the offending
/// cell without echoing the whole payload.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MalformedData {
    /// The body could not be decoded as JSON.
    #[error("response is not valid JSON: {0}")]
    NotJson(String),

    /// The top-level value is not an array of columns.
    #[error("expected an array of columns")]
    NotTabular,

    /// The number of columns differs from the contract.
    #[error("expected {expected} columns, found {found}")]
    Arity {
        /// Number of columns required.
        expected: usize,
        /// Number of columns received.
        found: usize,
    },

    /// A column is present but is not an array.
    #[error("column `{column}` is not an array")]
    NotAnArray {
        /// The offending column.
        column: Column,
    },

    /// Column lengths disagree.
    #[error("column `{column}` has {found} entries, expected {expected}")]
    LengthMismatch {
        /// The offending column.
        column: Column,
        /// Length of the date column.
        expected: usize,
        /// Length of the offending column.
        found: usize,
    },

    /// A price or volume cell is not a finite number.
    #[error("column `{column}` has a non-numeric value at index {index}")]
    NonNumeric {
        /// The offending column.
        column: Column,
        /// Zero-based bar index.
        index: usize,
    },

    /// A date cell is not a recognised date string.
    #[error("unparseable date at index {index}: {value}")]
    BadDate {
        /// Zero-based bar index.
        index: usize,
        /// The raw cell, rendered as JSON.
        value: String,
    },

    /// Dates go backwards.
    #[error("dates out of order at index {index}")]
    OutOfOrder {
        /// Index of the first date earlier than its predecessor.
        index: usize,
    },
}

/// Unified error type for the stocktimum workspace.
///
/// Network-class failures (`Network`, `Timeout`, `Status`) and contract violations
/// (`Malformed`) are kept apart so callers can tell a flaky connection from a
/// provider that sends garbage.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DashboardError {
    /// The source does not serve the requested endpoint.
    #[error("unsupported endpoint: {endpoint}")]
    Unsupported {
        /// Endpoint label (e.g. "hello").
        endpoint: String,
    },

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// Transport failure before any response arrived.
    #[error("network error on {endpoint}: {message}")]
    Network {
        /// Endpoint label.
        endpoint: String,
        /// Human-readable cause.
        message: String,
    },

    /// The request exceeded its deadline.
    #[error("request timed out after {timeout_ms}ms: {endpoint}")]
    Timeout {
        /// Endpoint label.
        endpoint: String,
        /// Deadline that elapsed, in milliseconds.
        timeout_ms: u64,
    },

    /// The provider answered with a non-success HTTP status.
    #[error("{endpoint} returned HTTP {status}: {message}")]
    Status {
        /// Endpoint label.
        endpoint: String,
        /// HTTP status code.
        status: u16,
        /// Message extracted from the error body, or the canonical reason.
        message: String,
    },

    /// The response violated the series contract.
    #[error("malformed data: {0}")]
    Malformed(#[from] MalformedData),

    /// Environment or builder configuration is invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Unknown/opaque error.
    #[error("unknown error: {0}")]
    Other(String),
}

impl DashboardError {
    /// Helper: build an `Unsupported` error for an endpoint label.
    #[must_use]
    pub fn unsupported(endpoint: impl Into<String>) -> Self {
        Self::Unsupported {
            endpoint: endpoint.into(),
        }
    }

    /// Helper: build a `Network` error.
    pub fn network(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Network {
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }

    /// Helper: build a `Timeout` error from the elapsed deadline.
    #[must_use]
    pub fn timeout(endpoint: impl Into<String>, timeout: std::time::Duration) -> Self {
        Self::Timeout {
            endpoint: endpoint.into(),
            timeout_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
        }
    }

    /// Helper: build a `Status` error.
    pub fn status(endpoint: impl Into<String>, status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            endpoint: endpoint.into(),
            status,
            message: message.into(),
        }
    }

    /// True for transport, deadline, and HTTP status failures.
    #[must_use]
    pub const fn is_network(&self) -> bool {
        matches!(
            self,
            Self::Network { .. } | Self::Timeout { .. } | Self::Status { .. }
        )
    }

    /// True when the provider responded but the payload broke the series contract.
    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed(_))
    }

    /// Short inline message suitable for the dashboard's error line.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Network { .. } | Self::Timeout { .. } | Self::Status { .. } => {
                format!("Unable to load stock data. ({self})")
            }
            Self::Malformed(inner) => format!("Received malformed stock data: {inner}."),
            other => format!("Unable to load stock data. ({other})"),
        }
    }
}
