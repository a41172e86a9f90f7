//! stocktimum-core
//!
//! Core types, traits, and utilities shared across the stocktimum workspace.
//!
//! - `query`: turns a [`Selection`] into a request for the series endpoint.
//! - `series`: validates the six-column wire payload into a [`Series`] and
//!   projects it into table [`Row`]s.
//! - `catalog`: the static, normalised list of selectable tickers.
//! - `source`: the [`SeriesSource`] trait implemented by HTTP and mock sources.
//!
//! Nothing in this crate performs I/O. Sources live in `stocktimum-http` and
//! `stocktimum-mock`; the view model lives in `stocktimum`.
#![warn(missing_docs)]

/// Static ticker catalog and symbol normalisation.
pub mod catalog;
/// Request descriptors for the series endpoint.
pub mod query;
/// Six-column series validation and row projection.
pub mod series;
/// The data source trait.
pub mod source;

pub use catalog::{Catalog, DEFAULT_TICKERS};
pub use query::{Query, endpoint_url};
pub use series::{Row, Series, parse_date};
pub use source::SeriesSource;
pub use stocktimum_types::{
    Column, DashboardConfig, DashboardError, Endpoint, Hello, Interval, MalformedData, Period,
    Selection,
};
