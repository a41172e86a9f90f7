//! Stocktimum is the view model behind a stock dashboard.
//!
//! Overview
//! - The user picks a ticker, a period and an interval through [`Controls`].
//! - Submitting turns the selection into a `Query`, fetches it from a
//!   `SeriesSource`, and renders the validated series into a line chart
//!   ([`ChartSpec`], owned by a [`ChartSlot`]) and a [`Table`].
//! - The dashboard moves through [`ViewState`]: `Idle`, `Loading`, `Displaying`,
//!   `Error`.
//!
//! Key behaviors
//! - Latest request wins: every submission takes a fresh [`RequestToken`]. A
//!   completion is applied only if its token is still the newest one issued,
//!   so a slow early response can never overwrite a fast later one.
//! - Fetching happens outside the borrow of the dashboard: [`Dashboard::submit`]
//!   hands back a [`PendingFetch`] that can be awaited (or raced) freely, and
//!   [`Dashboard::apply`] folds the result back in.
//! - One live chart: new data disposes the previous chart instance before the
//!   next is created, and dropping the dashboard disposes the last one.
//! - Failures keep the last good chart and table on screen and surface a short
//!   message through [`Dashboard::error_message`].
//! - An empty ticker never issues a request.
//!
//! Examples
//! ```rust,ignore
//! use std::sync::Arc;
//! use stocktimum::{Dashboard, HeadlessChart};
//! use stocktimum_http::HttpSource;
//!
//! let source = Arc::new(HttpSource::new("http://127.0.0.1:8000")?);
//! let mut dash = Dashboard::builder()
//!     .with_source(source)
//!     .chart_backend(HeadlessChart::new())
//!     .build()?;
//!
//! dash.mount().await;
//! dash.controls_mut().set_ticker("MSFT")?;
//! dash.update().await;
//! for row in dash.table().cells() {
//!     println!("{}", row.join("\t"));
//! }
//! ```
//!
//! Racing two submissions:
//! ```rust,ignore
//! let a = dash.submit().expect("ticker selected");
//! dash.controls_mut().set_ticker("TSLA")?;
//! let b = dash.submit().expect("ticker selected");
//! let (ra, rb) = futures::join!(a.run(), b.run());
//! dash.apply(rb); // rendered
//! dash.apply(ra); // stale, ignored
//! ```
#![warn(missing_docs)]

mod core;
mod fetch;
/// Chart, table, controls, banner, and the view state machine.
pub mod view;

pub use crate::core::{Applied, Dashboard, DashboardBuilder};
pub use fetch::{Completion, PendingFetch, RequestToken};
pub use view::{
    Banner, ChartBackend, ChartId, ChartSlot, ChartSpec, Controls, Event, HeadlessChart, Table,
    TimeUnit, ViewState,
};

pub use stocktimum_core::{
    Catalog, Column, DashboardConfig, DashboardError, Hello, Interval, MalformedData, Period,
    Query, Row, Selection, Series, SeriesSource,
};
