//! Shared plumbing for the runnable demos.
pub mod common;
pub mod text_chart;
