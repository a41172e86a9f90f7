use std::sync::Arc;

use stocktimum_core::{DashboardConfig, DashboardError, SeriesSource};
use stocktimum_http::HttpSource;

/// Set to any value to run the demos against the in-process mock.
pub const USE_MOCK_ENV: &str = "STOCKTIMUM_DEMOS_USE_MOCK";

/// Return a source for demos.
///
/// Uses the mock when [`USE_MOCK_ENV`] is set, otherwise an HTTP source
/// configured from `STOCKTIMUM_*` variables.
///
/// # Errors
/// Returns `Config` if the environment holds an invalid setting.
pub fn get_source() -> Result<Arc<dyn SeriesSource>, DashboardError> {
    if std::env::var(USE_MOCK_ENV).is_ok() {
        println!("--- (Using Mock Source for CI) ---");
        return Ok(Arc::new(stocktimum_mock::MockSource::new()));
    }
    let cfg = DashboardConfig::from_env()?;
    Ok(Arc::new(HttpSource::from_config(&cfg)?))
}
