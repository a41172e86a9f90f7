//! Configuration shared by the dashboard and its data sources.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{DashboardError, Interval, Period, Selection};

/// Global configuration for a `Dashboard` and the HTTP source behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Base URL of the series provider, e.g. `http://127.0.0.1:8000`.
    pub base_url: String,
    /// Deadline for a single fetch.
    pub request_timeout: Duration,
    /// Selection loaded when the dashboard mounts.
    pub default_selection: Selection,
    /// Fetch the `/api/hello` banner on mount.
    pub show_banner: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(10),
            default_selection: Selection::default(),
            show_banner: true,
        }
    }
}

impl DashboardConfig {
    /// Provider address used when nothing else is configured.
    pub const DEFAULT_BASE_URL: &'static str = "http://127.0.0.1:8000";

    /// Prefix shared by every recognised environment variable.
    pub const ENV_PREFIX: &'static str = "STOCKTIMUM_";

    /// Load configuration from `STOCKTIMUM_*` environment variables.
    ///
    /// Recognised: `BASE_URL`, `TIMEOUT_MS`, `TICKER`, `PERIOD`, `INTERVAL`,
    /// `SHOW_BANNER`. Unset variables keep their defaults.
    ///
    /// # Errors
    /// Returns `Config` when a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, DashboardError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reads through `lookup`.
    ///
    /// `lookup` receives the full variable name including the prefix.
    ///
    /// # Errors
    /// Returns `Config` when a value is present but cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DashboardError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(&format!("{}{name}", Self::ENV_PREFIX)).filter(|v| !v.trim().is_empty())
        };
        let mut cfg = Self::default();

        if let Some(url) = get("BASE_URL") {
            cfg.base_url = url.trim().to_string();
        }
        if let Some(ms) = get("TIMEOUT_MS") {
            let ms: u64 = ms.trim().parse().map_err(|_| {
                DashboardError::Config(format!("STOCKTIMUM_TIMEOUT_MS is not a number: {ms:?}"))
            })?;
            cfg.request_timeout = Duration::from_millis(ms);
        }
        if let Some(ticker) = get("TICKER") {
            cfg.default_selection.ticker = ticker.trim().to_uppercase();
        }
        if let Some(period) = get("PERIOD") {
            cfg.default_selection.period = period
                .parse::<Period>()
                .map_err(|e| DashboardError::Config(format!("STOCKTIMUM_PERIOD: {e}")))?;
        }
        if let Some(interval) = get("INTERVAL") {
            cfg.default_selection.interval = interval
                .parse::<Interval>()
                .map_err(|e| DashboardError::Config(format!("STOCKTIMUM_INTERVAL: {e}")))?;
        }
        if let Some(flag) = get("SHOW_BANNER") {
            cfg.show_banner = match flag.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                other => {
                    return Err(DashboardError::Config(format!(
                        "STOCKTIMUM_SHOW_BANNER is not a boolean: {other:?}"
                    )));
                }
            };
        }
        Ok(cfg)
    }
}
