use stocktimum_core::{Catalog, DashboardError, Interval, Period, Selection};

/// Ticker, period and interval selectors.
///
/// The ticker is either empty or a member of the catalog; nothing else can be
/// stored.
#[derive(Debug, Clone)]
pub struct Controls {
    catalog: Catalog,
    selection: Selection,
}

impl Controls {
    /// Controls over `catalog`, starting at `selection`.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the initial ticker is not in the catalog.
    pub fn new(catalog: Catalog, selection: Selection) -> Result<Self, DashboardError> {
        let mut me = Self {
            catalog,
            selection: Selection::new("", selection.period, selection.interval),
        };
        me.set_ticker(&selection.ticker)?;
        Ok(me)
    }

    /// Current selection.
    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Selectable tickers.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Select a ticker. Empty input clears the selection.
    ///
    /// Input is normalised the same way the catalog is (`brk.b` selects `BRK-B`).
    ///
    /// # Errors
    /// Returns `InvalidArg` if the ticker is not in the catalog; the selection
    /// is left unchanged.
    pub fn set_ticker(&mut self, raw: &str) -> Result<(), DashboardError> {
        if raw.trim().is_empty() {
            self.selection.ticker.clear();
            return Ok(());
        }
        match Catalog::normalize(raw) {
            Some(sym) if self.catalog.contains(&sym) => {
                self.selection.ticker = sym;
                Ok(())
            }
            _ => Err(DashboardError::InvalidArg(format!(
                "unknown ticker: {raw:?}"
            ))),
        }
    }

    /// Clear the ticker selection.
    pub fn clear_ticker(&mut self) {
        self.selection.ticker.clear();
    }

    /// Select a period.
    pub fn set_period(&mut self, period: Period) {
        self.selection.period = period;
    }

    /// Select an interval.
    pub fn set_interval(&mut self, interval: Interval) {
        self.selection.interval = interval;
    }

    /// Select a period by its wire identifier (`"1mo"`, `"5y"`, ...).
    ///
    /// # Errors
    /// Returns `InvalidArg` for identifiers outside the enumerated set.
    pub fn set_period_str(&mut self, raw: &str) -> Result<(), DashboardError> {
        self.selection.period = raw.parse()?;
        Ok(())
    }

    /// Select an interval by its wire identifier (`"1d"`, `"1wk"`, `"1mo"`).
    ///
    /// # Errors
    /// Returns `InvalidArg` for identifiers outside the enumerated set.
    pub fn set_interval_str(&mut self, raw: &str) -> Result<(), DashboardError> {
        self.selection.interval = raw.parse()?;
        Ok(())
    }
}
