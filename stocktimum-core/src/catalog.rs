use std::collections::BTreeSet;

/// Symbols offered by the ticker selector when no custom catalog is supplied.
///
/// Large-cap equities plus the common benchmark, sector, factor, international
/// and bond ETFs. Provider-style spelling (`BRK-B`, not `BRK.B`).
pub const DEFAULT_TICKERS: &[&str] = &[
    // equities
    "AAPL", "ABBV", "ADBE", "AMD", "AMGN", "AMZN", "AVGO", "AXP", "BA", "BAC", "BRK-B", "CAT",
    "COST", "CRM", "CSCO", "CVX", "DIS", "GOOG", "GOOGL", "GS", "HD", "HON", "IBM", "INTC",
    "JNJ", "JPM", "KO", "LLY", "MA", "MCD", "MMM", "META", "MRK", "MSFT", "NFLX", "NKE", "NVDA",
    "ORCL", "PEP", "PFE", "PG", "SHW", "T", "TRV", "TSLA", "UNH", "V", "VZ", "WMT", "XOM",
    // broad benchmarks
    "SPY", "VOO", "IVV", "VTI", "ITOT", "IWB", "IWM", "QQQ", "DIA",
    // sector SPDRs
    "XLC", "XLB", "XLE", "XLF", "XLI", "XLK", "XLP", "XLRE", "XLU", "XLV", "XLY",
    // style/factor
    "IWF", "IWD", "MTUM", "USMV", "QUAL", "VBR",
    // international
    "VXUS", "VEA", "VWO",
    // bonds/rates
    "BND", "AGG", "TLT", "IEF", "SHY",
];

const PLACEHOLDERS: &[&str] = &["NAN", "SYMBOL", "TICKER"];

/// Finite, sorted, de-duplicated set of selectable ticker symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    symbols: Vec<String>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// Catalog built from [`DEFAULT_TICKERS`].
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(DEFAULT_TICKERS.iter().copied())
    }

    /// Build a catalog from raw symbols.
    ///
    /// Each symbol goes through [`normalize`](Self::normalize); rejects are
    /// dropped silently, duplicates collapse, and the result is sorted.
    pub fn new<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let set: BTreeSet<String> = symbols
            .into_iter()
            .filter_map(|s| Self::normalize(s.as_ref()))
            .collect();
        Self {
            symbols: set.into_iter().collect(),
        }
    }

    /// Canonical spelling of a raw symbol, or `None` if it is not a usable ticker.
    ///
    /// Trims, uppercases, and rewrites `.` share-class separators to `-`.
    /// Empty strings, spreadsheet placeholders, and markup fragments are rejected.
    #[must_use]
    pub fn normalize(raw: &str) -> Option<String> {
        let s = raw.trim().to_uppercase().replace('.', "-");
        if s.is_empty() || PLACEHOLDERS.contains(&s.as_str()) || s.contains(['<', '>']) {
            return None;
        }
        Some(s)
    }

    /// Whether `symbol` (exact, already normalised) is selectable.
    #[must_use]
    pub fn contains(&self, symbol: &str) -> bool {
        self.symbols
            .binary_search_by(|s| s.as_str().cmp(symbol))
            .is_ok()
    }

    /// All symbols, sorted.
    #[must_use]
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    /// Iterate symbols in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.symbols.iter().map(String::as_str)
    }

    /// Number of symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// True when the catalog has no symbols.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
