use core::fmt;
use serde::{Deserialize, Serialize};

/// Remote endpoints the dashboard talks to.
///
/// Used for URL construction and as the label carried by errors and spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Endpoint {
    /// OHLCV series for a ticker.
    Data,
    /// Informational banner.
    Hello,
}

impl Endpoint {
    /// Stable identifier for logs/errors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Data => "data",
            Self::Hello => "hello",
        }
    }

    /// Path relative to the provider's base URL.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Data => "api/data",
            Self::Hello => "api/hello",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
