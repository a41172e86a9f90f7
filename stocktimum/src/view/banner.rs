use stocktimum_core::{DashboardError, Hello};

/// Informational line above the dashboard, fed by the hello endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    /// Banner disabled by configuration.
    Hidden,
    /// Hello request not answered yet.
    Loading,
    /// Message from the provider.
    Message(String),
    /// Hello request failed.
    Error(String),
}

impl Banner {
    pub(crate) fn from_result(res: Result<Hello, DashboardError>) -> Self {
        match res {
            Ok(hello) => Self::Message(hello.message),
            Err(e) => Self::Error(e.to_string()),
        }
    }

    /// Text to show, or `None` when hidden.
    #[must_use]
    pub fn text(&self) -> Option<String> {
        match self {
            Self::Hidden => None,
            Self::Loading => Some("Loading...".to_string()),
            Self::Message(m) => Some(m.clone()),
            Self::Error(e) => Some(format!("Error: {e}")),
        }
    }
}
