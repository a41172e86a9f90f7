use stocktimum_core::Series;

use crate::fetch::RequestToken;

/// What the dashboard is currently showing.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    /// Built but nothing submitted yet.
    #[default]
    Idle,
    /// Waiting for the response to this submission.
    Loading(RequestToken),
    /// Showing a successfully fetched series.
    Displaying(Series),
    /// The latest fetch failed; carries the user-facing message.
    Error(String),
}

/// Inputs to the view state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A selection was submitted under this token.
    Submitted(RequestToken),
    /// The fetch for this token produced a series.
    Succeeded(RequestToken, Series),
    /// The fetch for this token failed with this message.
    Failed(RequestToken, String),
}

impl ViewState {
    /// Pure transition function.
    ///
    /// Any state moves to `Loading` on submission. Only the outstanding token can
    /// settle `Loading`; completions for any other token, or arriving outside
    /// `Loading`, leave the state as it was.
    #[must_use]
    pub fn handle(self, event: Event) -> Self {
        match (self, event) {
            (_, Event::Submitted(token)) => Self::Loading(token),
            (Self::Loading(waiting), Event::Succeeded(token, series)) if waiting == token => {
                Self::Displaying(series)
            }
            (Self::Loading(waiting), Event::Failed(token, message)) if waiting == token => {
                Self::Error(message)
            }
            (state, _) => state,
        }
    }

    /// The token this state is waiting on, if loading.
    #[must_use]
    pub const fn awaiting(&self) -> Option<RequestToken> {
        match self {
            Self::Loading(t) => Some(*t),
            _ => None,
        }
    }

    /// True while a fetch is outstanding.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading(_))
    }

    /// The displayed series, if any.
    #[must_use]
    pub const fn series(&self) -> Option<&Series> {
        match self {
            Self::Displaying(s) => Some(s),
            _ => None,
        }
    }

    /// The error message, if the last fetch failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(m) => Some(m),
            _ => None,
        }
    }

    /// Stable label for logs.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading(_) => "loading",
            Self::Displaying(_) => "displaying",
            Self::Error(_) => "error",
        }
    }
}
