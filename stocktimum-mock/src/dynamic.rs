use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use stocktimum_core::{DashboardError, Endpoint, Hello, Query, Series, SeriesSource};

/// Instruction for how `fetch_series` should behave for a given ticker.
#[derive(Clone, Debug)]
pub enum MockBehavior {
    /// Return the provided series immediately.
    Return(Series),
    /// Validate the provided raw payload as if it came off the wire.
    Json(serde_json::Value),
    /// Fail immediately with the provided error.
    Fail(DashboardError),
    /// Hang indefinitely (simulate a stalled connection).
    Hang,
    /// Wait, then behave as the inner instruction.
    Delayed(Duration, Box<MockBehavior>),
}

impl MockBehavior {
    /// Shorthand for `Delayed(delay, Box::new(self))`.
    #[must_use]
    pub fn after(self, delay: Duration) -> Self {
        Self::Delayed(delay, Box::new(self))
    }
}

#[derive(Default)]
struct InternalState {
    series_rules: HashMap<String, MockBehavior>,
    hello: Option<Result<Hello, DashboardError>>,
    requests: Vec<Query>,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for `fetch_series` calls for a specific ticker.
    pub async fn set_series_behavior(&self, ticker: impl Into<String>, behavior: MockBehavior) {
        let mut guard = self.state.lock().await;
        guard.series_rules.insert(ticker.into(), behavior);
    }

    /// Set the outcome of `hello` calls.
    pub async fn set_hello(&self, outcome: Result<Hello, DashboardError>) {
        let mut guard = self.state.lock().await;
        guard.hello = Some(outcome);
    }

    /// Return a copy of every query received, in arrival order.
    pub async fn requests(&self) -> Vec<Query> {
        self.state.lock().await.requests.clone()
    }

    /// Number of `fetch_series` calls received.
    pub async fn request_count(&self) -> usize {
        self.state.lock().await.requests.len()
    }

    /// Clear all configured behaviors and the request log.
    pub async fn clear_all_behaviors(&self) {
        let mut guard = self.state.lock().await;
        guard.series_rules.clear();
        guard.hello = None;
        guard.requests.clear();
    }
}

/// A source that defers all behavior to an external controller.
pub struct DynamicMockSource {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockSource {
    /// Create a new dynamic mock source and its controller.
    #[must_use]
    pub fn new_with_controller(name: &'static str) -> (Arc<dyn SeriesSource>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self { name, state });
        (me as Arc<dyn SeriesSource>, controller)
    }
}

#[async_trait]
impl SeriesSource for DynamicMockSource {
    fn name(&self) -> &'static str {
        self.name
    }

    fn vendor(&self) -> &'static str {
        "DynamicMock"
    }

    async fn fetch_series(&self, query: &Query) -> Result<Series, DashboardError> {
        // Log and snapshot without holding the lock across await points
        let behavior = {
            let mut guard = self.state.lock().await;
            guard.requests.push(query.clone());
            guard.series_rules.get(query.ticker()).cloned()
        };

        let Some(mut behavior) = behavior else {
            return Err(DashboardError::status(
                Endpoint::Data.as_str(),
                404,
                format!("no behavior configured for {}", query.ticker()),
            ));
        };

        loop {
            match behavior {
                MockBehavior::Delayed(delay, inner) => {
                    tokio::time::sleep(delay).await;
                    behavior = *inner;
                }
                MockBehavior::Return(series) => return Ok(series),
                MockBehavior::Json(raw) => return Ok(Series::from_json_value(&raw)?),
                MockBehavior::Fail(e) => return Err(e),
                MockBehavior::Hang => {
                    return std::future::pending::<Result<Series, DashboardError>>().await;
                }
            }
        }
    }

    async fn hello(&self) -> Result<Hello, DashboardError> {
        let outcome = self.state.lock().await.hello.clone();
        outcome.unwrap_or_else(|| Err(DashboardError::unsupported(Endpoint::Hello.as_str())))
    }
}
