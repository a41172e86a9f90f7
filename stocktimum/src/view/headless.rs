use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, PoisonError};

use super::chart::{ChartBackend, ChartSpec};

/// Handle to a chart drawn by [`HeadlessChart`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChartId(u64);

#[derive(Debug, Default)]
struct Registry {
    next_id: u64,
    live: BTreeMap<u64, ChartSpec>,
    created: u64,
    disposed: u64,
}

/// In-memory backend that records chart instances instead of drawing them.
///
/// Clones share one registry, so a caller can keep a clone to observe charts
/// created and disposed by a dashboard that owns the original.
#[derive(Debug, Clone, Default)]
pub struct HeadlessChart {
    registry: Arc<Mutex<Registry>>,
}

impl HeadlessChart {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn with<R>(&self, f: impl FnOnce(&mut Registry) -> R) -> R {
        let mut guard = self.registry.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    /// Number of charts created and not yet disposed.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.with(|r| r.live.len())
    }

    /// Total charts ever created.
    #[must_use]
    pub fn created(&self) -> u64 {
        self.with(|r| r.created)
    }

    /// Total charts disposed.
    #[must_use]
    pub fn disposed(&self) -> u64 {
        self.with(|r| r.disposed)
    }

    /// Specs of all live charts, oldest first.
    #[must_use]
    pub fn live_specs(&self) -> Vec<ChartSpec> {
        self.with(|r| r.live.values().cloned().collect())
    }
}

impl ChartBackend for HeadlessChart {
    type Handle = ChartId;

    fn create(&mut self, spec: &ChartSpec) -> ChartId {
        self.with(|r| {
            r.next_id += 1;
            r.created += 1;
            r.live.insert(r.next_id, spec.clone());
            ChartId(r.next_id)
        })
    }

    fn dispose(&mut self, handle: ChartId) {
        self.with(|r| {
            if r.live.remove(&handle.0).is_some() {
                r.disposed += 1;
            }
        });
    }
}
