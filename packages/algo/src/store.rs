//! Per-learner ability state.
//!
//! Concurrency discipline: the map is guarded by an `RwLock` and each
//! learner's θ by its own `Mutex`. Read-modify-write for one learner is
//! serialized on that learner's mutex, so concurrent updates never lose
//! writes; learners are otherwise independent and there is no global
//! write lock held across an update. Reads never insert.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use crate::types::DEFAULT_THETA;

/// Owner of every learner's θ. Mutation goes through [`update_with`]
/// exclusively.
///
/// [`update_with`]: AbilityStore::update_with
#[derive(Debug, Default)]
pub struct AbilityStore {
    inner: RwLock<HashMap<String, Arc<Mutex<f64>>>>,
}

impl AbilityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current θ for a learner, `DEFAULT_THETA` if never updated.
    /// Read-only: does not create an entry.
    pub fn get(&self, learner: &str) -> f64 {
        self.inner
            .read()
            .get(learner)
            .map(|slot| *slot.lock())
            .unwrap_or(DEFAULT_THETA)
    }

    /// Whether the store holds state for this learner.
    pub fn contains(&self, learner: &str) -> bool {
        self.inner.read().contains_key(learner)
    }

    /// Number of learners with state.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Serialized read-modify-write on one learner's θ, creating the
    /// entry at `DEFAULT_THETA` on first reference. The closure receives
    /// the previous θ and returns the new θ plus a caller payload.
    pub fn update_with<R>(&self, learner: &str, f: impl FnOnce(f64) -> (f64, R)) -> R {
        let slot = self.slot(learner);
        let mut theta = slot.lock();
        let (next, out) = f(*theta);
        *theta = next;
        out
    }

    /// Get-or-insert-default for the per-learner slot. Fast path takes
    /// only the read lock.
    fn slot(&self, learner: &str) -> Arc<Mutex<f64>> {
        if let Some(slot) = self.inner.read().get(learner) {
            return Arc::clone(slot);
        }
        let mut map = self.inner.write();
        Arc::clone(
            map.entry(learner.to_string())
                .or_insert_with(|| Arc::new(Mutex::new(DEFAULT_THETA))),
        )
    }
}
