//! Application state for the HR operations engine API.
//!
//! The state wraps the shared collaborators (record store, file storage,
//! policy) and hands out workflow coordinators over them.

use std::sync::Arc;

use crate::config::HrPolicy;
use crate::store::{FileStorage, HrStore, MemoryStore};
use crate::workflow::{AttendanceTracker, BalanceLedger, LeaveWorkflow, Onboarding};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn HrStore>,
    files: Arc<dyn FileStorage>,
    policy: Arc<HrPolicy>,
}

impl AppState {
    /// Creates application state over the given collaborators.
    pub fn new(store: Arc<dyn HrStore>, files: Arc<dyn FileStorage>, policy: HrPolicy) -> Self {
        Self {
            store,
            files,
            policy: Arc::new(policy),
        }
    }

    /// Creates application state backed by a fresh in-memory store.
    pub fn in_memory(policy: HrPolicy) -> Self {
        let shared = Arc::new(MemoryStore::new());
        Self::new(shared.clone(), shared, policy)
    }

    /// Returns the record store.
    pub fn store(&self) -> &Arc<dyn HrStore> {
        &self.store
    }

    /// Returns the file-storage collaborator.
    pub fn files(&self) -> &Arc<dyn FileStorage> {
        &self.files
    }

    /// Builds an onboarding coordinator over this state.
    pub fn onboarding(&self) -> Onboarding {
        Onboarding::new(self.store.clone(), (*self.policy).clone())
    }

    /// Builds an attendance tracker over this state.
    pub fn attendance(&self) -> AttendanceTracker {
        AttendanceTracker::new(self.store.clone(), (*self.policy).clone())
    }

    /// Builds a leave workflow over this state.
    pub fn leave(&self) -> LeaveWorkflow {
        LeaveWorkflow::new(self.store.clone(), (*self.policy).clone())
    }

    /// Builds a balance ledger over this state.
    pub fn ledger(&self) -> BalanceLedger {
        BalanceLedger::new(self.store.clone(), (*self.policy).clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Required for axum state.
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }
}
