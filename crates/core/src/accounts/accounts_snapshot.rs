//! Shared store for the latest account snapshot.

use std::sync::{Arc, RwLock};

use super::accounts_model::AccountsSnapshot;

/// Holds the most recent [`AccountsSnapshot`].
///
/// Readers take an `Arc` of the current snapshot and keep reading it even
/// while a refresh lands; `replace` swaps the whole snapshot in a single
/// step, so a reader never observes a half-updated list.
#[derive(Debug, Default)]
pub struct SnapshotStore {
    current: RwLock<Arc<AccountsSnapshot>>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The latest snapshot. Cheap; clones only the `Arc`.
    pub fn load(&self) -> Arc<AccountsSnapshot> {
        self.current.read().unwrap().clone()
    }

    /// Replaces the snapshot wholesale.
    pub fn replace(&self, snapshot: AccountsSnapshot) {
        *self.current.write().unwrap() = Arc::new(snapshot);
    }
}
