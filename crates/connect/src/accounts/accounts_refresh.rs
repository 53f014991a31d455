//! Periodic wholesale refresh of the account snapshot.

use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};
use tokio::task::JoinHandle;

use aluma_core::accounts::{AccountsSnapshot, SnapshotStore};
use aluma_core::Result;

use super::accounts_source::AccountSource;

/// How often the account lists are re-fetched.
pub const ACCOUNTS_REFRESH_INTERVAL_SECS: u64 = 30;

/// Fetches both account lists and swaps them into the shared store as
/// one new snapshot. Lists are replaced wholesale, never merged.
pub struct SnapshotRefresher {
    source: Arc<dyn AccountSource>,
    store: Arc<SnapshotStore>,
}

impl SnapshotRefresher {
    pub fn new(source: Arc<dyn AccountSource>, store: Arc<SnapshotStore>) -> Self {
        Self { source, store }
    }

    pub fn store(&self) -> Arc<SnapshotStore> {
        self.store.clone()
    }

    /// One refresh cycle. Either both lists land or neither does.
    pub async fn refresh(&self) -> Result<()> {
        let user_accounts = self.source.list_accounts().await?;
        let bank_accounts = self.source.list_bank_accounts().await?;
        debug!(
            "[Accounts] Snapshot refreshed: {} accounts, {} bank accounts",
            user_accounts.len(),
            bank_accounts.len()
        );
        self.store
            .replace(AccountsSnapshot::new(user_accounts, bank_accounts));
        Ok(())
    }

    /// Spawns the periodic refresh loop. The first cycle runs
    /// immediately; a failed cycle is logged and skipped, and the next
    /// tick simply tries again.
    pub fn spawn_periodic(self: Arc<Self>, interval_secs: u64) -> JoinHandle<()> {
        let refresher = self;
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(Duration::from_secs(interval_secs));
            loop {
                ticker.tick().await;
                if let Err(err) = refresher.refresh().await {
                    warn!("[Accounts] Refresh failed: {}", err);
                }
            }
        })
    }
}
