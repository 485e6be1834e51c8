//! Cache Sweep Task
//!
//! Background task that periodically drops expired cache entries.
//!
//! Freshness is already guaranteed by the lazy expiry check on every cache
//! access; the sweep only bounds the memory held by entries nothing will
//! read again.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::favorites::FavoritesManager;
use crate::records::RecordStore;

/// Spawns a background task that periodically prunes expired cache entries.
///
/// The task runs in an infinite loop, sleeping for the specified interval
/// between sweeps. It acquires the manager write lock only for the duration
/// of each prune.
///
/// # Arguments
/// * `manager` - Shared reference to the favorites manager
/// * `sweep_interval_secs` - Interval in seconds between sweeps
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
pub fn spawn_sweep_task<S>(
    manager: Arc<RwLock<FavoritesManager<S>>>,
    sweep_interval_secs: u64,
) -> JoinHandle<()>
where
    S: RecordStore + Send + Sync + 'static,
{
    let interval = Duration::from_secs(sweep_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting cache sweep task with interval of {} seconds",
            sweep_interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = {
                let mut manager_guard = manager.write().await;
                manager_guard.prune_expired()
            };

            if removed > 0 {
                info!("Cache sweep: removed {} expired entries", removed);
            } else {
                debug!("Cache sweep: no expired entries found");
            }
        }
    })
}
