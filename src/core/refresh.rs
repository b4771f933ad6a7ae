//! Periodic transaction list refresh.
//!
//! The receptionist view tolerates staleness up to a fixed bound: the full
//! transaction list is re-fetched on an interval (30 seconds by default,
//! configurable) and published as snapshots on a watch channel. A store
//! failure during a tick is logged and the loop keeps polling; the loop
//! ends when every receiver has been dropped.

use crate::{
    core::filter::{TransactionFilter, find_transactions},
    entities::transaction,
    errors::Result,
};
use sea_orm::DatabaseConnection;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, error};

/// Default staleness bound between automatic re-fetches.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(30);

/// Fetches a fresh snapshot of the filtered transaction list.
pub async fn refresh_once(
    db: &DatabaseConnection,
    filter: &TransactionFilter,
) -> Result<Vec<transaction::Model>> {
    find_transactions(db, filter).await
}

/// Spawns the periodic refresh loop.
///
/// Returns a watch receiver carrying list snapshots (initially empty; the
/// first real snapshot is published immediately) and the task handle. The
/// loop exits once all receivers are dropped.
#[must_use]
pub fn spawn_refresh_loop(
    db: DatabaseConnection,
    filter: TransactionFilter,
    interval: Duration,
) -> (
    watch::Receiver<Vec<transaction::Model>>,
    tokio::task::JoinHandle<()>,
) {
    let (sender, receiver) = watch::channel(Vec::new());

    let handle = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        loop {
            ticker.tick().await;

            match refresh_once(&db, &filter).await {
                Ok(snapshot) => {
                    debug!(transactions = snapshot.len(), "refreshed transaction list");
                    if sender.send(snapshot).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    // Stale data is tolerated until the next tick
                    error!("transaction list refresh failed: {e}");
                    if sender.is_closed() {
                        break;
                    }
                }
            }
        }
    });

    (receiver, handle)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;
    use tokio::time::timeout;

    const TEST_TIMEOUT: Duration = Duration::from_secs(5);

    #[tokio::test]
    async fn test_refresh_once_returns_current_rows() -> Result<()> {
        let db = setup_test_db().await?;

        let filter = TransactionFilter::default();
        assert!(refresh_once(&db, &filter).await?.is_empty());

        let charge = create_test_charge(&db, "204", 45.0).await?;
        let snapshot = refresh_once(&db, &filter).await?;
        assert_eq!(snapshot, vec![charge]);

        Ok(())
    }

    #[tokio::test]
    async fn test_refresh_loop_publishes_snapshots() -> Result<()> {
        // The loop owns its connection, so open two handles onto one
        // shared in-memory database: the loop reads through one while the
        // test keeps writing through the other.
        let uri = "sqlite:file:refresh_loop_test?mode=memory&cache=shared";
        let db = sea_orm::Database::connect(uri).await?;
        crate::config::database::create_tables(&db).await?;
        seed_test_categories(&db).await?;
        let charge = create_test_charge(&db, "204", 45.0).await?;

        let reader = sea_orm::Database::connect(uri).await?;
        let (mut receiver, handle) = spawn_refresh_loop(
            reader,
            TransactionFilter::default(),
            Duration::from_millis(10),
        );

        // The first snapshot is published without waiting a full interval
        timeout(TEST_TIMEOUT, receiver.changed()).await.unwrap().unwrap();
        assert_eq!(*receiver.borrow_and_update(), vec![charge]);

        // A mutation shows up within the staleness bound
        let second = create_test_charge(&db, "301", 12.0).await?;
        timeout(TEST_TIMEOUT, async {
            loop {
                receiver.changed().await.unwrap();
                if receiver.borrow_and_update().len() == 2 {
                    break;
                }
            }
        })
        .await
        .unwrap();

        let snapshot = receiver.borrow().clone();
        assert_eq!(snapshot[0], second);

        // Dropping the receiver ends the loop
        drop(receiver);
        timeout(TEST_TIMEOUT, handle).await.unwrap().unwrap();

        Ok(())
    }
}
