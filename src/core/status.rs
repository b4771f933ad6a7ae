//! Status transition business logic.
//!
//! Moves transactions between payment lifecycle states, singly or in bulk.
//! The staff surface may only target `paid` or `cancelled`; a transition is
//! permitted only while the transaction's `admin_status` is `open`. Every
//! applied transition appends exactly one audit log row inside the same
//! database transaction as the status update. No-op transitions (target
//! equals the current status) are short-circuited without a log row.
//!
//! Bulk updates are best-effort per item, not atomic across the batch:
//! closed, missing, and no-op items are skipped and counted, and a hard
//! store error aborts the remaining items while reporting the partial
//! progress made so far.

use crate::{
    entities::{AdminStatus, Transaction, TransactionStatus, transaction, transaction_log},
    errors::{Error, Result},
};
use sea_orm::{Set, TransactionTrait, prelude::*};
use tracing::{info, warn};

/// Summary of a bulk status update, distinguishing transitioned items from
/// skipped ones (closed, missing, or already at the target status).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulkOutcome {
    /// Number of transactions whose status was changed
    pub updated: usize,
    /// Number of transactions left untouched
    pub skipped: usize,
}

/// Outcome of a single transition attempt.
enum Applied {
    /// Status was changed and a log row written
    Changed(transaction::Model),
    /// Target equalled the current status; nothing written
    Unchanged(transaction::Model),
}

fn ensure_supported_target(target: TransactionStatus) -> Result<()> {
    match target {
        TransactionStatus::Paid | TransactionStatus::Cancelled => Ok(()),
        other => Err(Error::UnsupportedTarget {
            status: other.as_str().to_string(),
        }),
    }
}

/// Applies one transition: fetch, check the admin lock, update the status,
/// and append the audit row, all inside one database transaction.
async fn apply_transition(
    db: &DatabaseConnection,
    transaction_id: i64,
    target: TransactionStatus,
    actor_name: &str,
) -> Result<Applied> {
    let txn = db.begin().await?;

    let current = Transaction::find_by_id(transaction_id)
        .one(&txn)
        .await?
        .ok_or(Error::TransactionNotFound { id: transaction_id })?;

    if current.admin_status == AdminStatus::Closed {
        return Err(Error::TransactionClosed { id: transaction_id });
    }

    if current.status == target {
        // Nothing was written; dropping the open txn rolls it back
        return Ok(Applied::Unchanged(current));
    }

    let previous_status = current.status;

    let mut active_model: transaction::ActiveModel = current.into();
    active_model.status = Set(target);
    let updated = active_model.update(&txn).await?;

    let log = transaction_log::ActiveModel {
        transaction_id: Set(updated.id),
        changed_by_name: Set(actor_name.trim().to_string()),
        previous_status: Set(previous_status.as_str().to_string()),
        new_status: Set(target.as_str().to_string()),
        changed_at: Set(chrono::Utc::now()),
        ..Default::default()
    };
    log.insert(&txn).await?;

    txn.commit().await?;

    info!(
        transaction_id = updated.id,
        from = previous_status.as_str(),
        to = target.as_str(),
        actor = actor_name,
        "transaction status changed"
    );

    Ok(Applied::Changed(updated))
}

/// Moves a single transaction to `paid` or `cancelled`.
///
/// Rejects closed transactions with [`Error::TransactionClosed`] before any
/// mutation, so staff can distinguish the admin lock from a generic store
/// failure. A no-op transition returns the unchanged transaction and writes
/// no log row.
pub async fn set_status(
    db: &DatabaseConnection,
    transaction_id: i64,
    target: TransactionStatus,
    actor_name: &str,
) -> Result<transaction::Model> {
    if actor_name.trim().is_empty() {
        return Err(Error::MissingActorName);
    }
    ensure_supported_target(target)?;

    match apply_transition(db, transaction_id, target, actor_name).await? {
        Applied::Changed(model) | Applied::Unchanged(model) => Ok(model),
    }
}

/// Applies the same target status to a batch of transactions.
///
/// Each item is evaluated independently through the same transactional path
/// as [`set_status`]. Closed, missing, and no-op items are counted as
/// skipped. A hard store error aborts the remaining items and surfaces the
/// partial progress via [`Error::BulkAborted`].
pub async fn bulk_set_status(
    db: &DatabaseConnection,
    transaction_ids: &[i64],
    target: TransactionStatus,
    actor_name: &str,
) -> Result<BulkOutcome> {
    if actor_name.trim().is_empty() {
        return Err(Error::MissingActorName);
    }
    ensure_supported_target(target)?;

    let mut updated = 0;
    let mut skipped = 0;

    for &transaction_id in transaction_ids {
        match apply_transition(db, transaction_id, target, actor_name).await {
            Ok(Applied::Changed(_)) => updated += 1,
            Ok(Applied::Unchanged(_)) => skipped += 1,
            Err(Error::TransactionClosed { id }) => {
                warn!(transaction_id = id, "skipping closed transaction in bulk update");
                skipped += 1;
            }
            Err(Error::TransactionNotFound { id }) => {
                warn!(transaction_id = id, "skipping unknown transaction in bulk update");
                skipped += 1;
            }
            Err(Error::Database(source)) => {
                return Err(Error::BulkAborted {
                    updated,
                    skipped,
                    source,
                });
            }
            Err(other) => return Err(other),
        }
    }

    info!(updated, skipped, to = target.as_str(), "bulk status update finished");

    Ok(BulkOutcome { updated, skipped })
}
