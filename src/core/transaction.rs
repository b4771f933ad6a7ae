//! Charge creation and transaction lookups.
//!
//! This module records new charges against rooms and exposes the read side
//! of the ledger: lookups by id, per-room listings, and the audit history
//! of a transaction. A charge and its creation log row are written inside
//! one database transaction so the ledger and its audit trail can never
//! diverge. Every new charge starts at `pending`/`open`.

use crate::{
    entities::{
        AdminStatus, TransactionStatus, transaction,
        transaction_log::{self, CREATED_STATUS},
    },
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};
use tracing::info;

/// Records a new charge against a room.
///
/// Validates all inputs before touching the store: the room id and acting
/// waiter's name must be non-empty, the amount must be a finite positive
/// number, and the category must name an active location category. The
/// transaction row and its `created -> pending` log row are inserted
/// atomically.
///
/// # Arguments
/// * `room_id` - Room the charge is attributed to
/// * `category` - Location category name (must be active)
/// * `amount` - Charge amount, must be positive
/// * `description` - Optional free-text description
/// * `guest_name` - Optional guest name captured at charge time
/// * `waiter_name` - Display name of the acting waiter
pub async fn create_charge(
    db: &DatabaseConnection,
    room_id: &str,
    category: &str,
    amount: f64,
    description: Option<String>,
    guest_name: Option<String>,
    waiter_name: &str,
) -> Result<transaction::Model> {
    if waiter_name.trim().is_empty() {
        return Err(Error::MissingActorName);
    }

    if room_id.trim().is_empty() {
        return Err(Error::EmptyRoomId);
    }

    if !amount.is_finite() || amount <= 0.0 {
        return Err(Error::InvalidAmount { amount });
    }

    if !crate::core::category::category_is_active(db, category).await? {
        return Err(Error::UnknownCategory {
            name: category.to_string(),
        });
    }

    let now = chrono::Utc::now();

    // Charge and creation log row are written atomically
    let txn = db.begin().await?;

    let charge = transaction::ActiveModel {
        room_id: Set(room_id.trim().to_string()),
        guest_name: Set(guest_name),
        amount: Set(amount),
        description: Set(description.unwrap_or_default()),
        location: Set(category.to_string()),
        created_at: Set(now),
        waiter_name: Set(waiter_name.trim().to_string()),
        status: Set(TransactionStatus::Pending),
        admin_status: Set(AdminStatus::Open),
        ..Default::default()
    };
    let charge = charge.insert(&txn).await?;

    let log = transaction_log::ActiveModel {
        transaction_id: Set(charge.id),
        changed_by_name: Set(charge.waiter_name.clone()),
        previous_status: Set(CREATED_STATUS.to_string()),
        new_status: Set(TransactionStatus::Pending.as_str().to_string()),
        changed_at: Set(now),
        ..Default::default()
    };
    log.insert(&txn).await?;

    txn.commit().await?;

    info!(
        transaction_id = charge.id,
        room_id = %charge.room_id,
        amount = charge.amount,
        "recorded new charge"
    );

    Ok(charge)
}

/// Retrieves a specific transaction by its unique ID, returning None if it
/// does not exist.
pub async fn get_transaction_by_id(
    db: &DatabaseConnection,
    transaction_id: i64,
) -> Result<Option<transaction::Model>> {
    crate::entities::Transaction::find_by_id(transaction_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves all transactions attributed to a room, newest first.
pub async fn get_transactions_for_room(
    db: &DatabaseConnection,
    room_id: &str,
) -> Result<Vec<transaction::Model>> {
    crate::entities::Transaction::find()
        .filter(transaction::Column::RoomId.eq(room_id))
        .order_by_desc(transaction::Column::CreatedAt)
        .order_by_desc(transaction::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves the audit history of a transaction, most recent change first.
///
/// The oldest row is always the `created -> pending` creation entry; ties
/// on `changed_at` are broken by insertion order.
pub async fn get_history(
    db: &DatabaseConnection,
    transaction_id: i64,
) -> Result<Vec<transaction_log::Model>> {
    crate::entities::TransactionLog::find()
        .filter(transaction_log::Column::TransactionId.eq(transaction_id))
        .order_by_desc(transaction_log::Column::ChangedAt)
        .order_by_desc(transaction_log::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}
