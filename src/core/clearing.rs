//! Room balance clearing business logic.
//!
//! Settles a room's outstanding balance at checkout. Clearing is a durable,
//! auditable event: the room's open transactions are summed, locked against
//! further status changes (`admin_status = closed`), and a
//! [`clearing_record`](crate::entities::clearing_record) row is written, all
//! inside one database transaction.

use crate::{
    entities::{AdminStatus, Transaction, clearing_record, transaction},
    errors::{Error, Result},
};
use sea_orm::{Set, TransactionTrait, prelude::*};
use tracing::info;

/// Summary of a completed room clearing.
#[derive(Debug, Clone, PartialEq)]
pub struct ClearingOutcome {
    /// Sum of the cleared transactions' amounts
    pub cleared_amount: f64,
    /// Number of transactions settled
    pub transaction_count: usize,
}

/// Clears a room's outstanding balance.
///
/// All of the room's `open` transactions are closed and one clearing record
/// is persisted. Fails with [`Error::NothingToClear`] when the room has no
/// open transactions, before anything is written.
pub async fn clear_room_balance(
    db: &DatabaseConnection,
    room_id: &str,
    notes: Option<String>,
    actor_name: &str,
) -> Result<ClearingOutcome> {
    if actor_name.trim().is_empty() {
        return Err(Error::MissingActorName);
    }

    if room_id.trim().is_empty() {
        return Err(Error::EmptyRoomId);
    }

    use sea_orm::sea_query::Expr;

    let txn = db.begin().await?;

    let open_transactions = Transaction::find()
        .filter(transaction::Column::RoomId.eq(room_id))
        .filter(transaction::Column::AdminStatus.eq(AdminStatus::Open))
        .all(&txn)
        .await?;

    if open_transactions.is_empty() {
        return Err(Error::NothingToClear {
            room_id: room_id.to_string(),
        });
    }

    let cleared_amount: f64 = open_transactions.iter().map(|t| t.amount).sum();
    let transaction_count = open_transactions.len();

    Transaction::update_many()
        .col_expr(
            transaction::Column::AdminStatus,
            Expr::value(AdminStatus::Closed),
        )
        .filter(transaction::Column::RoomId.eq(room_id))
        .filter(transaction::Column::AdminStatus.eq(AdminStatus::Open))
        .exec(&txn)
        .await?;

    let record = clearing_record::ActiveModel {
        room_id: Set(room_id.to_string()),
        cleared_by_name: Set(actor_name.trim().to_string()),
        cleared_amount: Set(cleared_amount),
        transaction_count: Set(i32::try_from(transaction_count).unwrap_or(i32::MAX)),
        notes: Set(notes),
        cleared_at: Set(chrono::Utc::now()),
        ..Default::default()
    };
    record.insert(&txn).await?;

    txn.commit().await?;

    info!(
        room_id,
        cleared_amount,
        transaction_count,
        actor = actor_name,
        "room balance cleared"
    );

    Ok(ClearingOutcome {
        cleared_amount,
        transaction_count,
    })
}
