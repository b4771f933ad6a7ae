//! Structured filtering and free-text search over the transaction list.
//!
//! Structured filters compose with logical AND and run against the store;
//! free-text search is the receptionist view's per-keystroke narrowing and
//! runs over the already-fetched list in memory, matching the query
//! case-insensitively against room id, guest name, waiter name,
//! description, and location.

use crate::{
    entities::{AdminStatus, Transaction, TransactionStatus, transaction},
    errors::Result,
};
use sea_orm::{QueryOrder, prelude::*};

/// Structured filter over the transaction list. Unset fields match
/// everything; set fields compose with AND.
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Payment lifecycle state to match
    pub status: Option<TransactionStatus>,
    /// Admin lock state to match
    pub admin_status: Option<AdminStatus>,
    /// Exact waiter display name to match
    pub waiter_name: Option<String>,
    /// Exact room id to match
    pub room_id: Option<String>,
    /// Substring of the guest name to match
    pub guest_name_contains: Option<String>,
}

/// Retrieves all transactions matching the filter, newest first.
pub async fn find_transactions(
    db: &DatabaseConnection,
    filter: &TransactionFilter,
) -> Result<Vec<transaction::Model>> {
    let mut query = Transaction::find();

    if let Some(status) = filter.status {
        query = query.filter(transaction::Column::Status.eq(status));
    }
    if let Some(admin_status) = filter.admin_status {
        query = query.filter(transaction::Column::AdminStatus.eq(admin_status));
    }
    if let Some(waiter_name) = &filter.waiter_name {
        query = query.filter(transaction::Column::WaiterName.eq(waiter_name.as_str()));
    }
    if let Some(room_id) = &filter.room_id {
        query = query.filter(transaction::Column::RoomId.eq(room_id.as_str()));
    }
    if let Some(guest_name) = &filter.guest_name_contains {
        query = query.filter(transaction::Column::GuestName.contains(guest_name.as_str()));
    }

    query
        .order_by_desc(transaction::Column::CreatedAt)
        .order_by_desc(transaction::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Returns true if the query is a case-insensitive substring of at least
/// one of the transaction's text fields: room id, guest name, waiter name,
/// description, or location. The empty query matches everything.
#[must_use]
pub fn matches_search(transaction: &transaction::Model, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    let needle = query.to_lowercase();
    [
        transaction.room_id.as_str(),
        transaction.guest_name.as_deref().unwrap_or(""),
        transaction.waiter_name.as_str(),
        transaction.description.as_str(),
        transaction.location.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(&needle))
}

/// Narrows an in-memory transaction list by free-text query, preserving
/// the input order.
#[must_use]
pub fn search_transactions<'a>(
    transactions: &'a [transaction::Model],
    query: &str,
) -> Vec<&'a transaction::Model> {
    transactions
        .iter()
        .filter(|t| matches_search(t, query))
        .collect()
}
