//! Unified error types and result handling for the ledger.
//!
//! Validation errors are raised before any store call; `TransactionClosed`
//! is the deterministic "action denied" rejection for admin-locked rows,
//! kept distinct from store-level failures so staff-facing messages can
//! tell the two apart.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid charge amount: {amount}")]
    InvalidAmount { amount: f64 },

    #[error("Room id cannot be empty")]
    EmptyRoomId,

    #[error("Actor name is required for this operation")]
    MissingActorName,

    #[error("Unknown or inactive location category: {name}")]
    UnknownCategory { name: String },

    #[error("Transaction not found: {id}")]
    TransactionNotFound { id: i64 },

    #[error("Action denied: transaction {id} is closed")]
    TransactionClosed { id: i64 },

    #[error("Unsupported target status: {status}")]
    UnsupportedTarget { status: String },

    #[error("Room {room_id} has no open transactions to clear")]
    NothingToClear { room_id: String },

    #[error("Bulk update aborted after {updated} updated and {skipped} skipped: {source}")]
    BulkAborted {
        updated: usize,
        skipped: usize,
        source: sea_orm::DbErr,
    },

    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
