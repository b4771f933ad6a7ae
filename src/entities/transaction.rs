//! Transaction entity - A single charge recorded against a room.
//!
//! Each transaction carries the room it was charged to, the amount, the
//! location category it originated from (restaurant, bar, spa, ...), the
//! waiter who recorded it, a payment-lifecycle `status`, and an independent
//! `admin_status` lock. Once `admin_status` is `closed` the transaction is
//! frozen against further status changes from the staff surface.
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Payment lifecycle state of a transaction.
#[derive(EnumIter, DeriveActiveEnum, Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum TransactionStatus {
    /// Newly created charge awaiting settlement
    #[sea_orm(string_value = "pending")]
    Pending,
    /// Settled by the guest
    #[sea_orm(string_value = "paid")]
    Paid,
    /// Voided by staff
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
    /// Approved on the admin surface
    #[sea_orm(string_value = "approved")]
    Approved,
}

impl TransactionStatus {
    /// The string recorded in audit log rows for this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Cancelled => "cancelled",
            Self::Approved => "approved",
        }
    }
}

/// Admin lock state, independent of the payment lifecycle.
#[derive(EnumIter, DeriveActiveEnum, Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(8))")]
pub enum AdminStatus {
    /// Status may still be changed by receptionists and waiters
    #[sea_orm(string_value = "open")]
    Open,
    /// Frozen; no further status changes from the staff surface
    #[sea_orm(string_value = "closed")]
    Closed,
}

/// Transaction database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    /// Unique identifier for the transaction
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Room the charge is attributed to
    pub room_id: String,
    /// Optional guest name captured at charge time
    pub guest_name: Option<String>,
    /// Charge amount (positive, USD-like)
    pub amount: f64,
    /// Human-readable description of the charge
    pub description: String,
    /// Location category the charge originated from (e.g. `"restaurant"`)
    pub location: String,
    /// When the charge was recorded
    pub created_at: DateTimeUtc,
    /// Display name of the waiter who recorded the charge
    pub waiter_name: String,
    /// Payment lifecycle state
    pub status: TransactionStatus,
    /// Admin lock state
    pub admin_status: AdminStatus,
}

/// Defines relationships between Transaction and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each transaction has a history of status-change log rows
    #[sea_orm(has_many = "super::transaction_log::Entity")]
    TransactionLog,
}

impl Related<super::transaction_log::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TransactionLog.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
