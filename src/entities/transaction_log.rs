//! Transaction log entity - Append-only audit trail of status changes.
//!
//! One row is written per status change, capturing who changed it, the
//! status before and after, and when. The creation row records
//! `previous_status = "created"`. Rows are never updated or deleted.
//! Statuses are stored as plain strings so the synthetic `"created"`
//! origin state fits alongside the regular status vocabulary.
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// The `previous_status` recorded on a transaction's creation log row.
pub const CREATED_STATUS: &str = "created";

/// Transaction log database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "transaction_logs")]
pub struct Model {
    /// Unique identifier for the log row
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Transaction this log row belongs to
    pub transaction_id: i64,
    /// Display name of the staff member who made the change
    pub changed_by_name: String,
    /// Status before the change (`"created"` for the creation row)
    pub previous_status: String,
    /// Status after the change
    pub new_status: String,
    /// When the change happened
    pub changed_at: DateTimeUtc,
}

/// Defines relationships between TransactionLog and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each log row belongs to one transaction
    #[sea_orm(
        belongs_to = "super::transaction::Entity",
        from = "Column::TransactionId",
        to = "super::transaction::Column::Id"
    )]
    Transaction,
}

impl Related<super::transaction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Transaction.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
