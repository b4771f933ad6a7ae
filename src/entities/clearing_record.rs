//! Clearing record entity - A durable record of a room checkout settlement.
//!
//! Written when a receptionist clears a room's outstanding balance. The
//! cleared transactions themselves are locked (`admin_status = closed`) in
//! the same database transaction, so the clearing is auditable and cannot
//! drift from the rows it settled.
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Clearing record database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "clearing_records")]
pub struct Model {
    /// Unique identifier for the clearing record
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Room whose balance was cleared
    pub room_id: String,
    /// Display name of the receptionist who performed the clearing
    pub cleared_by_name: String,
    /// Sum of the cleared transactions' amounts
    pub cleared_amount: f64,
    /// Number of transactions settled by this clearing
    pub transaction_count: i32,
    /// Optional free-text checkout notes
    pub notes: Option<String>,
    /// When the clearing happened
    pub cleared_at: DateTimeUtc,
}

/// `ClearingRecord` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
