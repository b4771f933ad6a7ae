//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod clearing_record;
pub mod location_category;
pub mod transaction;
pub mod transaction_log;

// Re-export specific types to avoid conflicts
pub use clearing_record::{
    Column as ClearingRecordColumn, Entity as ClearingRecord, Model as ClearingRecordModel,
};
pub use location_category::{
    Column as LocationCategoryColumn, Entity as LocationCategory, Model as LocationCategoryModel,
};
pub use transaction::{
    AdminStatus, Column as TransactionColumn, Entity as Transaction, Model as TransactionModel,
    TransactionStatus,
};
pub use transaction_log::{
    Column as TransactionLogColumn, Entity as TransactionLog, Model as TransactionLogModel,
};
