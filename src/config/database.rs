//! Database configuration module for the room ledger.
//!
//! This module handles `SQLite` database connection and table creation using
//! `SeaORM`. It uses `Schema::create_table_from_entity` to generate SQL from
//! the entity definitions, so the database schema always matches the Rust
//! struct definitions without manual SQL.

use crate::entities::{ClearingRecord, LocationCategory, Transaction, TransactionLog};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Gets the database URL from the `DATABASE_URL` environment variable,
/// falling back to a local `SQLite` file.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://data/room_ledger.sqlite".to_string())
}

/// Establishes a connection to the database using [`get_database_url`].
pub async fn create_connection() -> Result<DatabaseConnection> {
    Database::connect(get_database_url())
        .await
        .map_err(Into::into)
}

/// Creates all necessary database tables from the entity definitions.
///
/// Creates tables for transactions, transaction logs, clearing records,
/// and location categories.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let transaction_table = schema.create_table_from_entity(Transaction);
    let transaction_log_table = schema.create_table_from_entity(TransactionLog);
    let clearing_record_table = schema.create_table_from_entity(ClearingRecord);
    let location_category_table = schema.create_table_from_entity(LocationCategory);

    db.execute(builder.build(&transaction_table)).await?;
    db.execute(builder.build(&transaction_log_table)).await?;
    db.execute(builder.build(&clearing_record_table)).await?;
    db.execute(builder.build(&location_category_table)).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{
        ClearingRecordModel, LocationCategoryModel, TransactionLogModel, TransactionModel,
    };
    use sea_orm::{EntityTrait, QuerySelect};

    #[tokio::test]
    async fn test_create_tables() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;

        // Test that tables exist by querying them
        let _: Vec<TransactionModel> = Transaction::find().limit(1).all(&db).await?;
        let _: Vec<TransactionLogModel> = TransactionLog::find().limit(1).all(&db).await?;
        let _: Vec<ClearingRecordModel> = ClearingRecord::find().limit(1).all(&db).await?;
        let _: Vec<LocationCategoryModel> = LocationCategory::find().limit(1).all(&db).await?;

        Ok(())
    }

    #[test]
    fn test_get_database_url_fallback() {
        // Without DATABASE_URL set the local file path is used
        if std::env::var("DATABASE_URL").is_err() {
            assert_eq!(get_database_url(), "sqlite://data/room_ledger.sqlite");
        }
    }
}
