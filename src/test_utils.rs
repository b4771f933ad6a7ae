//! Shared test utilities for the room ledger.
//!
//! This module provides common helper functions for setting up test
//! databases and creating test entities with sensible defaults.

use crate::{
    config::categories::CategoryConfig,
    core::{category, transaction},
    entities::{self, AdminStatus},
    errors::Result,
};
use sea_orm::{DatabaseConnection, Set};

/// Category names seeded into every test database.
pub const TEST_CATEGORIES: [&str; 3] = ["restaurant", "bar", "spa"];

/// Creates an in-memory `SQLite` database with all tables initialized but
/// nothing seeded. Use this when a test needs full control over the
/// `location_categories` table.
pub async fn setup_bare_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Seeds the standard test categories into a database.
pub async fn seed_test_categories(db: &DatabaseConnection) -> Result<()> {
    let configs: Vec<CategoryConfig> = TEST_CATEGORIES
        .iter()
        .map(|name| CategoryConfig {
            name: (*name).to_string(),
            is_active: true,
        })
        .collect();
    category::seed_categories(db, &configs).await
}

/// Creates an in-memory `SQLite` database with all tables initialized and
/// the standard test categories seeded. This is the standard setup for all
/// integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = setup_bare_db().await?;
    seed_test_categories(&db).await?;
    Ok(db)
}

/// Seeds a single inactive category, for tests covering disabled
/// categories.
pub async fn seed_inactive_category(db: &DatabaseConnection, name: &str) -> Result<()> {
    category::seed_categories(
        db,
        &[CategoryConfig {
            name: name.to_string(),
            is_active: false,
        }],
    )
    .await
}

/// Creates a test charge with sensible defaults.
///
/// # Defaults
/// * `category`: `"restaurant"`
/// * `description`: `"Test charge"`
/// * `guest_name`: None
/// * `waiter_name`: `"test_waiter"`
pub async fn create_test_charge(
    db: &DatabaseConnection,
    room_id: &str,
    amount: f64,
) -> Result<entities::transaction::Model> {
    transaction::create_charge(
        db,
        room_id,
        "restaurant",
        amount,
        Some("Test charge".to_string()),
        None,
        "test_waiter",
    )
    .await
}

/// Creates a test charge with custom parameters.
pub async fn create_custom_charge(
    db: &DatabaseConnection,
    room_id: &str,
    category: &str,
    amount: f64,
    description: &str,
    guest_name: Option<String>,
    waiter_name: &str,
) -> Result<entities::transaction::Model> {
    transaction::create_charge(
        db,
        room_id,
        category,
        amount,
        Some(description.to_string()),
        guest_name,
        waiter_name,
    )
    .await
}

/// Closes a transaction's admin lock out-of-band, simulating the admin
/// surface. The staff-facing workflow has no operation for this.
pub async fn close_transaction(db: &DatabaseConnection, transaction_id: i64) -> Result<()> {
    use sea_orm::prelude::*;

    let row = entities::Transaction::find_by_id(transaction_id)
        .one(db)
        .await?
        .ok_or(crate::errors::Error::TransactionNotFound { id: transaction_id })?;

    let mut active_model: entities::transaction::ActiveModel = row.into();
    active_model.admin_status = Set(AdminStatus::Closed);
    active_model.update(db).await?;

    Ok(())
}
