//! Location category business logic.
//!
//! Categories form the fixed vocabulary of charge origins. They are seeded
//! from `config.toml` at startup and validated against on every charge
//! creation. Seeding is idempotent: existing categories have their
//! `is_active` flag refreshed, new ones are inserted, and nothing is
//! deleted.

use crate::{
    config::categories::CategoryConfig,
    entities::{LocationCategory, location_category},
    errors::Result,
};
use sea_orm::{QueryOrder, Set, prelude::*};
use tracing::info;

/// Seeds the configured category list into the database.
///
/// For each configured category: if a row with the same name exists its
/// `is_active` flag is updated, otherwise a new row is inserted.
pub async fn seed_categories(db: &DatabaseConnection, configs: &[CategoryConfig]) -> Result<()> {
    for config in configs {
        let existing = LocationCategory::find()
            .filter(location_category::Column::Name.eq(config.name.as_str()))
            .one(db)
            .await?;

        if let Some(category) = existing {
            if category.is_active != config.is_active {
                let mut active_model: location_category::ActiveModel = category.into();
                active_model.is_active = Set(config.is_active);
                active_model.update(db).await?;
            }
        } else {
            let new_category = location_category::ActiveModel {
                name: Set(config.name.clone()),
                is_active: Set(config.is_active),
                ..Default::default()
            };
            new_category.insert(db).await?;
            info!(name = %config.name, "seeded location category");
        }
    }

    Ok(())
}

/// Retrieves all active categories, ordered alphabetically by name.
pub async fn get_active_categories(
    db: &DatabaseConnection,
) -> Result<Vec<location_category::Model>> {
    LocationCategory::find()
        .filter(location_category::Column::IsActive.eq(true))
        .order_by_asc(location_category::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Returns true if `name` refers to an active category.
pub async fn category_is_active(db: &DatabaseConnection, name: &str) -> Result<bool> {
    let category = LocationCategory::find()
        .filter(location_category::Column::Name.eq(name))
        .filter(location_category::Column::IsActive.eq(true))
        .one(db)
        .await?;

    Ok(category.is_some())
}
