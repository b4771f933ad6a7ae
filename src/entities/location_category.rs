//! Location category entity - The fixed vocabulary of charge origins.
//!
//! Categories (restaurant, bar, spa, ...) are seeded from `config.toml`
//! and referenced by name from transactions. Categories are soft-disabled
//! via `is_active` rather than deleted, so historical transactions keep a
//! resolvable location label.
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Location category database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "location_categories")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Category name used as the transaction `location` label
    #[sea_orm(unique)]
    pub name: String,
    /// Whether new charges may use this category
    pub is_active: bool,
}

/// `LocationCategory` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
