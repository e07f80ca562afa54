//! Storage blob entity - Stores key-value pairs holding the registry state.
//! The machine list lives under the `machines` key and the sign-off record
//! under the `approval` key, each as a JSON blob written whole.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Storage blob database model - one row per storage key
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "storage")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Storage key (`"machines"` or `"approval"`)
    #[sea_orm(unique)]
    pub key: String,
    /// JSON blob stored as text, always overwritten whole
    pub value: String,
    /// When this blob was last overwritten
    pub updated_at: DateTime,
}

/// Storage blobs have no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
