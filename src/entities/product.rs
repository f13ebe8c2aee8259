//! Product entity - Represents the fixed catalog of sample products.
//!
//! Products are seeded once at bootstrap and are read-only afterward.
//! A product reaches its orders through the `order_items` join table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Product database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    /// Unique identifier for the product
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Name of the product (e.g., "Apple", "Hammer")
    pub name: String,
    /// Category label (e.g., "Fruit", "Tool")
    pub category: String,
}

/// Defines relationships between Product and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One product appears in many order items
    #[sea_orm(has_many = "super::order_item::Entity")]
    OrderItems,
}

impl Related<super::order_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderItems.def()
    }
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        super::order_item::Relation::Order.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::order_item::Relation::Product.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
