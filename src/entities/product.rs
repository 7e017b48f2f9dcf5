//! Product entity - An item that can be put on an order.
//!
//! Products are never edited. An order copies the name, price and category of
//! each product at creation time, so deleting a product leaves orders intact.

use sea_orm::entity::prelude::*;

/// Product database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    /// Unique identifier for the product
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Name of the product (e.g., "Laptop", "Pen")
    pub name: String,
    /// Unit price, always positive
    pub price: f64,
    /// Free-form category, `"General"` unless given
    pub category: String,
}

/// Clients, products and orders are linked by value only
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
