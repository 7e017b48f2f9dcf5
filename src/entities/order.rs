//! Order entity - A purchase by one client of one or more products.
//!
//! `products` holds a JSON array of product snapshots and `date` holds an ISO
//! date. Both are plain text so rows written by older tools still load; see
//! [`crate::core::record`] for how they are read back. `total` is the snapshot
//! sum computed when the order was created.

use sea_orm::entity::prelude::*;

/// Order database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    /// Row identifier; insertion order defines an order's position
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Name of the client who placed the order
    pub client_id: String,
    /// Encoded product list
    #[sea_orm(column_type = "Text")]
    pub products: String,
    /// Order date as text, normally `YYYY-MM-DD`
    pub date: String,
    /// Sum of product prices at creation time
    pub total: f64,
}

/// Clients, products and orders are linked by value only
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
