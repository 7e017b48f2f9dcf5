//! Client entity - A customer of the shop.
//!
//! The name is the client's identity for every other part of the system; the
//! surrogate `id` exists only for the table itself.

use sea_orm::entity::prelude::*;

/// Client database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "clients")]
pub struct Model {
    /// Row identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name, also used by orders to reference the client
    pub name: String,
    /// Contact e-mail address
    pub email: String,
    /// Contact phone number
    pub phone: String,
    /// Delivery address
    pub address: String,
}

/// Clients, products and orders are linked by value only
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
