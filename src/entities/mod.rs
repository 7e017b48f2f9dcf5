//! Entity module - Contains all SeaORM entity definitions for the database.
//! Clients, products and orders are stored in independent tables; the order's
//! reference to its client is a plain name, not a foreign key.

pub mod client;
pub mod order;
pub mod product;

// Re-export specific types to avoid conflicts
pub use client::{Column as ClientColumn, Entity as Client, Model as ClientModel};
pub use order::{Column as OrderColumn, Entity as Order, Model as OrderModel};
pub use product::{Column as ProductColumn, Entity as Product, Model as ProductModel};
