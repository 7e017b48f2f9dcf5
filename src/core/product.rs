//! Product business logic - Handles all product-related store operations.
//!
//! Products are created from validated form input and deleted by identifier;
//! they are never updated. Orders keep their own snapshot of each product, so
//! removing a product here does not touch any order.

use crate::{
    entities::{Product, product},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Category given to products created without one
pub const DEFAULT_CATEGORY: &str = "General";

/// A product that has passed validation but is not stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    /// Product name
    pub name: String,
    /// Unit price, positive and finite
    pub price: f64,
    /// Category
    pub category: String,
}

impl NewProduct {
    /// Builds a product, falling back to [`DEFAULT_CATEGORY`] when none is given.
    #[must_use]
    pub fn new(name: impl Into<String>, price: f64, category: Option<String>) -> Self {
        Self {
            name: name.into(),
            price,
            category: category.unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
        }
    }
}

/// Stores a new product.
///
/// # Errors
/// Returns an error if:
/// - The product name is empty or whitespace-only
/// - The price is not a positive finite number
/// - The database insert operation fails
pub async fn save_product(db: &DatabaseConnection, new_product: NewProduct) -> Result<product::Model> {
    if new_product.name.trim().is_empty() {
        return Err(Error::Validation {
            errors: vec!["Name is required".to_string()],
        });
    }

    if !new_product.price.is_finite() || new_product.price <= 0.0 {
        return Err(Error::InvalidAmount {
            amount: new_product.price,
        });
    }

    let product = product::ActiveModel {
        name: Set(new_product.name.trim().to_string()),
        price: Set(new_product.price),
        category: Set(new_product.category.trim().to_string()),
        ..Default::default()
    };
    let saved = product.insert(db).await?;
    tracing::info!(id = saved.id, name = %saved.name, price = saved.price, "Product saved");
    Ok(saved)
}

/// Retrieves all products in creation order.
pub async fn load_products(db: &DatabaseConnection) -> Result<Vec<product::Model>> {
    Product::find()
        .order_by_asc(product::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Resolves a product selection, keeping the order (and repeats) of `ids`.
///
/// # Errors
/// Returns [`Error::ProductNotFound`] for the first id that does not exist.
pub async fn get_products_by_ids(
    db: &DatabaseConnection,
    ids: &[i64],
) -> Result<Vec<product::Model>> {
    let found = Product::find()
        .filter(product::Column::Id.is_in(ids.iter().copied()))
        .all(db)
        .await?;

    ids.iter()
        .map(|id| {
            found
                .iter()
                .find(|product| product.id == *id)
                .cloned()
                .ok_or(Error::ProductNotFound { id: *id })
        })
        .collect()
}

/// Permanently deletes a product.
///
/// # Errors
/// Returns [`Error::ProductNotFound`] if no product has this id.
pub async fn delete_product(db: &DatabaseConnection, product_id: i64) -> Result<()> {
    let result = Product::delete_by_id(product_id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(Error::ProductNotFound { id: product_id });
    }
    tracing::info!(id = product_id, "Product deleted");
    Ok(())
}
