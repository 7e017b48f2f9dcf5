//! Shared test utilities for order-desk.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test records with sensible defaults.

use crate::{
    core::{
        client::{self, NewClient},
        product::{self, NewProduct},
        record::{LineItem, ProductList},
    },
    entities::{self, order},
    errors::Result,
};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a test client with sensible defaults.
///
/// # Defaults
/// * `email`: lowercased name at example.com
/// * `phone`: "+1234567890"
/// * `address`: "1 Main Street"
pub async fn create_test_client(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::client::Model> {
    client::save_client(
        db,
        NewClient {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            phone: "+1234567890".to_string(),
            address: "1 Main Street".to_string(),
        },
    )
    .await
}

/// Creates a test product in the default category.
pub async fn create_test_product(
    db: &DatabaseConnection,
    name: &str,
    price: f64,
) -> Result<entities::product::Model> {
    product::save_product(db, NewProduct::new(name, price, None)).await
}

/// Creates a test product with a custom category.
pub async fn create_custom_product(
    db: &DatabaseConnection,
    name: &str,
    price: f64,
    category: &str,
) -> Result<entities::product::Model> {
    product::save_product(db, NewProduct::new(name, price, Some(category.to_string()))).await
}

/// Creates a test order holding a single item priced at `total`.
///
/// `date` is stored verbatim, so tests can also use unparseable dates.
pub async fn create_test_order(
    db: &DatabaseConnection,
    client_name: &str,
    total: f64,
    date: &str,
) -> Result<order::Model> {
    let items = vec![LineItem {
        name: "Test Item".to_string(),
        price: total,
        category: product::DEFAULT_CATEGORY.to_string(),
    }];
    insert_raw_order(db, client_name, &ProductList::encode(&items)?, date, total).await
}

/// Inserts an order row with exactly the given column values.
/// Use this to simulate rows written by older tools.
pub async fn insert_raw_order(
    db: &DatabaseConnection,
    client_name: &str,
    products: &str,
    date: &str,
    total: f64,
) -> Result<order::Model> {
    let model = order::ActiveModel {
        client_id: Set(client_name.to_string()),
        products: Set(products.to_string()),
        date: Set(date.to_string()),
        total: Set(total),
        ..Default::default()
    };
    model.insert(db).await.map_err(Into::into)
}
