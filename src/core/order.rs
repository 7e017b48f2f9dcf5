//! Order business logic - Construction and store operations for orders.
//!
//! An [`Order`] computes its total once, from the prices of the products it is
//! built with, and that number is what gets stored. Later price changes or
//! product deletions never touch an existing order. Orders are addressed by
//! position in insertion order, which is how listings number them.

use crate::{
    core::record::{LineItem, OrderRecord, ProductList},
    entities::{Order as OrderEntity, order, product},
    errors::{Error, Result},
};
use chrono::{Local, NaiveDate};
use sea_orm::{QueryOrder, QuerySelect, Set, prelude::*};

/// A new order with its frozen total.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    client_id: String,
    products: Vec<LineItem>,
    date: NaiveDate,
    total: f64,
}

impl Order {
    /// Builds an order, dating it today unless `date` is given.
    #[must_use]
    pub fn new(client_id: impl Into<String>, products: Vec<LineItem>, date: Option<NaiveDate>) -> Self {
        let total: f64 = products.iter().map(|item| item.price).sum();
        Self {
            client_id: client_id.into(),
            products,
            date: date.unwrap_or_else(|| Local::now().date_naive()),
            total,
        }
    }

    /// Name of the client the order belongs to
    #[must_use]
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Products as they were when the order was built
    #[must_use]
    pub fn products(&self) -> &[LineItem] {
        &self.products
    }

    /// Order date
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Sum of product prices at construction time
    #[must_use]
    pub const fn total(&self) -> f64 {
        self.total
    }
}

impl From<&product::Model> for LineItem {
    fn from(model: &product::Model) -> Self {
        Self {
            name: model.name.clone(),
            price: model.price,
            category: model.category.clone(),
        }
    }
}

/// Sort keys offered by the order listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderSort {
    /// Largest total first
    TotalDescending,
    /// Oldest date first
    DateAscending,
}

/// Stores an order exactly as built.
pub async fn save_order(db: &DatabaseConnection, new_order: &Order) -> Result<order::Model> {
    let order = order::ActiveModel {
        client_id: Set(new_order.client_id.clone()),
        products: Set(ProductList::encode(&new_order.products)?),
        date: Set(new_order.date.format("%Y-%m-%d").to_string()),
        total: Set(new_order.total),
        ..Default::default()
    };
    let saved = order.insert(db).await?;
    tracing::info!(
        id = saved.id,
        client = %saved.client_id,
        total = saved.total,
        "Order saved"
    );
    Ok(saved)
}

/// Creates an order for an existing client from a product selection.
///
/// # Errors
/// Returns an error if:
/// - The client name is blank or no products are selected ([`Error::EmptyOrder`])
/// - No client has this name ([`Error::ClientNotFound`])
/// - A selected product does not exist ([`Error::ProductNotFound`])
/// - The database insert operation fails
pub async fn create_order(
    db: &DatabaseConnection,
    client_name: &str,
    product_ids: &[i64],
    date: Option<NaiveDate>,
) -> Result<Order> {
    let client_name = client_name.trim();
    if client_name.is_empty() || product_ids.is_empty() {
        return Err(Error::EmptyOrder);
    }

    let client = crate::core::client::get_client_by_name(db, client_name)
        .await?
        .ok_or_else(|| Error::ClientNotFound {
            name: client_name.to_string(),
        })?;

    let products = crate::core::product::get_products_by_ids(db, product_ids).await?;
    let new_order = Order::new(client.name, products.iter().map(LineItem::from).collect(), date);
    save_order(db, &new_order).await?;
    Ok(new_order)
}

/// Loads every order in insertion order.
pub async fn load_orders(db: &DatabaseConnection) -> Result<Vec<OrderRecord>> {
    let models = OrderEntity::find()
        .order_by_asc(order::Column::Id)
        .all(db)
        .await?;
    Ok(models.into_iter().map(OrderRecord::from).collect())
}

/// Deletes the order at a 0-based position in insertion order.
///
/// Returns `false` when the position is past the end; nothing is deleted then.
pub async fn delete_order_by_index(db: &DatabaseConnection, position: u64) -> Result<bool> {
    let target = OrderEntity::find()
        .order_by_asc(order::Column::Id)
        .offset(position)
        .one(db)
        .await?;

    let Some(target) = target else {
        tracing::debug!(position, "No order at position");
        return Ok(false);
    };

    OrderEntity::delete_by_id(target.id).exec(db).await?;
    tracing::info!(position, id = target.id, "Order deleted");
    Ok(true)
}

/// A loaded order paired with its 1-based position in insertion order.
///
/// The position is fixed at load time, so it still addresses the same row
/// for [`delete_order_by_index`] after the listing is sorted.
#[derive(Debug, Clone, PartialEq)]
pub struct ListedOrder {
    /// 1-based position in insertion order
    pub position: u64,
    /// The order itself
    pub record: OrderRecord,
}

/// Numbers loaded orders from 1 in the order given.
#[must_use]
pub fn number_orders(orders: Vec<OrderRecord>) -> Vec<ListedOrder> {
    (1..)
        .zip(orders)
        .map(|(position, record)| ListedOrder { position, record })
        .collect()
}

/// Sorts numbered orders for display; positions travel with their orders.
///
/// Both sorts are stable. Dates compare as stored text, which is
/// chronological for ISO dates.
pub fn sort_orders(orders: &mut [ListedOrder], sort: OrderSort) {
    match sort {
        OrderSort::TotalDescending => {
            orders.sort_by(|a, b| b.record.total.total_cmp(&a.record.total));
        }
        OrderSort::DateAscending => orders.sort_by(|a, b| a.record.date.cmp(&b.record.date)),
    }
}
