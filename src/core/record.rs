//! Loaded order records and the normalization of their text columns.
//!
//! The order table keeps the product list and the date as text. Reading them
//! back is tolerant: a product list that does not decode becomes
//! [`ProductList::EmptyDefault`], and a date that does not parse makes the
//! record invisible to date-based reports. Neither case is an error.

use crate::{entities::order, errors::Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Snapshot of a product as it was when the order was placed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product name
    pub name: String,
    /// Unit price at order time
    pub price: f64,
    /// Product category at order time
    #[serde(default = "default_category")]
    pub category: String,
}

fn default_category() -> String {
    crate::core::product::DEFAULT_CATEGORY.to_string()
}

/// Result of decoding a stored product list.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductList {
    /// The text decoded into a list of line items
    Decoded(Vec<LineItem>),
    /// The text could not be decoded and was replaced by an empty list
    EmptyDefault,
}

impl ProductList {
    /// Decodes a stored product list, substituting an empty list on any failure.
    #[must_use]
    pub fn decode(raw: &str) -> Self {
        match serde_json::from_str::<Vec<LineItem>>(raw) {
            Ok(items) => Self::Decoded(items),
            Err(e) => {
                tracing::warn!(raw, error = %e, "Undecodable product list, using empty list");
                Self::EmptyDefault
            }
        }
    }

    /// Encodes line items into the stored text form.
    pub fn encode(items: &[LineItem]) -> Result<String> {
        serde_json::to_string(items).map_err(Into::into)
    }

    /// The decoded items; empty for [`ProductList::EmptyDefault`].
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        match self {
            Self::Decoded(items) => items,
            Self::EmptyDefault => &[],
        }
    }

    /// Whether decoding failed and the empty default was substituted.
    #[must_use]
    pub const fn is_default(&self) -> bool {
        matches!(self, Self::EmptyDefault)
    }

    /// Product names joined with commas, as shown in listings and exports.
    #[must_use]
    pub fn joined_names(&self) -> String {
        self.items()
            .iter()
            .map(|item| item.name.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// An order as loaded from the store.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRecord {
    /// Client name the order references
    pub client: String,
    /// Normalized product list
    pub products: ProductList,
    /// Date exactly as stored
    pub date: String,
    /// Snapshot total
    pub total: f64,
}

impl OrderRecord {
    /// The order date, if the stored text parses as one.
    #[must_use]
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_order_date(&self.date)
    }
}

impl From<order::Model> for OrderRecord {
    fn from(model: order::Model) -> Self {
        Self {
            products: ProductList::decode(&model.products),
            client: model.client_id,
            date: model.date,
            total: model.total,
        }
    }
}

/// Parses a stored order date.
///
/// Accepts a plain ISO date, an ISO date-time with a space or `T` separator,
/// and RFC 3339. Only the calendar date is kept.
#[must_use]
pub fn parse_order_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    for format in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(datetime.date());
        }
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|datetime| datetime.date_naive())
}
