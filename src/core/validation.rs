//! Form validation for clients and products.
//!
//! Validation runs before anything reaches the store. Every field is checked
//! and all violations are returned together in [`Error::Validation`], in
//! field order.

use crate::{
    core::{client::NewClient, product::NewProduct},
    errors::{Error, Result},
};
use regex::Regex;
use std::sync::LazyLock;

#[allow(clippy::expect_used)]
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w.-]+@[\w.-]+\.\w+$").expect("Invalid regex"));

#[allow(clippy::expect_used)]
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?\d{10,15}$").expect("Invalid regex"));

#[allow(clippy::expect_used)]
static ADDRESS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^.+").expect("Invalid regex"));

/// Whether `email` looks like `local@domain.tld`.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Whether `phone` is 10 to 15 digits with an optional leading `+`.
#[must_use]
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

/// Whether `address` is non-empty.
#[must_use]
pub fn is_valid_address(address: &str) -> bool {
    ADDRESS_RE.is_match(address)
}

/// Validates a client form. Fields are trimmed before checking.
///
/// # Errors
/// Returns [`Error::Validation`] listing every rejected field.
pub fn validate_client(name: &str, email: &str, phone: &str, address: &str) -> Result<NewClient> {
    let (name, email, phone, address) = (name.trim(), email.trim(), phone.trim(), address.trim());

    let mut errors = Vec::new();
    if name.is_empty() {
        errors.push("Name is required".to_string());
    }
    if !is_valid_email(email) {
        errors.push("Invalid email".to_string());
    }
    if !is_valid_phone(phone) {
        errors.push("Invalid phone".to_string());
    }
    if !is_valid_address(address) {
        errors.push("Invalid address".to_string());
    }

    if !errors.is_empty() {
        return Err(Error::Validation { errors });
    }

    Ok(NewClient {
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        address: address.to_string(),
    })
}

/// Validates a product form.
///
/// `price` is the raw text from the form. A missing `category` means the
/// default category; a supplied but blank one is rejected.
///
/// # Errors
/// Returns [`Error::Validation`] listing every rejected field.
pub fn validate_product(name: &str, price: &str, category: Option<&str>) -> Result<NewProduct> {
    let name = name.trim();

    let mut errors = Vec::new();
    if name.is_empty() {
        errors.push("Name is required".to_string());
    }

    let price = match price.trim().parse::<f64>() {
        Ok(price) if !price.is_finite() => {
            errors.push("Invalid price".to_string());
            None
        }
        Ok(price) if price <= 0.0 => {
            errors.push("Price must be positive".to_string());
            None
        }
        Ok(price) => Some(price),
        Err(_) => {
            errors.push("Invalid price".to_string());
            None
        }
    };

    let category = category.map(str::trim);
    if category.is_some_and(str::is_empty) {
        errors.push("Category is required".to_string());
    }

    match price {
        Some(price) if errors.is_empty() => Ok(NewProduct::new(
            name,
            price,
            category.map(ToString::to_string),
        )),
        _ => Err(Error::Validation { errors }),
    }
}
