//! Unified error type for order-desk.
//!
//! Every fallible operation in the crate returns [`Result`]. Storage, I/O and
//! serialization failures convert automatically through `#[from]`; domain
//! failures carry the data needed to show the user a useful message.

use thiserror::Error;

/// All errors that can surface from the store, the reports or the shell.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of the problem
        message: String,
    },

    /// Any failure reported by the database layer
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Reading or writing a file or the terminal failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A CSV file could not be read or written
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON encoding or decoding failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// One or more form fields were rejected; all violations are listed
    #[error("Invalid input: {}", .errors.join("; "))]
    Validation {
        /// Every violation found in the submission, in field order
        errors: Vec<String>,
    },

    /// A price or amount that is not a positive finite number
    #[error("Invalid amount: {amount}")]
    InvalidAmount {
        /// The rejected value
        amount: f64,
    },

    /// No client with the given name exists
    #[error("Client not found: {name}")]
    ClientNotFound {
        /// Name that was looked up
        name: String,
    },

    /// No product with the given identifier exists
    #[error("Product not found: {id}")]
    ProductNotFound {
        /// Identifier that was looked up
        id: i64,
    },

    /// An order was submitted without a client or without products
    #[error("An order needs a client and at least one product")]
    EmptyOrder,
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
