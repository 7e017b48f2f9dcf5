//! Core business logic, independent of the command-line shell.
//!
//! Store operations (`client`, `product`, `order`) are async functions over a
//! `DatabaseConnection`. Everything downstream of loading (`record`, `report`,
//! `export`, `validation`) is plain synchronous code over in-memory values.

/// Client store operations and search
pub mod client;
/// CSV and JSON interchange for orders and clients
pub mod export;
/// Order construction and store operations
pub mod order;
/// Product store operations
pub mod product;
/// Loaded order records and decoding of their text columns
pub mod record;
/// Aggregated views over orders
pub mod report;
/// Form validation for clients and products
pub mod validation;
