//! Command handlers organized by command group.

/// Client commands
pub mod client;
/// Order commands
pub mod order;
/// Product commands
pub mod product;
/// Report commands
pub mod report;
