/// Application settings loaded from order_desk.toml
pub mod app;

/// Database configuration and connection management
pub mod database;
