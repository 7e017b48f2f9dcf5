//! Shell layer - the command-line interface over the core.
//!
//! Each invocation is one user action: parse arguments, run one command
//! handler to completion, print the result. Handlers write to a caller-supplied
//! writer so they can be tested without a terminal.

/// Command-line argument definitions
pub mod args;
/// Command handlers (client, product, order, report)
pub mod commands;
/// Text rendering of listings and charts
pub mod render;

pub use args::{Cli, Command};

use crate::{config::app::AppConfig, errors::Result};
use sea_orm::DatabaseConnection;
use std::io::Write;

/// Shared data available to all command handlers.
/// Holds the database connection and the loaded configuration.
pub struct ShellData {
    /// Database connection for all store operations
    pub database: DatabaseConnection,
    /// Application configuration
    pub config: AppConfig,
}

impl ShellData {
    /// Creates a new `ShellData` from an open connection and configuration.
    #[must_use]
    pub const fn new(database: DatabaseConnection, config: AppConfig) -> Self {
        Self { database, config }
    }
}

/// Runs one parsed command, writing user-facing output to `out`.
pub async fn run(data: &ShellData, command: Command, out: &mut dyn Write) -> Result<()> {
    match command {
        Command::Client { action } => commands::client::run(data, action, out).await,
        Command::Product { action } => commands::product::run(data, action, out).await,
        Command::Order { action } => commands::order::run(data, action, out).await,
        Command::Report { kind } => commands::report::run(data, kind, out).await,
    }
}
