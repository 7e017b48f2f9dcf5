//! Command-line arguments.
//!
//! Form fields default to empty strings instead of being required by clap,
//! so a half-filled form reaches validation and every problem is reported at
//! once.

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Top-level command line
#[derive(Debug, Parser)]
#[command(name = "order-desk")]
#[command(author, version, about = "Clients, products, orders and sales reports")]
pub struct Cli {
    /// What to do
    #[command(subcommand)]
    pub command: Command,
}

/// Command groups
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Work with clients
    Client {
        /// Client action
        #[command(subcommand)]
        action: ClientAction,
    },
    /// Work with products
    Product {
        /// Product action
        #[command(subcommand)]
        action: ProductAction,
    },
    /// Work with orders
    Order {
        /// Order action
        #[command(subcommand)]
        action: OrderAction,
    },
    /// Analyse orders
    Report {
        /// Report to show
        #[command(subcommand)]
        kind: ReportKind,
    },
}

/// Client actions
#[derive(Debug, Subcommand)]
pub enum ClientAction {
    /// Add a client
    Add {
        /// Client name
        #[arg(long, default_value = "")]
        name: String,
        /// E-mail address
        #[arg(long, default_value = "")]
        email: String,
        /// Phone number, 10-15 digits with optional leading +
        #[arg(long, default_value = "")]
        phone: String,
        /// Delivery address
        #[arg(long, default_value = "")]
        address: String,
    },
    /// List clients
    List {
        /// Only show clients matching this text in any field
        #[arg(long)]
        search: Option<String>,
    },
    /// Delete every client with this name
    Delete {
        /// Exact client name
        name: String,
    },
    /// Import clients from a CSV file
    Import {
        /// CSV file with a name,email,phone,address header
        path: PathBuf,
    },
    /// Export clients to a file
    Export {
        /// Destination file
        path: PathBuf,
        /// File format
        #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,
        /// Only export clients matching this text in any field
        #[arg(long)]
        search: Option<String>,
    },
}

/// Product actions
#[derive(Debug, Subcommand)]
pub enum ProductAction {
    /// Add a product
    Add {
        /// Product name
        #[arg(long, default_value = "")]
        name: String,
        /// Unit price, must be positive
        #[arg(long, default_value = "")]
        price: String,
        /// Category (defaults to "General")
        #[arg(long)]
        category: Option<String>,
    },
    /// List products
    List,
    /// Delete a product by id
    Delete {
        /// Product id as shown by `product list`
        id: i64,
    },
}

/// Order actions
#[derive(Debug, Subcommand)]
pub enum OrderAction {
    /// Create an order for an existing client
    Create {
        /// Client name
        #[arg(long, default_value = "")]
        client: String,
        /// Product id; repeat for several products
        #[arg(long = "product")]
        products: Vec<i64>,
        /// Order date (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// List orders
    List {
        /// Sort order
        #[arg(long, value_enum)]
        sort: Option<SortKey>,
    },
    /// Delete an order by its position in `order list`
    Delete {
        /// 1-based position
        position: u64,
    },
    /// Export orders to CSV
    Export {
        /// Destination file (defaults to the configured export file)
        path: Option<PathBuf>,
    },
}

/// Reports
#[derive(Debug, Subcommand)]
pub enum ReportKind {
    /// Order count and total per client
    Clients,
    /// Ranked chart of the clients with the most orders
    Top {
        /// Number of clients (defaults to the configured value)
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Sales per month
    Monthly,
    /// Orders per day within one month
    Daily {
        /// Year of the window (defaults to the configured value)
        #[arg(long)]
        year: Option<i32>,
        /// Month of the window (defaults to the configured value)
        #[arg(long)]
        month: Option<u32>,
    },
}

/// Client export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values
    Csv,
    /// JSON array of records
    Json,
}

/// Order listing sort keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortKey {
    /// Largest total first
    Total,
    /// Oldest first
    Date,
}
