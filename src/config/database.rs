//! Database configuration module for order-desk.
//!
//! This module handles `SQLite` connection and table creation using `SeaORM`.
//! Tables are generated from the entity definitions with
//! `Schema::create_table_from_entity`, so the schema always matches the Rust
//! structs. Creation uses `IF NOT EXISTS` and runs on every start-up; there are
//! no migrations.

use crate::entities::{Client, Order, Product};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, EntityTrait, Schema};

/// Environment variable holding the database URL
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";

/// Local `SQLite` file used when nothing else is configured
pub const DEFAULT_DATABASE_URL: &str = "sqlite://order_desk.sqlite?mode=rwc";

/// Opens a connection to `database_url` and makes sure all tables exist.
///
/// Any failure here is a storage connectivity failure: the caller reports it
/// and the command aborts.
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    tracing::debug!(url = database_url, "Connecting to database");
    let db = Database::connect(database_url).await?;
    create_tables(&db).await?;
    Ok(db)
}

/// Creates the client, product and order tables if they are missing.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    create_table(db, Client).await?;
    create_table(db, Product).await?;
    create_table(db, Order).await?;
    Ok(())
}

async fn create_table<E: EntityTrait>(db: &DatabaseConnection, entity: E) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut statement = schema.create_table_from_entity(entity);
    statement.if_not_exists();
    db.execute(builder.build(&statement)).await?;
    Ok(())
}
