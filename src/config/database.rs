//! Database configuration module for `grocer`.
//!
//! This module opens database connections and creates the demo tables using `SeaORM`.
//! Tables are generated with `Schema::create_table_from_entity`, so the column
//! definitions and foreign keys always match the entity structs.

use crate::config::connection_file::ConnectionSettings;
use crate::entities::{Order, OrderItem, Product};
use crate::errors::Result;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Schema};
use tracing::{debug, info, instrument};

/// URL of the throwaway store the demos run against.
pub const IN_MEMORY_URL: &str = "sqlite::memory:";

/// Opens a connection from a literal connection string.
///
/// SQL statements are logged through `tracing` at the default `sqlx` level.
/// The URL is kept out of the span since it may carry credentials.
#[instrument(skip_all)]
pub async fn connect(url: &str) -> Result<DatabaseConnection> {
    debug!("Opening database connection");
    let mut options = ConnectOptions::new(url.to_string());
    options.sqlx_logging(true);

    let db = Database::connect(options).await?;
    info!(backend = ?db.get_database_backend(), "Database connection opened");
    Ok(db)
}

/// Opens a connection from structured parameters, typically loaded from a file.
#[instrument(skip(settings), fields(adapter = %settings.adapter, database = %settings.database))]
pub async fn connect_with_settings(settings: &ConnectionSettings) -> Result<DatabaseConnection> {
    connect(&settings.to_url()).await
}

/// Gets the database URL from the `DATABASE_URL` environment variable, if set.
#[must_use]
pub fn database_url_from_env() -> Option<String> {
    std::env::var("DATABASE_URL").ok()
}

/// Opens a fresh in-memory `SQLite` database. Nothing survives process exit.
pub async fn open_in_memory() -> Result<DatabaseConnection> {
    connect(IN_MEMORY_URL).await
}

/// Creates the `products`, `orders` and `order_items` tables from the entity definitions.
///
/// No "already exists" handling is done; this runs once against an empty store.
#[instrument(skip(db))]
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    // order_items references the other two, so it goes last
    let product_table = schema.create_table_from_entity(Product);
    let order_table = schema.create_table_from_entity(Order);
    let order_item_table = schema.create_table_from_entity(OrderItem);

    db.execute(builder.build(&product_table)).await?;
    db.execute(builder.build(&order_table)).await?;
    db.execute(builder.build(&order_item_table)).await?;

    info!("Tables products, orders and order_items created");
    Ok(())
}
