//! Shared test utilities for `grocer`.
//!
//! This module provides helpers for setting up in-memory test databases.

use crate::{
    config::database::{create_tables, open_in_memory},
    core::catalog::seed_products,
    errors::Result,
};
use sea_orm::DatabaseConnection;
use tracing_subscriber::EnvFilter;

/// Routes `tracing` output through the test harness. Safe to call repeatedly.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Creates an in-memory `SQLite` database with all tables created and no rows.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = open_in_memory().await?;
    create_tables(&db).await?;
    Ok(db)
}

/// Creates an in-memory database with tables and the seven seed products.
pub async fn setup_seeded_db() -> Result<DatabaseConnection> {
    let db = setup_test_db().await?;
    seed_products(&db).await?;
    Ok(db)
}
