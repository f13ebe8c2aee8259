use sea_orm::{DbErr, TransactionError};
use thiserror::Error;

/// Errors raised anywhere in the crate
#[derive(Debug, Error)]
pub enum Error {
    /// Missing or malformed connection settings
    #[error("Configuration error: {message}")]
    Config {
        /// What was wrong and where
        message: String,
    },

    /// Connection failures and constraint violations reported by the store
    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    /// An environment variable was set but not valid Unicode
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// The catalog has no products to select from
    #[error("No products have been seeded")]
    EmptyCatalog,
}

impl From<TransactionError<Error>> for Error {
    fn from(value: TransactionError<Error>) -> Self {
        match value {
            TransactionError::Connection(e) => Error::Database(e),
            TransactionError::Transaction(e) => e,
        }
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
