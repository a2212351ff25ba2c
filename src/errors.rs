//! Unified error types for the expense tracker.
//!
//! Validation rejections are not errors here: empty inputs are silently ignored
//! by the store. Everything in this enum is a real failure.

use thiserror::Error;

/// Application error type
#[derive(Debug, Error)]
pub enum Error {
    /// Settings could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable reason
        message: String,
    },

    /// The storage engine rejected a statement or the connection failed
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// A write was committed but the reload that follows it failed, so the
    /// snapshot no longer matches the table
    #[error("Change saved, but reloading expenses failed: {0}")]
    Reload(#[source] sea_orm::DbErr),

    /// Filesystem failure (database directory creation, config file)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The terminal prompt could not be shown or read
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
