//! Shared test utilities.
//!
//! Helpers for setting up in-memory databases and stores and for creating
//! expenses with sensible defaults.

#![allow(clippy::expect_used)]

use crate::{core::expense, entities, errors::Result, store::ExpenseStore};
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with the expense table initialized.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates an [`ExpenseStore`] over a fresh in-memory database with the schema initialized.
pub async fn setup_test_store() -> Result<ExpenseStore> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    let mut store = ExpenseStore::new(db);
    store.initialize_schema().await?;
    Ok(store)
}

/// Creates a test expense with the given description.
///
/// # Defaults
/// * `amount`: `"10.00"`
pub async fn create_test_expense(
    db: &DatabaseConnection,
    description: &str,
) -> Result<entities::expense::Model> {
    let created = expense::create_expense(db, description, "10.00").await?;
    Ok(created.expect("non-empty inputs are always stored"))
}
