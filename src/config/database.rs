//! Database configuration module.
//!
//! Handles the `SQLite` connection and table creation using `SeaORM`. The
//! `expenses` table is generated from the entity definition with
//! `Schema::create_table_from_entity`, so the stored layout always matches the
//! Rust struct. Creation uses `IF NOT EXISTS` and is safe to run on every start.

use crate::entities::Expense;
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Default database location, relative to the working directory.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/expenses.sqlite?mode=rwc";

/// Gets the database URL from the `DATABASE_URL` environment variable, if set.
#[must_use]
pub fn database_url_from_env() -> Option<String> {
    std::env::var("DATABASE_URL").ok()
}

/// Returns the on-disk file behind a `sqlite:` URL, or `None` for in-memory databases.
#[must_use]
pub fn sqlite_file_path(database_url: &str) -> Option<&Path> {
    let rest = database_url.strip_prefix("sqlite:")?;
    let rest = rest.trim_start_matches("//");
    let path = rest.split('?').next().unwrap_or_default();
    if path.is_empty() || path == ":memory:" {
        return None;
    }
    Some(Path::new(path))
}

/// Establishes a connection to the database at `database_url`.
///
/// For file-backed `SQLite` URLs the parent directory is created first, since
/// `SQLite` will create the file but not the folders leading to it.
#[instrument]
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    if let Some(parent) = sqlite_file_path(database_url).and_then(Path::parent) {
        if !parent.as_os_str().is_empty() {
            debug!("Ensuring database directory {:?} exists", parent);
            std::fs::create_dir_all(parent)?;
        }
    }

    let db = Database::connect(database_url).await?;
    info!("Database connection opened.");
    Ok(db)
}

/// Creates the `expenses` table if it does not already exist.
///
/// Existing rows are never touched, so calling this twice in a row leaves both
/// the structure and the contents unchanged.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut expense_table = schema.create_table_from_entity(Expense);
    expense_table.if_not_exists();

    db.execute(builder.build(&expense_table)).await?;
    debug!("Expense table ensured.");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::ExpenseModel;
    use sea_orm::{EntityTrait, QuerySelect};

    #[tokio::test]
    async fn test_create_connection() -> Result<()> {
        let db = create_connection("sqlite::memory:").await?;
        create_tables(&db).await?;

        let _: Vec<ExpenseModel> = Expense::find().limit(1).all(&db).await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_create_tables_is_idempotent() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;
        create_tables(&db).await?;

        let rows: Vec<ExpenseModel> = Expense::find().all(&db).await?;
        assert!(rows.is_empty());
        Ok(())
    }

    #[test]
    fn test_sqlite_file_path() {
        assert_eq!(
            sqlite_file_path("sqlite://data/expenses.sqlite?mode=rwc"),
            Some(Path::new("data/expenses.sqlite"))
        );
        assert_eq!(
            sqlite_file_path("sqlite:///tmp/x.db"),
            Some(Path::new("/tmp/x.db"))
        );
        assert_eq!(sqlite_file_path("sqlite::memory:"), None);
        assert_eq!(sqlite_file_path("postgres://localhost/db"), None);
    }
}
