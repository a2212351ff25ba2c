//! Expense business logic - the four table operations behind the store.
//!
//! Each function runs a single statement, which `SQLite` executes as its own
//! implicit transaction. There is no update operation: an expense is immutable
//! from insert until it is deleted.

use crate::{
    entities::{Expense, expense},
    errors::Result,
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Retrieves every stored expense in insertion order (ascending id).
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn list_expenses(db: &DatabaseConnection) -> Result<Vec<expense::Model>> {
    Expense::find()
        .order_by_asc(expense::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Inserts a new expense and returns the stored row.
///
/// Empty `description` or `amount` is not an error: nothing is written and
/// `Ok(None)` comes back. Whitespace is kept as typed and `amount` is never
/// parsed. The id and `created_at` are assigned by the database.
///
/// # Errors
/// Returns an error if the database insert fails.
pub async fn create_expense(
    db: &DatabaseConnection,
    description: &str,
    amount: &str,
) -> Result<Option<expense::Model>> {
    if description.is_empty() || amount.is_empty() {
        return Ok(None);
    }

    let expense = expense::ActiveModel {
        done: Set(false),
        description: Set(description.to_string()),
        amount: Set(amount.to_string()),
        ..Default::default()
    };
    let stored = expense.insert(db).await?;
    Ok(Some(stored))
}

/// Deletes the expense with the given id and returns the number of rows removed.
///
/// An unknown id deletes nothing and returns `Ok(0)`.
///
/// # Errors
/// Returns an error if the database delete fails.
pub async fn delete_expense(db: &DatabaseConnection, expense_id: i64) -> Result<u64> {
    let result = Expense::delete_by_id(expense_id).exec(db).await?;
    Ok(result.rows_affected)
}
