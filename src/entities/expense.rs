//! Expense entity - a single recorded line item.
//!
//! Rows are immutable once inserted: there is no update path, only insert and delete.
//! `created_at` is filled in by the database at insert time.

use sea_orm::entity::prelude::*;
use sea_orm::sea_query::Expr;
use serde::{Deserialize, Serialize};

/// Expense database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "expenses")]
pub struct Model {
    /// Auto-incremented identifier, never reused after deletion
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Settled flag. Always `false`; nothing reads or writes it yet
    pub done: bool,
    /// Free-form label entered by the user
    pub description: String,
    /// Amount exactly as typed, e.g. `"15.50"`
    pub amount: String,
    /// When the row was inserted (UTC)
    #[sea_orm(default_expr = "Expr::current_timestamp()")]
    pub created_at: DateTime,
}

/// `Expense` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
