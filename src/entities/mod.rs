//! Entity module - SeaORM entity definitions for the database.
//! The expense tracker has a single table; the Model struct carries the data
//! and the Entity struct carries the operations.

pub mod expense;

pub use expense::{Column as ExpenseColumn, Entity as Expense, Model as ExpenseModel};
