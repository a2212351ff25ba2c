//! Core business logic - framework-agnostic expense operations.

/// Expense listing, creation, lookup and deletion
pub mod expense;
