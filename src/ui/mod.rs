//! Presentation layer - a terminal rendition of the expense screen.
//!
//! The screen has three surfaces: a form with two text inputs and a submit
//! action, a list of stored expenses with a delete affordance per row, and a
//! Cancel/Confirm dialog guarding every delete. All of them talk to the
//! [`crate::store::ExpenseStore`] passed in by `main`.

/// Main loop and the confirmed-delete flow
pub mod app;
/// Delete confirmation dialog
pub mod confirm;
/// Description/amount input form
pub mod form;
/// Expense list rendering
pub mod list;

pub use app::{Action, request_delete, run};
pub use confirm::{Confirmer, TerminalConfirmer};
pub use form::ExpenseForm;
pub use list::{ExpenseRow, render_rows};

use colored::Colorize;

/// Message shown in place of the form and list when storage is unavailable.
#[must_use]
pub const fn fallback_message() -> &'static str {
    "SQLite storage is not supported on this platform!"
}

/// Prints the screen title.
pub fn print_heading(heading: &str) {
    println!("\n{}\n", heading.bold());
}

/// Reports a failed add or delete. A committed write whose reload failed is
/// reported as saved, so the user does not retry it.
pub fn notify_write_error(context: &str, error: &crate::errors::Error) {
    if matches!(error, crate::errors::Error::Reload(_)) {
        notify_error("Saved, but the list could not be refreshed", error);
    } else {
        notify_error(context, error);
    }
}

/// Reports a storage failure without interrupting the session.
pub fn notify_error(context: &str, error: &crate::errors::Error) {
    tracing::error!("{context}: {error}");
    eprintln!("{} {context}: {error}", "!".yellow().bold());
}
