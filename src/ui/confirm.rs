//! Delete confirmation dialog.
//!
//! Deleting is gated here, at the boundary, rather than inside the store.
//! Both choices are offered and Cancel is the default.

use crate::errors::Result;
use dialoguer::Confirm;

/// Title of the delete confirmation dialog
pub const DELETE_TITLE: &str = "Confirm deletion";
/// Body of the delete confirmation dialog
pub const DELETE_MESSAGE: &str = "Are you sure you want to delete this expense?";

/// Body of the delete dialog for the expense shown as `label`.
#[must_use]
pub fn delete_message(label: &str) -> String {
    format!("{DELETE_MESSAGE} ({label})")
}

/// A two-choice Cancel/Confirm prompt.
pub trait Confirmer {
    /// Shows the prompt and returns `true` only if the user chose Confirm.
    fn confirm(&mut self, title: &str, message: &str) -> Result<bool>;
}

/// [`Confirmer`] backed by an interactive terminal prompt.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalConfirmer;

impl Confirmer for TerminalConfirmer {
    fn confirm(&mut self, title: &str, message: &str) -> Result<bool> {
        let confirmed = Confirm::new()
            .with_prompt(format!("{title}: {message}"))
            .default(false)
            .interact()?;
        Ok(confirmed)
    }
}
