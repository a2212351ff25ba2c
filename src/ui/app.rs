//! Main screen loop.
//!
//! Every action follows the same path: UI event, store write, full reload,
//! re-render from the store snapshot. Storage failures become notices and the
//! loop keeps going.

use crate::{
    config::Settings,
    errors::Result,
    store::ExpenseStore,
    ui::{
        self,
        confirm::{Confirmer, DELETE_TITLE, TerminalConfirmer, delete_message},
        form::ExpenseForm,
        list::{self, ExpenseRow},
    },
};
use colored::Colorize;
use dialoguer::{Input, Select};
use tracing::{debug, info};

/// What the user picked from the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Fill in and submit the form
    Add,
    /// Pick a row and delete it after confirmation
    Delete,
    /// Leave the app
    Quit,
}

impl Action {
    const LABELS: [&'static str; 3] = ["Add expense", "Delete expense", "Quit"];

    /// Maps a menu index to an action. Anything out of range quits.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        match index {
            0 => Self::Add,
            1 => Self::Delete,
            _ => Self::Quit,
        }
    }

    /// Shows the main menu and returns the chosen action.
    pub fn select() -> Result<Self> {
        let index = Select::new()
            .with_prompt("What would you like to do?")
            .items(&Self::LABELS)
            .default(0)
            .interact()?;
        Ok(Self::from_index(index))
    }
}

/// Asks for confirmation naming `row`, and deletes it only if the user confirms.
///
/// Returns whether a delete was issued. Cancel leaves the store untouched.
pub async fn request_delete<C: Confirmer>(
    store: &mut ExpenseStore,
    confirmer: &mut C,
    row: &ExpenseRow,
) -> Result<bool> {
    if !confirmer.confirm(DELETE_TITLE, &delete_message(&row.label))? {
        debug!("Delete of expense {} cancelled", row.id);
        return Ok(false);
    }
    store.delete_expense(row.id).await?;
    Ok(true)
}

/// Runs the interactive screen until the user quits.
///
/// # Errors
/// Returns an error only if the terminal itself fails; storage failures are
/// reported as notices.
pub async fn run(store: &mut ExpenseStore, settings: &Settings) -> Result<()> {
    let mut form = ExpenseForm::new();
    let mut confirmer = TerminalConfirmer;

    loop {
        let rows = list::render_rows(store.expenses(), &settings.date_format);
        list::print_list(&rows);
        println!();

        match Action::select()? {
            Action::Add => {
                fill_form(&mut form)?;
                if let Err(e) = form.submit(store).await {
                    ui::notify_write_error("Could not save the expense", &e);
                }
            }
            Action::Delete => {
                let Some(row) = pick_row(&rows)? else {
                    continue;
                };
                if let Err(e) = request_delete(store, &mut confirmer, row).await {
                    ui::notify_write_error("Could not delete the expense", &e);
                }
            }
            Action::Quit => break,
        }
    }

    info!("Session ended with {} expenses stored.", store.expenses().len());
    Ok(())
}

fn fill_form(form: &mut ExpenseForm) -> Result<()> {
    let description: String = Input::new()
        .with_prompt("Description")
        .allow_empty(true)
        .interact_text()?;
    let amount: String = Input::new()
        .with_prompt("Amount")
        .allow_empty(true)
        .interact_text()?;

    form.set_description(description);
    form.set_amount(amount);
    Ok(())
}

fn pick_row(rows: &[ExpenseRow]) -> Result<Option<&ExpenseRow>> {
    if rows.is_empty() {
        println!("{}", "No expenses to delete.".dimmed());
        return Ok(None);
    }

    let mut items: Vec<String> = rows
        .iter()
        .map(|row| format!("{}  {}", row.date, row.label))
        .collect();
    items.push("Cancel".to_string());

    let index = Select::new()
        .with_prompt("Delete which expense?")
        .items(&items)
        .default(items.len() - 1)
        .interact()?;
    Ok(rows.get(index))
}
