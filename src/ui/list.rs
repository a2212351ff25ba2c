//! Expense list rendering.
//!
//! Each row shows the creation date, `"{description} - {amount}"`, and the id
//! the delete affordance acts on.

use crate::entities::ExpenseModel;
use chrono::{Local, NaiveDateTime, TimeZone, Utc};
use colored::Colorize;
use std::fmt::{Display, Write};

/// Format used when the configured one cannot be rendered
const FALLBACK_DATE_FORMAT: &str = "%d/%m/%Y";

/// One rendered line of the expense list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseRow {
    /// Id handed to the delete flow
    pub id: i64,
    /// Formatted creation date
    pub date: String,
    /// `"{description} - {amount}"`
    pub label: String,
}

impl ExpenseRow {
    /// Builds a row, showing `created_at` in the time zone `tz`.
    pub fn new<Tz>(expense: &ExpenseModel, tz: &Tz, date_format: &str) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        Self {
            id: expense.id,
            date: format_date(expense.created_at, tz, date_format),
            label: format!("{} - {}", expense.description, expense.amount),
        }
    }
}

/// Formats a stored UTC timestamp in `tz` with a `chrono` format string.
///
/// An invalid format string falls back to `DD/MM/YYYY` instead of panicking.
pub fn format_date<Tz>(created_at: NaiveDateTime, tz: &Tz, date_format: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let local = Utc.from_utc_datetime(&created_at).with_timezone(tz);
    let mut out = String::new();
    if write!(out, "{}", local.format(date_format)).is_err() {
        out = local.format(FALLBACK_DATE_FORMAT).to_string();
    }
    out
}

/// Renders the whole snapshot in the local time zone.
#[must_use]
pub fn render_rows(expenses: &[ExpenseModel], date_format: &str) -> Vec<ExpenseRow> {
    expenses
        .iter()
        .map(|expense| ExpenseRow::new(expense, &Local, date_format))
        .collect()
}

/// Prints the list section.
pub fn print_list(rows: &[ExpenseRow]) {
    println!("{}", "Expenses".bold());
    if rows.is_empty() {
        println!("  {}", "No expenses recorded yet.".dimmed());
        return;
    }

    let date_width = rows.iter().map(|r| r.date.len()).max().unwrap_or(10);
    for row in rows {
        println!(
            "  {:date_width$}  {}  {}",
            row.date,
            row.label,
            format!("[delete #{}]", row.id).red().bold()
        );
    }
}
