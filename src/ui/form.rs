//! Expense input form.
//!
//! Holds the two text inputs between keystrokes and submit. Fields start out
//! absent, and submitting clears both whether or not anything was stored.

use crate::{entities::ExpenseModel, errors::Result, store::ExpenseStore};

/// The description/amount form
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExpenseForm {
    /// Free-text label
    pub description: Option<String>,
    /// Amount as typed; never parsed
    pub amount: Option<String>,
}

impl ExpenseForm {
    /// An empty form
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the description input.
    pub fn set_description(&mut self, text: impl Into<String>) {
        self.description = Some(text.into());
    }

    /// Replaces the amount input.
    pub fn set_amount(&mut self, text: impl Into<String>) {
        self.amount = Some(text.into());
    }

    /// Sends the current inputs to the store and resets the form.
    ///
    /// Absent inputs are treated as empty, so the store ignores them silently.
    pub async fn submit(&mut self, store: &mut ExpenseStore) -> Result<Option<ExpenseModel>> {
        let description = self.description.take().unwrap_or_default();
        let amount = self.amount.take().unwrap_or_default();
        store.add_expense(&description, &amount).await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::setup_test_store;

    #[tokio::test]
    async fn test_submit_stores_and_clears() -> Result<()> {
        let mut store = setup_test_store().await?;
        let mut form = ExpenseForm::new();
        form.set_description("Coffee");
        form.set_amount("15.50");

        let created = form.submit(&mut store).await?.unwrap();

        assert_eq!(created.description, "Coffee");
        assert_eq!(created.amount, "15.50");
        assert_eq!(form, ExpenseForm::default());
        assert_eq!(store.expenses().len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_submit_absent_inputs_is_noop() -> Result<()> {
        let mut store = setup_test_store().await?;
        let mut form = ExpenseForm::new();

        assert!(form.submit(&mut store).await?.is_none());

        form.set_description("Coffee");
        assert!(form.submit(&mut store).await?.is_none());

        form.set_amount("15.50");
        assert!(form.submit(&mut store).await?.is_none());

        assert!(store.expenses().is_empty());
        assert!(store.list_all().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_rejected_submit_still_clears_fields() -> Result<()> {
        let mut store = setup_test_store().await?;
        let mut form = ExpenseForm::new();
        form.set_description("Only a label");

        form.submit(&mut store).await?;

        assert_eq!(form.description, None);
        assert_eq!(form.amount, None);
        Ok(())
    }
}
