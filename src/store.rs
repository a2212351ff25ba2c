//! The expense store - owns the database connection and the display snapshot.
//!
//! The snapshot is replaced wholesale after every successful write
//! (reload-after-write); it is never patched in place. A rejected insert or a
//! failed statement leaves the previous snapshot untouched.

use crate::{
    config::{Settings, database},
    core::expense,
    entities::ExpenseModel,
    errors::{Error, Result},
};
use sea_orm::DatabaseConnection;
use tracing::{debug, info, instrument, trace};

/// Long-lived handle to the expense table, created once at startup and passed
/// by reference to the presentation layer.
#[derive(Debug)]
pub struct ExpenseStore {
    db: DatabaseConnection,
    expenses: Vec<ExpenseModel>,
}

impl ExpenseStore {
    /// Wraps an existing connection. The snapshot starts empty until
    /// [`ExpenseStore::initialize_schema`] or [`ExpenseStore::list_all`] runs.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            expenses: Vec::new(),
        }
    }

    /// Connects to the database named by `settings`.
    pub async fn open(settings: &Settings) -> Result<Self> {
        let db = database::create_connection(&settings.database_url).await?;
        Ok(Self::new(db))
    }

    /// The connection backing this store
    #[must_use]
    pub const fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// The expenses as of the last reload
    #[must_use]
    pub fn expenses(&self) -> &[ExpenseModel] {
        &self.expenses
    }

    /// Ensures the expense table exists, then loads the initial snapshot.
    ///
    /// Safe to call on every start; a failure here means the app cannot run.
    #[instrument(skip(self))]
    pub async fn initialize_schema(&mut self) -> Result<()> {
        database::create_tables(&self.db).await?;
        self.list_all().await?;
        info!("Expense table ready with {} records.", self.expenses.len());
        Ok(())
    }

    /// Reloads every expense from storage, replacing the snapshot, and returns it.
    #[instrument(skip(self))]
    pub async fn list_all(&mut self) -> Result<&[ExpenseModel]> {
        let expenses = expense::list_expenses(&self.db).await?;
        self.expenses = expenses;
        trace!("Snapshot now contains: {:?}", self.expenses);
        Ok(&self.expenses)
    }

    /// Records a new expense and reloads the snapshot.
    ///
    /// Returns `Ok(None)` without reloading when either field is empty. If the
    /// insert fails nothing is stored and the error is [`Error::Database`]; if
    /// the insert commits but the reload fails the error is [`Error::Reload`]
    /// and the snapshot still shows the state before the insert.
    #[instrument(skip_all)]
    pub async fn add_expense(
        &mut self,
        description: &str,
        amount: &str,
    ) -> Result<Option<ExpenseModel>> {
        let Some(created) = expense::create_expense(&self.db, description, amount).await? else {
            return Ok(None);
        };
        debug!("Inserted expense {}", created.id);
        self.reload_after_write().await?;
        Ok(Some(created))
    }

    /// Deletes the expense with `id` and reloads the snapshot.
    ///
    /// Returns the number of rows removed; an unknown id yields `Ok(0)` and
    /// still counts as a successful write. Errors follow
    /// [`ExpenseStore::add_expense`].
    #[instrument(skip(self))]
    pub async fn delete_expense(&mut self, id: i64) -> Result<u64> {
        let removed = expense::delete_expense(&self.db, id).await?;
        debug!("Deleted {} row(s) for expense {}", removed, id);
        self.reload_after_write().await?;
        Ok(removed)
    }

    async fn reload_after_write(&mut self) -> Result<()> {
        match self.list_all().await {
            Ok(_) => Ok(()),
            Err(Error::Database(e)) => Err(Error::Reload(e)),
            Err(e) => Err(e),
        }
    }
}
