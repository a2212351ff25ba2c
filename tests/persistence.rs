//! Records written by one store survive into the next, the way they must
//! survive an app restart.

#![allow(clippy::unwrap_used)]

use easy_expenses::{config::Settings, errors::Result, store::ExpenseStore};

fn file_settings(dir: &tempfile::TempDir) -> Settings {
    let path = dir.path().join("nested").join("expenses.sqlite");
    Settings {
        database_url: format!("sqlite://{}?mode=rwc", path.display()),
        ..Settings::default()
    }
}

#[tokio::test]
async fn test_expenses_persist_across_reopen() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let settings = file_settings(&dir);

    let (kept, removed) = {
        let mut store = ExpenseStore::open(&settings).await?;
        store.initialize_schema().await?;
        let kept = store.add_expense("Coffee", "15.50").await?.unwrap();
        let removed = store.add_expense("Taxi", "32").await?.unwrap();
        store.delete_expense(removed.id).await?;
        store.connection().clone().close().await?;
        (kept, removed)
    };

    let mut reopened = ExpenseStore::open(&settings).await?;
    reopened.initialize_schema().await?;

    assert_eq!(reopened.expenses(), std::slice::from_ref(&kept));

    // The deleted id stays retired after a restart too.
    let next = reopened.add_expense("Lunch", "40").await?.unwrap();
    assert!(next.id > removed.id);
    Ok(())
}

#[tokio::test]
async fn test_schema_init_on_existing_file_keeps_rows() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let settings = file_settings(&dir);

    let mut store = ExpenseStore::open(&settings).await?;
    store.initialize_schema().await?;
    store.add_expense("Rent", "1200").await?;

    let mut second = ExpenseStore::open(&settings).await?;
    second.initialize_schema().await?;
    second.initialize_schema().await?;

    assert_eq!(second.expenses().len(), 1);
    assert_eq!(second.expenses()[0].description, "Rent");
    Ok(())
}
