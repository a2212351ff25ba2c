use dotenvy::dotenv;
use easy_expenses::{config, errors::Result, platform, store::ExpenseStore, ui};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible). Logs go to stderr so the
    //    interactive screen on stdout stays readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // 2. Load .env file. Non-fatal, env vars can be set externally
    dotenv().ok();

    // 3. Load settings (config.toml + DATABASE_URL)
    let settings = config::load_default_settings()
        .inspect_err(|e| error!("Critical error loading settings: {}", e))?;

    ui::print_heading(&settings.heading);

    // 4. Without an embedded engine there is nothing to open
    if !platform::storage_supported() {
        warn!("Embedded storage unavailable on this target.");
        println!("{}", ui::fallback_message());
        return Ok(());
    }

    // 5. Open the store and make sure the table exists. Failing here is fatal
    let mut store = ExpenseStore::open(&settings)
        .await
        .inspect_err(|e| error!("Failed to open database: {}", e))?;
    store
        .initialize_schema()
        .await
        .inspect(|_| info!("Database initialized successfully."))
        .inspect_err(|e| error!("Failed to initialize database: {}", e))?;

    // 6. Run the screen
    ui::run(&mut store, &settings).await
}
