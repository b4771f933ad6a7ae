//! Service entry point: initializes tracing, configuration, and the
//! database, seeds the location categories, and runs the periodic
//! transaction list refresh until shutdown.

use dotenvy::dotenv;
use room_ledger::{
    config,
    core::{category, filter::TransactionFilter, refresh},
    errors::Result,
};
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (as early as possible)
    dotenv().ok(); // Non-fatal, env vars can be set externally
    info!("Attempted to load .env file.");

    // 3. Load the service configuration (categories + refresh interval)
    let app_config = config::categories::load_default_config()
        .inspect_err(|e| error!("Failed to load configuration: {e}"))?;
    info!(
        categories = app_config.categories.len(),
        refresh_interval_secs = app_config.refresh_interval_secs,
        "Loaded service configuration."
    );

    // 4. Initialize database
    let db = config::database::create_connection()
        .await
        .inspect(|_| info!("Database connection established."))
        .inspect_err(|e| error!("Failed to connect to database: {e}"))?;
    config::database::create_tables(&db)
        .await
        .inspect_err(|e| error!("Failed to create tables: {e}"))?;

    // 5. Seed the configured location categories
    category::seed_categories(&db, &app_config.categories)
        .await
        .inspect(|()| info!("Location categories seeded."))
        .inspect_err(|e| error!("Failed to seed categories: {e}"))?;

    // 6. Run the refresh loop until ctrl-c
    let interval = Duration::from_secs(app_config.refresh_interval_secs);
    let (mut receiver, handle) =
        refresh::spawn_refresh_loop(db, TransactionFilter::default(), interval);

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("Shutdown signal received.");
                break;
            }
            changed = receiver.changed() => {
                if changed.is_err() {
                    break;
                }
                let count = receiver.borrow_and_update().len();
                info!(transactions = count, "Ledger snapshot refreshed.");
            }
        }
    }

    drop(receiver);
    handle.abort();
    let _ = handle.await;

    Ok(())
}
