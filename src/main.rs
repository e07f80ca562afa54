use clap::Parser;
use dotenvy::dotenv;
use tracing::error;
use tracing_subscriber::EnvFilter;
use weld_registry::{cli, config, errors::Result};

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // 2. Load .env file (non-fatal, env vars can be set externally)
    dotenv().ok();

    let args = cli::Cli::parse();

    // 3. Load application settings (defaults when config.toml is absent)
    let settings = config::settings::load_default_settings()
        .inspect_err(|e| error!("Failed to load settings: {e}"))?;

    // 4. Initialize the database
    let db = config::database::create_connection()
        .await
        .inspect_err(|e| error!("Failed to connect to the database: {e}"))?;
    config::database::create_tables(&db).await?;

    // 5. Run the requested command; validation errors are blocking messages
    if let Err(e) = cli::run(args, &db, &settings).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    Ok(())
}
