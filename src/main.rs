use clap::Parser;
use dotenvy::dotenv;
use granja::{
    cli::{self, AppContext, Cli},
    config::{catalog, database},
    errors::Result,
};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // 1. Initialize tracing (as early as possible); stdout is reserved for command output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // 2. Load .env file, non-fatal: env vars can be set externally
    dotenv().ok();

    let args = Cli::parse();

    match run(args).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Command failed: {e}");
            eprintln!("❌ {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Cli) -> Result<String> {
    // 3. Load the category catalog
    let catalog = catalog::load_default_catalog()?;

    // 4. Open the database once for the whole process and ensure the schema
    let database_url = args.database_url.unwrap_or_else(database::get_database_url);
    let db = database::init_database(&database_url)
        .await
        .inspect(|_| info!("Database initialized successfully."))
        .inspect_err(|e| error!("Failed to initialize database: {}", e))?;

    let ctx = AppContext::new(db, catalog);
    cli::execute(&ctx, args.command).await
}
