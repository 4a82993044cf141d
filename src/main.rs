use dotenvy::dotenv;
use menu_composer::{config, errors::Result, shell::Shell};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible). Logs go to stderr so they
    //    never interleave with the rendered menu on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    // 2. Load .env file; env vars can be set externally
    dotenv().ok();

    // 3. Load display configuration
    let app_config = config::load_default_config()
        .inspect_err(|e| error!("Failed to load configuration: {}", e))?;

    // 4. Run the terminal session
    info!("Starting menu session");
    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(stdin.lock(), stdout.lock(), app_config.display)
        .run()
        .inspect_err(|e| error!("Terminal session failed: {}", e))
}
