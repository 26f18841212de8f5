use clap::Parser;
use tracing_subscriber::EnvFilter;

use login_api::cli::{self, Cli};
use login_api::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up LOGIN_API_* settings
    let _ = dotenvy::dotenv();

    let command = Cli::parse().into_command();
    let config = command.apply(AppConfig::from_env()?);

    // RUST_LOG wins over the configured filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter));
    // Logs go to stderr so command output on stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("Starting login API in {:?} mode", config.environment);

    cli::run(command, &config).await
}
