use bedrest::config::Config;
use bedrest::interfaces::cli::{run, Cli};
use clap::Parser;
use tracing::Level;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // WARN by default so recommendations are not interleaved with logs;
    // RUST_LOG overrides.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::WARN.into()))
        .with_target(false) // cleaner
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    run(cli, &config)
}
