//! Binary entry point: parse arguments, load configuration, initialize
//! logging, and run the relay server.

use clap::Parser;
use linear_relay::cli::Cli;
use linear_relay::config::{LoggerConfig, Settings};
use linear_relay::server::Server;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = cli.load_settings().map_err(|e| {
        eprintln!("Configuration error: {e}");
        anyhow::anyhow!("Configuration error: {e}")
    })?;

    init_logger(&settings.logger)?;

    if cli.is_dry_run() {
        dry_run_report(&settings);
        return Ok(());
    }

    Server::new(settings).run().await
}

/// Initialize the tracing subscriber from logger settings.
///
/// `RUST_LOG` wins over the configured level when set.
fn init_logger(config: &LoggerConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.clone()));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match config.format.as_str() {
        "json" => builder.json().try_init(),
        "compact" => builder.compact().try_init(),
        _ => builder.try_init(),
    }
    .map_err(|e| anyhow::anyhow!("Failed to initialize logger: {e}"))
}

/// Print the configuration summary for `serve --dry-run`.
fn dry_run_report(settings: &Settings) {
    println!("✓ Configuration is valid");
    println!("✓ Server would bind to: {}", settings.server.address());
    println!("✓ Discord webhook URL is configured");
    println!(
        "✓ Delivery timeout: {}s",
        settings.discord.timeout_seconds
    );
    println!("Dry run completed successfully - configuration is ready for deployment");
}
