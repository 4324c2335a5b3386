//! CLI argument parsing with clap
//!
//! This module defines the command-line interface structure using clap
//! and the merge of CLI overrides into the loaded configuration.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

use crate::config::{ConfigError, ConfigLoader, Environment, Settings};

fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    Environment::from_str(s)
}

/// Relays Linear webhooks to a Discord channel
#[derive(Parser, Debug)]
#[command(name = "linear-relay")]
#[command(about = "Relays Linear webhook notifications to a Discord channel")]
#[command(long_about = "
Linear-relay receives webhook notifications from Linear, formats them as
rich Discord messages, and forwards them to a configured Discord
incoming-webhook URL.

EXAMPLES:
    # Start the server with the default configuration directory
    linear-relay serve

    # Start the server on a custom host and port
    linear-relay serve --host 0.0.0.0 --port 8080

    # Use a single configuration file
    linear-relay --config-file /etc/linear-relay/production.toml serve

    # Check configuration without starting the server
    linear-relay serve --dry-run

The Discord webhook URL is required and can be set in the configuration
file or via the RELAY_DISCORD__WEBHOOK_URL environment variable.
")]
#[command(version = crate::build::CLAP_LONG_VERSION)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration directory for layered loading
    ///
    /// Directory containing default.toml plus optional environment and
    /// local overrides. Mutually exclusive with --config-file.
    #[arg(long, value_name = "DIR", conflicts_with = "config_file")]
    pub config_dir: Option<PathBuf>,

    /// Single configuration file to load instead of layered loading
    #[arg(long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Override environment detection
    ///
    /// Available values: development (dev), test, staging (stage),
    /// production (prod)
    #[arg(short, long, value_parser = parse_environment)]
    pub env: Option<Environment>,

    /// Enable verbose logging (debug level)
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the webhook relay server (default)
    Serve {
        /// Host address to bind to
        #[arg(long, value_name = "ADDRESS")]
        host: Option<String>,

        /// Port number to listen on
        #[arg(long, value_name = "PORT")]
        port: Option<u16>,

        /// Validate configuration and exit without starting the server
        #[arg(long)]
        dry_run: bool,
    },
}

impl Cli {
    /// Load settings honoring CLI source selection and overrides.
    ///
    /// Precedence, lowest to highest: configuration files, `RELAY_*`
    /// environment variables, CLI flags.
    pub fn load_settings(&self) -> Result<Settings, ConfigError> {
        let loader = self.build_loader()?;
        let mut settings = loader.load()?;
        self.apply_overrides(&mut settings);
        // Overrides can invalidate a previously valid configuration
        settings.validate()?;
        Ok(settings)
    }

    fn build_loader(&self) -> Result<ConfigLoader, ConfigError> {
        let environment = self.env.unwrap_or_else(Environment::from_env);

        match (&self.config_dir, &self.config_file) {
            (Some(dir), None) => Ok(ConfigLoader::with_sources(dir.clone(), None, environment)),
            (None, Some(file)) => Ok(ConfigLoader::with_sources(
                PathBuf::from("config"),
                Some(file.clone()),
                environment,
            )),
            (None, None) => ConfigLoader::new(),
            // clap's conflicts_with already rejects this; kept for
            // programmatic construction.
            (Some(_), Some(_)) => Err(ConfigError::mutual_exclusivity(
                "--config-dir and --config-file cannot both be set.",
            )),
        }
    }

    fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(Commands::Serve { host, port, .. }) = &self.command {
            if let Some(host) = host {
                settings.server.host = host.clone();
            }
            if let Some(port) = port {
                settings.server.port = *port;
            }
        }

        if self.verbose {
            settings.logger.level = "debug".to_string();
        } else if self.quiet {
            settings.logger.level = "error".to_string();
        }
    }

    /// Whether this invocation is a configuration check only.
    pub fn is_dry_run(&self) -> bool {
        matches!(
            self.command,
            Some(Commands::Serve { dry_run: true, .. })
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_no_args_defaults_to_serve() {
        let cli = Cli::try_parse_from(["linear-relay"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.is_dry_run());
    }

    #[test]
    fn test_parse_serve_overrides() {
        let cli = Cli::try_parse_from([
            "linear-relay",
            "serve",
            "--host",
            "0.0.0.0",
            "--port",
            "8080",
        ])
        .unwrap();

        let mut settings = Settings::default();
        cli.apply_overrides(&mut settings);
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.server.port, 8080);
    }

    #[test]
    fn test_parse_dry_run() {
        let cli = Cli::try_parse_from(["linear-relay", "serve", "--dry-run"]).unwrap();
        assert!(cli.is_dry_run());
    }

    #[test]
    fn test_verbose_quiet_conflict() {
        assert!(Cli::try_parse_from(["linear-relay", "--verbose", "--quiet"]).is_err());
    }

    #[test]
    fn test_config_dir_file_conflict() {
        assert!(
            Cli::try_parse_from([
                "linear-relay",
                "--config-dir",
                "a",
                "--config-file",
                "b.toml"
            ])
            .is_err()
        );
    }

    #[test]
    fn test_env_parsing() {
        let cli = Cli::try_parse_from(["linear-relay", "--env", "prod"]).unwrap();
        assert_eq!(cli.env, Some(Environment::Production));
        assert!(Cli::try_parse_from(["linear-relay", "--env", "bogus"]).is_err());
    }

    #[test]
    fn test_verbose_sets_debug_level() {
        let cli = Cli::try_parse_from(["linear-relay", "--verbose"]).unwrap();
        let mut settings = Settings::default();
        cli.apply_overrides(&mut settings);
        assert_eq!(settings.logger.level, "debug");
    }
}
