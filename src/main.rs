//! Humdash
//!
//! Renders the humanitarian dashboard and serves it over HTTP.
//!
//! # Configuration
//!
//! Settings come from `--config`, the default config locations, or the
//! environment:
//! - `HUMDASH_HOST`: Host to bind to (default: 0.0.0.0)
//! - `HUMDASH_PORT`: Port to listen on (default: 8000)
//! - `HUMDASH_TITLE`: Page title
//! - `HUMDASH_LOG_LEVEL`: Log level (default: info)
//! - `HUMDASH_LOG_FORMAT`: `pretty` or `json`
//! - `RUST_LOG`: Full tracing filter, overrides the log level

use clap::{Parser, Subcommand};
use humdash::config::{generate_default_config, Config, ConfigError, LoggingConfig};
use humdash::dashboard::{self, build_document, DashboardError};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "humdash")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Static humanitarian indicators dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Host to bind to
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, global = true)]
    pub port: Option<u16>,
}

#[derive(Subcommand, Clone)]
pub enum Commands {
    /// Serve the dashboard (default)
    Serve,

    /// Render the dashboard page without serving it
    Render {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("humdash={},tower_http=debug", logging.level).into()
    });
    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn write_output(output: Option<PathBuf>, content: &str) -> std::io::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(&path, content)?;
            eprintln!("Wrote {}", path.display());
            Ok(())
        }
        None => {
            print!("{}", content);
            Ok(())
        }
    }
}

/// Resolve configuration: `--config` or the default locations, then env,
/// then command-line flags.
fn load_config(cli: &Cli) -> Result<Config, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default()?,
    };
    if let Some(host) = &cli.host {
        config.server.host = host.clone();
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    Ok(config)
}

/// Log what loading found, once a subscriber exists to receive it
fn log_config(config: &Config) {
    match &config.source {
        Some(path) => tracing::info!("Loaded config from {:?}", path),
        None => tracing::info!("Using default config with environment overrides"),
    }
    for warning in &config.warnings {
        tracing::warn!("{}", warning);
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let command = cli.command.clone().unwrap_or(Commands::Serve);

    if let Commands::Config { output } = &command {
        if let Err(e) = write_output(output.clone(), &generate_default_config()) {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
        return ExitCode::SUCCESS;
    }

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&config.logging);
    log_config(&config);

    match command {
        Commands::Render { output } => {
            let result = build_document(&config.dashboard.title)
                .map_err(|e| e.to_string())
                .and_then(|doc| write_output(output, doc.html()).map_err(|e| e.to_string()));
            match result {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    tracing::error!("{}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Commands::Serve | Commands::Config { .. } => {
            tracing::info!("Starting Humdash v{}", env!("CARGO_PKG_VERSION"));
            tracing::info!("Serving on {}", config.server.addr());

            match dashboard::run(&config).await {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    report(&e);
                    ExitCode::FAILURE
                }
            }
        }
    }
}

fn report(err: &DashboardError) {
    tracing::error!(stage = err.stage(), "Startup failed: {}", err);
    eprintln!("Error: {}", err);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_and_port_after_subcommand() {
        let cli = Cli::try_parse_from(["humdash", "serve", "--host", "127.0.0.1", "--port", "9000"])
            .unwrap();
        assert!(matches!(cli.command, Some(Commands::Serve)));
        assert_eq!(cli.host.as_deref(), Some("127.0.0.1"));
        assert_eq!(cli.port, Some(9000));
    }

    #[test]
    fn test_host_and_port_before_subcommand() {
        let cli = Cli::try_parse_from(["humdash", "-p", "9001", "render"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Render { .. })));
        assert_eq!(cli.port, Some(9001));
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("humdash.toml");
        std::fs::write(&path, "[server]\nhost = \"10.0.0.1\"\nport = 7000\n").unwrap();

        let cli = Cli::try_parse_from([
            "humdash",
            "serve",
            "--config",
            path.to_str().unwrap(),
            "--port",
            "7001",
        ])
        .unwrap();
        let config = load_config(&cli).unwrap();
        assert_eq!(config.server.host, "10.0.0.1");
        assert_eq!(config.server.port, 7001);
        assert_eq!(config.source, Some(path));
    }

    #[test]
    fn test_unparsable_config_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("humdash.toml");
        std::fs::write(&path, "[server\nport = ").unwrap();

        let cli = Cli::try_parse_from(["humdash", "--config", path.to_str().unwrap()]).unwrap();
        assert!(matches!(load_config(&cli), Err(ConfigError::Parse { .. })));
    }
}
