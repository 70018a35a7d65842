//! Telemedicine service - CLI entry point
//!
//! ```sh
//! # Run with default config (~/.config/telemed-service/config.toml)
//! telemed-service
//!
//! # Custom config path and port
//! telemed-service --config /etc/telemed/config.toml --port 9090
//!
//! # Validate config without starting
//! telemed-service --check
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use telemed::config::{default_config_path, AppConfig, CONFIG_ENV};
use telemed::server::{init_tracing, ServerHandle, ServerOptions};

/// REST backend for clinics: doctors, patients, slots and reference data.
#[derive(Parser, Debug)]
#[command(name = "telemed-service", version, about)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = CONFIG_ENV)]
    config: Option<PathBuf>,

    /// Override the listen port.
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration and exit without starting the server.
    #[arg(long)]
    check: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli.config.unwrap_or_else(default_config_path);

    // A missing file means defaults in both modes.
    let (mut config, load_error) = match AppConfig::load_or_default(&config_path) {
        Ok(cfg) => (cfg, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // ── Apply CLI overrides ────────────────────────────────────
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }

    if cli.check {
        if let Some(e) = load_error {
            eprintln!("Configuration is invalid: {e}");
            return Err(e.into());
        }
        if let Err(e) = config.validate() {
            eprintln!("Configuration is invalid after overrides: {e}");
            return Err(e.into());
        }
        println!("Configuration is valid");
        println!("   Config file  : {}", config_path.display());
        println!("   Address      : {}", config.server.address());
        println!("   Log level    : {}", config.logging.level);
        println!("   Page size    : {}", config.pagination.default_limit);
        return Ok(());
    }

    init_tracing(&config);
    match load_error {
        None => info!(path = %config_path.display(), "Configuration loaded"),
        Some(e) => error!(error = %e, "Failed to load config, using defaults"),
    }

    // ── Start server ───────────────────────────────────────────
    let handle = ServerHandle::start(ServerOptions {
        config,
        repositories: None,
    })
    .await?;

    handle.install_signal_handler();
    info!("Press Ctrl+C to shut down gracefully");

    handle.shutdown_signal().wait().await;
    handle.wait().await;

    Ok(())
}
