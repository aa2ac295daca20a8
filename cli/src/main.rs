//! Warehouse Management Service — CLI Server
//!
//! Headless inventory service suitable for deployment as a systemd
//! service, Docker container, or standalone process.
//!
//! ```sh
//! # Run with default config (~/.config/wms-service/config.toml)
//! wms
//!
//! # Custom config path
//! wms --config /etc/wms-service/config.toml
//!
//! # Override the API port
//! wms --api-port 8080
//!
//! # Validate config without starting
//! wms --check
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use wms_service::config::AppConfig;
use wms_service::server::{init_tracing, ServerHandle, ServerOptions};

/// Warehouse Management Service — inventory tracking over SQLite.
#[derive(Parser, Debug)]
#[command(
    name = "wms",
    version,
    about = "Warehouse inventory service with low-stock alerts and forecasting",
    long_about = "Warehouse Management Service — REST API server for inventory \
                  tracking, low-stock alerts and a naive stock forecast.\n\n\
                  Default config: ~/.config/wms-service/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "WMS_CONFIG")]
    config: Option<PathBuf>,

    /// Override the REST API listen port.
    #[arg(long)]
    api_port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration file and exit without starting the server.
    #[arg(long)]
    check: bool,

    /// Skip database migrations on startup.
    #[arg(long)]
    no_migrate: bool,

    /// Skip seeding the default admin user.
    #[arg(long)]
    no_admin: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli
        .config
        .unwrap_or_else(wms_service::default_config_path);

    let mut config = match AppConfig::load(&config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            if cli.check {
                eprintln!("Configuration error in {}: {}", config_path.display(), e);
                std::process::exit(1);
            }
            eprintln!(
                "Failed to load config from {}: {}. Using defaults.",
                config_path.display(),
                e
            );
            AppConfig::default()
        }
    };

    // ── CLI overrides ──────────────────────────────────────────
    if let Some(port) = cli.api_port {
        config.server.api_port = port;
    }
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }

    if cli.check {
        println!("Configuration OK: {}", config_path.display());
        println!("  API:      {}:{}", config.server.api_host, config.server.api_port);
        println!("  Database: {}", config.database.connection_url());
        println!("  Logging:  {}", config.logging.level);
        return Ok(());
    }

    init_tracing(&config);

    // ── Run ────────────────────────────────────────────────────
    let handle = ServerHandle::start(ServerOptions {
        config,
        auto_migrate: !cli.no_migrate,
        create_default_admin: !cli.no_admin,
    })
    .await?;

    info!("Server started. Press Ctrl+C to shutdown gracefully.");
    handle.wait().await;
    handle.shutdown().await;

    Ok(())
}
