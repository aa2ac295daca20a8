//!
//! Warehouse Management Service entry point.
//! Reads configuration from TOML file (~/.config/wms-service/config.toml).

use std::path::PathBuf;

use tracing::{error, info};

use wms_service::{default_config_path, init_tracing, AppConfig, ServerHandle, ServerOptions};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = std::env::var("WMS_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| default_config_path());

    let app_cfg = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            init_tracing(&cfg);
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            let cfg = AppConfig::default();
            init_tracing(&cfg);
            error!("Failed to load config: {}. Using defaults.", e);
            cfg
        }
    };

    let handle = ServerHandle::start(ServerOptions {
        config: app_cfg,
        ..Default::default()
    })
    .await?;

    info!("Server started. Press Ctrl+C to shutdown gracefully.");
    handle.wait().await;
    handle.shutdown().await;

    Ok(())
}
