//! Electricity billing service
//!
//! Reads configuration from a TOML file (`BILLING_CONFIG`, else
//! ~/.config/electricity-billing/config.toml) and serves the REST API
//! until SIGINT or SIGTERM.

use tracing::{error, info};

use electricity_billing::server::{init_tracing, ServerHandle, ServerOptions};
use electricity_billing::{resolve_config_path, AppConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = resolve_config_path();
    let config = match AppConfig::load(&config_path) {
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
        config,
        bootstrap_schema: true,
    })
    .await
    .map_err(|e| {
        error!("Failed to start: {}", e);
        e
    })?;

    handle.install_signal_handler();
    info!("Press Ctrl+C to shutdown gracefully.");

    handle.wait().await;
    Ok(())
}
