//! Main entry point for the lead-capture server binary

use anyhow::Result;
use lead_core::{create_app, run_server, AppConfig, AppState, SmtpNotifier};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = AppConfig::load()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;

    info!("Configuration loaded successfully");
    info!("Server will bind to: {}", config.bind_address());
    info!("Submission log: {}", config.submission_log_path().display());
    info!("Static site: {}", config.storage.site_dir.display());

    config
        .create_directories()
        .map_err(|e| anyhow::anyhow!("Failed to create data directory: {}", e))?;

    let addr: SocketAddr = config
        .bind_address()
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid bind address: {}", e))?;

    let mut state = AppState::new(config.clone());

    if config.mail.enabled {
        match SmtpNotifier::from_config(&config.mail) {
            Ok(notifier) => {
                info!(
                    "Operator notifications enabled, delivering to {}",
                    config.mail.operator_email
                );
                state = state.with_notifier(Arc::new(notifier));
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to initialize SMTP notifier, submissions will report email_sent=false: {}",
                    e
                );
            }
        }
    } else {
        info!("Operator notifications disabled");
    }

    info!("App: {} v{}", state.app_name, state.version);

    let app = create_app(state);

    run_server(app, addr).await?;

    info!("Server shutdown complete");
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let default_level = if cfg!(debug_assertions) {
            "debug"
        } else {
            "info"
        };

        format!(
            "{}={},lead_core={},tower_http=debug,axum=debug",
            env!("CARGO_CRATE_NAME").replace('-', "_"),
            default_level,
            default_level,
        )
        .into()
    });

    let fmt_layer = fmt::layer().with_target(true).with_file(true).with_line_number(true);

    let is_json = std::env::var("LOG_FORMAT")
        .map(|v| v.to_lowercase() == "json")
        .unwrap_or(false);

    if is_json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer.json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer.pretty())
            .init();
    }
}
