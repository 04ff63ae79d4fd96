//! Core library for the Soulful Kitchen lead-capture service: the
//! submission endpoint, the append-only CSV log, the operator
//! notification, and the static marketing site that hosts the two
//! lead-capture forms.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod mailer;
pub mod middleware;
pub mod models;
pub mod storage;
pub mod validation;

pub use config::{AppConfig, CorsConfig, MailConfig, ServerConfig, StorageConfig};
pub use error::{AppError, Result};
pub use extractors::SubmissionPayload;
pub use handlers::create_routes;
pub use mailer::{compose_notification, notification_subject, Notifier, SmtpNotifier};
pub use models::{select_response, ResponseMode, Submission, SubmitResponse, DEFAULT_SOURCE, LOG_COLUMNS};
pub use storage::SubmissionLog;
pub use validation::{clean, validate_email, validate_submission};

use axum::{middleware as axum_middleware, Router};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub app_name: String,
    pub version: String,
    pub config: AppConfig,
    pub submission_log: SubmissionLog,
    pub notifier: Option<Arc<dyn Notifier>>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let submission_log = SubmissionLog::new(config.submission_log_path());

        Self {
            app_name: "Soulful Kitchen Lead Capture".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            config,
            submission_log,
            notifier: None,
        }
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

pub fn create_app(state: AppState) -> Router {
    let mut router = Router::new().merge(create_routes(&state.config.storage.site_dir));

    router = router.layer(middleware::cors::cors_layer_from_config(&state.config.cors));

    router = router.layer(axum_middleware::from_fn(middleware::logging::log_request));

    router.with_state(state)
}

pub async fn run_server(app: Router, addr: SocketAddr) -> Result<()> {
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
