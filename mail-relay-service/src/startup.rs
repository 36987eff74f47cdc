//! Application startup and lifecycle management.

use crate::config::MailRelayConfig;
use crate::handlers::{metrics, notificaciones};
use crate::services::{EmailProvider, SmtpProvider};
use axum::{middleware::from_fn, routing::get, routing::post, Router};
use service_core::error::AppError;
use service_core::middleware::{make_request_span, metrics_middleware, request_id_middleware};
use service_core::shutdown::shutdown_signal;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// `From` address of every relayed email.
    pub sender: String,
    pub email_provider: Arc<dyn EmailProvider>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/notificaciones", post(notificaciones))
        .route("/metrics", get(metrics))
        .layer(from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the SMTP relay described by `config`.
    pub async fn build(config: MailRelayConfig) -> Result<Self, AppError> {
        let provider = SmtpProvider::new(&config.smtp).map_err(|e| {
            tracing::error!("Failed to initialize SMTP provider: {}", e);
            AppError::from(e)
        })?;

        let state = AppState {
            sender: config.smtp.username.clone(),
            email_provider: Arc::new(provider),
        };

        Self::build_with_state(config, state).await
    }

    /// Build the application around an existing state, e.g. a mock provider.
    pub async fn build_with_state(
        config: MailRelayConfig,
        state: AppState,
    ) -> Result<Self, AppError> {
        // port 0 = random port for testing
        let address = config.common.address();
        let listener = TcpListener::bind(&address).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", address, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Mail relay service listening on port {}", port);

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Serve until a shutdown signal arrives.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = build_router(self.state);

        axum::serve(self.listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                tracing::error!("HTTP server error: {}", e);
                e
            })
    }
}
