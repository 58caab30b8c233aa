//! Application startup and lifecycle management.

use crate::config::ReflectionConfig;
use crate::handlers::{contact::contact, dispatch, reflect::reflect};
use crate::services::providers::anthropic::AnthropicProvider;
use crate::services::providers::CompletionProvider;
use crate::services::SheetWebhook;
use axum::{middleware::from_fn, routing::post, Router};
use service_core::error::AppError;
use service_core::middleware::{
    cors::cors_headers_middleware,
    tracing::{make_request_span, request_id_middleware},
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;

pub const REFLECT_PATH: &str = "/api/reflect";
pub const CONTACT_PATH: &str = "/api/contact";

/// Shared application state. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: ReflectionConfig,
    pub provider: Arc<dyn CompletionProvider>,
    pub webhook: SheetWebhook,
}

impl AppState {
    pub fn new(
        config: ReflectionConfig,
        provider: Arc<dyn CompletionProvider>,
        webhook: SheetWebhook,
    ) -> Self {
        Self {
            config,
            provider,
            webhook,
        }
    }

    /// State wired to the real Anthropic client and the configured webhook.
    pub fn from_config(config: ReflectionConfig) -> Self {
        let provider: Arc<dyn CompletionProvider> =
            Arc::new(AnthropicProvider::new(config.anthropic.clone()));
        let webhook = SheetWebhook::new(config.webhook.url.clone());
        Self::new(config, provider, webhook)
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(REFLECT_PATH, post(reflect))
        .route(CONTACT_PATH, post(contact))
        .fallback(dispatch::not_found)
        .layer(from_fn(dispatch::method_guard))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span::<axum::body::Body>))
        .layer(from_fn(request_id_middleware))
        .layer(from_fn(cors_headers_middleware))
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: ReflectionConfig) -> Result<Self, AppError> {
        let state = AppState::from_config(config);
        Self::build_with_state(state).await
    }

    /// Build with a prepared state, e.g. a mock provider.
    pub async fn build_with_state(state: AppState) -> Result<Self, AppError> {
        // port 0 = random port for testing
        let address = state.config.common.address();
        let listener = TcpListener::bind(&address).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", address, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!(
            port,
            webhook_enabled = state.webhook.is_enabled(),
            "Reflection service listening"
        );

        Ok(Self {
            port,
            listener,
            router: build_router(state),
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until a shutdown signal arrives.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                tracing::error!("HTTP server error: {}", e);
                e
            })
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
