//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with the single `/graphql` route
//! - Wire up middleware (tracing)
//! - Bind the server to a listener and serve until shutdown
//!
//! # Design Decisions
//! - Only POST is routed; Axum's method router answers 405 for anything else
//! - The upstream client sits behind a trait object so tests inject a fake

use std::sync::Arc;

use axum::{routing::post, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::RelayConfig;
use crate::graphql::client::{HasuraClient, UpstreamClient};
use crate::http::handlers::graphql_handler;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<RelayConfig>,
    pub upstream: Arc<dyn UpstreamClient>,
}

/// HTTP server for the relay.
pub struct HttpServer {
    router: Router,
    config: RelayConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: RelayConfig) -> Self {
        let upstream = Arc::new(HasuraClient::new(config.upstream.clone()));
        Self::with_upstream(config, upstream)
    }

    /// Create a server with an injected upstream client (used by tests).
    pub fn with_upstream(config: RelayConfig, upstream: Arc<dyn UpstreamClient>) -> Self {
        let state = AppState {
            config: Arc::new(config.clone()),
            upstream,
        };

        let router = Self::build_router(state);
        Self { router, config }
    }

    /// Build the Axum router with middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/graphql", post(graphql_handler))
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &RelayConfig {
        &self.config
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
