//! Relay binary: load configuration, bind, serve.

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hasura_relay::config::loader;
use hasura_relay::http::HttpServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hasura_relay=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("hasura-relay v0.1.0 starting");

    // Startup aborts if the .env file itself can't be loaded. Unset
    // endpoint/secret are tolerated here and answered with 500s instead.
    let config = loader::load()?;

    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream_configured = config.upstream.is_configured(),
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    let server = HttpServer::new(config);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
