use tokio::net::TcpListener;

use crate::router::create_router;

/// Run the API server
pub async fn run_server(host: &str, port: u16) -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "backend_api=debug,tower_http=debug,axum=trace".into()),
        )
        .init();

    let app = create_router();

    let listener = bind_listener(host, port).await?;
    let addr = listener.local_addr()?;
    tracing::info!("Starting server on http://{}", addr);
    tracing::info!("Health check: GET http://{}/health", addr);
    tracing::info!("Predictions: POST http://{}/predict", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Bind through hostname resolution, so HOST may be a name like
/// `localhost` as well as a literal address.
async fn bind_listener(host: &str, port: u16) -> anyhow::Result<TcpListener> {
    let listener = TcpListener::bind((host, port)).await?;
    Ok(listener)
}

/// Resolves when Ctrl+C arrives, letting in-flight requests finish first.
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {err}");
    }
    tracing::info!("Shutting down");
}
