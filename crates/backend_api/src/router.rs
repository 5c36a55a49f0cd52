use axum::{
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{error::ApiError, handlers};
use forecast_engine::PredictionError;

/// Create the main application router with all API endpoints
pub fn create_router() -> Router {
    // Create CORS layer
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the router. Hitting a known path with the wrong method must
    // look exactly like an unknown path, hence the per-route fallbacks.
    Router::new()
        // Health check
        .route(
            "/health",
            get(handlers::health_check).fallback(handlers::not_found),
        )
        // Prediction endpoint
        .route(
            "/predict",
            post(handlers::predict).fallback(handlers::not_found),
        )
        // Unknown routes
        .fallback(handlers::not_found)
        // Add middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(handle_panic))
}

/// Turn a handler panic into the generic prediction failure response, so a
/// poisoned request can never take the process down.
fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    tracing::error!("Handler panicked: {details}");
    ApiError::Prediction(PredictionError::Internal(details)).into_response()
}
