//! Axum router configuration with middleware.
//!
//! The page lives at `/`, the JSON API under `/api/v1/`.
//! Middleware: CORS, request tracing.

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use medchat_core::inference::InferenceBackend;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router<B: InferenceBackend + 'static>(state: AppState<B>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/transcript", get(handlers::chat::get_transcript::<B>))
        .route("/transcript/clear", post(handlers::chat::clear_transcript::<B>))
        .route("/chat", post(handlers::chat::post_chat::<B>));

    Router::new()
        .route("/", get(handlers::page::show::<B>))
        .route("/ask", post(handlers::page::ask::<B>))
        .route("/clear", post(handlers::page::clear::<B>))
        .nest("/api/v1", api_routes)
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health - Liveness probe.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
