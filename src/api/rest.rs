// =============================================================================
// REST API Endpoints — Axum 0.7
// =============================================================================
//
// Two public endpoints: a liveness check and the scoring endpoint. Input
// validation (required numeric fields) is enforced by the `Json` extractor;
// a request that fails to deserialize into `SignalSet` is rejected with
// axum's default client error and never reaches the scorer.
//
// CORS is configured permissively for development; tighten `allowed_origins`
// in production.
// =============================================================================

use axum::{
    extract::Json,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::scorer::{self, SignalSet};

/// Build the REST API router with CORS middleware. The scorer is pure, so
/// the router carries no shared state.
pub fn router() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/predict", post(predict))
        .layer(cors)
}

// =============================================================================
// Health
// =============================================================================

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "healthy" })
}

// =============================================================================
// Predict
// =============================================================================

async fn predict(Json(signals): Json<SignalSet>) -> impl IntoResponse {
    let result = scorer::score(&signals);
    info!(
        health_score = result.health_score,
        trend = %result.trend,
        risk_factors = result.risk_factors.len(),
        "signal set scored"
    );
    Json(result)
}
