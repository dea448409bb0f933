//! Routes with no store dependency: root and health.

use axum::{routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
}

#[derive(Serialize)]
struct MessageBody {
    message: &'static str,
}

async fn root() -> Json<MessageBody> {
    tracing::info!("root endpoint accessed");
    Json(MessageBody {
        message: "Welcome to the API",
    })
}

// Liveness only. A degraded database must not make the process appear dead
// to an orchestrator; a readiness probe would be the place for a DB check.
async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}

/// GET / — the unprefixed root endpoint.
pub fn root_routes() -> Router {
    Router::new().route("/", get(root))
}

/// GET /health, mounted under /api. Independent of database and secret store.
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health))
}
