//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Startup-fatal errors. The process must not serve requests after any of
/// these; `main` propagates them and aborts.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid {name}: {reason}")]
    Env { name: &'static str, reason: String },
    #[error("secret fetch '{name}': {reason}")]
    SecretFetch { name: String, reason: String },
    #[error("secret payload '{name}': {reason}")]
    SecretParse { name: String, reason: String },
    #[error("database connect: {0}")]
    Connect(#[from] sqlx::Error),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Db(e) => {
                // Full cause stays server-side; clients get a fixed body.
                tracing::error!(error = %e, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string())
            }
        };
        (status, Json(ErrorBody { detail })).into_response()
    }
}
