//! Router assembly.

pub mod common;
pub mod policy;

use crate::state::AppState;
use axum::Router;

/// Full application router: `/`, `/api/health`, `/api/test`,
/// `/api/policies`, `/api/policies/:id`.
pub fn app_routes(state: AppState) -> Router {
    Router::new()
        .merge(common::root_routes())
        .nest(
            "/api",
            common::health_routes().merge(policy::policy_routes(state)),
        )
}
