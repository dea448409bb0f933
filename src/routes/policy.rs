//! Policy routes, mounted under /api.

use crate::handlers::policy::{list_policies, read_policy, test_route};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn policy_routes(state: AppState) -> Router {
    Router::new()
        .route("/test", get(test_route))
        .route("/policies", get(list_policies))
        .route("/policies/:id", get(read_policy))
        .with_state(state)
}
