//! Policy endpoints: paginated list, by-id lookup, and the test probe.

use crate::error::AppError;
use crate::model::PolicyResponse;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub skip: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    10
}

pub async fn test_route() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Test route works!" }))
}

pub async fn list_policies(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<PolicyResponse>>, AppError> {
    tracing::info!(skip = params.skip, limit = params.limit, "listing policies");
    let policies = state.store.list(params.skip, params.limit).await?;
    tracing::info!(count = policies.len(), "retrieved policies");
    Ok(Json(policies.into_iter().map(PolicyResponse::from).collect()))
}

pub async fn read_policy(
    State(state): State<AppState>,
    Path(policy_id): Path<i64>,
) -> Result<Json<PolicyResponse>, AppError> {
    tracing::info!(policy_id, "reading policy");
    let policy = state.store.get(policy_id).await?.ok_or_else(|| {
        tracing::warn!(policy_id, "policy not found");
        AppError::NotFound("Policy not found".into())
    })?;
    Ok(Json(PolicyResponse::from(policy)))
}
