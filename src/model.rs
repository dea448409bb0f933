//! The persisted policy row and its transfer shape.

use serde::Serialize;
use sqlx::FromRow;

/// A row of the policies table. Only `id` is constrained non-null; monetary
/// amounts are non-negative by convention, not enforced.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Policy {
    pub id: i64,
    pub name: Option<String>,
    pub coverage_amount: Option<f64>,
    pub premium: Option<f64>,
}

/// Response body for the policy endpoints: a full projection of the row,
/// no hidden fields.
#[derive(Debug, Serialize)]
pub struct PolicyResponse {
    pub id: i64,
    pub name: Option<String>,
    pub coverage_amount: Option<f64>,
    pub premium: Option<f64>,
}

impl From<Policy> for PolicyResponse {
    fn from(p: Policy) -> Self {
        PolicyResponse {
            id: p.id,
            name: p.name,
            coverage_amount: p.coverage_amount,
            premium: p.premium,
        }
    }
}
