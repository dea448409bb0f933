//! Shared application state, dependency-injected into request handlers.

use crate::store::PolicyStore;

#[derive(Clone)]
pub struct AppState {
    pub store: PolicyStore,
}
