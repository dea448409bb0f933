//! Policy service: read-only REST API over the insurance policies table.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod secrets;
pub mod state;
pub mod store;

pub use config::{AppConfig, DatabaseConfig};
pub use db::Database;
pub use error::{AppError, ConfigError};
pub use model::{Policy, PolicyResponse};
pub use routes::app_routes;
pub use secrets::{resolve_descriptor, ConnectionDescriptor};
pub use state::AppState;
pub use store::PolicyStore;
