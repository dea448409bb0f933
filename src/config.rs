//! Env-driven startup configuration. Resolved once in `main`, never reloaded.

use crate::error::ConfigError;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Secret looked up when neither `POLICY_DB_FILE` nor `DATABASE_URL` is set.
const DEFAULT_SECRET_NAME: &str = "insurance-policy-db-credentials";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Where the policies table lives. The variant is selected explicitly from
/// the environment, never inferred from a connection-string prefix.
#[derive(Debug, Clone)]
pub enum DatabaseConfig {
    /// SQLite file for local runs and tests (`POLICY_DB_FILE`).
    File { path: PathBuf },
    /// Explicit PostgreSQL connection string (`DATABASE_URL`), bypassing the
    /// secret store.
    Url { url: String },
    /// Credentials resolved from AWS Secrets Manager (`POLICY_DB_SECRET`).
    Secret { name: String },
}

impl DatabaseConfig {
    /// Precedence: file > url override > secret resolution.
    fn select(file: Option<String>, url: Option<String>, secret: Option<String>) -> Self {
        if let Some(path) = file {
            DatabaseConfig::File { path: PathBuf::from(path) }
        } else if let Some(url) = url {
            DatabaseConfig::Url { url }
        } else {
            DatabaseConfig::Secret {
                name: secret.unwrap_or_else(|| DEFAULT_SECRET_NAME.into()),
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub database: DatabaseConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.into());
        let bind_addr: SocketAddr = bind_addr.parse().map_err(|e: std::net::AddrParseError| {
            ConfigError::Env {
                name: "BIND_ADDR",
                reason: e.to_string(),
            }
        })?;

        let database = DatabaseConfig::select(
            std::env::var("POLICY_DB_FILE").ok(),
            std::env::var("DATABASE_URL").ok(),
            std::env::var("POLICY_DB_SECRET").ok(),
        );

        Ok(AppConfig { bind_addr, database })
    }
}
