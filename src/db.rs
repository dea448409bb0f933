//! Connection pools over the two supported backends.
//!
//! The pool is the only shared resource. Request-scoped work checks a
//! connection out and the guard returns it on drop, on every exit path.
//! sqlx pools never auto-commit; transaction boundaries are explicit.

use crate::config::DatabaseConfig;
use crate::error::ConfigError;
use crate::secrets::{resolve_descriptor, ConnectionDescriptor};
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

const MAX_CONNECTIONS: u32 = 5;

#[derive(Clone)]
pub enum Database {
    Postgres { pool: PgPool, schema: String },
    Sqlite { pool: SqlitePool },
}

impl Database {
    /// Build the pool for the configured backend, resolving credentials from
    /// the secret store when required. Pool construction checks connectivity,
    /// so an unreachable database aborts startup.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, ConfigError> {
        match config {
            DatabaseConfig::File { path } => {
                let options = SqliteConnectOptions::new()
                    .filename(path)
                    .create_if_missing(true);
                let pool = SqlitePoolOptions::new()
                    .max_connections(MAX_CONNECTIONS)
                    .connect_with(options)
                    .await?;
                tracing::info!(path = %path.display(), "connected to file-backed store");
                Ok(Database::Sqlite { pool })
            }
            DatabaseConfig::Url { url } => {
                let pool = PgPoolOptions::new()
                    .max_connections(MAX_CONNECTIONS)
                    .connect(url)
                    .await?;
                tracing::info!("connected via DATABASE_URL override");
                Ok(Database::Postgres {
                    pool,
                    schema: "public".into(),
                })
            }
            DatabaseConfig::Secret { name } => {
                let descriptor = resolve_descriptor(name).await?;
                let pool = PgPoolOptions::new()
                    .max_connections(MAX_CONNECTIONS)
                    .connect_with(pg_options(&descriptor))
                    .await?;
                tracing::info!(
                    host = %descriptor.host,
                    port = descriptor.port,
                    dbname = %descriptor.dbname,
                    schema = %descriptor.schema,
                    "connected to networked store"
                );
                Ok(Database::Postgres {
                    pool,
                    schema: descriptor.schema,
                })
            }
        }
    }
}

/// Options built field-by-field so no credential-bearing URL string exists to
/// leak into logs.
fn pg_options(d: &ConnectionDescriptor) -> PgConnectOptions {
    PgConnectOptions::new()
        .host(&d.host)
        .port(d.port)
        .username(&d.username)
        .password(&d.password)
        .database(&d.dbname)
}
