//! Paginated list and by-id lookup over the policies table. The table lives
//! in the schema resolved at startup on PostgreSQL (default `public`); SQLite
//! has no schemas and uses the bare name.

use crate::db::Database;
use crate::error::AppError;
use crate::model::Policy;

/// Upper bound on a single page; larger requests are clamped, not rejected.
pub const MAX_PAGE_SIZE: u32 = 1000;

const SELECT_COLUMNS: &str = "id, name, coverage_amount, premium";

#[derive(Clone)]
pub struct PolicyStore {
    db: Database,
}

impl PolicyStore {
    pub fn new(db: Database) -> Self {
        PolicyStore { db }
    }

    /// Schema-qualified table name on PostgreSQL, bare name on SQLite.
    fn table(&self) -> String {
        match &self.db {
            Database::Postgres { schema, .. } => format!("{}.policies", schema),
            Database::Sqlite { .. } => "policies".into(),
        }
    }

    /// Create the policies table and its name index if missing. Idempotent;
    /// run at startup so a freshly created file-backed store is usable
    /// without external provisioning.
    pub async fn ensure_policies_table(&self) -> Result<(), AppError> {
        match &self.db {
            Database::Postgres { pool, schema } => {
                sqlx::query(&format!("CREATE SCHEMA IF NOT EXISTS {}", schema))
                    .execute(pool)
                    .await?;
                let ddl = format!(
                    r#"
                    CREATE TABLE IF NOT EXISTS {} (
                        id BIGSERIAL PRIMARY KEY,
                        name TEXT,
                        coverage_amount DOUBLE PRECISION,
                        premium DOUBLE PRECISION
                    )
                    "#,
                    self.table()
                );
                sqlx::query(&ddl).execute(pool).await?;
                sqlx::query(&format!(
                    "CREATE INDEX IF NOT EXISTS policies_name_idx ON {} (name)",
                    self.table()
                ))
                .execute(pool)
                .await?;
            }
            Database::Sqlite { pool } => {
                sqlx::query(
                    r#"
                    CREATE TABLE IF NOT EXISTS policies (
                        id INTEGER PRIMARY KEY AUTOINCREMENT,
                        name TEXT,
                        coverage_amount REAL,
                        premium REAL
                    )
                    "#,
                )
                .execute(pool)
                .await?;
                sqlx::query("CREATE INDEX IF NOT EXISTS policies_name_idx ON policies (name)")
                    .execute(pool)
                    .await?;
            }
        }
        Ok(())
    }

    /// Page through policies in insertion order (serial id). `skip` rows are
    /// discarded from the front and at most `limit` rows are returned;
    /// `limit = 0` yields an empty page.
    pub async fn list(&self, skip: u32, limit: u32) -> Result<Vec<Policy>, AppError> {
        let limit = limit.min(MAX_PAGE_SIZE);
        tracing::debug!(skip, limit, "fetching policies");
        let rows = match &self.db {
            Database::Postgres { pool, .. } => {
                let sql = format!(
                    "SELECT {} FROM {} ORDER BY id OFFSET $1 LIMIT $2",
                    SELECT_COLUMNS,
                    self.table()
                );
                let mut conn = pool.acquire().await?;
                sqlx::query_as::<_, Policy>(&sql)
                    .bind(i64::from(skip))
                    .bind(i64::from(limit))
                    .fetch_all(&mut *conn)
                    .await?
            }
            Database::Sqlite { pool } => {
                let sql = format!(
                    "SELECT {} FROM policies ORDER BY id LIMIT ?1 OFFSET ?2",
                    SELECT_COLUMNS
                );
                let mut conn = pool.acquire().await?;
                sqlx::query_as::<_, Policy>(&sql)
                    .bind(i64::from(limit))
                    .bind(i64::from(skip))
                    .fetch_all(&mut *conn)
                    .await?
            }
        };
        tracing::debug!(count = rows.len(), "retrieved policies");
        Ok(rows)
    }

    /// Fetch one policy by id. Absence is `None`, never an error.
    pub async fn get(&self, id: i64) -> Result<Option<Policy>, AppError> {
        tracing::debug!(id, "fetching policy");
        let row = match &self.db {
            Database::Postgres { pool, .. } => {
                let sql = format!(
                    "SELECT {} FROM {} WHERE id = $1",
                    SELECT_COLUMNS,
                    self.table()
                );
                let mut conn = pool.acquire().await?;
                sqlx::query_as::<_, Policy>(&sql)
                    .bind(id)
                    .fetch_optional(&mut *conn)
                    .await?
            }
            Database::Sqlite { pool } => {
                let sql = format!("SELECT {} FROM policies WHERE id = ?1", SELECT_COLUMNS);
                let mut conn = pool.acquire().await?;
                sqlx::query_as::<_, Policy>(&sql)
                    .bind(id)
                    .fetch_optional(&mut *conn)
                    .await?
            }
        };
        if row.is_none() {
            tracing::debug!(id, "no policy found");
        }
        Ok(row)
    }
}
