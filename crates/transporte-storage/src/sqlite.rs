//! SQLite implementation of the identification-type store.

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqlitePool};
use tracing::debug;
use transporte_identification_types::store::{IdentificationTypeStore, StoreError};
use transporte_identification_types::types::IdentificationType;

/// Backing table for identification types
const SCHEMA: &str = "\
CREATE TABLE IF NOT EXISTS tipo_identificacion (
    id   INTEGER PRIMARY KEY AUTOINCREMENT,
    name VARCHAR(50) NOT NULL
)";

/// SQLite-backed identification-type store
pub struct SqliteIdentificationTypeStore {
    pool: SqlitePool,
}

impl SqliteIdentificationTypeStore {
    /// Open the database at the given URL and bootstrap the schema.
    ///
    /// The URL is resolved once at startup (e.g. `sqlite://data/app.db`)
    /// and a missing database file is created on first use.
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(sqlx_err)?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .map_err(sqlx_err)?;

        sqlx::query(SCHEMA).execute(&pool).await.map_err(sqlx_err)?;
        debug!("Opened SQLite store at {}", url);

        Ok(Self { pool })
    }

    /// Probe store connectivity (used by the readiness endpoint)
    pub async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(sqlx_err)?;
        Ok(())
    }

    /// Access the underlying pool.
    ///
    /// Rows are presumed pre-existing in production; tests seed through
    /// this handle since no create operation is exposed.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

fn sqlx_err(e: sqlx::Error) -> StoreError {
    StoreError::Unavailable(e.to_string())
}

fn row_to_entity(row: SqliteRow) -> Result<IdentificationType, StoreError> {
    Ok(IdentificationType {
        id: row.try_get("id").map_err(decode_err)?,
        name: row.try_get("name").map_err(decode_err)?,
    })
}

fn decode_err(e: sqlx::Error) -> StoreError {
    StoreError::Decode(e.to_string())
}

#[async_trait]
impl IdentificationTypeStore for SqliteIdentificationTypeStore {
    // No ORDER BY: callers treat row order as unspecified.
    async fn list(&self) -> Result<Vec<IdentificationType>, StoreError> {
        let rows = sqlx::query("SELECT id, name FROM tipo_identificacion")
            .fetch_all(&self.pool)
            .await
            .map_err(sqlx_err)?;

        rows.into_iter().map(row_to_entity).collect()
    }

    async fn find(&self, id: i64) -> Result<Option<IdentificationType>, StoreError> {
        let row = sqlx::query("SELECT id, name FROM tipo_identificacion WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(sqlx_err)?;

        row.map(row_to_entity).transpose()
    }

    async fn update_name(&self, id: i64, name: &str) -> Result<u64, StoreError> {
        let result = sqlx::query("UPDATE tipo_identificacion SET name = ? WHERE id = ?")
            .bind(name)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(sqlx_err)?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM tipo_identificacion WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(sqlx_err)?;

        Ok(result.rows_affected())
    }

    async fn exists(&self, id: i64) -> Result<bool, StoreError> {
        let row = sqlx::query("SELECT 1 FROM tipo_identificacion WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(sqlx_err)?;

        Ok(row.is_some())
    }
}
