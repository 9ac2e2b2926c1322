use crate::{RecordBackend, StoreResult};

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use log::info;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};

const BUSY_TIMEOUT_SECS: u64 = 5;

pub struct SqliteBackend {
    pool: SqlitePool,
}

impl SqliteBackend {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating if missing) the database file and apply migrations.
    pub async fn connect(path: &Path, max_connections: u32) -> StoreResult<Self> {
        info!("Connecting to database: {}", path.display());

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(
                SqliteConnectOptions::new()
                    .filename(path)
                    .create_if_missing(true)
                    .journal_mode(SqliteJournalMode::Wal)
                    .synchronous(SqliteSynchronous::Normal)
                    .busy_timeout(Duration::from_secs(BUSY_TIMEOUT_SECS)),
            )
            .await?;

        Self::migrate(&pool).await?;
        Ok(Self::new(pool))
    }

    pub async fn migrate(pool: &SqlitePool) -> StoreResult<()> {
        info!("Running database migrations...");
        sqlx::migrate!("./migrations").run(pool).await?;
        info!("Migrations complete");
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl RecordBackend for SqliteBackend {
    async fn load(&self, namespace: &str, key: &str) -> StoreResult<Option<Vec<u8>>> {
        let value: Option<Vec<u8>> = sqlx::query_scalar(
            r#"
              SELECT value
              FROM iv_records
              WHERE namespace = ? AND key = ?
              "#,
        )
        .bind(namespace)
        .bind(key)
        .fetch_optional(&self.pool)
        .await?;

        Ok(value)
    }

    async fn save(&self, namespace: &str, key: &str, value: &[u8]) -> StoreResult<()> {
        let updated_at = Utc::now().timestamp();

        sqlx::query(
            r#"
              INSERT INTO iv_records (namespace, key, value, updated_at)
              VALUES (?, ?, ?, ?)
              ON CONFLICT(namespace, key) DO UPDATE SET
                  value = excluded.value,
                  updated_at = excluded.updated_at
              "#,
        )
        .bind(namespace)
        .bind(key)
        .bind(value)
        .bind(updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, namespace: &str, key: &str) -> StoreResult<()> {
        sqlx::query("DELETE FROM iv_records WHERE namespace = ? AND key = ?")
            .bind(namespace)
            .bind(key)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
