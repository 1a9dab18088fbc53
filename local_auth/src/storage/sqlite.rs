use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;

use super::errors::StorageError;
use super::types::{PreferenceStore, SqlitePreferenceStore};

impl SqlitePreferenceStore {
    pub(crate) fn connect(url: &str, table_prefix: &str) -> Result<Self, StorageError> {
        let opts = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

        // Every connection to an in-memory database gets its own database,
        // so keep exactly one connection alive for the lifetime of the pool.
        let pool = if url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect_lazy_with(opts)
        } else {
            SqlitePoolOptions::new().connect_lazy_with(opts)
        };

        Ok(Self {
            pool,
            table: format!("{table_prefix}preferences"),
        })
    }
}

#[async_trait]
impl PreferenceStore for SqlitePreferenceStore {
    async fn init(&self) -> Result<(), StorageError> {
        let table_name = self.table.as_str();

        sqlx::query(&format!(
            r#"
            CREATE TABLE IF NOT EXISTS {table_name} (
                key TEXT PRIMARY KEY NOT NULL,
                value TEXT NOT NULL,
                updated_at TIMESTAMP NOT NULL
            )
            "#
        ))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let table_name = self.table.as_str();

        let value = sqlx::query_scalar::<_, String>(&format!(
            r#"
            SELECT value FROM {table_name} WHERE key = ?
            "#
        ))
        .bind(key)
        .fetch_optional(&self.pool)
        .await?;

        Ok(value)
    }

    async fn put(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let table_name = self.table.as_str();

        sqlx::query(&format!(
            r#"
            INSERT INTO {table_name} (key, value, updated_at)
            VALUES (?, ?, ?)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#
        ))
        .bind(key)
        .bind(value)
        .bind(chrono::Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
