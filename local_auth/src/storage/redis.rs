use async_trait::async_trait;
use redis::{self, AsyncCommands};

use super::errors::StorageError;
use super::types::{PreferenceStore, RedisPreferenceStore};

const PREFS_PREFIX: &str = "prefs";

impl RedisPreferenceStore {
    pub(crate) fn open(url: &str) -> Result<Self, StorageError> {
        let client = redis::Client::open(url)?;
        Ok(Self { client })
    }

    fn make_key(key: &str) -> String {
        format!("{PREFS_PREFIX}:{key}")
    }
}

#[async_trait]
impl PreferenceStore for RedisPreferenceStore {
    async fn init(&self) -> Result<(), StorageError> {
        // Verify the connection works
        let _conn = self.client.get_multiplexed_async_connection().await?;
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;

        let key = Self::make_key(key);
        let value: Option<String> = conn.get(&key).await?;
        Ok(value)
    }

    async fn put(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;

        let key = Self::make_key(key);
        let _: () = conn.set(&key, value).await?;
        Ok(())
    }
}
