use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use super::errors::StorageError;

/// Supported preference store backends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreType {
    Memory,
    Redis,
    Sqlite,
}

impl fmt::Display for StoreType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Memory => "memory",
            Self::Redis => "redis",
            Self::Sqlite => "sqlite",
        };
        f.write_str(name)
    }
}

impl FromStr for StoreType {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "memory" => Ok(Self::Memory),
            "redis" => Ok(Self::Redis),
            "sqlite" => Ok(Self::Sqlite),
            t => Err(StorageError::Config(format!(
                "Unsupported preference store type: {t}. Supported types are 'memory', 'redis' and 'sqlite'"
            ))),
        }
    }
}

pub(crate) struct InMemoryPreferenceStore {
    pub(super) entry: HashMap<String, String>,
}

pub(crate) struct RedisPreferenceStore {
    pub(super) client: redis::Client,
}

pub(crate) struct SqlitePreferenceStore {
    pub(super) pool: sqlx::SqlitePool,
    pub(super) table: String,
}

/// Process-wide key-value preferences without expiry.
#[async_trait]
pub trait PreferenceStore: Send + Sync + 'static {
    /// Initialize the store. This is called when the store is opened.
    async fn init(&self) -> Result<(), StorageError>;

    /// Read the value stored under `key`.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    async fn put(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}
