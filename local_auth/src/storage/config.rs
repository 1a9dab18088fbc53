use std::sync::Arc;
use tokio::sync::{Mutex, OnceCell};

use super::errors::StorageError;
use super::types::{
    InMemoryPreferenceStore, PreferenceStore, RedisPreferenceStore, SqlitePreferenceStore,
    StoreType,
};
use crate::config::StoreSettings;

/// Preference store shared between the flows of one process.
pub type SharedPreferenceStore = Arc<Mutex<Box<dyn PreferenceStore>>>;

static PREFERENCE_STORE: OnceCell<SharedPreferenceStore> = OnceCell::const_new();

/// Open and initialize a preference store backend.
pub async fn open_preference_store(
    settings: &StoreSettings,
) -> Result<Box<dyn PreferenceStore>, StorageError> {
    tracing::info!(
        "Initializing preference store with type: {}",
        settings.store_type
    );

    let store: Box<dyn PreferenceStore> = match settings.store_type {
        StoreType::Memory => Box::new(InMemoryPreferenceStore::new()),
        StoreType::Redis => Box::new(RedisPreferenceStore::open(&settings.url)?),
        StoreType::Sqlite => Box::new(SqlitePreferenceStore::connect(
            &settings.url,
            &settings.table_prefix,
        )?),
    };

    if let Err(e) = store.init().await {
        tracing::error!("Failed to initialize preference store: {}", e);
        return Err(e);
    }

    tracing::info!("Connected to preference store: type={}", settings.store_type);

    Ok(store)
}

/// Wrap a store so it can be shared between flows.
pub fn share(store: Box<dyn PreferenceStore>) -> SharedPreferenceStore {
    Arc::new(Mutex::new(store))
}

/// Install the process-wide preference store from the environment.
///
/// Only the first call opens a backend; later calls return the same store.
pub async fn init() -> Result<SharedPreferenceStore, StorageError> {
    PREFERENCE_STORE
        .get_or_try_init(|| async {
            let settings = StoreSettings::from_env()?;
            open_preference_store(&settings).await.map(share)
        })
        .await
        .cloned()
}

/// The process-wide store, if [`init`] has completed.
pub fn shared_store() -> Option<SharedPreferenceStore> {
    PREFERENCE_STORE.get().cloned()
}
