mod config;
mod errors;
mod memory;
mod redis;
mod sqlite;
mod types;

pub use config::{SharedPreferenceStore, init, open_preference_store, share, shared_store};
pub use errors::StorageError;
pub use types::{PreferenceStore, StoreType};
