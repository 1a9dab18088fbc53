//! Central configuration for the local_auth crate

use std::{env, str::FromStr, sync::LazyLock};

use crate::authenticator::AuthPolicy;
use crate::storage::StoreType;

/// Backend of the persisted preference store.
///
/// Default: "memory"
pub(crate) static LOCAL_AUTH_STORE_TYPE: LazyLock<String> = LazyLock::new(|| {
    env::var("LOCAL_AUTH_STORE_TYPE").unwrap_or_else(|_| StoreType::Memory.to_string())
});

/// Connection URL of the preference store backend (unused for "memory").
pub(crate) static LOCAL_AUTH_STORE_URL: LazyLock<String> =
    LazyLock::new(|| env::var("LOCAL_AUTH_STORE_URL").unwrap_or_default());

/// Table prefix for SQL backends.
///
/// Default: "la_"
pub(crate) static LOCAL_AUTH_TABLE_PREFIX: LazyLock<String> =
    LazyLock::new(|| env::var("LOCAL_AUTH_TABLE_PREFIX").unwrap_or_else(|_| "la_".to_string()));

/// Policy evaluated by the authenticator probe.
pub(crate) static LOCAL_AUTH_POLICY: LazyLock<AuthPolicy> =
    LazyLock::new(|| parse_policy(env::var("LOCAL_AUTH_POLICY").ok().as_deref()));

/// Justification shown in the authentication prompt when the caller has none.
pub static LOCAL_AUTH_PROMPT_REASON: LazyLock<String> = LazyLock::new(|| {
    env::var("LOCAL_AUTH_PROMPT_REASON")
        .unwrap_or_else(|_| "Confirm your identity to continue".to_string())
});

/// Title of the passcode fallback button. Empty hides the button.
pub(crate) static LOCAL_AUTH_FALLBACK_TITLE: LazyLock<String> =
    LazyLock::new(|| env::var("LOCAL_AUTH_FALLBACK_TITLE").unwrap_or_default());

pub(crate) fn parse_policy(value: Option<&str>) -> AuthPolicy {
    match value {
        None => AuthPolicy::default(),
        Some(v) => match v.to_lowercase().as_str() {
            "biometrics" => AuthPolicy::DeviceOwnerAuthenticationWithBiometrics,
            "device_owner" => AuthPolicy::DeviceOwnerAuthentication,
            invalid => {
                tracing::warn!("Invalid policy: {}. Using default 'biometrics'", invalid);
                AuthPolicy::default()
            }
        },
    }
}

/// Settings used to open the preference store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreSettings {
    pub store_type: StoreType,
    pub url: String,
    pub table_prefix: String,
}

impl StoreSettings {
    /// Read settings from the `LOCAL_AUTH_STORE_*` environment variables.
    pub fn from_env() -> Result<Self, crate::storage::StorageError> {
        Ok(Self {
            store_type: StoreType::from_str(LOCAL_AUTH_STORE_TYPE.as_str())?,
            url: LOCAL_AUTH_STORE_URL.clone(),
            table_prefix: LOCAL_AUTH_TABLE_PREFIX.clone(),
        })
    }

    pub fn memory() -> Self {
        Self {
            store_type: StoreType::Memory,
            url: String::new(),
            table_prefix: "la_".to_string(),
        }
    }
}
