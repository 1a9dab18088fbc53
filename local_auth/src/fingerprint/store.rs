use async_trait::async_trait;

use crate::authenticator::EnrollmentFingerprint;
use crate::storage::{SharedPreferenceStore, StorageError};

/// Preference key holding the enrollment fingerprint of the last activation.
pub const FINGERPRINT_KEY: &str = "localAuthentication";

/// Persists the enrollment fingerprint recorded at activation.
///
/// Absence of a value means biometric protection was never activated.
#[async_trait]
pub trait FingerprintStore: Send + Sync {
    async fn get(&self) -> Result<Option<EnrollmentFingerprint>, StorageError>;

    async fn set(&self, fingerprint: &EnrollmentFingerprint) -> Result<(), StorageError>;

    async fn is_activated(&self) -> Result<bool, StorageError> {
        Ok(self.get().await?.is_some())
    }
}

/// [`FingerprintStore`] backed by the persisted preference store.
#[derive(Clone)]
pub struct PreferenceFingerprintStore {
    prefs: SharedPreferenceStore,
}

impl PreferenceFingerprintStore {
    pub fn new(prefs: SharedPreferenceStore) -> Self {
        Self { prefs }
    }
}

#[async_trait]
impl FingerprintStore for PreferenceFingerprintStore {
    async fn get(&self) -> Result<Option<EnrollmentFingerprint>, StorageError> {
        let stored = self.prefs.lock().await.get(FINGERPRINT_KEY).await?;

        match stored {
            None => Ok(None),
            Some(encoded) => EnrollmentFingerprint::from_base64(&encoded)
                .map(Some)
                .map_err(|e| StorageError::Corrupt(format!("{FINGERPRINT_KEY}: {e}"))),
        }
    }

    async fn set(&self, fingerprint: &EnrollmentFingerprint) -> Result<(), StorageError> {
        self.prefs
            .lock()
            .await
            .put(FINGERPRINT_KEY, &fingerprint.to_base64())
            .await
    }
}
