//! Shared fakes for unit tests across the crate

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::authenticator::{
    AuthPolicy, AuthenticationContext, AuthenticatorProbe, BiometryType, EnrollmentFingerprint,
    EvaluationRequest, PlatformError, SimulatedAuthenticator,
};
use crate::config::StoreSettings;
use crate::fingerprint::{FingerprintStore, PreferenceFingerprintStore};
use crate::flow::AuthFlowController;
use crate::storage::{StorageError, open_preference_store, share};

pub(crate) async fn memory_fingerprint_store() -> PreferenceFingerprintStore {
    let prefs = open_preference_store(&StoreSettings::memory())
        .await
        .expect("memory store should open");
    PreferenceFingerprintStore::new(share(prefs))
}

pub(crate) fn biometric_probe(context: Arc<dyn AuthenticationContext>) -> AuthenticatorProbe {
    AuthenticatorProbe::new(context)
        .with_policy(AuthPolicy::DeviceOwnerAuthenticationWithBiometrics)
        .with_fallback_title("")
}

/// Controller over a fresh simulated authenticator and an empty in-memory store
pub(crate) async fn simulated_controller(
    biometry: BiometryType,
) -> (
    Arc<SimulatedAuthenticator>,
    AuthFlowController<PreferenceFingerprintStore>,
) {
    let sim = Arc::new(SimulatedAuthenticator::new(biometry));
    let controller =
        AuthFlowController::new(biometric_probe(sim.clone()), memory_fingerprint_store().await);
    (sim, controller)
}

/// Authenticator that always succeeds and reports a fixed domain state
pub(crate) struct FixedDomainState(pub Vec<u8>);

#[async_trait]
impl AuthenticationContext for FixedDomainState {
    fn can_evaluate_policy(&self, _policy: AuthPolicy) -> Result<(), PlatformError> {
        Ok(())
    }

    fn biometry_type(&self) -> BiometryType {
        BiometryType::TouchId
    }

    async fn evaluate_policy(&self, _request: &EvaluationRequest) -> Result<bool, PlatformError> {
        Ok(true)
    }

    fn evaluated_policy_domain_state(&self) -> Option<Vec<u8>> {
        Some(self.0.clone())
    }
}

/// Store whose backend is always down
pub(crate) struct FailingFingerprintStore;

#[async_trait]
impl FingerprintStore for FailingFingerprintStore {
    async fn get(&self) -> Result<Option<EnrollmentFingerprint>, StorageError> {
        Err(StorageError::Storage("connection refused".to_string()))
    }

    async fn set(&self, _fingerprint: &EnrollmentFingerprint) -> Result<(), StorageError> {
        Err(StorageError::Storage("connection refused".to_string()))
    }
}

/// In-memory store that counts reads and writes
pub(crate) struct CountingFingerprintStore {
    inner: PreferenceFingerprintStore,
    gets: AtomicUsize,
    sets: AtomicUsize,
}

impl CountingFingerprintStore {
    pub(crate) async fn in_memory() -> Self {
        Self {
            inner: memory_fingerprint_store().await,
            gets: AtomicUsize::new(0),
            sets: AtomicUsize::new(0),
        }
    }

    /// `(gets, sets)` so far
    pub(crate) fn counts(&self) -> (usize, usize) {
        (
            self.gets.load(Ordering::SeqCst),
            self.sets.load(Ordering::SeqCst),
        )
    }
}

#[async_trait]
impl FingerprintStore for CountingFingerprintStore {
    async fn get(&self) -> Result<Option<EnrollmentFingerprint>, StorageError> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        self.inner.get().await
    }

    async fn set(&self, fingerprint: &EnrollmentFingerprint) -> Result<(), StorageError> {
        self.sets.fetch_add(1, Ordering::SeqCst);
        self.inner.set(fingerprint).await
    }
}
