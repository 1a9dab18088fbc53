use std::sync::Arc;
use tokio::sync::oneshot;

use super::reasons::{
    ENROLLMENT_CHANGED, NO_ENROLLMENT_FINGERPRINT, NOT_ACTIVATED, POLICY_NOT_SUCCEEDED,
    STORE_UNAVAILABLE,
};
use super::types::{AuthPurpose, AuthResult, FlowState};
use crate::authenticator::{AuthenticatorProbe, BiometricCapability, EnrollmentFingerprint};
use crate::fingerprint::FingerprintStore;
use crate::storage::StorageError;

/// Runs Activation and Verification flows.
///
/// Each call to [`request_auth`](Self::request_auth) is a fresh run through
/// `Idle -> Probing -> Evaluating -> (Comparing | Recording) -> Done`; nothing
/// is carried over between calls except what the store persists. Only one
/// flow should be in flight per authenticator context.
pub struct AuthFlowController<S> {
    probe: AuthenticatorProbe,
    store: S,
}

impl<S: FingerprintStore> AuthFlowController<S> {
    pub fn new(probe: AuthenticatorProbe, store: S) -> Self {
        Self { probe, store }
    }

    pub fn probe(&self) -> &AuthenticatorProbe {
        &self.probe
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Capability of the controller's authenticator, for passing back into
    /// [`request_auth`](Self::request_auth).
    pub fn query_capability(&self) -> BiometricCapability {
        self.probe.query_capability()
    }

    /// Whether an activation is on record.
    pub async fn is_activated(&self) -> Result<bool, StorageError> {
        self.store.is_activated().await
    }

    /// Run one flow to completion.
    ///
    /// Every failure is terminal and reported as [`AuthResult::Failure`];
    /// nothing is retried. Callers retry by calling again.
    pub async fn request_auth(
        &self,
        purpose: AuthPurpose,
        capability: &BiometricCapability,
        reason: &str,
    ) -> AuthResult {
        let mut state = FlowState::Idle;
        let result = self.run(&mut state, purpose, capability, reason).await;
        advance(&mut state, FlowState::Done, purpose);

        match &result {
            AuthResult::Success => tracing::debug!("{:?} flow succeeded", purpose),
            AuthResult::Failure(why) => tracing::debug!("{:?} flow failed: {}", purpose, why),
        }
        result
    }

    async fn run(
        &self,
        state: &mut FlowState,
        purpose: AuthPurpose,
        capability: &BiometricCapability,
        reason: &str,
    ) -> AuthResult {
        advance(state, FlowState::Probing, purpose);
        if let Some(why) = capability.unavailable_reason() {
            return AuthResult::failure(why);
        }

        advance(state, FlowState::Evaluating, purpose);
        match self.probe.evaluate(reason).await {
            Ok(true) => {}
            Ok(false) => return AuthResult::failure(POLICY_NOT_SUCCEEDED),
            Err(err) => {
                tracing::debug!("Policy evaluation failed: {}", err);
                return AuthResult::failure(err.reason());
            }
        }

        let Some(fingerprint) = self.probe.current_enrollment_fingerprint() else {
            return AuthResult::failure(NO_ENROLLMENT_FINGERPRINT);
        };

        match purpose {
            AuthPurpose::Activation => {
                advance(state, FlowState::Recording, purpose);
                self.record(&fingerprint).await
            }
            AuthPurpose::Verification => {
                advance(state, FlowState::Comparing, purpose);
                self.compare(&fingerprint).await
            }
        }
    }

    async fn record(&self, fingerprint: &EnrollmentFingerprint) -> AuthResult {
        match self.store.set(fingerprint).await {
            Ok(()) => {
                tracing::info!(
                    "Recorded enrollment fingerprint {}",
                    fingerprint.digest()
                );
                AuthResult::Success
            }
            Err(e) => {
                tracing::error!("Failed to record enrollment fingerprint: {}", e);
                AuthResult::failure(STORE_UNAVAILABLE)
            }
        }
    }

    async fn compare(&self, fresh: &EnrollmentFingerprint) -> AuthResult {
        let stored = match self.store.get().await {
            Ok(Some(stored)) => stored,
            Ok(None) => return AuthResult::failure(NOT_ACTIVATED),
            Err(e) => {
                tracing::error!("Failed to read enrollment fingerprint: {}", e);
                return AuthResult::failure(STORE_UNAVAILABLE);
            }
        };

        if stored == *fresh {
            AuthResult::Success
        } else {
            tracing::warn!(
                "Enrollment changed since activation: {} -> {}",
                stored.digest(),
                fresh.digest()
            );
            AuthResult::failure(ENROLLMENT_CHANGED)
        }
    }
}

impl<S: FingerprintStore + 'static> AuthFlowController<S> {
    /// Run a flow on the tokio runtime and deliver its single result
    /// through a channel.
    pub fn spawn_request_auth(
        self: Arc<Self>,
        purpose: AuthPurpose,
        capability: BiometricCapability,
        reason: String,
    ) -> oneshot::Receiver<AuthResult> {
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let result = self.request_auth(purpose, &capability, &reason).await;
            if tx.send(result).is_err() {
                tracing::debug!("{:?} result dropped: receiver went away", purpose);
            }
        });
        rx
    }
}

fn advance(state: &mut FlowState, next: FlowState, purpose: AuthPurpose) {
    tracing::trace!("{:?} flow: {} -> {}", purpose, state, next);
    *state = next;
}
