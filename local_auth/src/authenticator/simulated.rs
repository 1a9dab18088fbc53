//! In-process authenticator for demos and tests.
//!
//! Behaves like a platform authenticator that always answers immediately.
//! Its domain state is a SHA-256 digest over the enrolled templates, so any
//! enrollment change yields a different fingerprint.

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use std::collections::{BTreeSet, VecDeque};
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::context::AuthenticationContext;
use super::errors::PlatformError;
use super::types::{AuthPolicy, BiometryType, EvaluationRequest};

pub struct SimulatedAuthenticator {
    state: Mutex<SimulatedState>,
}

struct SimulatedState {
    biometry: BiometryType,
    passcode_set: bool,
    locked_out: bool,
    withhold_domain_state: bool,
    enrolled: BTreeSet<String>,
    scripted: VecDeque<Result<bool, PlatformError>>,
    evaluations: usize,
    domain_state: Option<Vec<u8>>,
    last_request: Option<EvaluationRequest>,
}

impl SimulatedState {
    fn check(&self, policy: AuthPolicy) -> Result<(), PlatformError> {
        if !self.passcode_set {
            return Err(PlatformError::PasscodeNotSet);
        }
        if policy == AuthPolicy::DeviceOwnerAuthentication {
            return Ok(());
        }
        if self.biometry == BiometryType::None {
            return Err(PlatformError::BiometryNotAvailable);
        }
        if self.enrolled.is_empty() {
            return Err(PlatformError::BiometryNotEnrolled);
        }
        if self.locked_out {
            return Err(PlatformError::BiometryLockout);
        }
        Ok(())
    }

    fn enrolled_digest(&self) -> Vec<u8> {
        let mut hasher = Sha256::new();
        for template in &self.enrolled {
            hasher.update(template.as_bytes());
            hasher.update([0u8]);
        }
        hasher.finalize().to_vec()
    }
}

impl SimulatedAuthenticator {
    /// Authenticator with a passcode and a single enrolled template.
    pub fn new(biometry: BiometryType) -> Self {
        Self {
            state: Mutex::new(SimulatedState {
                biometry,
                passcode_set: true,
                locked_out: false,
                withhold_domain_state: false,
                enrolled: BTreeSet::from(["template-0".to_string()]),
                scripted: VecDeque::new(),
                evaluations: 0,
                domain_state: None,
                last_request: None,
            }),
        }
    }

    fn state(&self) -> MutexGuard<'_, SimulatedState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Add a biometric template. Changes the enrollment fingerprint.
    pub fn enroll(&self, template: impl Into<String>) {
        self.state().enrolled.insert(template.into());
    }

    /// Remove a biometric template. Changes the enrollment fingerprint.
    pub fn remove_enrollment(&self, template: &str) {
        self.state().enrolled.remove(template);
    }

    pub fn set_passcode(&self, set: bool) {
        self.state().passcode_set = set;
    }

    pub fn set_locked_out(&self, locked_out: bool) {
        self.state().locked_out = locked_out;
    }

    /// Make successful evaluations report no domain state.
    pub fn set_withhold_domain_state(&self, withhold: bool) {
        self.state().withhold_domain_state = withhold;
    }

    /// Queue the outcome of the next evaluation.
    ///
    /// Queued outcomes are consumed in order; once the queue is empty the
    /// authenticator succeeds whenever the policy can be evaluated.
    pub fn push_outcome(&self, outcome: Result<bool, PlatformError>) {
        self.state().scripted.push_back(outcome);
    }

    /// Number of prompts shown so far.
    pub fn evaluations(&self) -> usize {
        self.state().evaluations
    }

    pub fn last_request(&self) -> Option<EvaluationRequest> {
        self.state().last_request.clone()
    }
}

#[async_trait]
impl AuthenticationContext for SimulatedAuthenticator {
    fn can_evaluate_policy(&self, policy: AuthPolicy) -> Result<(), PlatformError> {
        self.state().check(policy)
    }

    fn biometry_type(&self) -> BiometryType {
        self.state().biometry
    }

    async fn evaluate_policy(&self, request: &EvaluationRequest) -> Result<bool, PlatformError> {
        // The user is "looking at the prompt" here.
        tokio::task::yield_now().await;

        let mut state = self.state();
        state.evaluations += 1;
        state.last_request = Some(request.clone());
        state.domain_state = None;

        let outcome = match state.scripted.pop_front() {
            Some(outcome) => outcome,
            None => state.check(request.policy).map(|()| true),
        };

        if outcome == Ok(true) && !state.withhold_domain_state {
            let digest = state.enrolled_digest();
            state.domain_state = Some(digest);
        }

        tracing::trace!(
            "Simulated evaluation #{} finished: {:?}",
            state.evaluations,
            outcome
        );
        outcome
    }

    fn evaluated_policy_domain_state(&self) -> Option<Vec<u8>> {
        self.state().domain_state.clone()
    }
}
