use std::sync::Arc;

use super::context::AuthenticationContext;
use super::errors::PlatformError;
use super::types::{
    AuthPolicy, BiometricCapability, BiometryType, EnrollmentFingerprint, EvaluationRequest,
};
use crate::config::{LOCAL_AUTH_FALLBACK_TITLE, LOCAL_AUTH_POLICY};

/// Queries the platform authenticator and translates what it reports.
///
/// The probe never touches the fingerprint store.
#[derive(Clone)]
pub struct AuthenticatorProbe {
    context: Arc<dyn AuthenticationContext>,
    policy: AuthPolicy,
    fallback_title: String,
}

impl AuthenticatorProbe {
    /// Probe over `context` using the configured policy and fallback title.
    pub fn new(context: Arc<dyn AuthenticationContext>) -> Self {
        Self {
            context,
            policy: *LOCAL_AUTH_POLICY,
            fallback_title: LOCAL_AUTH_FALLBACK_TITLE.clone(),
        }
    }

    pub fn with_policy(mut self, policy: AuthPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_fallback_title(mut self, title: impl Into<String>) -> Self {
        self.fallback_title = title.into();
        self
    }

    pub fn policy(&self) -> AuthPolicy {
        self.policy
    }

    /// Non-prompting capability check.
    pub fn query_capability(&self) -> BiometricCapability {
        if let Err(err) = self.context.can_evaluate_policy(self.policy) {
            let reason = err.reason();
            tracing::debug!("Biometric authentication unavailable: {} ({})", reason, err);
            return BiometricCapability::Unavailable {
                reason: reason.to_string(),
            };
        }

        let capability = match self.context.biometry_type() {
            BiometryType::TouchId => BiometricCapability::TouchModality,
            BiometryType::FaceId => BiometricCapability::FaceModality,
            BiometryType::None | BiometryType::Unknown => BiometricCapability::None,
        };
        tracing::debug!("Biometric capability: {:?}", capability);
        capability
    }

    /// Run the user-facing authentication challenge.
    pub async fn evaluate(&self, reason: &str) -> Result<bool, PlatformError> {
        let request = EvaluationRequest {
            policy: self.policy,
            localized_reason: reason.to_string(),
            fallback_title: self.fallback_title.clone(),
        };
        self.context.evaluate_policy(&request).await
    }

    /// Enrollment state captured by the last successful [`evaluate`](Self::evaluate).
    pub fn current_enrollment_fingerprint(&self) -> Option<EnrollmentFingerprint> {
        self.context
            .evaluated_policy_domain_state()
            .map(EnrollmentFingerprint::new)
    }
}
