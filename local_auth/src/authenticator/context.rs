use async_trait::async_trait;

use super::errors::PlatformError;
use super::types::{AuthPolicy, BiometryType, EvaluationRequest};

/// One platform authenticator session.
///
/// A capability check, the evaluation that follows it and the domain state
/// captured afterwards must all come from the same context instance.
#[async_trait]
pub trait AuthenticationContext: Send + Sync {
    /// Check whether `policy` could be evaluated. Never prompts the user.
    fn can_evaluate_policy(&self, policy: AuthPolicy) -> Result<(), PlatformError>;

    /// Modality of the authenticator. Only meaningful after `can_evaluate_policy`.
    fn biometry_type(&self) -> BiometryType;

    /// Show the authentication prompt and wait for the user.
    async fn evaluate_policy(&self, request: &EvaluationRequest) -> Result<bool, PlatformError>;

    /// Enrollment domain state as of the last successful evaluation.
    fn evaluated_policy_domain_state(&self) -> Option<Vec<u8>>;
}
