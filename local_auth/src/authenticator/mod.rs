mod context;
mod errors;
mod probe;
mod simulated;
mod types;

pub use context::AuthenticationContext;
pub use errors::{AuthErrorKind, PlatformError};
pub use probe::AuthenticatorProbe;
pub use simulated::SimulatedAuthenticator;
pub use types::{
    AuthPolicy, BiometricCapability, BiometryType, EnrollmentFingerprint, EvaluationRequest,
};
