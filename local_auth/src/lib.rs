//! local_auth - Biometric activation and verification with enrollment change detection
//!
//! An activation records a fingerprint of the biometric data currently
//! enrolled on the device. A later verification re-runs the authenticator and
//! only succeeds if that enrollment is unchanged, so adding or removing a
//! finger or face after activation invalidates trust.
//!
//! The platform authenticator is reached through [`AuthenticationContext`];
//! the fingerprint is persisted in a [`PreferenceStore`] (memory, redis or
//! sqlite) under the key [`FINGERPRINT_KEY`].

mod authenticator;
mod config;
mod errors;
mod fingerprint;
mod flow;
mod storage;

#[cfg(test)]
mod test_utils;

use std::sync::Arc;

pub use authenticator::{
    AuthErrorKind, AuthPolicy, AuthenticationContext, AuthenticatorProbe, BiometricCapability,
    BiometryType, EnrollmentFingerprint, EvaluationRequest, PlatformError, SimulatedAuthenticator,
};

pub use config::{LOCAL_AUTH_PROMPT_REASON, StoreSettings};

pub use errors::LocalAuthError;

pub use fingerprint::{FINGERPRINT_KEY, FingerprintStore, PreferenceFingerprintStore};

pub use flow::{AuthFlowController, AuthPurpose, AuthResult, reasons};

pub use storage::{
    PreferenceStore, SharedPreferenceStore, StorageError, StoreType, open_preference_store, share,
    shared_store,
};

/// Initialize the process-wide preference store from the environment
pub async fn init() -> Result<SharedPreferenceStore, LocalAuthError> {
    storage::init().await.map_err(|e| {
        match e {
            StorageError::Config(msg) => LocalAuthError::Config(msg),
            other => LocalAuthError::Storage(other),
        }
        .log()
    })
}

/// Controller over `context` backed by the process-wide preference store.
///
/// Initializes the store on first use.
pub async fn controller(
    context: Arc<dyn AuthenticationContext>,
) -> Result<AuthFlowController<PreferenceFingerprintStore>, LocalAuthError> {
    let prefs = init().await?;
    Ok(AuthFlowController::new(
        AuthenticatorProbe::new(context),
        PreferenceFingerprintStore::new(prefs),
    ))
}
