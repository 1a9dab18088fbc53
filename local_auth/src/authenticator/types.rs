use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use subtle::ConstantTimeEq;

/// Reason attached to [`BiometricCapability::None`] when a flow short-circuits.
pub(crate) const NO_BIOMETRY_REASON: &str = "biometry not supported on this device";

/// Policy evaluated by the platform authenticator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthPolicy {
    /// Biometrics only. Fails if no biometric identity is enrolled.
    #[default]
    DeviceOwnerAuthenticationWithBiometrics,
    /// Biometrics first, device passcode as fallback.
    DeviceOwnerAuthentication,
}

/// Sensor modality reported by the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BiometryType {
    None,
    TouchId,
    FaceId,
    /// A modality newer than this crate
    Unknown,
}

/// Result of a non-prompting capability check.
///
/// Produced fresh on every probe and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BiometricCapability {
    None,
    TouchModality,
    FaceModality,
    Unavailable { reason: String },
}

impl BiometricCapability {
    pub fn is_available(&self) -> bool {
        matches!(self, Self::TouchModality | Self::FaceModality)
    }

    /// Why this capability cannot be used, or `None` if it can.
    pub fn unavailable_reason(&self) -> Option<&str> {
        match self {
            Self::TouchModality | Self::FaceModality => None,
            Self::None => Some(NO_BIOMETRY_REASON),
            Self::Unavailable { reason } => Some(reason.as_str()),
        }
    }
}

/// Everything the platform needs to show one authentication prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationRequest {
    pub policy: AuthPolicy,
    pub localized_reason: String,
    /// Title of the passcode fallback button; empty hides the button.
    pub fallback_title: String,
}

/// Opaque snapshot of the authenticator's enrolled biometric data.
///
/// Equality is byte-exact and evaluated in constant time.
#[derive(Clone, Eq)]
pub struct EnrollmentFingerprint(Vec<u8>);

impl EnrollmentFingerprint {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Standard base64 with padding, the persisted form.
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.0)
    }

    pub fn from_base64(encoded: &str) -> Result<Self, base64::DecodeError> {
        STANDARD.decode(encoded).map(Self)
    }

    /// Short hex digest, safe to put in logs.
    pub fn digest(&self) -> String {
        Sha256::digest(&self.0)
            .iter()
            .take(6)
            .map(|b| format!("{b:02x}"))
            .collect()
    }
}

impl PartialEq for EnrollmentFingerprint {
    fn eq(&self, other: &Self) -> bool {
        self.0.ct_eq(&other.0).into()
    }
}

impl fmt::Debug for EnrollmentFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnrollmentFingerprint")
            .field("len", &self.0.len())
            .field("digest", &self.digest())
            .finish()
    }
}

impl From<Vec<u8>> for EnrollmentFingerprint {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}
