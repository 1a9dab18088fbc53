use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure codes reported by the platform authenticator.
///
/// This is the raw vocabulary of the platform. Callers never show these
/// directly; they are folded into [`AuthErrorKind`] first.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PlatformError {
    /// The user failed to provide valid credentials
    #[error("Authentication failed")]
    AuthenticationFailed,

    /// The user tapped the cancel button in the prompt
    #[error("User canceled")]
    UserCancel,

    /// The user tapped the fallback button in the prompt
    #[error("User chose fallback")]
    UserFallback,

    /// The system canceled authentication (e.g. another app came to foreground)
    #[error("System canceled")]
    SystemCancel,

    /// No passcode is set on the device
    #[error("Passcode not set")]
    PasscodeNotSet,

    /// Biometry is not available on the device
    #[error("Biometry not available")]
    BiometryNotAvailable,

    /// The user has no enrolled biometric identities
    #[error("Biometry not enrolled")]
    BiometryNotEnrolled,

    /// Biometry is locked after too many failed attempts
    #[error("Biometry locked out")]
    BiometryLockout,

    /// The application invalidated the session during evaluation
    #[error("App canceled")]
    AppCancel,

    /// The authentication context was previously invalidated
    #[error("Invalid context")]
    InvalidContext,

    /// Displaying the required authentication UI is forbidden
    #[error("Not interactive")]
    NotInteractive,

    /// A code this crate does not know about
    #[error("Unknown platform error code: {0}")]
    Unknown(i64),
}

impl PlatformError {
    /// Decode a numeric platform error code.
    ///
    /// Codes follow the LocalAuthentication numbering. Anything unrecognised
    /// becomes [`PlatformError::Unknown`] instead of failing.
    pub fn from_code(code: i64) -> Self {
        match code {
            -1 => Self::AuthenticationFailed,
            -2 => Self::UserCancel,
            -3 => Self::UserFallback,
            -4 => Self::SystemCancel,
            -5 => Self::PasscodeNotSet,
            -6 => Self::BiometryNotAvailable,
            -7 => Self::BiometryNotEnrolled,
            -8 => Self::BiometryLockout,
            -9 => Self::AppCancel,
            -10 => Self::InvalidContext,
            -1004 => Self::NotInteractive,
            other => Self::Unknown(other),
        }
    }

    /// Domain classification of this platform failure.
    pub fn kind(&self) -> AuthErrorKind {
        AuthErrorKind::from(*self)
    }

    /// Canonical reason key for this platform failure.
    pub fn reason(&self) -> &'static str {
        self.kind().reason()
    }
}

/// Domain error taxonomy for authenticator failures.
///
/// Each variant owns exactly one canonical reason key. Localization of
/// that key is left to the display layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthErrorKind {
    PasscodeNotSet,
    InvalidContext,
    BiometryLockout,
    BiometryNotAvailable,
    BiometryNotEnrolled,
    UserCancel,
    AuthenticationFailed,
}

impl AuthErrorKind {
    pub fn reason(&self) -> &'static str {
        match self {
            Self::PasscodeNotSet => "no passcode set",
            Self::InvalidContext => "invalid authentication context",
            Self::BiometryLockout => "biometry locked out",
            Self::BiometryNotAvailable => "biometry not available",
            Self::BiometryNotEnrolled => "biometry not enrolled",
            Self::UserCancel => "canceled by user",
            Self::AuthenticationFailed => "authentication failed",
        }
    }
}

impl From<PlatformError> for AuthErrorKind {
    fn from(err: PlatformError) -> Self {
        match err {
            PlatformError::PasscodeNotSet => Self::PasscodeNotSet,
            PlatformError::InvalidContext => Self::InvalidContext,
            PlatformError::BiometryLockout => Self::BiometryLockout,
            PlatformError::BiometryNotAvailable => Self::BiometryNotAvailable,
            PlatformError::BiometryNotEnrolled => Self::BiometryNotEnrolled,
            PlatformError::UserCancel => Self::UserCancel,
            PlatformError::AuthenticationFailed
            | PlatformError::UserFallback
            | PlatformError::SystemCancel
            | PlatformError::AppCancel
            | PlatformError::NotInteractive
            | PlatformError::Unknown(_) => Self::AuthenticationFailed,
        }
    }
}
