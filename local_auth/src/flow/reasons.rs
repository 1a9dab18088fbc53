//! Canonical failure reasons produced by the flow controller.
//!
//! These are pre-localization keys; platform failures use
//! [`AuthErrorKind::reason`](crate::AuthErrorKind::reason) instead.

pub const POLICY_NOT_SUCCEEDED: &str = "policy evaluation did not succeed";
pub const NO_ENROLLMENT_FINGERPRINT: &str = "failed to obtain enrollment fingerprint";
pub const NOT_ACTIVATED: &str = "no activation on record";
pub const ENROLLMENT_CHANGED: &str = "enrollment change detected";
pub const STORE_UNAVAILABLE: &str = "fingerprint store unavailable";
