use local_auth::{AuthPurpose, AuthResult, BiometricCapability};

/// Stand-in for the alert the app would show after each flow.
pub(crate) fn present(purpose: AuthPurpose, result: &AuthResult) {
    let title = match purpose {
        AuthPurpose::Activation => "Biometric activation",
        AuthPurpose::Verification => "Biometric verification",
    };

    match result {
        AuthResult::Success => println!("[{title}] succeeded"),
        AuthResult::Failure(reason) => println!("[{title}] failed: {reason}"),
    }
}

pub(crate) fn present_capability(capability: &BiometricCapability) {
    match capability {
        BiometricCapability::TouchModality => println!("Authenticator: Touch ID"),
        BiometricCapability::FaceModality => println!("Authenticator: Face ID"),
        other => println!(
            "Authenticator unavailable: {}",
            other.unavailable_reason().unwrap_or_default()
        ),
    }
}

/// Mirrors the "verify" button, enabled only once activation is on record.
pub(crate) fn present_verify_button(enabled: bool) {
    let state = if enabled { "enabled" } else { "disabled" };
    println!("Verify button {state}");
}
