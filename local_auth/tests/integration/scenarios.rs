//! The four reference scenarios and the activate-then-verify round trip

use local_auth::{AuthPurpose, AuthResult, BiometricCapability, BiometryType, reasons};

use crate::common::{REASON, memory_controller, sqlite_controller};

#[tokio::test]
async fn scenario_a_unavailable_capability_fails_with_its_reason() {
    // Given a device without a passcode
    let (sim, controller) = memory_controller(BiometryType::TouchId).await;
    sim.set_passcode(false);
    let capability = controller.query_capability();
    assert_eq!(
        capability,
        BiometricCapability::Unavailable {
            reason: "no passcode set".to_string()
        }
    );

    // When requesting verification
    let result = controller
        .request_auth(AuthPurpose::Verification, &capability, REASON)
        .await;

    // Then the failure carries the capability's reason and no prompt was shown
    assert_eq!(result, AuthResult::Failure("no passcode set".to_string()));
    assert_eq!(sim.evaluations(), 0);
}

#[tokio::test]
async fn scenario_b_verification_without_activation() {
    // Given an available authenticator and no prior activation
    let (sim, controller) = memory_controller(BiometryType::FaceId).await;
    let capability = controller.query_capability();
    assert!(capability.is_available());

    // When verifying
    let result = controller
        .request_auth(AuthPurpose::Verification, &capability, REASON)
        .await;

    // Then evaluation ran but there is nothing to compare against
    assert_eq!(result, AuthResult::Failure(reasons::NOT_ACTIVATED.to_string()));
    assert_eq!(sim.evaluations(), 1);
}

#[tokio::test]
async fn scenario_c_enrollment_change_is_detected() {
    // Given a successful activation with fingerprint F1
    let (sim, controller) = memory_controller(BiometryType::TouchId).await;
    let capability = controller.query_capability();
    let activation = controller
        .request_auth(AuthPurpose::Activation, &capability, REASON)
        .await;
    assert_eq!(activation, AuthResult::Success);
    let f1 = controller.probe().current_enrollment_fingerprint();

    // When the user enrolls another finger
    sim.enroll("left-index");
    let result = controller
        .request_auth(AuthPurpose::Verification, &capability, REASON)
        .await;

    // Then verification captured F2 != F1 and failed
    let f2 = controller.probe().current_enrollment_fingerprint();
    assert_ne!(f1, f2);
    assert_eq!(
        result,
        AuthResult::Failure(reasons::ENROLLMENT_CHANGED.to_string())
    );
}

#[tokio::test]
async fn scenario_d_unsuccessful_evaluation_is_generic_failure() {
    for purpose in [AuthPurpose::Activation, AuthPurpose::Verification] {
        // Given an evaluation that completes without error but without success
        let (sim, controller) = memory_controller(BiometryType::TouchId).await;
        sim.push_outcome(Ok(false));
        let capability = controller.query_capability();

        // When running either flow
        let result = controller.request_auth(purpose, &capability, REASON).await;

        // Then the result is the generic policy failure
        assert_eq!(
            result,
            AuthResult::Failure(reasons::POLICY_NOT_SUCCEEDED.to_string()),
            "purpose {purpose:?}"
        );
    }
}

#[tokio::test]
async fn round_trip_activate_then_verify_succeeds() {
    let (_sim, controller) = memory_controller(BiometryType::FaceId).await;
    let capability = controller.query_capability();

    let activation = controller
        .request_auth(AuthPurpose::Activation, &capability, REASON)
        .await;
    let verification = controller
        .request_auth(AuthPurpose::Verification, &capability, REASON)
        .await;

    assert_eq!(activation, AuthResult::Success);
    assert_eq!(verification, AuthResult::Success);
}

#[tokio::test]
async fn round_trip_over_sqlite_store() {
    let (sim, controller) = sqlite_controller(BiometryType::TouchId).await;
    let capability = controller.query_capability();

    controller
        .request_auth(AuthPurpose::Activation, &capability, REASON)
        .await;
    let unchanged = controller
        .request_auth(AuthPurpose::Verification, &capability, REASON)
        .await;

    sim.remove_enrollment("template-0");
    sim.enroll("replacement");
    let changed = controller
        .request_auth(AuthPurpose::Verification, &capability, REASON)
        .await;

    assert_eq!(unchanged, AuthResult::Success);
    assert_eq!(changed.reason(), Some(reasons::ENROLLMENT_CHANGED));
}

#[tokio::test]
async fn user_cancel_is_reported_and_retry_succeeds() {
    // Given a user who cancels the first prompt
    let (sim, controller) = memory_controller(BiometryType::TouchId).await;
    sim.push_outcome(Err(local_auth::PlatformError::UserCancel));
    let capability = controller.query_capability();

    // When activating twice
    let first = controller
        .request_auth(AuthPurpose::Activation, &capability, REASON)
        .await;
    let second = controller
        .request_auth(AuthPurpose::Activation, &capability, REASON)
        .await;

    // Then the cancel is surfaced and the retry runs the whole pipeline again
    assert_eq!(first.reason(), Some("canceled by user"));
    assert_eq!(second, AuthResult::Success);
    assert_eq!(sim.evaluations(), 2);
}
