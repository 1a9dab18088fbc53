//! The process-wide preference store configured from the environment

use std::sync::Arc;

use local_auth::{
    AuthPurpose, AuthResult, BiometryType, FINGERPRINT_KEY, SimulatedAuthenticator,
};

use crate::common::{REASON, init_test_environment};

#[tokio::test]
async fn controller_uses_process_wide_store() {
    // Given the test environment (memory backend)
    init_test_environment();
    let sim = Arc::new(SimulatedAuthenticator::new(BiometryType::TouchId));

    // When activating through the default controller
    let controller = local_auth::controller(sim.clone())
        .await
        .expect("Failed to build controller");
    let capability = controller.query_capability();
    let result = controller
        .request_auth(AuthPurpose::Activation, &capability, REASON)
        .await;
    assert_eq!(result, AuthResult::Success);

    // Then the fingerprint is visible through the shared store
    let prefs = local_auth::shared_store().expect("store should be initialized");
    let raw = prefs.lock().await.get(FINGERPRINT_KEY).await.unwrap();
    let fingerprint = controller.probe().current_enrollment_fingerprint().unwrap();
    assert_eq!(raw, Some(fingerprint.to_base64()));

    // And a second controller over the same store verifies
    let other = local_auth::controller(sim)
        .await
        .expect("Failed to build controller");
    assert!(other.is_activated().await.unwrap());
    let verification = other
        .request_auth(AuthPurpose::Verification, &capability, REASON)
        .await;
    assert_eq!(verification, AuthResult::Success);
}
