use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use local_auth::{
    AuthFlowController, AuthPurpose, AuthResult, BiometryType, LOCAL_AUTH_PROMPT_REASON,
    PlatformError, PreferenceFingerprintStore, SimulatedAuthenticator,
};

mod display;

use crate::display::{present, present_capability, present_verify_button};

async fn run(
    controller: &AuthFlowController<PreferenceFingerprintStore>,
    purpose: AuthPurpose,
) -> Result<(), Box<dyn std::error::Error>> {
    // Capability is re-queried for every flow, as a button handler would.
    let capability = controller.query_capability();
    let result = controller
        .request_auth(purpose, &capability, LOCAL_AUTH_PROMPT_REASON.as_str())
        .await;
    match &result {
        AuthResult::Success => tracing::info!("{:?} succeeded", purpose),
        AuthResult::Failure(reason) => tracing::info!("{:?} failed: {}", purpose, reason),
    }
    present(purpose, &result);
    present_verify_button(controller.is_activated().await?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,local_auth=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let authenticator = Arc::new(SimulatedAuthenticator::new(BiometryType::FaceId));
    let controller = local_auth::controller(authenticator.clone()).await?;

    present_capability(&controller.query_capability());
    present_verify_button(controller.is_activated().await?);

    run(&controller, AuthPurpose::Activation).await?;
    run(&controller, AuthPurpose::Verification).await?;

    println!("-- user cancels the prompt");
    authenticator.push_outcome(Err(PlatformError::UserCancel));
    run(&controller, AuthPurpose::Verification).await?;

    println!("-- user enrolls an alternate appearance");
    authenticator.enroll("alternate-appearance");
    run(&controller, AuthPurpose::Verification).await?;

    println!("-- user re-activates");
    run(&controller, AuthPurpose::Activation).await?;
    run(&controller, AuthPurpose::Verification).await?;

    println!("-- device passcode removed");
    authenticator.set_passcode(false);
    run(&controller, AuthPurpose::Verification).await?;

    Ok(())
}
