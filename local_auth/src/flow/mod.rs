mod controller;
pub mod reasons;
mod types;

pub use controller::AuthFlowController;
pub use types::{AuthPurpose, AuthResult};
