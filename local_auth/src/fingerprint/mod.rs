mod store;

pub use store::{FINGERPRINT_KEY, FingerprintStore, PreferenceFingerprintStore};
