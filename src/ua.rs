//! Identifies suite traffic in the PetFriends access logs.

use std::sync::OnceLock;

const PRODUCT: &str = env!("CARGO_PKG_NAME");

static USER_AGENT: OnceLock<String> = OnceLock::new();

/// `petfriends-e2e/<version> (<os>; <arch>)`, built on first use.
pub fn user_agent() -> &'static str {
    USER_AGENT.get_or_init(|| {
        let version = env!("CARGO_PKG_VERSION");
        let os = std::env::consts::OS;
        let arch = std::env::consts::ARCH;
        format!("{PRODUCT}/{version} ({os}; {arch})")
    })
}
