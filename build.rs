//! Build script for petfriends-e2e
//!
//! Injects the service URL and the test credentials as compile-time constants.
//! Values come from the build environment or a `.env` file; the config file
//! can still override them at runtime.

const DEFAULTS: &[(&str, &str)] = &[
    ("PETFRIENDS_BASE_URL", "https://petfriends.skillfactory.ru"),
    ("PETFRIENDS_VALID_EMAIL", "tester@example.com"),
    ("PETFRIENDS_VALID_PASSWORD", "change-me"),
    ("PETFRIENDS_INVALID_EMAIL", "nobody@example.invalid"),
    ("PETFRIENDS_INVALID_PASSWORD", "wrong-password"),
];

fn main() {
    // Load .env file if present (for local development)
    let _ = dotenvy::dotenv();

    for (name, default) in DEFAULTS {
        let value = std::env::var(name).unwrap_or_else(|_| default.to_string());
        println!("cargo:rustc-env={}={}", name, value);
        println!("cargo:rerun-if-env-changed={}", name);
    }

    println!("cargo:rerun-if-changed=.env");
}
