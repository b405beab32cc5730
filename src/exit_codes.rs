//! Exit codes for CLI commands.
//!
//! Lets scripts that seed fixtures tell a rejected call from a dead network.

use crate::error::PetFriendsError;
use reqwest::StatusCode;

/// Network error - request failed or timed out.
pub const NETWORK: i32 = 4;

/// Authentication error - the service rejected the key or credentials.
pub const AUTH: i32 = 5;

/// API error - the service answered with another non-2xx status.
pub const API: i32 = 6;

/// Config error - config file unreadable or malformed.
pub const CONFIG: i32 = 7;

/// Internal error - anything else.
pub const INTERNAL: i32 = 8;

/// Convert an anyhow::Error to an appropriate exit code.
pub fn from_error(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<PetFriendsError>() {
        Some(PetFriendsError::Network(_)) => NETWORK,
        Some(PetFriendsError::UnexpectedStatus { status, .. })
            if *status == StatusCode::FORBIDDEN || *status == StatusCode::UNAUTHORIZED =>
        {
            AUTH
        }
        Some(PetFriendsError::UnexpectedStatus { .. }) => API,
        Some(PetFriendsError::ConfigRead(_) | PetFriendsError::ConfigParse(_)) => CONFIG,
        _ => INTERNAL,
    }
}
