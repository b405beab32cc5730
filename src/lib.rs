//! PetFriends end-to-end suite
//!
//! A thin client for the PetFriends REST API plus the fixtures the scenarios
//! in `tests/` build on. The `petfriends` binary exposes the same calls for
//! seeding and manual checks.

pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod fixtures;
pub mod models;
pub mod output;
pub mod response;
pub mod ua;

pub use client::PetFriendsClient;
pub use error::PetFriendsError;
pub use models::{AuthKey, Credentials, Pet, PetFields, PetFilter};
pub use response::{ApiResponse, ResponseBody};
