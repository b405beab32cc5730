use reqwest::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PetFriendsError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Failed to read pet photo {}: {source}", path.display())]
    PhotoRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read config: {0}")]
    ConfigRead(std::io::Error),

    #[error("Invalid config format: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unexpected status {status}: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },

    #[error("Response has no '{0}' field")]
    MissingField(&'static str),

    #[error("{0}")]
    Other(String),
}

impl PetFriendsError {
    pub fn unexpected_status(status: StatusCode, body: impl Into<String>) -> Self {
        Self::UnexpectedStatus {
            status,
            body: body.into(),
        }
    }
}
