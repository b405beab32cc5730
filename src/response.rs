//! Uninterpreted `(status, body)` pairs returned by every client call.

use crate::error::PetFriendsError;
use crate::models::{AuthKey, Pet, PetList};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;

/// Response body, parsed as JSON when possible.
///
/// The service answers most failures with an HTML page, which is kept as
/// text. A text body has no fields.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(Value),
    Text(String),
}

impl ResponseBody {
    pub fn parse(raw: &str) -> Self {
        match serde_json::from_str(raw) {
            Ok(value) => Self::Json(value),
            Err(_) => Self::Text(raw.to_string()),
        }
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        match self {
            Self::Json(value) => value.get(name),
            Self::Text(_) => None,
        }
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }
}

impl fmt::Display for ResponseBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(value) => write!(f, "{}", value),
            Self::Text(text) => f.write_str(text),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: ResponseBody,
}

impl ApiResponse {
    pub fn new(status: StatusCode, body: ResponseBody) -> Self {
        Self { status, body }
    }

    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.body.has_field(name)
    }

    /// String value of a top-level field. Numbers are rendered as text.
    pub fn str_field(&self, name: &str) -> Option<String> {
        match self.body.field(name)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// The `key` field of a `GET /api/key` response.
    pub fn auth_key(&self) -> Option<AuthKey> {
        self.str_field("key").map(AuthKey::new)
    }

    /// The `pets` collection of a listing, if the body has one.
    pub fn pets(&self) -> Option<Vec<Pet>> {
        self.decode::<PetList>().ok().map(|list| list.pets)
    }

    /// The body as a single pet record.
    pub fn pet(&self) -> Option<Pet> {
        self.decode().ok()
    }

    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, PetFriendsError> {
        match &self.body {
            ResponseBody::Json(value) => Ok(serde_json::from_value(value.clone())?),
            ResponseBody::Text(_) => Err(PetFriendsError::Other(format!(
                "Expected a JSON body, got text (status {})",
                self.status
            ))),
        }
    }

    /// Turn a non-2xx response into an error, for callers that need success.
    pub fn error_for_status(self) -> Result<Self, PetFriendsError> {
        if self.status.is_success() {
            Ok(self)
        } else {
            Err(PetFriendsError::unexpected_status(
                self.status,
                self.body.to_string(),
            ))
        }
    }
}
