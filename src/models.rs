//! Types exchanged with the PetFriends API.
//!
//! Everything here is transient: pets live on the server and the suite only
//! holds them for the duration of a single scenario.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Email/password pair used to request an auth key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Auth key issued by `GET /api/key`, sent back in the `auth_key` header.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AuthKey(String);

impl AuthKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The key an unauthenticated caller sends.
    pub fn empty() -> Self {
        Self(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AuthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which pets `GET /api/pets` returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PetFilter {
    #[default]
    All,
    MyPets,
}

impl PetFilter {
    /// Value of the `filter` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            PetFilter::All => "",
            PetFilter::MyPets => "my_pets",
        }
    }
}

/// Name, type and age sent when creating or updating a pet.
///
/// Age is text on the wire and the API accepts anything, so negative or
/// empty ages are representable on purpose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PetFields {
    pub name: String,
    pub animal_type: String,
    pub age: String,
}

impl PetFields {
    pub fn new(name: impl Into<String>, animal_type: impl Into<String>, age: impl ToString) -> Self {
        Self {
            name: name.into(),
            animal_type: animal_type.into(),
            age: age.to_string(),
        }
    }

    pub(crate) fn as_form(&self) -> [(&'static str, &str); 3] {
        [
            ("name", self.name.as_str()),
            ("animal_type", self.animal_type.as_str()),
            ("age", self.age.as_str()),
        ]
    }
}

/// A pet record as returned by the API.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Pet {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub animal_type: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub age: String,
    #[serde(default)]
    pub pet_photo: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub created_at: String,
}

impl Pet {
    pub fn has_photo(&self) -> bool {
        self.pet_photo.as_deref().is_some_and(|p| !p.is_empty())
    }
}

/// Body of `GET /api/pets`.
#[derive(Debug, Clone, Deserialize)]
pub struct PetList {
    pub pets: Vec<Pet>,
}

impl PetList {
    pub fn contains_id(&self, id: &str) -> bool {
        self.pets.iter().any(|p| p.id == id)
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
        Null(()),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
        Raw::Null(()) => String::new(),
    })
}
