//! Setup steps that scenarios rely on.
//!
//! Several scenarios need the test account to own a pet. Rather than trusting
//! that the account was seeded by hand, they call [`ensure_own_pet`] first.

use crate::client::PetFriendsClient;
use crate::error::PetFriendsError;
use crate::models::{AuthKey, Credentials, Pet, PetFields, PetFilter};
use tracing::info;

/// Pet created when the account owns none.
pub fn seed_pet() -> PetFields {
    PetFields::new("Барсик", "кот", "1")
}

/// Request a key and fail unless the service issued one.
pub async fn login(
    client: &PetFriendsClient,
    credentials: &Credentials,
) -> Result<AuthKey, PetFriendsError> {
    let response = client
        .get_api_key(&credentials.email, &credentials.password)
        .await?
        .error_for_status()?;

    response.auth_key().ok_or(PetFriendsError::MissingField("key"))
}

/// Pets owned by the caller.
pub async fn my_pets(
    client: &PetFriendsClient,
    auth_key: &AuthKey,
) -> Result<Vec<Pet>, PetFriendsError> {
    client
        .get_list_of_pets(auth_key, PetFilter::MyPets)
        .await?
        .error_for_status()?
        .pets()
        .ok_or(PetFriendsError::MissingField("pets"))
}

/// Return an owned pet, creating one without a photo if the list is empty.
pub async fn ensure_own_pet(
    client: &PetFriendsClient,
    auth_key: &AuthKey,
) -> Result<Pet, PetFriendsError> {
    if let Some(pet) = my_pets(client, auth_key).await?.into_iter().next() {
        return Ok(pet);
    }

    let fields = seed_pet();
    info!(name = %fields.name, "No own pets, creating one");

    client
        .create_pet_simple(auth_key, &fields)
        .await?
        .error_for_status()?;

    my_pets(client, auth_key)
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| PetFriendsError::Other("Created pet is missing from my_pets".to_string()))
}
