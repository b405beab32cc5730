//! Pet commands: one CLI call per API endpoint.
//!
//! Each command logs in with the configured valid credentials, makes a single
//! call and prints the raw response. A non-2xx status fails the command.

use crate::cli::PetArgs;
use crate::client::PetFriendsClient;
use crate::config::Context;
use crate::fixtures::login;
use crate::models::{AuthKey, PetFields, PetFilter};
use crate::output::{print_info, print_pets, print_response};
use crate::response::ApiResponse;
use anyhow::Result;
use std::path::Path;

impl From<PetArgs> for PetFields {
    fn from(args: PetArgs) -> Self {
        PetFields::new(args.name, args.animal_type, args.age)
    }
}

async fn session(ctx: &Context, verbose: bool) -> Result<(PetFriendsClient, AuthKey)> {
    if verbose {
        eprintln!("[verbose] Base URL: {}", ctx.base_url());
    }
    let client = PetFriendsClient::new(ctx)?;
    let auth_key = login(&client, &ctx.config.valid_credentials()).await?;
    Ok((client, auth_key))
}

fn finish(ctx: &Context, response: ApiResponse) -> Result<()> {
    print_response(ctx, &response)?;
    response.error_for_status()?;
    Ok(())
}

pub async fn list(ctx: &Context, mine: bool, verbose: bool) -> Result<()> {
    let (client, auth_key) = session(ctx, verbose).await?;
    let filter = if mine { PetFilter::MyPets } else { PetFilter::All };

    let response = client.get_list_of_pets(&auth_key, filter).await?;
    if !response.status.is_success() {
        return finish(ctx, response);
    }

    match response.pets() {
        Some(pets) => {
            if verbose {
                eprintln!("[verbose] Found {} pet(s)", pets.len());
            }
            print_pets(ctx, &pets)
        }
        None => {
            print_info("Response has no pet list");
            finish(ctx, response)
        }
    }
}

pub async fn add(ctx: &Context, pet: PetArgs, photo: &Path, verbose: bool) -> Result<()> {
    let (client, auth_key) = session(ctx, verbose).await?;
    let response = client.add_new_pet(&auth_key, &pet.into(), photo).await?;
    finish(ctx, response)
}

pub async fn create(ctx: &Context, pet: PetArgs, verbose: bool) -> Result<()> {
    let (client, auth_key) = session(ctx, verbose).await?;
    let response = client.create_pet_simple(&auth_key, &pet.into()).await?;
    finish(ctx, response)
}

pub async fn update(ctx: &Context, pet_id: &str, pet: PetArgs, verbose: bool) -> Result<()> {
    let (client, auth_key) = session(ctx, verbose).await?;
    let response = client
        .update_pet_info(&auth_key, pet_id, &pet.into())
        .await?;
    finish(ctx, response)
}

pub async fn delete(ctx: &Context, pet_id: &str, verbose: bool) -> Result<()> {
    let (client, auth_key) = session(ctx, verbose).await?;
    let response = client.delete_pet(&auth_key, pet_id).await?;
    finish(ctx, response)
}

pub async fn photo(ctx: &Context, pet_id: &str, photo: &Path, verbose: bool) -> Result<()> {
    let (client, auth_key) = session(ctx, verbose).await?;
    let response = client
        .set_photo_by_pet_id(&auth_key, pet_id, photo)
        .await?;
    finish(ctx, response)
}
