use crate::client::PetFriendsClient;
use crate::config::Context;
use crate::fixtures::{ensure_own_pet, login};
use crate::output::print_success;
use anyhow::Result;

/// Make sure the test account owns a pet and print its ID.
pub async fn execute(ctx: &Context, verbose: bool) -> Result<()> {
    let client = PetFriendsClient::new(ctx)?;
    let auth_key = login(&client, &ctx.config.valid_credentials()).await?;

    let pet = ensure_own_pet(&client, &auth_key).await?;

    if verbose {
        eprintln!("[verbose] Seed pet: {:?}", pet);
    }

    print_success(&format!("Own pet ready: {} ({})", pet.id, pet.name));
    Ok(())
}
