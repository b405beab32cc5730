use crate::cli::KeyArgs;
use crate::client::PetFriendsClient;
use crate::config::Context;
use crate::output::print_response;
use anyhow::Result;

/// Request an auth key, falling back to the configured valid credentials.
pub async fn execute(ctx: &Context, args: KeyArgs, verbose: bool) -> Result<()> {
    let defaults = ctx.config.valid_credentials();
    let email = args.email.unwrap_or(defaults.email);
    let password = args.password.unwrap_or(defaults.password);

    if verbose {
        eprintln!("[verbose] Requesting key for {} from {}", email, ctx.base_url());
    }

    let client = PetFriendsClient::new(ctx)?;
    let response = client.get_api_key(&email, &password).await?;

    print_response(ctx, &response)?;
    response.error_for_status()?;
    Ok(())
}
