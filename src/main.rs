use anyhow::Result;
use clap::Parser;
use petfriends_e2e::cli::{Cli, Commands};
use petfriends_e2e::commands;
use petfriends_e2e::config::Context;
use petfriends_e2e::exit_codes;
use petfriends_e2e::output::print_error;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(format!(
            "petfriends_e2e={}",
            level
        )))
        .with_writer(std::io::stderr)
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&format!("Error: {}", e));
            ExitCode::from(exit_codes::from_error(&e) as u8)
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    // Load config with CLI overrides
    let mut ctx = Context::load(cli.config.clone())?;
    if let Some(url) = cli.base_url.clone() {
        ctx.override_base_url(url);
    }
    if let Some(format) = cli.format {
        ctx.set_format(format);
    }

    let verbose = cli.verbose;

    match cli.command {
        Commands::Key(args) => commands::key::execute(&ctx, args, verbose).await,
        Commands::List { mine } => commands::pets::list(&ctx, mine, verbose).await,
        Commands::Add { pet, photo } => commands::pets::add(&ctx, pet, &photo, verbose).await,
        Commands::Create(pet) => commands::pets::create(&ctx, pet, verbose).await,
        Commands::Update { pet_id, pet } => {
            commands::pets::update(&ctx, &pet_id, pet, verbose).await
        }
        Commands::Delete { pet_id } => commands::pets::delete(&ctx, &pet_id, verbose).await,
        Commands::Photo { pet_id, photo } => {
            commands::pets::photo(&ctx, &pet_id, &photo, verbose).await
        }
        Commands::Seed => commands::seed::execute(&ctx, verbose).await,
        Commands::Config(command) => commands::config::handle(&ctx, command),
    }
}
