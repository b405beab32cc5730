use crate::cli::ConfigCommands;
use crate::config::Context;
use anyhow::Result;

pub fn handle(ctx: &Context, command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => {
            let mut config = ctx.config.clone();
            config.base_url = ctx.base_url();
            config.valid_password = mask(&config.valid_password);
            config.invalid_password = mask(&config.invalid_password);
            print!("{}", toml::to_string_pretty(&config)?);
        }
        ConfigCommands::Path => {
            println!("{}", ctx.config_path()?.display());
        }
    }
    Ok(())
}

fn mask(secret: &str) -> String {
    if secret.is_empty() {
        String::new()
    } else {
        "********".to_string()
    }
}
