use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "petfriends")]
#[command(author, version, about = "Seed fixtures and run single calls against the PetFriends API")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the service base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Output format
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Log every request
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Request an auth key
    Key(KeyArgs),

    /// List pets
    List {
        /// Only pets owned by the test account
        #[arg(long)]
        mine: bool,
    },

    /// Add a pet with a photo
    Add {
        #[command(flatten)]
        pet: PetArgs,

        /// Photo to upload
        #[arg(long)]
        photo: PathBuf,
    },

    /// Add a pet without a photo
    Create(PetArgs),

    /// Update a pet's name, type and age
    Update {
        /// Pet ID
        pet_id: String,

        #[command(flatten)]
        pet: PetArgs,
    },

    /// Delete a pet
    Delete {
        /// Pet ID
        pet_id: String,
    },

    /// Set a pet's photo
    Photo {
        /// Pet ID
        pet_id: String,

        /// Photo to upload
        #[arg(long)]
        photo: PathBuf,
    },

    /// Make sure the test account owns at least one pet
    Seed,

    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Args, Clone)]
pub struct KeyArgs {
    /// Email (defaults to the configured valid email)
    #[arg(long)]
    pub email: Option<String>,

    /// Password (defaults to the configured valid password)
    #[arg(long)]
    pub password: Option<String>,
}

#[derive(Args, Clone)]
pub struct PetArgs {
    /// Pet name
    #[arg(long, default_value = "")]
    pub name: String,

    /// Animal type
    #[arg(long, default_value = "")]
    pub animal_type: String,

    /// Age (sent as text)
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub age: String,
}

#[derive(Subcommand, Clone)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,
    /// Print the config file path
    Path,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}
