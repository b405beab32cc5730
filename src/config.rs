use crate::cli::OutputFormat;
use crate::error::PetFriendsError;
use crate::models::Credentials;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// Build-time defaults injected via build.rs
const DEFAULT_BASE_URL: &str = env!("PETFRIENDS_BASE_URL");
const DEFAULT_VALID_EMAIL: &str = env!("PETFRIENDS_VALID_EMAIL");
const DEFAULT_VALID_PASSWORD: &str = env!("PETFRIENDS_VALID_PASSWORD");
const DEFAULT_INVALID_EMAIL: &str = env!("PETFRIENDS_INVALID_EMAIL");
const DEFAULT_INVALID_PASSWORD: &str = env!("PETFRIENDS_INVALID_PASSWORD");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Account the suite logs in with. Must own at least one pet or be
    /// allowed to create one.
    #[serde(default = "default_valid_email")]
    pub valid_email: String,

    #[serde(default = "default_valid_password")]
    pub valid_password: String,

    /// Email the service does not know.
    #[serde(default = "default_invalid_email")]
    pub invalid_email: String,

    /// Wrong password for `valid_email`.
    #[serde(default = "default_invalid_password")]
    pub invalid_password: String,

    #[serde(default)]
    pub format: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_valid_email() -> String {
    DEFAULT_VALID_EMAIL.to_string()
}

fn default_valid_password() -> String {
    DEFAULT_VALID_PASSWORD.to_string()
}

fn default_invalid_email() -> String {
    DEFAULT_INVALID_EMAIL.to_string()
}

fn default_invalid_password() -> String {
    DEFAULT_INVALID_PASSWORD.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            valid_email: default_valid_email(),
            valid_password: default_valid_password(),
            invalid_email: default_invalid_email(),
            invalid_password: default_invalid_password(),
            format: "table".to_string(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, PetFriendsError> {
        Self::load_from_path(&Self::path()?)
    }

    /// Load config from a specific path. A missing file yields the defaults.
    pub fn load_from_path(path: &Path) -> Result<Self, PetFriendsError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(PetFriendsError::ConfigRead)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn path() -> Result<PathBuf, PetFriendsError> {
        let dirs = ProjectDirs::from("com", "petfriends", "petfriends-e2e").ok_or_else(|| {
            PetFriendsError::Other("Could not determine config directory".to_string())
        })?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn valid_credentials(&self) -> Credentials {
        Credentials::new(&self.valid_email, &self.valid_password)
    }

    pub fn wrong_password_credentials(&self) -> Credentials {
        Credentials::new(&self.valid_email, &self.invalid_password)
    }

    pub fn wrong_email_credentials(&self) -> Credentials {
        Credentials::new(&self.invalid_email, &self.valid_password)
    }
}

/// Runtime context that combines config and CLI overrides
#[derive(Debug, Clone)]
pub struct Context {
    pub config: Config,
    config_path: Option<PathBuf>,
    base_url_override: Option<String>,
    format_override: Option<OutputFormat>,
}

impl Context {
    /// Load from an explicit path, or from the platform config dir.
    pub fn load(path: Option<PathBuf>) -> Result<Self, PetFriendsError> {
        let config = match &path {
            Some(p) => Config::load_from_path(p)?,
            None => Config::load()?,
        };
        Ok(Self {
            config,
            config_path: path,
            base_url_override: None,
            format_override: None,
        })
    }

    /// Create context with a specific config (for testing)
    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            config_path: None,
            base_url_override: None,
            format_override: None,
        }
    }

    pub fn override_base_url(&mut self, url: String) {
        self.base_url_override = Some(url);
    }

    pub fn set_format(&mut self, format: OutputFormat) {
        self.format_override = Some(format);
    }

    pub fn base_url(&self) -> String {
        self.base_url_override
            .clone()
            .unwrap_or_else(|| self.config.base_url.clone())
    }

    pub fn output_format(&self) -> OutputFormat {
        self.format_override.unwrap_or_else(|| {
            if self.config.format.eq_ignore_ascii_case("json") {
                OutputFormat::Json
            } else {
                OutputFormat::Table
            }
        })
    }

    /// Path the config was (or would be) loaded from.
    pub fn config_path(&self) -> Result<PathBuf, PetFriendsError> {
        match &self.config_path {
            Some(p) => Ok(p.clone()),
            None => Config::path(),
        }
    }
}
