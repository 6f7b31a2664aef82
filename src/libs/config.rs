//! Configuration for the shiftbook server.
//!
//! Settings come from three layers, later ones winning:
//!
//! 1. `config.json` in the per-user data directory (see [`DataStorage`]),
//!    or built-in defaults when the file does not exist
//! 2. environment variables (`SHIFTBOOK_HOST`, `SHIFTBOOK_PORT`,
//!    `SHIFTBOOK_DB`, `SHIFTBOOK_STATIC_DIR`), including those loaded from a
//!    `.env` file
//! 3. command-line flags of `shiftbook serve`
//!
//! ```rust,no_run
//! use shiftbook::libs::config::Config;
//!
//! let config = Config::read()?.with_env();
//! println!("listening on {}", config.server.bind_addr());
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::db::db::DB_FILE_NAME;
use crate::libs::messages::Message;
use crate::{msg_print, msg_warning};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";

pub const ENV_HOST: &str = "SHIFTBOOK_HOST";
pub const ENV_PORT: &str = "SHIFTBOOK_PORT";
pub const ENV_DB: &str = "SHIFTBOOK_DB";
pub const ENV_STATIC_DIR: &str = "SHIFTBOOK_STATIC_DIR";

/// HTTP listener and front-end settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory served at `/static`; its `index.html` is served at `/`.
    pub static_dir: PathBuf,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite file; `None` means `shifts.db` in the data directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8000,
            static_dir: PathBuf::from("static"),
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Config {
    /// Loads `config.json`, falling back to defaults when it is missing.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Applies `SHIFTBOOK_*` environment overrides.
    ///
    /// A port that does not parse is reported and ignored.
    pub fn with_env(mut self) -> Self {
        if let Ok(host) = env::var(ENV_HOST) {
            self.server.host = host;
        }
        if let Ok(port) = env::var(ENV_PORT) {
            match port.parse() {
                Ok(port) => self.server.port = port,
                Err(_) => msg_warning!(Message::InvalidEnvValue(ENV_PORT.to_string(), port)),
            }
        }
        if let Ok(path) = env::var(ENV_DB) {
            self.database.path = Some(PathBuf::from(path));
        }
        if let Ok(dir) = env::var(ENV_STATIC_DIR) {
            self.server.static_dir = PathBuf::from(dir);
        }
        self
    }

    /// The database file to open.
    pub fn database_path(&self) -> Result<PathBuf> {
        match &self.database.path {
            Some(path) => Ok(path.clone()),
            None => Ok(DataStorage::new().get_path(DB_FILE_NAME)?),
        }
    }

    /// Interactive setup wizard, pre-filled with the current settings.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();
        let theme = ColorfulTheme::default();

        msg_print!(Message::ConfigModuleServer);
        config.server.host = Input::with_theme(&theme)
            .with_prompt(Message::PromptHost.to_string())
            .default(config.server.host.clone())
            .interact_text()?;
        config.server.port = Input::with_theme(&theme)
            .with_prompt(Message::PromptPort.to_string())
            .default(config.server.port)
            .interact_text()?;
        let static_dir: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptStaticDir.to_string())
            .default(config.server.static_dir.display().to_string())
            .interact_text()?;
        config.server.static_dir = PathBuf::from(static_dir);

        msg_print!(Message::ConfigModuleDatabase);
        let db_path: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptDatabasePath.to_string())
            .default(config.database.path.as_ref().map(|p| p.display().to_string()).unwrap_or_default())
            .allow_empty(true)
            .interact_text()?;
        config.database.path = if db_path.trim().is_empty() {
            None
        } else {
            Some(PathBuf::from(db_path.trim()))
        };

        Ok(config)
    }
}
