//! Configuration for the server and the client commands.
//!
//! Settings are stored as pretty-printed JSON in the application data
//! directory (see [`DataStorage`]). A missing file means defaults. After the
//! file is read, environment variables (a `.env` file is loaded by `main`)
//! override individual values:
//!
//! | Variable              | Setting                 |
//! |-----------------------|-------------------------|
//! | `TASKBOARD_HOST`      | `server.host`           |
//! | `TASKBOARD_PORT`      | `server.port`           |
//! | `TASKBOARD_DB`        | `database`              |
//! | `TASKBOARD_API_URL`   | `client.api_url`        |
//! | `TASKBOARD_PAGE_SIZE` | `client.page_size`      |
//!
//! ```rust,no_run
//! use taskboard::libs::config::Config;
//!
//! let config = Config::read()?;
//! println!("serving on {}", config.server_addr());
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::db::db::Db;
use crate::libs::messages::Message;
use crate::libs::view::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::{msg_error_anyhow, msg_print, msg_warning};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const CONFIG_FILE_NAME: &str = "config.json";

pub const ENV_HOST: &str = "TASKBOARD_HOST";
pub const ENV_PORT: &str = "TASKBOARD_PORT";
pub const ENV_DB: &str = "TASKBOARD_DB";
pub const ENV_API_URL: &str = "TASKBOARD_API_URL";
pub const ENV_PAGE_SIZE: &str = "TASKBOARD_PAGE_SIZE";

/// Where the HTTP server listens.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

/// How the client commands reach the server and page through tasks.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ClientConfig {
    /// Base URL of the API, without the `/tasks` suffix.
    pub api_url: String,
    pub page_size: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: "http://127.0.0.1:3000".to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub client: ClientConfig,

    /// Database file; the data directory's `taskboard.db` when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<PathBuf>,
}

impl Config {
    /// Loads the configuration file, falling back to defaults when it does
    /// not exist, then applies environment overrides.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let mut config = Self::read_from(&config_file_path)?;
        config.apply_overrides(|name| env::var(name).ok());

        Ok(config)
    }

    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        serde_json::from_str(&config_str).map_err(|e| msg_error_anyhow!(Message::ConfigParseError(e.to_string())))
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        self.save_to(&config_file_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Overrides settings from variables found through `lookup`.
    ///
    /// Values that do not parse are reported and ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(ENV_HOST) {
            self.server.host = host;
        }
        if let Some(port) = parse_override(&lookup, ENV_PORT) {
            self.server.port = port;
        }
        if let Some(database) = lookup(ENV_DB) {
            self.database = Some(PathBuf::from(database));
        }
        if let Some(api_url) = lookup(ENV_API_URL) {
            self.client.api_url = api_url;
        }
        if let Some(page_size) = parse_override::<u32, _>(&lookup, ENV_PAGE_SIZE) {
            self.client.page_size = page_size.clamp(1, MAX_PAGE_SIZE);
        }
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn database_path(&self) -> Result<PathBuf> {
        match &self.database {
            Some(path) => Ok(path.clone()),
            None => Ok(Db::default_path()?),
        }
    }

    /// Asks for each setting interactively, pre-filled with the current values.
    pub fn init() -> Result<Self> {
        let config = Config::read().unwrap_or_default();
        let theme = ColorfulTheme::default();

        msg_print!("Server settings");
        let host = Input::with_theme(&theme)
            .with_prompt(Message::PromptServerHost.to_string())
            .default(config.server.host)
            .interact_text()?;
        let port = Input::with_theme(&theme)
            .with_prompt(Message::PromptServerPort.to_string())
            .default(config.server.port)
            .interact_text()?;

        msg_print!("Client settings");
        let api_url = Input::with_theme(&theme)
            .with_prompt(Message::PromptApiUrl.to_string())
            .default(config.client.api_url)
            .interact_text()?;
        let page_size: u32 = Input::with_theme(&theme)
            .with_prompt(Message::PromptPageSize.to_string())
            .default(config.client.page_size)
            .interact_text()?;

        Ok(Config {
            server: ServerConfig { host, port },
            client: ClientConfig {
                api_url,
                page_size: page_size.clamp(1, MAX_PAGE_SIZE),
            },
            database: config.database,
        })
    }
}

fn parse_override<T, F>(lookup: &F, name: &str) -> Option<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(name)?;
    match value.trim().parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            msg_warning!(Message::InvalidEnvValue(name.to_string(), value));
            None
        }
    }
}
