use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::{
    dashboard::DEFAULT_CITY, model::Coordinates, provider::openweather::DEFAULT_API_BASE,
    view::DEFAULT_ICON_BASE,
};

const CONFIG_FILE_NAME: &str = "config.toml";

/// Hosts the dashboard talks to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    /// Base of the geocoding and data APIs.
    pub api_base: String,
    /// Base of the condition icon images.
    pub icon_base: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            icon_base: DEFAULT_ICON_BASE.to_string(),
        }
    }
}

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// default_city = "Islamabad"
///
/// [location]
/// latitude = 33.6
/// longitude = 73.0
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// OpenWeather API key.
    pub api_key: Option<String>,

    /// City looked up on start-up.
    pub default_city: String,

    pub endpoints: Endpoints,

    /// Device position used by `locate` when no coordinates are given.
    pub location: Option<Coordinates>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            default_city: DEFAULT_CITY.to_string(),
            endpoints: Endpoints::default(),
            location: None,
        }
    }
}

impl Config {
    /// Returns the API key or a hint on how to set one.
    pub fn api_key(&self) -> Result<&str> {
        self.api_key.as_deref().filter(|key| !key.trim().is_empty()).ok_or_else(|| {
            anyhow!(
                "No API key configured.\n\
                 Hint: run `weather-dash configure` and enter your OpenWeather API key."
            )
        })
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key);
    }

    pub fn set_default_city(&mut self, city: &str) {
        self.default_city = city.trim().to_string();
    }

    pub fn set_location(&mut self, location: Coordinates) {
        self.location = Some(location);
    }

    /// Parses a config document; absent keys fall back to defaults.
    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Failed to parse configuration TOML")
    }

    /// Reads the config at the standard location; see [`Config::load_from`].
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Reads `path`, treating a missing file as an unconfigured install.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("Failed to read config file: {}", path.display()));
            }
        };

        Self::from_toml(&contents).with_context(|| format!("In config file: {}", path.display()))
    }

    /// Writes the config to the standard location; see [`Config::save_to`].
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Serialises to TOML at `path`, creating missing parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create config directory: {}", dir.display()))?;
        }

        fs::write(path, self.to_toml()?)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")
    }

    /// `config.toml` in the platform config directory for `weather-dash`.
    pub fn config_file_path() -> Result<PathBuf> {
        ProjectDirs::from("dev", "weather-dash", "weather-dash")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
            .ok_or_else(|| anyhow!("No config directory available for weather-dash on this platform"))
    }
}
