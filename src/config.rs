use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::command::InterfaceName;
use crate::executor::ExecMode;

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_interface")]
    pub interface: String,

    #[serde(default = "default_scripts_dir")]
    pub scripts_dir: PathBuf,

    #[serde(default)]
    pub exec_mode: ExecMode,

    #[serde(default = "default_sudo")]
    pub sudo: String,
}

fn default_interface() -> String {
    "wlan0".to_string()
}

fn default_scripts_dir() -> PathBuf {
    PathBuf::from("/home/pi/RPi-Jukebox-RFID/scripts")
}

fn default_sudo() -> String {
    "sudo".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            interface: default_interface(),
            scripts_dir: default_scripts_dir(),
            exec_mode: ExecMode::default(),
            sudo: default_sudo(),
        }
    }
}

impl Config {
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("wlset").join("config.toml"))
    }

    /// Load the config at `path`, or the default location. Only a missing
    /// file at the default location gives the defaults.
    pub fn new(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Can not read config file {}", path.display()))?;
            return Self::parse(&content)
                .with_context(|| format!("Invalid config file {}", path.display()));
        }

        let Some(path) = Self::default_path() else {
            return Ok(Self::default());
        };

        match std::fs::read_to_string(&path) {
            Ok(content) => Self::parse(&content)
                .with_context(|| format!("Invalid config file {}", path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => {
                Err(e).with_context(|| format!("Can not read config file {}", path.display()))
            }
        }
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn interface(&self) -> Result<InterfaceName> {
        InterfaceName::try_from(self.interface.as_str()).context("Invalid interface in config")
    }
}
