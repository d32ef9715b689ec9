//! Portal settings
//!
//! School-wide settings loaded from a TOML file: the current term, the
//! signup special code, and the admin accounts. A missing file yields the
//! defaults, so the CLI works out of the box.

use std::path::{Path, PathBuf};

use chrono::{Datelike, Utc};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use homeroom_core::Semester;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not determine a config directory for this platform")]
    NoConfigDir,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Settings parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// School-wide portal settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Code teachers enter when signing up
    pub special_code: String,
    /// Term currently being edited
    pub semester: Semester,
    pub year: i32,
    /// Admin account ids
    pub admins: Vec<Uuid>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            special_code: String::new(),
            semester: Semester::First,
            year: Utc::now().year(),
            admins: Vec::new(),
        }
    }
}

impl Settings {
    /// Platform config path, e.g. `~/.config/homeroom/settings.toml`
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        ProjectDirs::from("", "", "homeroom")
            .map(|dirs| dirs.config_dir().join("settings.toml"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load settings from `path`, or from the platform default when `None`.
    /// A missing file is not an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_path()?,
        };

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(&path)?;
        let settings = toml::from_str(&raw)?;
        tracing::debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }
}
