//! Configuration management module.
//!
//! This module handles loading and saving application configuration:
//! the diet service address and the theme preference.

mod error;

pub use error::ConfigError;

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/dieta-tui";

// Address the mobile app shipped with; overridable via config file or CLI.
const DEFAULT_HOST: &str = "192.168.1.14";
const DEFAULT_PORT: u16 = 3333;

/// Oversees management of configuration file.
///
#[derive(Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub theme_name: String,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_theme_name")]
    pub theme_name: String,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_theme_name() -> String {
    "dieta-dark".to_string()
}

impl Config {
    /// Return a new instance with the built-in defaults.
    ///
    pub fn new() -> Config {
        Config {
            host: default_host(),
            port: default_port(),
            theme_name: default_theme_name(),
            file_path: None,
        }
    }

    /// The diet service base URL for the configured address.
    ///
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// Try to load an existing configuration from the disk using the custom
    /// path if provided. A missing file leaves the defaults in place; it is
    /// created on the first save.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> Result<(), AppError> {
        let dir_path = match custom_path {
            Some(path) => Path::new(&path).to_path_buf(),
            None => Config::default_path()?,
        };

        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).map_err(|e| ConfigError::CreateDirectoryFailed {
                path: dir_path.clone(),
                source: e,
            })?;
        }

        self.file_path = Some(dir_path.join(Path::new(FILE_NAME)));
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;

        if file_path.exists() {
            let contents = fs::read_to_string(file_path).map_err(|e| ConfigError::LoadFailed {
                path: file_path.clone(),
                message: format!("IO error: {}", e),
            })?;
            let data: FileSpec = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
            self.host = data.host;
            self.port = data.port;
            self.theme_name = data.theme_name;
        }

        Ok(())
    }

    /// Save the current configuration to disk.
    ///
    pub fn save(&self) -> Result<(), AppError> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;
        let data = FileSpec {
            host: self.host.clone(),
            port: self.port,
            theme_name: self.theme_name.clone(),
        };
        let content = serde_yaml::to_string(&data)
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))?;

        if let Some(parent) = file_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| ConfigError::CreateDirectoryFailed {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let mut file = fs::File::create(file_path).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        write!(file, "{}", content).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        Ok(())
    }

    /// Returns the path buffer for the default path to the configuration
    /// file or an error if the home directory could not be found.
    ///
    fn default_path() -> Result<PathBuf, AppError> {
        match dirs::home_dir() {
            Some(home) => {
                let home_path = Path::new(&home);
                let default_config_path = Path::new(DEFAULT_DIRECTORY_PATH);
                Ok(home_path.join(default_config_path))
            }
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}

impl Default for Config {
    fn default() -> Config {
        Config::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_the_shipped_service_address() {
        let config = Config::new();
        assert_eq!(config.base_url(), "http://192.168.1.14:3333");
        assert_eq!(config.theme_name, "dieta-dark");
    }

    #[test]
    fn load_reads_the_configured_address() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(FILE_NAME),
            "host: 10.0.0.2\nport: 8080\ntheme_name: dieta-light\n",
        )
        .unwrap();

        let mut config = Config::new();
        config.load(dir.path().to_str()).unwrap();
        assert_eq!(config.base_url(), "http://10.0.0.2:8080");
        assert_eq!(config.theme_name, "dieta-light");
    }

    #[test]
    fn load_with_missing_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::new();
        config.load(dir.path().to_str()).unwrap();
        assert_eq!(config.base_url(), "http://192.168.1.14:3333");
    }

    #[test]
    fn save_round_trips_through_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::new();
        config.load(dir.path().to_str()).unwrap();
        config.host = "localhost".to_string();
        config.port = 4000;
        config.save().unwrap();

        let mut reloaded = Config::new();
        reloaded.load(dir.path().to_str()).unwrap();
        assert_eq!(reloaded.base_url(), "http://localhost:4000");
    }

    #[test]
    fn partial_file_falls_back_to_defaults_per_field() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(FILE_NAME), "host: 10.1.1.1\n").unwrap();

        let mut config = Config::new();
        config.load(dir.path().to_str()).unwrap();
        assert_eq!(config.base_url(), "http://10.1.1.1:3333");
        assert_eq!(config.theme_name, "dieta-dark");
    }
}
