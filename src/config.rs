use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, ErrorKind, Result};

const CONFIG_PATH_ENV_VAR: &str = "HABITUAL_CONFIG_FILE";
const APP_DIR: &str = "habitual";
const DATA_FILE_NAME: &str = "habits.json";

pub(crate) fn find_configfile_locations() -> Vec<PathBuf> {
    let mut locations = Vec::new();

    if let Ok(path) = env::var(CONFIG_PATH_ENV_VAR) {
        locations.push(PathBuf::from(path));
    }

    if let Some(dir) = dirs::config_dir() {
        locations.push(dir.join(APP_DIR).join("config.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        locations.push(home.join(".habitual.toml"));
    }

    locations
}

fn default_data_file() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR).join(DATA_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(DATA_FILE_NAME))
}

fn default_export_dir() -> PathBuf {
    PathBuf::from(".")
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
    #[serde(default = "default_export_dir")]
    pub export_dir: PathBuf,
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            data_file: default_data_file(),
            export_dir: default_export_dir(),
            log_file: None,
        }
    }
}

impl Config {
    pub fn parse(content: &str) -> Result<Config> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path).map_err(|err| {
            Error::new(
                ErrorKind::ConfigParse,
                &format!("could not read '{}': {}", path.display(), err),
            )
        })?;

        toml::from_str(&content).map_err(|err| {
            Error::new(
                ErrorKind::ConfigParse,
                &format!("'{}': {}", path.display(), err),
            )
        })
    }
}

/// Loads `path` if given, otherwise the first config file found in the
/// usual locations, otherwise the defaults.
pub fn load_suitable_config(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        return Config::load(path);
    }

    match find_configfile_locations()
        .into_iter()
        .find(|location| location.is_file())
    {
        Some(location) => {
            log::debug!("Using config file '{}'", location.display());
            Config::load(&location)
        }
        None => {
            log::debug!("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn reads_all_keys() {
        let config = Config::parse(
            r#"
            data_file = "/tmp/habits.json"
            export_dir = "/tmp/exports"
            log_file = "/tmp/habitual.log"
            "#,
        )
        .unwrap();

        assert_eq!(config.data_file, PathBuf::from("/tmp/habits.json"));
        assert_eq!(config.export_dir, PathBuf::from("/tmp/exports"));
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/habitual.log")));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = Config::parse("colour = \"red\"").unwrap_err();
        assert!(matches!(err.kind, ErrorKind::ConfigParse));
    }

    #[test]
    fn default_data_file_is_json() {
        assert_eq!(
            Config::default().data_file.file_name().unwrap(),
            DATA_FILE_NAME
        );
    }
}
