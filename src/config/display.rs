//! Display configuration loading from config.toml
//!
//! The configuration only changes how the menu is presented (header text and
//! currency symbol). Validation and store behaviour are fixed and cannot be
//! configured.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::{
    env,
    ffi::OsString,
    fs, io,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

/// Environment variable naming the configuration file
pub const CONFIG_PATH_VAR: &str = "MENU_CONFIG_PATH";

/// Configuration file used when `MENU_CONFIG_PATH` is not set
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Default, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    /// Presentation settings
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Text shown around the menu
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Screen title
    pub title: String,
    /// Line under the title
    pub subtitle: String,
    /// Symbol printed in front of every price
    pub currency_symbol: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title: "kiss the cheff".to_string(),
            subtitle: "Create and manage the menu".to_string(),
            currency_symbol: "R".to_string(),
        }
    }
}

/// Parses configuration from TOML text. Missing keys take their defaults.
///
/// # Errors
/// Returns an error if the TOML syntax is invalid or a value has the wrong type.
pub fn parse_config(contents: &str) -> Result<Config> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads configuration from a TOML file
///
/// # Arguments
/// * `path` - Location of the TOML file
///
/// # Returns
/// The parsed configuration, with defaults for any missing keys
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path_ref = path.as_ref();
    debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path_ref.display()),
    })?;

    parse_config(&contents)
}

/// Loads configuration from a TOML file that is allowed to be absent
///
/// # Arguments
/// * `path` - Location of the TOML file
///
/// # Returns
/// The parsed configuration, or [`Config::default`] if no file exists at `path`
///
/// # Errors
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_config_or_default<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path_ref = path.as_ref();
    match fs::read_to_string(path_ref) {
        Ok(contents) => parse_config(&contents)
            .inspect(|_| info!("Loaded configuration from {}", path_ref.display())),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            info!(
                "No configuration file at {}, using defaults",
                path_ref.display()
            );
            Ok(Config::default())
        }
        Err(e) => Err(Error::Config {
            message: format!("Failed to read config file {}: {e}", path_ref.display()),
        }),
    }
}

/// Picks the configuration file from the value of `MENU_CONFIG_PATH`.
///
/// The value is used as-is, including paths that are not valid UTF-8. An
/// unset or empty value falls back to [`DEFAULT_CONFIG_PATH`].
#[must_use]
pub fn config_path(var: Option<OsString>) -> PathBuf {
    var.filter(|value| !value.is_empty())
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from)
}

/// Loads configuration from `MENU_CONFIG_PATH`, falling back to ./config.toml.
///
/// A configuration file that does not exist is not an error: the defaults
/// are used instead.
///
/// # Errors
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_default_config() -> Result<Config> {
    load_config_or_default(config_path(env::var_os(CONFIG_PATH_VAR)))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_parse_display_config() {
        let toml_str = r#"
            [display]
            title = "Chez Ferris"
            subtitle = "Tonight's dishes"
            currency_symbol = "$"
        "#;

        let config = parse_config(toml_str).unwrap();
        assert_eq!(config.display.title, "Chez Ferris");
        assert_eq!(config.display.subtitle, "Tonight's dishes");
        assert_eq!(config.display.currency_symbol, "$");
    }

    #[test]
    fn test_missing_keys_take_defaults() {
        let config = parse_config("[display]\ncurrency_symbol = \"€\"\n").unwrap();
        assert_eq!(config.display.title, "kiss the cheff");
        assert_eq!(config.display.subtitle, "Create and manage the menu");
        assert_eq!(config.display.currency_symbol, "€");

        assert_eq!(parse_config("").unwrap(), Config::default());
    }

    #[test]
    fn test_invalid_config() {
        let result = parse_config("[display]\ntitle = 42\n");
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_config("definitely/not/here/config.toml");
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));
    }

    fn temp_config_path(tag: &str) -> PathBuf {
        env::temp_dir().join(format!(
            "menu-composer-{tag}-{}.toml",
            std::process::id()
        ))
    }

    #[test]
    fn test_load_config_from_file() {
        let path = temp_config_path("load");
        fs::write(&path, "[display]\ntitle = \"From File\"\n").unwrap();

        let config = load_config(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.display.title, "From File");
        assert_eq!(config.display.currency_symbol, "R");
    }

    #[test]
    fn test_config_path_from_env_value() {
        assert_eq!(config_path(None), PathBuf::from("config.toml"));
        assert_eq!(config_path(Some(OsString::new())), PathBuf::from("config.toml"));
        assert_eq!(
            config_path(Some(OsString::from("/etc/menu/display.toml"))),
            PathBuf::from("/etc/menu/display.toml")
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_config_path_keeps_non_utf8_value() {
        use std::os::unix::ffi::OsStringExt;

        let raw = OsString::from_vec(b"menu-\xff.toml".to_vec());
        assert_eq!(config_path(Some(raw.clone())), PathBuf::from(raw));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = temp_config_path("missing");
        let config = load_config_or_default(&path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_existing_file_overrides_defaults() {
        let path = temp_config_path("present");
        fs::write(&path, "[display]\ncurrency_symbol = \"$\"\n").unwrap();

        let config = load_config_or_default(config_path(Some(path.clone().into_os_string())));
        fs::remove_file(&path).unwrap();

        let config = config.unwrap();
        assert_eq!(config.display.currency_symbol, "$");
        assert_eq!(config.display.title, "kiss the cheff");
    }

    #[test]
    fn test_unreadable_config_is_an_error() {
        // A directory exists but cannot be read as a file
        let result = load_config_or_default(env::temp_dir());
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));

        let path = temp_config_path("broken");
        fs::write(&path, "[display\n").unwrap();
        let result = load_config_or_default(&path);
        fs::remove_file(&path).unwrap();
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));
    }
}
