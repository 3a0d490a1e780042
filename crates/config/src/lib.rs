//! Configuration management for assist
//!
//! This crate provides functionality for managing the assist configuration,
//! including loading, saving, updating, and deleting configuration settings.

/// Error types for the configuration module
pub mod error;

use std::path::PathBuf;

use crate::error::Error;
use assist_common::{
    constants::ALPHANUMERIC_SYMBOLS,
    utils::{
        env::get_env,
        io::file::{delete_path, read_file, short_path, user_home_directory, write_file},
    },
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

/// Environment variable that overrides the location of the configuration file
pub const CONFIG_PATH_ENV_VAR: &str = "ASSIST_CONFIG";

/// The keys accepted by [`Configuration::update`]
pub const CONFIGURATION_KEYS: [&str; 3] = ["properties_path", "random_seed", "random_symbols"];

/// Command line arguments for the configuration command
#[derive(Debug, Clone, Parser)]
#[clap(
    about = "Display and edit the current configuration",
    after_help = "For more information, read the wiki: https://github.com/assist-rs/assist/wiki",
    override_usage = "assist config [OPTIONS]"
)]
pub struct ConfigArgs {
    /// The target key to update.
    #[clap(required = false, default_value = "")]
    key: String,

    /// The value to set the key to.
    #[clap(required = false, default_value = "")]
    value: String,
}

/// The [`Configuration`] struct represents the configuration of the CLI. Commands fall back to it
/// whenever an option is not given on the command line.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Configuration {
    /// The properties file used by `assist props` when `--file` is not given
    pub properties_path: String,

    /// The seed for `assist random`, where `0` seeds from system entropy
    pub random_seed: u64,

    /// The symbols `assist random string` picks from
    pub random_symbols: String,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            properties_path: "".to_string(),
            random_seed: 0,
            random_symbols: ALPHANUMERIC_SYMBOLS.to_string(),
        }
    }
}

/// Returns the location of the configuration file.
///
/// This is the file named by `ASSIST_CONFIG` when set, otherwise `$HOME/.assist/config.toml`.
pub fn config_path() -> Result<PathBuf, Error> {
    if let Some(path) = get_env(CONFIG_PATH_ENV_VAR).filter(|path| !path.is_empty()) {
        return Ok(PathBuf::from(path));
    }

    let mut home = user_home_directory().ok_or_else(|| {
        Error::Generic(
            "failed to get home directory. is `HOME` (or `USERPROFILE`) set?".to_string(),
        )
    })?;
    home.push(".assist");
    home.push("config.toml");
    Ok(home)
}

impl Configuration {
    /// Returns the current configuration.
    pub fn load() -> Result<Self, Error> {
        let path = config_path()?;

        // if the config file doesn't exist, create it
        if !path.exists() {
            debug!("no config file at '{}', writing defaults", short_path(&path.to_string_lossy()));
            let config = Configuration::default();
            config.save()?;
        }

        // read the config file
        let contents = read_file(&path)
            .map_err(|e| Error::Generic(format!("failed to read config file: {e}")))?;

        // parse the config file
        let config: Configuration = toml::from_str(&contents)
            .map_err(|e| Error::ParseError(format!("failed to parse config file: {e}")))?;

        Ok(config)
    }

    /// Saves the current configuration to disk.
    pub fn save(&self) -> Result<(), Error> {
        let path = config_path()?;

        write_file(
            &path,
            &toml::to_string(&self)
                .map_err(|e| Error::ParseError(format!("failed to serialize config: {e}")))?,
        )
        .map_err(|e| Error::Generic(format!("failed to write config file: {e}")))?;

        Ok(())
    }

    /// Deletes the configuration file.
    pub fn delete() -> Result<(), Error> {
        let path = config_path()?;
        if path.exists() && !delete_path(&path) {
            return Err(Error::Generic(format!(
                "failed to delete config file '{}'",
                short_path(&path.to_string_lossy())
            )));
        }

        Ok(())
    }

    /// Update a single key/value pair in the configuration.
    pub fn update(&mut self, key: &str, value: &str) -> Result<(), Error> {
        // update the key in the struct and ensure it's the correct type
        match key {
            "properties_path" => {
                self.properties_path = value.to_string();
            }
            "random_seed" => {
                // toml integers are signed 64-bit
                self.random_seed = value
                    .parse::<u64>()
                    .ok()
                    .filter(|seed| i64::try_from(*seed).is_ok())
                    .ok_or_else(|| {
                        Error::ParseError(format!(
                            "invalid value: '{value}' is not a valid seed. expected an integer between 0 and {}",
                            i64::MAX
                        ))
                    })?;
            }
            "random_symbols" => {
                if value.is_empty() {
                    return Err(Error::ParseError(
                        "invalid value: `random_symbols` must not be empty".to_string(),
                    ));
                }
                self.random_symbols = value.to_string();
            }
            _ => {
                return Err(Error::InvalidKey {
                    key: key.to_string(),
                    suggestion: closest_key(key).map(String::from),
                })
            }
        }

        // write the updated config to disk
        self.save()?;

        Ok(())
    }
}

/// Finds the configuration key closest to a mistyped `key`.
fn closest_key(key: &str) -> Option<&'static str> {
    CONFIGURATION_KEYS
        .iter()
        .map(|candidate| (strsim::levenshtein(key, candidate), *candidate))
        .filter(|(distance, _)| *distance <= 3)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, candidate)| candidate)
}

/// The `config` command is used to display and edit the current configuration.
pub fn config(args: ConfigArgs) -> Result<(), Error> {
    if !args.key.is_empty() {
        if !args.value.is_empty() {
            // read the config file and update the key/value pair
            let mut config = Configuration::load()?;
            config.update(&args.key, &args.value)?;
            info!("updated configuration! Set \'{}\' = \'{}\' .", &args.key, &args.value);
        } else {
            // key is set, but no value is set
            error!("found key but no value to set. Please specify a value to set, use `assist config --help` for more information.");
        }
    } else {
        // no key is set, print the config file
        println!("{:#?}", Configuration::load()?);
        info!("use `assist config <KEY> <VALUE>` to set a key/value pair.");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assist_common::utils::env::set_env;
    use serial_test::serial;
    use tempfile::TempDir;

    // points the configuration at a scratch file for the duration of a test
    fn scratch_config() -> TempDir {
        let dir = TempDir::new().expect("failed to create temp dir");
        set_env(CONFIG_PATH_ENV_VAR, &dir.path().join("config.toml").to_string_lossy());
        dir
    }

    // Test default configuration
    #[test]
    #[serial]
    fn test_default_configuration() {
        let config = Configuration::default();
        assert_eq!(config.properties_path, "");
        assert_eq!(config.random_seed, 0);
        assert_eq!(config.random_symbols, ALPHANUMERIC_SYMBOLS);
    }

    #[test]
    #[serial]
    fn test_config_path_override() {
        let dir = scratch_config();
        assert_eq!(config_path().expect("failed to get config path"), dir.path().join("config.toml"));
    }

    // Test loading configuration from a file
    #[test]
    #[serial]
    fn test_load_configuration() {
        let dir = scratch_config();
        let config = Configuration::load().expect("failed to load config file");

        assert_eq!(config, Configuration::default());
        assert!(dir.path().join("config.toml").exists());
    }

    #[test]
    #[serial]
    fn test_load_partial_configuration() {
        let dir = scratch_config();
        std::fs::write(dir.path().join("config.toml"), "random_seed = 42\n")
            .expect("failed to write config file");

        let config = Configuration::load().expect("failed to load config file");
        assert_eq!(config.random_seed, 42);
        assert_eq!(config.random_symbols, ALPHANUMERIC_SYMBOLS);
    }

    // Test saving configuration to a file
    #[test]
    #[serial]
    fn test_save_configuration() {
        let _dir = scratch_config();
        let mut config = Configuration::default();

        config.update("properties_path", "/tmp/app.properties").expect("failed to update");
        config.update("random_seed", "1234").expect("failed to update");
        config.update("random_symbols", "abc").expect("failed to update");

        let loaded_config = Configuration::load().expect("failed to load config file");
        assert_eq!(loaded_config.properties_path, "/tmp/app.properties");
        assert_eq!(loaded_config.random_seed, 1234);
        assert_eq!(loaded_config.random_symbols, "abc");
    }

    #[test]
    #[serial]
    fn test_update_rejects_bad_values() {
        let _dir = scratch_config();
        let mut config = Configuration::default();

        assert!(matches!(config.update("random_seed", "-1"), Err(Error::ParseError(_))));
        assert!(matches!(config.update("random_seed", "abc"), Err(Error::ParseError(_))));
        assert!(matches!(
            config.update("random_seed", &u64::MAX.to_string()),
            Err(Error::ParseError(_))
        ));
        assert!(matches!(config.update("random_symbols", ""), Err(Error::ParseError(_))));
        assert_eq!(config, Configuration::default());
    }

    #[test]
    #[serial]
    fn test_update_suggests_closest_key() {
        let _dir = scratch_config();
        let mut config = Configuration::default();

        match config.update("random_sead", "1") {
            Err(Error::InvalidKey { suggestion, .. }) => {
                assert_eq!(suggestion.as_deref(), Some("random_seed"))
            }
            other => panic!("expected an invalid key error, got {:?}", other),
        }
        match config.update("completely_unrelated", "1") {
            Err(Error::InvalidKey { suggestion, .. }) => assert_eq!(suggestion, None),
            other => panic!("expected an invalid key error, got {:?}", other),
        }
    }

    // Test deleting configuration file
    #[test]
    #[serial]
    fn test_delete_configuration() {
        let _dir = scratch_config();
        let mut config = Configuration::load().expect("failed to load config file");
        config.update("random_seed", "7").expect("failed to update random_seed");

        Configuration::delete().expect("failed to delete config file");
        assert!(!config_path().expect("failed to get config path").exists());
        let config = Configuration::load().expect("failed to load config file");
        assert_eq!(config, Configuration::default());

        // deleting a missing file is not an error
        Configuration::delete().expect("failed to delete config file");
        Configuration::delete().expect("failed to delete config file");
    }
}
