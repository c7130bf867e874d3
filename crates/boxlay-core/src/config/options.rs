// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Where the layout config comes from

use super::{Config, Error};
#[cfg(feature = "serde")] use crate::util::warn_about_error;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// Environment variable naming the config file
pub const CONFIG_VAR: &str = "BOXLAY_CONFIG";
/// Environment variable selecting the [`ConfigMode`]
pub const CONFIG_MODE_VAR: &str = "BOXLAY_CONFIG_MODE";

/// How the config file is used
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ConfigMode {
    /// Load the file; never write it
    #[default]
    Read,
    /// Load the file; [`Options::write_config`] saves changes back
    ReadWrite,
    /// Ignore the file's contents and overwrite it with the defaults
    WriteDefault,
}

/// A [`ConfigMode`] name was not recognised
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown config mode `{0}` (expected Read, ReadWrite or WriteDefault)")]
pub struct ParseConfigModeError(String);

impl FromStr for ConfigMode {
    type Err = ParseConfigModeError;

    /// Case-insensitive; `-` and `_` separators are ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_'))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match key.as_str() {
            "read" => Ok(ConfigMode::Read),
            "readwrite" => Ok(ConfigMode::ReadWrite),
            "writedefault" => Ok(ConfigMode::WriteDefault),
            _ => Err(ParseConfigModeError(s.to_string())),
        }
    }
}

/// Config source
///
/// With an empty `config_path` no file is touched and [`Config::default`]
/// is used.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Options {
    pub config_path: PathBuf,
    pub config_mode: ConfigMode,
}

impl Options {
    /// Read [`CONFIG_VAR`] and [`CONFIG_MODE_VAR`] from the environment
    ///
    /// See [`Options::from_values`].
    pub fn from_env() -> Self {
        let path = std::env::var(CONFIG_VAR).ok();
        let mode = std::env::var(CONFIG_MODE_VAR).ok();
        Options::from_values(path, mode.as_deref())
    }

    /// Construct from a path and a mode name, either of which may be absent
    ///
    /// An unrecognised mode is logged and replaced by [`ConfigMode::Read`],
    /// so a typo cannot cause the file to be overwritten.
    pub fn from_values(path: Option<String>, mode: Option<&str>) -> Self {
        let config_mode = match mode.map(str::parse::<ConfigMode>) {
            None => ConfigMode::default(),
            Some(Ok(mode)) => mode,
            Some(Err(error)) => {
                log::error!("Options: {CONFIG_MODE_VAR}: {error}");
                ConfigMode::default()
            }
        };
        Options {
            config_path: path.map(PathBuf::from).unwrap_or_default(),
            config_mode,
        }
    }

    /// True if a config file is named
    pub fn has_path(&self) -> bool {
        !self.config_path.as_os_str().is_empty()
    }

    /// Produce the config
    ///
    /// Without a path, or without feature `serde`, this is the default
    /// config. In [`ConfigMode::WriteDefault`] the defaults are returned even
    /// if writing them fails; the failure is logged.
    pub fn read_config(&self) -> Result<Config, Error> {
        #[cfg(feature = "serde")]
        if self.has_path() {
            return match self.config_mode {
                ConfigMode::Read | ConfigMode::ReadWrite => Config::load(&self.config_path),
                ConfigMode::WriteDefault => {
                    let config = Config::default();
                    if let Err(error) = config.save(&self.config_path) {
                        warn_about_error("Options: failed to write default config", &error);
                    }
                    Ok(config)
                }
            };
        }

        Ok(Config::default())
    }

    /// Save `config` if the mode is [`ConfigMode::ReadWrite`]
    ///
    /// Otherwise, or without a path, this does nothing.
    pub fn write_config(&self, config: &Config) -> Result<(), Error> {
        #[cfg(feature = "serde")]
        if self.config_mode == ConfigMode::ReadWrite && self.has_path() {
            return config.save(&self.config_path);
        }

        let _ = config;
        Ok(())
    }
}
