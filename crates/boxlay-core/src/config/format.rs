// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Config file formats
//!
//! The format of a config file is chosen by its extension: `.json`, `.toml`
//! or `.ron`, each behind the feature of the same name.

#[cfg(feature = "serde")] use super::Config;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[cfg(feature = "serde")]
type BoxedError = Box<dyn std::error::Error + Send + Sync>;

/// Failure to load or save a [`Config`](super::Config)
#[derive(Error, Debug)]
pub enum Error {
    /// The file could not be read or written
    #[error("config file {}: access failed", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file contents are not a config in the expected format
    #[cfg(feature = "serde")]
    #[error("config file is not valid {format}")]
    Decode {
        format: Format,
        #[source]
        source: BoxedError,
    },

    /// The config could not be written in the expected format
    #[cfg(feature = "serde")]
    #[error("config could not be written as {format}")]
    Encode {
        format: Format,
        #[source]
        source: BoxedError,
    },

    /// The file decoded to a config with out-of-range values
    #[error("invalid config")]
    Invalid(#[from] crate::Error),

    /// No enabled format matches the file extension
    #[error("config format not supported: {0}")]
    UnsupportedFormat(Format),
}

/// Config file format
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Format {
    /// JavaScript Object Notation (feature `json`)
    Json,
    /// Tom's Obvious Minimal Language (feature `toml`)
    Toml,
    /// Rusty Object Notation (feature `ron`)
    Ron,
    /// Unrecognised extension, or the matching feature is disabled
    Unknown,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Format::Json => "JSON",
            Format::Toml => "TOML",
            Format::Ron => "RON",
            Format::Unknown => "(unknown format)",
        })
    }
}

impl Format {
    /// Select the format for `path` from its extension
    ///
    /// This does not open the file. Yields [`Format::Unknown`] when the
    /// extension is not recognised or its feature is not enabled.
    pub fn from_path(path: &Path) -> Format {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") if cfg!(feature = "json") => Format::Json,
            Some("toml") if cfg!(feature = "toml") => Format::Toml,
            Some("ron") if cfg!(feature = "ron") => Format::Ron,
            _ => Format::Unknown,
        }
    }

    /// Decode and validate a config
    ///
    /// Fields missing from `text` take their default values.
    #[cfg(feature = "serde")]
    pub fn decode(self, text: &str) -> Result<Config, Error> {
        let decoded: Result<Config, BoxedError> = match self {
            #[cfg(feature = "json")]
            Format::Json => serde_json::from_str(text).map_err(Into::into),
            #[cfg(feature = "toml")]
            Format::Toml => toml::from_str(text).map_err(Into::into),
            #[cfg(feature = "ron")]
            Format::Ron => ron::from_str(text).map_err(Into::into),
            _ => {
                let _ = text;
                return Err(Error::UnsupportedFormat(self));
            }
        };
        let config = decoded.map_err(|source| Error::Decode { format: self, source })?;
        config.validate()?;
        Ok(config)
    }

    /// Encode a config as text
    #[cfg(feature = "serde")]
    pub fn encode(self, config: &Config) -> Result<String, Error> {
        let encoded: Result<String, BoxedError> = match self {
            #[cfg(feature = "json")]
            Format::Json => serde_json::to_string_pretty(config).map_err(Into::into),
            #[cfg(feature = "toml")]
            Format::Toml => toml::to_string(config).map_err(Into::into),
            #[cfg(feature = "ron")]
            Format::Ron => {
                ron::ser::to_string_pretty(config, ron::ser::PrettyConfig::default()).map_err(Into::into)
            }
            _ => {
                let _ = config;
                return Err(Error::UnsupportedFormat(self));
            }
        };
        encoded.map_err(|source| Error::Encode { format: self, source })
    }
}

#[cfg(feature = "serde")]
impl Config {
    /// Load a config file
    ///
    /// The format is chosen by [`Format::from_path`]. The loaded config is
    /// validated.
    pub fn load(path: &Path) -> Result<Config, Error> {
        let format = Format::from_path(path);
        if format == Format::Unknown {
            return Err(Error::UnsupportedFormat(format));
        }
        log::info!("Config::load: {} as {format}", path.display());
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        format.decode(&text)
    }

    /// Save to a config file
    ///
    /// The whole document is encoded before the file is touched, so a failed
    /// encoding leaves any existing file intact.
    pub fn save(&self, path: &Path) -> Result<(), Error> {
        let format = Format::from_path(path);
        if format == Format::Unknown {
            return Err(Error::UnsupportedFormat(format));
        }
        log::info!("Config::save: {} as {format}", path.display());
        let text = format.encode(self)?;
        std::fs::write(path, text).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_path() {
        let expect = |enabled, format| if enabled { format } else { Format::Unknown };
        assert_eq!(
            Format::from_path(Path::new("a/layout.toml")),
            expect(cfg!(feature = "toml"), Format::Toml)
        );
        assert_eq!(
            Format::from_path(Path::new("layout.json")),
            expect(cfg!(feature = "json"), Format::Json)
        );
        assert_eq!(
            Format::from_path(Path::new("layout.ron")),
            expect(cfg!(feature = "ron"), Format::Ron)
        );
        assert_eq!(Format::from_path(Path::new("layout.ini")), Format::Unknown);
        assert_eq!(Format::from_path(Path::new("layout")), Format::Unknown);
    }

    #[cfg(feature = "json")]
    #[test]
    fn decode_validates() {
        let config = Format::Json.decode(r#"{ "padding": 3 }"#).unwrap();
        assert_eq!(config.padding, 3);
        assert_eq!(config.spacing, 4);

        assert!(matches!(
            Format::Json.decode(r#"{ "spacing": -1 }"#),
            Err(Error::Invalid(crate::Error::Parse { .. }))
        ));
        assert!(matches!(
            Format::Json.decode("{ spacing"),
            Err(Error::Decode { format: Format::Json, .. })
        ));
    }

    #[cfg(feature = "ron")]
    #[test]
    fn encode_then_decode_ron() {
        let config = Config {
            spacing: 2,
            auto_resize: true,
            ..Config::default()
        };
        let text = Format::Ron.encode(&config).unwrap();
        assert_eq!(Format::Ron.decode(&text).unwrap(), config);
    }
}
