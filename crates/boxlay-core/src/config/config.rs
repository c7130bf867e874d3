// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Top-level configuration struct

use crate::geom::Size;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Layout engine configuration
///
/// Defaults applied to newly created widgets. Per-widget properties set
/// afterwards override these values.
///
/// This is serializable (using `feature = "serde"`) with the following fields:
///
/// > `spacing`: `i32`: gap between box children (default 4) \
/// > `padding`: `i32`: box content inset (default 0) \
/// > `auto_resize`: `bool`: boxes fit their content (default false) \
/// > `button_text_padding`: `[i32, i32]`: button caption padding (default `[24, 8]`)
///
/// Missing fields take their default values.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    pub spacing: i32,
    pub padding: i32,
    pub auto_resize: bool,
    pub button_text_padding: Size,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            spacing: defaults::spacing(),
            padding: 0,
            auto_resize: false,
            button_text_padding: defaults::button_text_padding(),
        }
    }
}

impl Config {
    /// Check that the configuration is usable
    ///
    /// Spacing, padding and button padding must not be negative.
    pub fn validate(&self) -> crate::Result<()> {
        if self.spacing < 0 {
            return Err(crate::Error::parse("spacing", &self.spacing.to_string()));
        }
        if self.padding < 0 {
            return Err(crate::Error::parse("padding", &self.padding.to_string()));
        }
        let Size(w, h) = self.button_text_padding;
        if w < 0 || h < 0 {
            return Err(crate::Error::parse("button_text_padding", &format!("{w} {h}")));
        }
        Ok(())
    }
}

mod defaults {
    use crate::geom::Size;

    pub fn spacing() -> i32 {
        4
    }

    pub fn button_text_padding() -> Size {
        Size(24, 8)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.spacing, 4);
        assert_eq!(config.padding, 0);
        assert!(!config.auto_resize);
        assert_eq!(config.button_text_padding, Size(24, 8));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_negative() {
        let config = Config {
            padding: -2,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[cfg(feature = "json")]
    #[test]
    fn partial_json() {
        let config: Config = serde_json::from_str(r#"{ "spacing": 2 }"#).unwrap();
        assert_eq!(config.spacing, 2);
        assert_eq!(config.button_text_padding, Size(24, 8));
    }
}
