// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Box container configuration

use crate::config::Config;
use crate::{Error, Result};

/// Configuration shared by horizontal and vertical boxes
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoxConfig {
    /// Gap between consecutive visible children (≥ 0)
    pub spacing: i32,
    /// Inset on all four sides of the content area (≥ 0)
    pub padding: i32,
    /// Resize the box to fit its children instead of distributing its size
    pub auto_resize: bool,
}

impl Default for BoxConfig {
    fn default() -> Self {
        BoxConfig {
            spacing: 4,
            padding: 0,
            auto_resize: false,
        }
    }
}

impl From<&Config> for BoxConfig {
    fn from(config: &Config) -> Self {
        BoxConfig {
            spacing: config.spacing,
            padding: config.padding,
            auto_resize: config.auto_resize,
        }
    }
}

impl BoxConfig {
    /// Set a box property from its string form
    ///
    /// Recognises `Spacing`, `Padding` (non-negative integers) and
    /// `AutoResize` (`true`/`false`, `1`/`0`). Returns `Ok(false)` for any
    /// other key so that the caller may forward it to generic widget
    /// properties. On error, `self` is not modified.
    pub fn set_property(&mut self, key: &str, value: &str) -> Result<bool> {
        match key {
            "Spacing" => self.spacing = parse_extent(key, value)?,
            "Padding" => self.padding = parse_extent(key, value)?,
            "AutoResize" => self.auto_resize = parse_bool(key, value)?,
            _ => return Ok(false),
        }
        Ok(true)
    }
}

fn parse_extent(key: &str, value: &str) -> Result<i32> {
    match value.trim().parse::<i32>() {
        Ok(n) if n >= 0 => Ok(n),
        _ => Err(Error::parse(key, value)),
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(Error::parse(key, value)),
    }
}
