// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Typed layout attributes

use crate::dir::Directional;
use crate::geom::Size;
use crate::{Error, Result};

/// User-string key: exclude the widget from layout
pub const HIDDEN: &str = "Hidden";
/// User-string key: share leftover width in a horizontal box
pub const H_STRETCH: &str = "HStretch";
/// User-string key: share leftover height in a vertical box
pub const V_STRETCH: &str = "VStretch";
/// User-string key: padding added around a button's caption
pub const TEXT_PADDING: &str = "TextPadding";

bitflags::bitflags! {
    /// Boolean layout flags
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct LayoutFlags: u8 {
        /// Excluded from measurement and placement
        const HIDDEN = 1 << 0;
        /// Stretched horizontally
        const H_STRETCH = 1 << 1;
        /// Stretched vertically
        const V_STRETCH = 1 << 2;
    }
}

impl LayoutFlags {
    /// The stretch flag for the given axis
    #[inline]
    pub fn stretch_flag<D: Directional>(dir: D) -> Self {
        match dir.is_vertical() {
            false => LayoutFlags::H_STRETCH,
            true => LayoutFlags::V_STRETCH,
        }
    }
}

/// Layout attributes of one widget
///
/// This is the typed form of the layout-relevant user strings. It is updated
/// whenever one of those strings is set, so the solver never inspects raw
/// strings. Flags are set only by the exact value `"true"`; any other value
/// (or absence) clears them.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Attributes {
    pub flags: LayoutFlags,
    /// Button caption padding, if overridden
    pub text_padding: Option<Size>,
}

impl Attributes {
    /// True if hidden
    #[inline]
    pub fn is_hidden(&self) -> bool {
        self.flags.contains(LayoutFlags::HIDDEN)
    }

    /// True if stretched along `dir`
    #[inline]
    pub fn is_stretched<D: Directional>(&self, dir: D) -> bool {
        self.flags.contains(LayoutFlags::stretch_flag(dir))
    }

    /// Update from a user string
    ///
    /// Returns `Ok(false)` if `key` is not a layout attribute. On error, `self`
    /// is not modified.
    pub fn apply(&mut self, key: &str, value: &str) -> Result<bool> {
        let flag = match key {
            HIDDEN => LayoutFlags::HIDDEN,
            H_STRETCH => LayoutFlags::H_STRETCH,
            V_STRETCH => LayoutFlags::V_STRETCH,
            TEXT_PADDING => {
                let size = value.parse().map_err(|_| Error::parse(key, value))?;
                self.text_padding = Some(size);
                return Ok(true);
            }
            _ => return Ok(false),
        };
        self.flags.set(flag, value == "true");
        Ok(true)
    }

    /// Reset the attribute for `key` to its default
    ///
    /// Returns `false` if `key` is not a layout attribute.
    pub fn reset(&mut self, key: &str) -> bool {
        match key {
            HIDDEN => self.flags.remove(LayoutFlags::HIDDEN),
            H_STRETCH => self.flags.remove(LayoutFlags::H_STRETCH),
            V_STRETCH => self.flags.remove(LayoutFlags::V_STRETCH),
            TEXT_PADDING => self.text_padding = None,
            _ => return false,
        }
        true
    }
}
