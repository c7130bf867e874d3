// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Alignment types

use std::str::FromStr;
use thiserror::Error;

/// Alignment of content along one axis
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Align {
    /// Unspecified
    #[default]
    Default,
    /// Top or left
    TL,
    /// Centered
    Center,
    /// Bottom or right
    BR,
    /// Occupy the full extent of the axis
    Stretch,
}

impl Align {
    fn from_bits(bits: u8) -> Self {
        match bits & 3 {
            0 => Align::Center,
            1 => Align::TL,
            2 => Align::BR,
            _ => Align::Stretch,
        }
    }
}

/// An alignment token was not recognised
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown alignment token `{0}`")]
pub struct ParseAlignError(String);

/// Alignment on both axes
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlignPair {
    pub horiz: Align,
    pub vert: Align,
}

impl AlignPair {
    /// Default on both axes
    pub const DEFAULT: AlignPair = AlignPair::new(Align::Default, Align::Default);

    /// Center on both axes
    pub const CENTER: AlignPair = AlignPair::new(Align::Center, Align::Center);

    /// Stretch on both axes
    pub const STRETCH: AlignPair = AlignPair::new(Align::Stretch, Align::Stretch);

    /// Construct with horiz. and vert. alignment
    pub const fn new(horiz: Align, vert: Align) -> Self {
        Self { horiz, vert }
    }
}

/// Parse from whitespace-separated tokens
///
/// Tokens accumulate: `"Left Right"` is the same as `"HStretch"`, and
/// `"Left Top"` is the same as `"Default"`. Centering tokens contribute
/// nothing, so the empty string and `"Center"` both mean centered on both
/// axes.
///
/// Recognised tokens: `Default`, `Center`, `HCenter`, `VCenter`, `Left`,
/// `Right`, `HStretch`, `Top`, `Bottom`, `VStretch`, `Stretch`.
impl FromStr for AlignPair {
    type Err = ParseAlignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const LEFT: u8 = 1;
        const RIGHT: u8 = 2;
        const TOP: u8 = 4;
        const BOTTOM: u8 = 8;

        let mut bits = 0u8;
        for token in s.split_whitespace() {
            bits |= match token {
                "Center" | "HCenter" | "VCenter" => 0,
                "Left" => LEFT,
                "Right" => RIGHT,
                "HStretch" => LEFT | RIGHT,
                "Top" => TOP,
                "Bottom" => BOTTOM,
                "VStretch" => TOP | BOTTOM,
                "Stretch" => LEFT | RIGHT | TOP | BOTTOM,
                "Default" => LEFT | TOP,
                other => return Err(ParseAlignError(other.to_string())),
            };
        }

        Ok(AlignPair::new(Align::from_bits(bits), Align::from_bits(bits >> 2)))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_tokens() {
        let p = |s: &str| s.parse::<AlignPair>().unwrap();
        assert_eq!(p("Left"), AlignPair::new(Align::TL, Align::Center));
        assert_eq!(p("Right Bottom"), AlignPair::new(Align::BR, Align::BR));
        assert_eq!(p("HStretch"), AlignPair::new(Align::Stretch, Align::Center));
        assert_eq!(p("Left Right VStretch"), AlignPair::new(Align::Stretch, Align::Stretch));
        assert_eq!(p("Default"), AlignPair::new(Align::TL, Align::TL));
        assert_eq!(p("Stretch"), AlignPair::STRETCH);
        assert_eq!(p(""), AlignPair::CENTER);
        assert_eq!(p("HCenter Top"), AlignPair::new(Align::Center, Align::TL));
    }

    #[test]
    fn parse_unknown() {
        assert_eq!(
            "Left Sideways".parse::<AlignPair>(),
            Err(ParseAlignError("Sideways".to_string()))
        );
    }
}
