// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Direction types
//!
//! Boxes lay out children left-to-right ([`Right`]) or top-to-bottom
//! ([`Down`]). The cross axis of a direction is its [`Directional::flipped`]
//! direction; the same solver code serves both box variants by extracting
//! components through these types.

use std::fmt;

/// Trait over directional types
///
/// This trait has a variable implementation, [`Direction`], and two fixed
/// implementations, [`Right`] and [`Down`].
///
/// Using a generic `<D: Directional>` allows compile-time substitution of
/// direction information when parametrised with fixed implementations.
pub trait Directional: Copy + Sized + std::fmt::Debug + 'static {
    /// Direction flipped over diagonal (i.e. Down ↔ Right)
    ///
    /// This allows compile-time selection of the flipped direction.
    type Flipped: Directional;

    /// Flip over diagonal (i.e. Down ↔ Right)
    #[must_use = "method does not modify self but returns a new value"]
    fn flipped(self) -> Self::Flipped;

    /// Convert to the [`Direction`] enum
    #[must_use = "method does not modify self but returns a new value"]
    fn as_direction(self) -> Direction;

    /// Down
    #[inline]
    fn is_vertical(self) -> bool {
        ((self.as_direction() as u32) & 1) == 1
    }

    /// Right
    #[inline]
    fn is_horizontal(self) -> bool {
        ((self.as_direction() as u32) & 1) == 0
    }
}

macro_rules! fixed {
    ($d:ident, $df:ident) => {
        /// Zero-sized instantiation of [`Directional`]
        #[derive(Copy, Clone, Default, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $d;
        impl Directional for $d {
            type Flipped = $df;
            #[inline]
            fn flipped(self) -> Self::Flipped {
                $df
            }
            #[inline]
            fn as_direction(self) -> Direction {
                Direction::$d
            }
        }
    };
}
fixed!(Right, Down);
fixed!(Down, Right);

/// Axis-aligned layout directions
///
/// This is a variable instantiation of [`Directional`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Horizontal: children are placed left to right
    #[default]
    Right = 0,
    /// Vertical: children are placed top to bottom
    Down = 1,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", match self {
            Direction::Right => "Right",
            Direction::Down => "Down",
        })
    }
}

impl Directional for Direction {
    type Flipped = Self;

    fn flipped(self) -> Self::Flipped {
        match self {
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Right,
        }
    }

    #[inline]
    fn as_direction(self) -> Direction {
        self
    }
}
