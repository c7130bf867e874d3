// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Geometry data types
//!
//! [`Coord`], [`Size`] and [`Offset`] are all 2D integer (`i32`) types,
//! representing positions, sizes and deltas respectively. [`Rect`] is a
//! [`Coord`] plus a [`Size`]. The few operators provided saturate rather
//! than overflow.
//!
//! Layout coordinates are always relative to the parent widget's origin.
//!
//! [`Coord`], [`Size`] and [`Rect`] parse from whitespace-separated
//! integers, as written in layout descriptions: `"24 8"` is a `Size`,
//! `"0 0 100 20"` a `Rect`.

use crate::dir::Directional;
use std::str::FromStr;
use thiserror::Error;

/// Failure to parse a geometry value from a string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("expected {expected} integers separated by whitespace")]
pub struct ParseGeomError {
    expected: usize,
}

fn parse_ints<const N: usize>(s: &str) -> Result<[i32; N], ParseGeomError> {
    let err = ParseGeomError { expected: N };
    let mut out = [0; N];
    let mut iter = s.split_whitespace();
    for slot in out.iter_mut() {
        *slot = iter
            .next()
            .and_then(|t| t.parse().ok())
            .ok_or(err.clone())?;
    }
    if iter.next().is_some() {
        return Err(err);
    }
    Ok(out)
}

macro_rules! impl_common {
    ($T:ty) => {
        impl $T {
            /// The constant `(0, 0)`
            pub const ZERO: Self = Self(0, 0);

            /// Extract one component, based on a direction
            ///
            /// This merely extracts the horizontal or vertical component.
            #[inline]
            pub fn extract<D: Directional>(self, dir: D) -> i32 {
                match dir.is_vertical() {
                    false => self.0,
                    true => self.1,
                }
            }

            /// Set one component of self, based on a direction
            #[inline]
            pub fn set_component<D: Directional>(&mut self, dir: D, value: i32) {
                match dir.is_vertical() {
                    false => self.0 = value,
                    true => self.1 = value,
                }
            }
        }

        impl FromStr for $T {
            type Err = ParseGeomError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let [a, b] = parse_ints::<2>(s)?;
                Ok(Self(a, b))
            }
        }
    };
}

/// A 2D coordinate, also known as a point
///
/// A coordinate is a position relative to the parent's origin.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord(pub i32, pub i32);

impl_common!(Coord);

impl std::ops::SubAssign<Offset> for Coord {
    #[inline]
    fn sub_assign(&mut self, rhs: Offset) {
        self.0 = self.0.saturating_sub(rhs.0);
        self.1 = self.1.saturating_sub(rhs.1);
    }
}

impl std::ops::Add<Size> for Coord {
    type Output = Self;

    #[inline]
    fn add(self, other: Size) -> Self {
        Coord(self.0.saturating_add(other.0), self.1.saturating_add(other.1))
    }
}

/// A 2D size, also known as an extent
///
/// Sizes are usually non-negative. The box solver does not clamp: a stretched
/// child in an over-full container may be assigned a negative extent, exactly
/// as the distribution formula yields.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size(pub i32, pub i32);

impl_common!(Size);

impl Size {
    /// Componentwise addition, saturating at the numeric bounds
    #[inline]
    #[must_use = "method does not modify self but returns a new value"]
    pub fn saturating_add(self, rhs: Self) -> Self {
        Size(self.0.saturating_add(rhs.0), self.1.saturating_add(rhs.1))
    }
}

/// A `(x, y)` delta
///
/// Used when a widget is moved by the amount its size changed.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Offset(pub i32, pub i32);

/// An axis-aligned rectangular region
///
/// The region is defined by a point `pos` and an extent `size`.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub pos: Coord,
    pub size: Size,
}

impl Rect {
    /// The empty rect (all fields zero)
    pub const ZERO: Self = Self::new(Coord::ZERO, Size::ZERO);

    /// Construct from a [`Coord`] and [`Size`]
    #[inline]
    pub const fn new(pos: Coord, size: Size) -> Self {
        Rect { pos, size }
    }

    /// Get the second point (pos + size)
    #[inline]
    pub fn pos2(&self) -> Coord {
        self.pos + self.size
    }
}

impl FromStr for Rect {
    type Err = ParseGeomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [x, y, w, h] = parse_ints::<4>(s)?;
        Ok(Rect::new(Coord(x, y), Size(w, h)))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::dir::{Down, Right};

    #[test]
    fn parse() {
        assert_eq!("24 8".parse::<Size>(), Ok(Size(24, 8)));
        assert_eq!("  -3\t7 ".parse::<Coord>(), Ok(Coord(-3, 7)));
        assert_eq!("1 2 3 4".parse::<Rect>(), Ok(Rect::new(Coord(1, 2), Size(3, 4))));
        assert!("24".parse::<Size>().is_err());
        assert!("24 8 1".parse::<Size>().is_err());
        assert!("a b".parse::<Size>().is_err());
    }

    #[test]
    fn components() {
        let mut size = Size(10, 20);
        assert_eq!(size.extract(Right), 10);
        assert_eq!(size.extract(Down), 20);
        size.set_component(Down, 5);
        assert_eq!(size, Size(10, 5));
    }

    #[test]
    fn saturating() {
        let rect = Rect::new(Coord(10, 0), Size(100, 40));
        assert_eq!(rect.pos2(), Coord(110, 40));
        assert_eq!(Size(i32::MAX, 1).saturating_add(Size(5, 2)), Size(i32::MAX, 3));

        let mut pos = Coord(i32::MIN + 1, 7);
        pos -= Offset(3, 0);
        assert_eq!(pos, Coord(i32::MIN, 7));
    }
}
