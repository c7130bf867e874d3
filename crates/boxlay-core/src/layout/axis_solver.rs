// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Row / column solver

use smallvec::SmallVec;

use super::{BoxConfig, LayoutFlags};
use crate::cast::Conv;
use crate::dir::Directional;
use crate::geom::{Coord, Rect, Size};
use crate::{Error, Result};

/// A child, as seen by the solver
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Item {
    /// The requested size if `negotiated`, otherwise the current size
    pub size: Size,
    /// True if `size` was reported by the child from its content
    pub negotiated: bool,
    /// Hidden and stretch flags
    pub flags: LayoutFlags,
}

impl Item {
    /// Construct for a child which reports its requested size
    pub fn negotiated(size: Size, flags: LayoutFlags) -> Self {
        Item {
            size,
            negotiated: true,
            flags,
        }
    }

    /// Construct for a child measured by its current size
    pub fn fixed(size: Size, flags: LayoutFlags) -> Self {
        Item {
            size,
            negotiated: false,
            flags,
        }
    }

    /// True if hidden
    #[inline]
    pub fn is_hidden(&self) -> bool {
        self.flags.contains(LayoutFlags::HIDDEN)
    }
}

/// Result of the measure pass
///
/// Totals are along the primary and cross axes of the solver, excluding
/// padding.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Measure {
    /// Sum of visible primary extents plus spacing between them
    pub primary: i32,
    /// Maximum cross extent (see [`AxisSolver::measure`])
    pub cross: i32,
    /// Number of visible items stretched along the primary axis
    pub stretched: usize,
    /// Number of visible items
    pub visible: usize,
}

/// The rect assigned to one item
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    /// Index into the item slice
    pub index: usize,
    /// Rect relative to the container's origin
    pub rect: Rect,
}

/// Output of [`AxisSolver::place`]
///
/// One entry per visible item, in item order.
pub type Placements = SmallVec<[Placement; 16]>;

/// Single-axis solver for box containers
///
/// The primary axis is `D`; the cross axis is `D::Flipped`. The solver is
/// pure: it reads a slice of [`Item`]s and returns totals or rects, leaving
/// the caller to read children and commit results.
#[derive(Copy, Clone, Debug)]
pub struct AxisSolver<D: Directional> {
    dir: D,
    config: BoxConfig,
}

impl<D: Directional> AxisSolver<D> {
    /// Construct
    pub fn new(dir: D, config: BoxConfig) -> Self {
        AxisSolver { dir, config }
    }

    /// The primary direction
    #[inline]
    pub fn direction(&self) -> D {
        self.dir
    }

    /// Measure pass
    ///
    /// Hidden items are skipped entirely. The primary total is the sum of the
    /// visible items' primary extents plus `spacing` between consecutive
    /// visible items. The cross total is the maximum cross extent, except
    /// that an item which is stretched on the cross axis and *not* negotiated
    /// does not contribute (it will be resized to fill the cross axis).
    ///
    /// Fails with [`Error::Logic`] if the primary total overflows `i32`.
    pub fn measure(&self, items: &[Item]) -> Result<Measure> {
        let cross_dir = self.dir.flipped();
        let stretch = LayoutFlags::stretch_flag(self.dir);
        let cross_stretch = LayoutFlags::stretch_flag(cross_dir);

        let mut m = Measure::default();
        for item in items.iter().filter(|item| !item.is_hidden()) {
            if m.visible > 0 {
                m.primary = add(m.primary, self.config.spacing)?;
            }
            m.visible += 1;
            m.primary = add(m.primary, item.size.extract(self.dir))?;
            if item.negotiated || !item.flags.contains(cross_stretch) {
                m.cross = m.cross.max(item.size.extract(cross_dir));
            }
            if item.flags.contains(stretch) {
                m.stretched += 1;
            }
        }
        Ok(m)
    }

    /// The size which exactly fits the measured content plus padding
    pub fn fitted_size(&self, m: &Measure) -> Result<Size> {
        let pad = add(self.config.padding, self.config.padding)?;
        let mut size = Size::ZERO;
        size.set_component(self.dir, add(m.primary, pad)?);
        size.set_component(self.dir.flipped(), add(m.cross, pad)?);
        Ok(size)
    }

    /// Place pass
    ///
    /// Assigns a rect to each visible item within a container of size
    /// `container`. Items stretched on the primary axis additionally receive
    /// an even share of the leftover primary extent (truncating division; the
    /// remainder is not redistributed). Items stretched on the cross axis
    /// fill the content area's cross extent; all items are centered on the
    /// cross axis.
    ///
    /// Fails with [`Error::Logic`] if a stretched item is found while `m`
    /// counts no stretched items, i.e. `m` was not measured from `items`, or
    /// if a position or extent overflows `i32`.
    pub fn place(&self, items: &[Item], m: &Measure, container: Size) -> Result<Placements> {
        let dir = self.dir;
        let cross_dir = dir.flipped();
        let stretch = LayoutFlags::stretch_flag(dir);
        let cross_stretch = LayoutFlags::stretch_flag(cross_dir);
        let padding = self.config.padding;

        let pad = add(padding, padding)?;
        let avail = sub(container.extract(dir), pad)?;
        let avail_cross = sub(container.extract(cross_dir), pad)?;

        let mut placements = Placements::new();
        let mut remaining = m.visible;
        let mut cur = padding;
        for (index, item) in items.iter().enumerate() {
            if item.is_hidden() {
                continue;
            }

            let cross = match item.flags.contains(cross_stretch) {
                true => avail_cross,
                false => item.size.extract(cross_dir),
            };
            let cross_pos = add(padding, sub(avail_cross, cross)? / 2)?;

            let mut extent = item.size.extract(dir);
            if item.flags.contains(stretch) {
                if m.stretched == 0 {
                    return Err(Error::Logic("stretched child with zero stretch count"));
                }
                let share = sub(avail, m.primary)? / i32::conv(m.stretched);
                extent = add(extent, share)?;
            }

            let mut rect = Rect::new(Coord::ZERO, Size::ZERO);
            rect.pos.set_component(dir, cur);
            rect.pos.set_component(cross_dir, cross_pos);
            rect.size.set_component(dir, extent);
            rect.size.set_component(cross_dir, cross);
            placements.push(Placement { index, rect });

            cur = add(cur, extent)?;
            remaining = remaining.saturating_sub(1);
            if remaining > 0 {
                cur = add(cur, self.config.spacing)?;
            }
        }

        Ok(placements)
    }
}

fn add(a: i32, b: i32) -> Result<i32> {
    a.checked_add(b).ok_or(Error::Logic("layout extent overflow"))
}

fn sub(a: i32, b: i32) -> Result<i32> {
    a.checked_sub(b).ok_or(Error::Logic("layout extent overflow"))
}
