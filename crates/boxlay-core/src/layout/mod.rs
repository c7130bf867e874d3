// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Layout solver
//!
//! Size units are integer pixels, with positions relative to the parent.
//!
//! ## Data types
//!
//! [`Attributes`] is the typed record of a widget's layout flags (hidden,
//! stretch) and button padding, populated from user strings when they are
//! set. [`BoxConfig`] holds the spacing, padding and auto-resize settings
//! common to both box directions. [`Align`] and [`AlignPair`] describe
//! alignment, as used by expand directions and widget alignment.
//!
//! ## Solver
//!
//! [`AxisSolver`] sets out a row or column of [`Item`]s in two passes:
//! [`AxisSolver::measure`] computes totals, from which a box's requested size
//! or auto-resized size derives, and [`AxisSolver::place`] computes a rect for
//! each visible item within a given container size.

mod align;
pub mod attributes;
mod axis_solver;
mod box_config;

pub use align::{Align, AlignPair, ParseAlignError};
pub use attributes::{Attributes, LayoutFlags};
pub use axis_solver::{AxisSolver, Item, Measure, Placement, Placements};
pub use box_config::BoxConfig;
