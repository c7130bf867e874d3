// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! boxlay: box layout for widget trees
//!
//! This, the main boxlay crate, is merely a wrapper over other crates:
//!
//! -   [`boxlay_core`] provides geometry, alignment, configuration and the
//!     single-axis solver
//! -   [`boxlay_widgets`] provides the widget tree, caption-sized widgets and
//!     horizontal / vertical boxes
//!
//! All items from [`boxlay_core`] are directly re-exported from this crate
//! (e.g. [`boxlay::geom::Size`](crate::geom::Size)); the widgets crate is
//! re-exported as [`widgets`] and its main items at the top level.
//!
//! The [easy-cast](https://docs.rs/easy-cast/0.5/easy_cast) library is
//! re-exported as `boxlay::cast`.
//!
//! ## Example
//!
//! ```
//! use boxlay::prelude::*;
//! use boxlay::text::Monospace;
//!
//! let mut tree = Tree::new(Monospace::new(Size(8, 16)));
//! let row = tree.create(None, WidgetKind::HBox, Rect::new(Coord::ZERO, Size(200, 40)))?;
//! let ok = tree.create(Some(row), WidgetKind::Button, Rect::ZERO)?;
//! tree.set_caption(ok, "OK")?;
//! assert_eq!(tree.size(ok)?, Size(16 + 24, 16 + 8));
//! # Ok::<(), boxlay::Error>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod prelude;

pub use boxlay_core::*;

pub extern crate boxlay_widgets as widgets;

pub use widgets::{SizeNegotiable, Tree, WidgetKind};
