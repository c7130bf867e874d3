// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! boxlay core
//!
//! Geometry, direction and alignment types, the typed layout attribute
//! record and the single-axis solver used by box containers.
//!
//! Nothing in this crate owns widgets: the solver operates over a slice of
//! [`layout::Item`]s prepared by the caller and returns child rectangles.
//! The widget tree which drives it lives in `boxlay-widgets`.

#![cfg_attr(docsrs, feature(doc_cfg))]

pub extern crate easy_cast as cast;

mod error;
mod id;

pub mod config;
pub mod dir;
pub mod geom;
pub mod layout;
pub mod prelude;
pub mod text;
pub mod util;

pub use error::{Error, Result};
pub use id::WidgetId;
