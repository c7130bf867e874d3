// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Boxlay core prelude
//!
//! It is recommended to use `boxlay::prelude` instead, which is an extension
//! of this crate's prelude.

#[doc(no_inline)] pub use crate::cast::traits::*;
#[doc(no_inline)]
pub use crate::config::Config;
#[doc(no_inline)]
pub use crate::dir::{Direction, Directional};
#[doc(no_inline)]
pub use crate::geom::{Coord, Offset, Rect, Size};
#[doc(no_inline)]
pub use crate::layout::{Align, AlignPair, BoxConfig};
#[doc(no_inline)] pub use crate::text::TextMeasurer;
#[doc(no_inline)]
pub use crate::{Error, Result, WidgetId};
