// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Widget identifiers

use crate::cast::Conv;
use std::fmt;
use std::num::NonZeroU32;

/// Widget identifier
///
/// Identifies a node within one widget tree. Identifiers are allocated
/// sequentially by the tree and are never reused, so an identifier held after
/// its widget was removed is simply reported as unknown.
///
/// `Option<WidgetId>` has the same size as `WidgetId`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(NonZeroU32);

impl WidgetId {
    /// Construct from an arena slot index
    ///
    /// Returns `None` if the index is not representable.
    pub fn from_index(index: usize) -> Option<Self> {
        let n = u32::try_conv(index).ok()?.checked_add(1)?;
        NonZeroU32::new(n).map(WidgetId)
    }

    /// The arena slot index
    #[inline]
    pub fn index(self) -> usize {
        usize::conv(self.0.get() - 1)
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.index())
    }
}
