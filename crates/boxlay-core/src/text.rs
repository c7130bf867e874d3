// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Text measurement
//!
//! Auto-sized widgets derive their requested size from the size of their
//! caption. Shaping and font handling belong to the host, which supplies an
//! implementation of [`TextMeasurer`]. [`Monospace`] is a simple
//! implementation for fixed-width cells (terminals, tests).

use crate::cast::Conv;
use crate::geom::Size;
use unicode_segmentation::UnicodeSegmentation;

/// Text measurement primitive
pub trait TextMeasurer {
    /// Size of the tight bounding box of `text`
    ///
    /// Must be deterministic: layout may measure the same text several times
    /// per pass and relies on receiving identical results.
    fn text_size(&self, text: &str) -> Size;
}

impl<F: Fn(&str) -> Size> TextMeasurer for F {
    fn text_size(&self, text: &str) -> Size {
        self(text)
    }
}

/// Fixed-width text measurement
///
/// Every grapheme cluster occupies one cell of `cell` size. Lines are
/// separated by `'\n'`; the width is that of the longest line. Empty text
/// measures as zero.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Monospace {
    pub cell: Size,
}

impl Monospace {
    /// Construct with the given cell size
    pub fn new(cell: Size) -> Self {
        Monospace { cell }
    }
}

impl Default for Monospace {
    fn default() -> Self {
        Monospace::new(Size(8, 16))
    }
}

impl TextMeasurer for Monospace {
    fn text_size(&self, text: &str) -> Size {
        if text.is_empty() {
            return Size::ZERO;
        }

        let mut lines = 0;
        let mut cols = 0;
        for line in text.split('\n') {
            lines += 1;
            cols = cols.max(line.graphemes(true).count());
        }
        Size(cells(cols, self.cell.0), cells(lines, self.cell.1))
    }
}

fn cells(count: usize, extent: i32) -> i32 {
    i32::try_conv(count).unwrap_or(i32::MAX).saturating_mul(extent)
}
