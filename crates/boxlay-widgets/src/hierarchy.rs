// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Widget hierarchy formatting

use crate::Tree;
use boxlay_core::geom::Coord;
use boxlay_core::WidgetId;
use std::fmt;

/// Helper to display the widget hierarchy under a widget
///
/// Each line shows a widget's name (or kind and id) and its rect relative to
/// its parent, indented by depth. Hidden widgets are marked.
pub struct WidgetHierarchy<'a> {
    tree: &'a Tree,
    id: WidgetId,
    indent: usize,
}

impl<'a> WidgetHierarchy<'a> {
    pub fn new(tree: &'a Tree, id: WidgetId) -> Self {
        WidgetHierarchy { tree, id, indent: 0 }
    }
}

impl<'a> fmt::Display for WidgetHierarchy<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        let Ok(node) = self.tree.node(self.id) else {
            return write!(f, "\n{}(unknown {})", "| ".repeat(self.indent), self.id);
        };

        let len = 43usize.saturating_sub(2 * self.indent);
        let trail = "| ".repeat(self.indent);
        // Note: pre-format some items to ensure correct alignment
        let identify = format!("{}", node.identify(self.id));
        let r = node.rect();
        let Coord(x1, y1) = r.pos;
        let Coord(x2, y2) = r.pos2();
        let xr = format!("x={x1}..{x2}");
        let xrlen = xr.len().max(12);
        write!(f, "\n{trail}{identify:<len$} {xr:<xrlen$} y={y1}..{y2}")?;
        if node.attributes().is_hidden() {
            write!(f, " (hidden)")?;
        }

        let indent = self.indent + 1;
        for &id in node.children() {
            write!(f, "{}", WidgetHierarchy {
                tree: self.tree,
                id,
                indent
            })?;
        }
        Ok(())
    }
}
