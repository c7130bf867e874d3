// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! boxlay widget tree
//!
//! A [`Tree`] owns widget nodes and runs layout on them.
//!
//! ## Widgets
//!
//! -   [`WidgetKind::Widget`]: a plain widget, sized by its host
//! -   [`WidgetKind::Label`]: sized to its caption
//! -   [`WidgetKind::EditField`]: keeps its width; height follows its caption
//! -   [`WidgetKind::Button`]: sized to its caption plus `TextPadding`
//! -   [`WidgetKind::HBox`], [`WidgetKind::VBox`]: [`BoxWidget`] containers
//!     placing children in a row or column
//!
//! All kinds except plain widgets implement [`SizeNegotiable`].
//!
//! ## Layout triggers
//!
//! A box lays out its children when its size or rect is set, when a child is
//! created inside it and when a size change propagates to it from a
//! descendant ([`Tree::notify_size_change`]). Changing user strings or box
//! properties does not cause layout; use
//! [`Tree::notify_children_size_changed`] afterwards.

mod auto_sized;
mod boxes;
mod hierarchy;
mod node;
mod propagate;
mod tree;

pub use auto_sized::{AutoSized, TextRole, EXPAND_DIRECTION};
pub use boxes::{BoxWidget, Phase};
pub use hierarchy::WidgetHierarchy;
pub use node::{Node, WidgetKind};
pub use tree::{Tree, ALIGN, CAPTION, COORD, POSITION, SIZE};

use boxlay_core::geom::Size;
use boxlay_core::{Result, WidgetId};

/// Capability: a size derived from content
///
/// Implementations must not modify anything and must return the same value
/// until the widget's content, attributes or children change. The result
/// never depends on space offered by a parent.
pub trait SizeNegotiable {
    /// The size the widget needs for its content
    fn requested_size(&self, tree: &Tree, id: WidgetId) -> Result<Size>;
}
