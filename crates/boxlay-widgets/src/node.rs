// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Widget nodes and kinds

use crate::{AutoSized, BoxWidget, SizeNegotiable};
use boxlay_core::dir::Direction;
use boxlay_core::geom::Rect;
use boxlay_core::layout::{AlignPair, Attributes};
use boxlay_core::WidgetId;
use linear_map::LinearMap;
use smol_str::SmolStr;
use std::fmt;

/// The kind of a widget
///
/// Passed to [`Tree::create`](crate::Tree::create) and reported by
/// [`Tree::kind`](crate::Tree::kind). The kind fixes a widget's capabilities
/// for its lifetime.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    /// A plain widget, measured by its current size
    Widget,
    /// A text label sized to its caption
    Label,
    /// An editable field whose height follows its caption
    EditField,
    /// A button sized to its caption plus padding
    Button,
    /// A box placing children left to right
    HBox,
    /// A box placing children top to bottom
    VBox,
}

impl WidgetKind {
    /// True if this kind reports a requested size from its content
    #[inline]
    pub fn is_negotiable(self) -> bool {
        !matches!(self, WidgetKind::Widget)
    }

    /// True for box containers
    #[inline]
    pub fn is_box(self) -> bool {
        self.direction().is_some()
    }

    /// True for the caption-sized kinds
    #[inline]
    pub fn is_auto_sized(self) -> bool {
        matches!(
            self,
            WidgetKind::Label | WidgetKind::EditField | WidgetKind::Button
        )
    }

    /// The layout direction of a box
    pub fn direction(self) -> Option<Direction> {
        match self {
            WidgetKind::HBox => Some(Direction::Right),
            WidgetKind::VBox => Some(Direction::Down),
            _ => None,
        }
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            WidgetKind::Widget => "Widget",
            WidgetKind::Label => "Label",
            WidgetKind::EditField => "EditField",
            WidgetKind::Button => "Button",
            WidgetKind::HBox => "HBox",
            WidgetKind::VBox => "VBox",
        })
    }
}

/// Per-kind widget state
#[derive(Clone, Debug)]
pub(crate) enum Variant {
    Plain,
    Text(AutoSized),
    Box(BoxWidget),
}

impl Variant {
    pub(crate) fn negotiable(&self) -> Option<&dyn SizeNegotiable> {
        match self {
            Variant::Plain => None,
            Variant::Text(text) => Some(text),
            Variant::Box(widget) => Some(widget),
        }
    }
}

/// A widget node
///
/// Nodes are owned by a [`Tree`](crate::Tree). Fields are read through
/// accessors; all mutation goes through the tree so that the tree can run
/// layout where required.
#[derive(Clone, Debug)]
pub struct Node {
    pub(crate) rect: Rect,
    pub(crate) parent: Option<WidgetId>,
    pub(crate) children: Vec<WidgetId>,
    pub(crate) name: SmolStr,
    pub(crate) caption: String,
    pub(crate) align: AlignPair,
    pub(crate) user_strings: LinearMap<String, String>,
    pub(crate) attributes: Attributes,
    pub(crate) variant: Variant,
}

impl Node {
    pub(crate) fn new(rect: Rect, parent: Option<WidgetId>, variant: Variant) -> Self {
        Node {
            rect,
            parent,
            children: Vec::new(),
            name: SmolStr::default(),
            caption: String::new(),
            align: AlignPair::DEFAULT,
            user_strings: LinearMap::new(),
            attributes: Attributes::default(),
            variant,
        }
    }

    /// The widget kind
    pub fn kind(&self) -> WidgetKind {
        match &self.variant {
            Variant::Plain => WidgetKind::Widget,
            Variant::Text(text) => text.kind(),
            Variant::Box(widget) => widget.kind(),
        }
    }

    /// Position relative to the parent and allocated size
    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Parent, if attached
    #[inline]
    pub fn parent(&self) -> Option<WidgetId> {
        self.parent
    }

    /// Children in layout order
    #[inline]
    pub fn children(&self) -> &[WidgetId] {
        &self.children
    }

    /// Widget name (may be empty)
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Caption text
    #[inline]
    pub fn caption(&self) -> &str {
        &self.caption
    }

    /// Toolkit alignment
    #[inline]
    pub fn align(&self) -> AlignPair {
        self.align
    }

    /// Typed layout attributes
    #[inline]
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Box state, if this is a box
    pub fn as_box(&self) -> Option<&BoxWidget> {
        match &self.variant {
            Variant::Box(widget) => Some(widget),
            _ => None,
        }
    }

    /// Auto-sizing state, if this is a label, editable field or button
    pub fn as_auto_sized(&self) -> Option<&AutoSized> {
        match &self.variant {
            Variant::Text(text) => Some(text),
            _ => None,
        }
    }

    /// A name for diagnostics: the widget name if set, else the id
    pub(crate) fn identify(&self, id: WidgetId) -> SmolStr {
        if self.name.is_empty() {
            smol_str::format_smolstr!("{}{}", self.kind(), id)
        } else {
            self.name.clone()
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn capabilities() {
        assert!(!WidgetKind::Widget.is_negotiable());
        assert!(WidgetKind::Label.is_negotiable());
        assert!(WidgetKind::HBox.is_negotiable());
        assert!(WidgetKind::VBox.is_box());
        assert!(!WidgetKind::Button.is_box());
        assert!(WidgetKind::EditField.is_auto_sized());
        assert!(!WidgetKind::HBox.is_auto_sized());
        assert_eq!(WidgetKind::HBox.direction(), Some(Direction::Right));
        assert_eq!(WidgetKind::Label.direction(), None);
    }

    #[test]
    fn identify() {
        let mut node = Node::new(Rect::ZERO, None, Variant::Plain);
        let id = WidgetId::from_index(3).unwrap();
        assert_eq!(node.identify(id), "Widget#3");
        node.name = "ok_button".into();
        assert_eq!(node.identify(id), "ok_button");
    }
}
