// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! The widget tree

use crate::node::{Node, Variant};
use crate::{AutoSized, BoxWidget, TextRole, WidgetHierarchy, WidgetKind};
use boxlay_core::config::Config;
use boxlay_core::geom::{Coord, Rect, Size};
use boxlay_core::layout::attributes::TEXT_PADDING;
use boxlay_core::layout::{AlignPair, BoxConfig};
use boxlay_core::text::TextMeasurer;
use boxlay_core::{Error, Result, WidgetId};
use std::fmt;
use std::str::FromStr;

/// Property key: position, as `"x y"`
pub const POSITION: &str = "Position";
/// Property key: size, as `"w h"`
pub const SIZE: &str = "Size";
/// Property key: rect, as `"x y w h"`
pub const COORD: &str = "Coord";
/// Property key: toolkit alignment, as alignment tokens
pub const ALIGN: &str = "Align";
/// Property key: caption text
pub const CAPTION: &str = "Caption";

/// A widget tree
///
/// Owns all widget nodes, addressed by [`WidgetId`]. Ids are allocated
/// sequentially and never reused; operations on a removed widget fail with
/// [`Error::UnknownWidget`].
///
/// Text is measured by the [`TextMeasurer`] given on construction. New
/// boxes and buttons take their defaults from the tree's [`Config`].
pub struct Tree {
    nodes: Vec<Option<Node>>,
    measurer: Box<dyn TextMeasurer>,
    config: Config,
}

impl fmt::Debug for Tree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Tree")
            .field("nodes", &self.nodes)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Tree {
    /// Construct an empty tree with default configuration
    pub fn new(measurer: impl TextMeasurer + 'static) -> Self {
        Tree::with_config(measurer, Config::default())
    }

    /// Construct an empty tree
    pub fn with_config(measurer: impl TextMeasurer + 'static, config: Config) -> Self {
        Tree {
            nodes: Vec::new(),
            measurer: Box::new(measurer),
            config,
        }
    }

    /// Access the configuration
    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Access the text measurer
    #[inline]
    pub fn measurer(&self) -> &dyn TextMeasurer {
        self.measurer.as_ref()
    }

    /// True if `id` identifies a live widget of this tree
    pub fn contains(&self, id: WidgetId) -> bool {
        matches!(self.nodes.get(id.index()), Some(Some(_)))
    }

    /// Access a node
    pub fn node(&self, id: WidgetId) -> Result<&Node> {
        match self.nodes.get(id.index()) {
            Some(Some(node)) => Ok(node),
            _ => Err(Error::UnknownWidget(id)),
        }
    }

    pub(crate) fn node_mut(&mut self, id: WidgetId) -> Result<&mut Node> {
        match self.nodes.get_mut(id.index()) {
            Some(Some(node)) => Ok(node),
            _ => Err(Error::UnknownWidget(id)),
        }
    }

    /// Iterate over widgets without a parent
    pub fn roots(&self) -> impl Iterator<Item = WidgetId> + '_ {
        self.nodes.iter().enumerate().filter_map(|(index, slot)| match slot {
            Some(node) if node.parent.is_none() => WidgetId::from_index(index),
            _ => None,
        })
    }

    /// Create a widget
    ///
    /// The widget is appended to the children of `parent`, if given. If the
    /// parent is a box, the parent is laid out immediately; should that
    /// layout fail, the new widget is detached and discarded (its id is not
    /// reused) and the error returned.
    pub fn create(&mut self, parent: Option<WidgetId>, kind: WidgetKind, rect: Rect) -> Result<WidgetId> {
        if let Some(parent) = parent {
            self.node(parent)?;
        }

        let variant = match kind {
            WidgetKind::Widget => Variant::Plain,
            WidgetKind::Label => Variant::Text(AutoSized::new(TextRole::Label)),
            WidgetKind::EditField => Variant::Text(AutoSized::new(TextRole::EditField)),
            WidgetKind::Button => Variant::Text(AutoSized::new(TextRole::Button)),
            WidgetKind::HBox | WidgetKind::VBox => {
                let dir = kind.direction().ok_or(Error::Logic("box kind without direction"))?;
                Variant::Box(BoxWidget::new(dir, BoxConfig::from(&self.config)))
            }
        };

        let id = WidgetId::from_index(self.nodes.len()).ok_or(Error::Logic("widget ids exhausted"))?;
        self.nodes.push(Some(Node::new(rect, parent, variant)));
        log::trace!("create: {kind}{id} parent={parent:?} rect={rect:?}");

        if let Some(parent) = parent {
            self.node_mut(parent)?.children.push(id);
            if let Err(error) = self.arrange(parent) {
                self.node_mut(parent)?.children.retain(|child| *child != id);
                if let Some(slot) = self.nodes.get_mut(id.index()) {
                    *slot = None;
                }
                log::debug!("create: {kind}{id} discarded: {error}");
                return Err(error);
            }
        }
        Ok(id)
    }

    /// Remove a widget and all its descendants
    ///
    /// The former parent is not laid out again; call
    /// [`Tree::notify_children_size_changed`] to do so.
    pub fn remove(&mut self, id: WidgetId) -> Result<()> {
        let node = self.node(id)?;
        if let Some(parent) = node.parent {
            self.node_mut(parent)?.children.retain(|child| *child != id);
        }

        let mut stack = vec![id];
        while let Some(id) = stack.pop() {
            if let Some(node) = self.nodes.get_mut(id.index()).and_then(Option::take) {
                stack.extend(node.children);
            }
        }
        Ok(())
    }

    /// Parent widget, if any
    pub fn parent(&self, id: WidgetId) -> Result<Option<WidgetId>> {
        Ok(self.node(id)?.parent)
    }

    /// Children, in layout order
    pub fn children(&self, id: WidgetId) -> Result<&[WidgetId]> {
        Ok(self.node(id)?.children())
    }

    /// Widget kind
    pub fn kind(&self, id: WidgetId) -> Result<WidgetKind> {
        Ok(self.node(id)?.kind())
    }

    /// True if the widget is a box
    pub fn is_box(&self, id: WidgetId) -> Result<bool> {
        Ok(self.kind(id)?.is_box())
    }

    /// True if the widget reports a requested size
    pub fn is_negotiable(&self, id: WidgetId) -> Result<bool> {
        Ok(self.kind(id)?.is_negotiable())
    }

    /// Position (relative to parent) and size
    pub fn rect(&self, id: WidgetId) -> Result<Rect> {
        Ok(self.node(id)?.rect)
    }

    /// Allocated size
    pub fn size(&self, id: WidgetId) -> Result<Size> {
        Ok(self.node(id)?.rect.size)
    }

    /// Position relative to the parent
    pub fn position(&self, id: WidgetId) -> Result<Coord> {
        Ok(self.node(id)?.rect.pos)
    }

    /// Set the size
    ///
    /// A box is laid out again.
    pub fn set_size(&mut self, id: WidgetId, size: Size) -> Result<()> {
        self.node_mut(id)?.rect.size = size;
        self.arrange(id)
    }

    /// Set the position
    ///
    /// This never causes layout.
    pub fn set_position(&mut self, id: WidgetId, pos: Coord) -> Result<()> {
        self.node_mut(id)?.rect.pos = pos;
        Ok(())
    }

    /// Set position and size
    ///
    /// A box is laid out again.
    pub fn set_coord(&mut self, id: WidgetId, rect: Rect) -> Result<()> {
        self.node_mut(id)?.rect = rect;
        self.arrange(id)
    }

    /// Widget name
    pub fn name(&self, id: WidgetId) -> Result<&str> {
        Ok(self.node(id)?.name())
    }

    /// Set the widget name, used in diagnostics
    pub fn set_name(&mut self, id: WidgetId, name: &str) -> Result<()> {
        self.node_mut(id)?.name = name.into();
        Ok(())
    }

    /// Caption text
    pub fn caption(&self, id: WidgetId) -> Result<&str> {
        Ok(self.node(id)?.caption())
    }

    /// Set the caption
    ///
    /// For labels, editable fields and buttons this runs
    /// [`Tree::notify_size_change`]; other widgets only store the text.
    pub fn set_caption(&mut self, id: WidgetId, text: &str) -> Result<()> {
        let node = self.node_mut(id)?;
        node.caption.clear();
        node.caption.push_str(text);
        if node.kind().is_auto_sized() {
            self.notify_size_change(id)?;
        }
        Ok(())
    }

    /// Toolkit alignment
    pub fn align(&self, id: WidgetId) -> Result<AlignPair> {
        Ok(self.node(id)?.align)
    }

    /// Set the toolkit alignment
    ///
    /// Any alignment is accepted. An editable field set to stretch
    /// horizontally reports [`Error::Contradiction`] when its requested size
    /// is queried.
    pub fn set_align(&mut self, id: WidgetId, align: AlignPair) -> Result<()> {
        self.node_mut(id)?.align = align;
        Ok(())
    }

    /// Requested size of a widget with content-derived size
    ///
    /// Returns `Ok(None)` for plain widgets. This does not modify the tree.
    pub fn requested_size(&self, id: WidgetId) -> Result<Option<Size>> {
        match self.node(id)?.variant.negotiable() {
            Some(widget) => widget.requested_size(self, id).map(Some),
            None => Ok(None),
        }
    }

    /// Set a property from its string form
    ///
    /// Keys are tried in order: box properties (`Spacing`, `Padding`,
    /// `AutoResize`) for boxes; `ExpandDirection` and `TextPadding` for
    /// labels, editable fields and buttons; then the common
    /// keys `Position`, `Size`, `Coord`, `Align` and `Caption`. Unknown keys
    /// are logged and ignored.
    ///
    /// Box and text properties do not cause layout. `Size` and `Coord` go
    /// through [`Tree::set_size`] and [`Tree::set_coord`] and so lay out a
    /// box. Malformed values are reported as [`Error::Parse`] and leave the
    /// widget unchanged.
    pub fn set_property(&mut self, id: WidgetId, key: &str, value: &str) -> Result<()> {
        let handled = match &mut self.node_mut(id)?.variant {
            Variant::Plain => false,
            Variant::Text(text) => text.set_property(key, value)?,
            Variant::Box(widget) => widget.set_property(key, value)?,
        };
        if handled {
            return Ok(());
        }

        let auto_sized = self.kind(id)?.is_auto_sized();
        match key {
            TEXT_PADDING if auto_sized => self.set_user_string(id, key, value),
            POSITION => self.set_position(id, parse(key, value)?),
            SIZE => self.set_size(id, parse(key, value)?),
            COORD => self.set_coord(id, parse(key, value)?),
            ALIGN => self.set_align(id, parse(key, value)?),
            CAPTION => self.set_caption(id, value),
            _ => {
                log::warn!("set_property: {id}: ignoring unknown property {key}={value:?}");
                Ok(())
            }
        }
    }

    /// A user string, or `""` if not set
    pub fn user_string(&self, id: WidgetId, key: &str) -> Result<&str> {
        let node = self.node(id)?;
        Ok(node.user_strings.get(key).map(String::as_str).unwrap_or(""))
    }

    /// True if the user string `key` is set
    pub fn is_user_string(&self, id: WidgetId, key: &str) -> Result<bool> {
        Ok(self.node(id)?.user_strings.contains_key(key))
    }

    /// Set a user string
    ///
    /// Layout attributes (`Hidden`, `HStretch`, `VStretch`, `TextPadding`)
    /// are updated from the value. This does not cause layout: call
    /// [`Tree::notify_children_size_changed`] on the parent box afterwards.
    ///
    /// A malformed `TextPadding` is reported as [`Error::Parse`], leaving both
    /// the string and the attribute unchanged.
    pub fn set_user_string(&mut self, id: WidgetId, key: &str, value: &str) -> Result<()> {
        let node = self.node_mut(id)?;
        node.attributes.apply(key, value)?;
        node.user_strings.insert(key.to_string(), value.to_string());
        Ok(())
    }

    /// Remove a user string, resetting its layout attribute
    ///
    /// Returns `true` if the string was set.
    pub fn clear_user_string(&mut self, id: WidgetId, key: &str) -> Result<bool> {
        let node = self.node_mut(id)?;
        node.attributes.reset(key);
        Ok(node.user_strings.remove(key).is_some())
    }

    /// Display the widget hierarchy under `id`
    pub fn hierarchy(&self, id: WidgetId) -> WidgetHierarchy<'_> {
        WidgetHierarchy::new(self, id)
    }
}

fn parse<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value.parse().map_err(|_| Error::parse(key, value))
}

#[cfg(test)]
mod test {
    use super::*;
    use boxlay_core::layout::Align;
    use boxlay_core::text::Monospace;

    fn tree() -> Tree {
        Tree::new(Monospace::new(Size(8, 16)))
    }

    #[test]
    fn create_and_remove() {
        let mut tree = tree();
        let root = tree.create(None, WidgetKind::Widget, Rect::ZERO).unwrap();
        let a = tree.create(Some(root), WidgetKind::Widget, Rect::ZERO).unwrap();
        let b = tree.create(Some(a), WidgetKind::Label, Rect::ZERO).unwrap();
        assert_eq!(tree.children(root).unwrap(), &[a]);
        assert_eq!(tree.parent(b).unwrap(), Some(a));
        assert_eq!(tree.roots().collect::<Vec<_>>(), vec![root]);

        tree.remove(a).unwrap();
        assert!(tree.children(root).unwrap().is_empty());
        assert!(!tree.contains(a));
        assert_eq!(tree.rect(b), Err(Error::UnknownWidget(b)));

        let c = tree.create(Some(root), WidgetKind::Widget, Rect::ZERO).unwrap();
        assert_ne!(c, a);
        assert_ne!(c, b);
    }

    #[test]
    fn unknown_parent() {
        let mut tree = tree();
        let ghost = WidgetId::from_index(7).unwrap();
        assert_eq!(
            tree.create(Some(ghost), WidgetKind::Widget, Rect::ZERO),
            Err(Error::UnknownWidget(ghost))
        );
    }

    #[test]
    fn failed_layout_discards_new_child() {
        let mut tree = tree();
        let row = tree
            .create(None, WidgetKind::HBox, Rect::new(Coord::ZERO, Size(100, 30)))
            .unwrap();
        let edit = tree.create(Some(row), WidgetKind::EditField, Rect::ZERO).unwrap();
        tree.set_property(edit, "Align", "HStretch").unwrap();

        let result = tree.create(Some(row), WidgetKind::Widget, Rect::ZERO);
        assert!(matches!(result, Err(Error::Contradiction { .. })));
        assert_eq!(tree.children(row).unwrap(), &[edit]);
        let discarded = WidgetId::from_index(2).unwrap();
        assert!(!tree.contains(discarded));
        assert_eq!(tree.roots().collect::<Vec<_>>(), vec![row]);

        tree.set_property(edit, "Align", "Left").unwrap();
        let w = tree.create(Some(row), WidgetKind::Widget, Rect::ZERO).unwrap();
        assert_ne!(w, discarded);
        assert_eq!(tree.children(row).unwrap(), &[edit, w]);
    }

    #[test]
    fn user_strings() {
        let mut tree = tree();
        let w = tree.create(None, WidgetKind::Widget, Rect::ZERO).unwrap();
        assert_eq!(tree.user_string(w, "Hidden").unwrap(), "");
        assert!(!tree.is_user_string(w, "Hidden").unwrap());

        tree.set_user_string(w, "Hidden", "true").unwrap();
        assert!(tree.node(w).unwrap().attributes().is_hidden());
        assert_eq!(tree.user_string(w, "Hidden").unwrap(), "true");

        assert!(tree.set_user_string(w, "TextPadding", "a b").is_err());
        assert!(!tree.is_user_string(w, "TextPadding").unwrap());

        assert!(tree.clear_user_string(w, "Hidden").unwrap());
        assert!(!tree.node(w).unwrap().attributes().is_hidden());
        assert!(!tree.clear_user_string(w, "Hidden").unwrap());
    }

    #[test]
    fn base_properties() {
        let mut tree = tree();
        let w = tree.create(None, WidgetKind::Widget, Rect::ZERO).unwrap();
        tree.set_property(w, "Coord", "1 2 30 40").unwrap();
        assert_eq!(tree.rect(w).unwrap(), Rect::new(Coord(1, 2), Size(30, 40)));
        tree.set_property(w, "Position", "5 6").unwrap();
        tree.set_property(w, "Size", "7 8").unwrap();
        assert_eq!(tree.rect(w).unwrap(), Rect::new(Coord(5, 6), Size(7, 8)));
        tree.set_property(w, "Align", "Right VStretch").unwrap();
        assert_eq!(tree.align(w).unwrap(), AlignPair::new(Align::BR, Align::Stretch));
        tree.set_property(w, "Caption", "hi").unwrap();
        assert_eq!(tree.caption(w).unwrap(), "hi");

        assert_eq!(
            tree.set_property(w, "Size", "big"),
            Err(Error::parse("Size", "big"))
        );
        assert!(tree.set_property(w, "Align", "Sideways").is_err());
        assert!(tree.set_property(w, "Tooltip", "ignored").is_ok());
        // box keys mean nothing to a plain widget
        assert!(tree.set_property(w, "Spacing", "-3").is_ok());
    }

    #[test]
    fn box_properties() {
        let mut tree = tree();
        let b = tree.create(None, WidgetKind::VBox, Rect::ZERO).unwrap();
        tree.set_property(b, "Spacing", "2").unwrap();
        tree.set_property(b, "Padding", "1").unwrap();
        let config = *tree.node(b).unwrap().as_box().unwrap().config();
        assert_eq!(config, BoxConfig {
            spacing: 2,
            padding: 1,
            auto_resize: false,
        });
        assert!(tree.set_property(b, "Spacing", "-3").is_err());
        assert!(tree.set_property(b, "AutoResize", "maybe").is_err());
    }

    #[test]
    fn text_properties() {
        let mut tree = tree();
        let button = tree.create(None, WidgetKind::Button, Rect::ZERO).unwrap();
        tree.set_property(button, "TextPadding", "4 2").unwrap();
        assert_eq!(tree.user_string(button, "TextPadding").unwrap(), "4 2");
        tree.set_property(button, "ExpandDirection", "Left").unwrap();
        let text = tree.node(button).unwrap().as_auto_sized().copied().unwrap();
        assert!(text.grows_leftward());
        assert_eq!(tree.requested_size(button).unwrap(), Some(Size(4, 2)));
    }

    #[test]
    fn config_defaults_apply_to_new_boxes() {
        let config = Config {
            spacing: 9,
            auto_resize: true,
            ..Config::default()
        };
        let mut tree = Tree::with_config(Monospace::default(), config);
        let b = tree.create(None, WidgetKind::HBox, Rect::ZERO).unwrap();
        let box_config = *tree.node(b).unwrap().as_box().unwrap().config();
        assert_eq!(box_config.spacing, 9);
        assert!(box_config.auto_resize);
    }
}
