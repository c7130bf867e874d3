// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Caption-sized widgets: label, editable field and button

use crate::{SizeNegotiable, Tree, WidgetKind};
use boxlay_core::geom::Size;
use boxlay_core::layout::{Align, AlignPair};
use boxlay_core::{Error, Result, WidgetId};

/// Property key: direction in which the widget grows when its caption changes
pub const EXPAND_DIRECTION: &str = "ExpandDirection";

/// Which caption-sizing policy applies
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TextRole {
    /// Requested size is the caption size
    Label,
    /// Requested width is the current width; height is the caption height
    EditField,
    /// Requested size is the caption size plus text padding
    Button,
}

/// State of a caption-sized widget
///
/// The caption itself is stored on the node. This holds the sizing policy
/// and the expand direction used when the widget is resized by
/// [`Tree::notify_size_change`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AutoSized {
    role: TextRole,
    expand_direction: AlignPair,
}

impl AutoSized {
    /// Construct with the default expand direction (grow rightward)
    pub fn new(role: TextRole) -> Self {
        AutoSized {
            role,
            expand_direction: AlignPair::new(Align::BR, Align::Default),
        }
    }

    /// Sizing policy
    #[inline]
    pub fn role(&self) -> TextRole {
        self.role
    }

    /// The widget kind
    pub fn kind(&self) -> WidgetKind {
        match self.role {
            TextRole::Label => WidgetKind::Label,
            TextRole::EditField => WidgetKind::EditField,
            TextRole::Button => WidgetKind::Button,
        }
    }

    /// Expand direction
    #[inline]
    pub fn expand_direction(&self) -> AlignPair {
        self.expand_direction
    }

    /// True if the widget keeps its right edge fixed when resized
    #[inline]
    pub fn grows_leftward(&self) -> bool {
        self.expand_direction.horiz == Align::TL
    }

    /// Set a variant-specific property
    ///
    /// Returns `Ok(false)` if `key` is not recognised.
    pub fn set_property(&mut self, key: &str, value: &str) -> Result<bool> {
        match key {
            EXPAND_DIRECTION => {
                self.expand_direction = value.parse().map_err(|_| Error::parse(key, value))?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

impl SizeNegotiable for AutoSized {
    fn requested_size(&self, tree: &Tree, id: WidgetId) -> Result<Size> {
        let node = tree.node(id)?;
        let text = tree.measurer().text_size(node.caption());
        Ok(match self.role {
            TextRole::Label => text,
            TextRole::EditField => {
                if node.align().horiz == Align::Stretch {
                    return Err(Error::Contradiction {
                        widget: node.identify(id),
                        reason: "editable field sizes its own width and cannot stretch horizontally",
                    });
                }
                Size(node.rect().size.0, text.1)
            }
            TextRole::Button => {
                let padding = node
                    .attributes()
                    .text_padding
                    .unwrap_or(tree.config().button_text_padding);
                text.saturating_add(padding)
            }
        })
    }
}
