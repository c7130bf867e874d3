// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Size change propagation

use crate::Tree;
use boxlay_core::geom::Offset;
use boxlay_core::{Result, WidgetId};

impl Tree {
    /// Apply a widget's requested size and re-lay out its box ancestors
    ///
    /// Called when content affecting the requested size of `id` changed
    /// ([`Tree::set_caption`] does this for caption-sized widgets).
    ///
    /// 1.  A widget without parent is left untouched.
    /// 2.  If the widget grows leftward (its expand direction is
    ///     [`Align::TL`](boxlay_core::layout::Align::TL) horizontally), it is
    ///     moved left by the width difference so that its right edge stays in
    ///     place.
    /// 3.  The requested size is applied. Plain widgets have none and keep
    ///     their size.
    /// 4.  Each ancestor is notified via
    ///     [`Tree::on_descendant_size_changed`], stopping at the first one
    ///     which is not a box.
    pub fn notify_size_change(&mut self, id: WidgetId) -> Result<()> {
        let node = self.node(id)?;
        let Some(parent) = node.parent else {
            return Ok(());
        };
        let grows_leftward = node.as_auto_sized().is_some_and(|text| text.grows_leftward());
        let current = node.rect.size;

        if let Some(requested) = self.requested_size(id)? {
            if grows_leftward {
                let delta = requested.0.saturating_sub(current.0);
                self.node_mut(id)?.rect.pos -= Offset(delta, 0);
            }
            log::debug!("notify_size_change: {id} {current:?} -> {requested:?}");
            self.set_size(id, requested)?;
        }

        let mut ancestor = Some(parent);
        while let Some(id) = ancestor {
            if !self.on_descendant_size_changed(id)? {
                log::debug!("notify_size_change: propagation stops at {id}");
                break;
            }
            ancestor = self.node(id)?.parent;
        }
        Ok(())
    }

    /// Notification that a descendant's size changed
    ///
    /// A box re-runs its layout and returns `true`. Any other widget does
    /// nothing and returns `false`, which ends upward propagation.
    pub fn on_descendant_size_changed(&mut self, id: WidgetId) -> Result<bool> {
        if !self.is_box(id)? {
            return Ok(false);
        }
        self.arrange(id)?;
        Ok(true)
    }

    /// Re-run layout of box `id` after its children changed
    ///
    /// Use this after changing children's user strings or removing a child.
    /// Does nothing for widgets other than boxes.
    pub fn notify_children_size_changed(&mut self, id: WidgetId) -> Result<()> {
        self.on_descendant_size_changed(id).map(|_| ())
    }
}
