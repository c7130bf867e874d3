// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Horizontal and vertical boxes

use crate::{SizeNegotiable, Tree, WidgetKind};
use boxlay_core::dir::{Direction, Directional};
use boxlay_core::geom::Size;
use boxlay_core::layout::{AxisSolver, BoxConfig, Item, Measure};
use boxlay_core::{Error, Result, WidgetId};
use smallvec::SmallVec;

/// Solver input for one box: one item per child, in child order
pub(crate) type Items = SmallVec<[Item; 16]>;

/// Layout phase of a box
///
/// A box is [`Phase::Idle`] except while its own layout runs. Layout of a box
/// which is not idle is refused with [`Error::Logic`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Phase {
    #[default]
    Idle,
    /// Reading children and computing totals
    Measuring,
    /// Fitting the box to its content (auto-resize)
    Resizing,
    /// Computing and writing child rects
    Placing,
}

/// A box container
///
/// Places its children along one axis: left to right for
/// [`WidgetKind::HBox`], top to bottom for [`WidgetKind::VBox`].
///
/// Layout runs whenever the box's size or rect is set, when a child is
/// created inside it and when a descendant's size change propagates to it.
/// Each run is a state machine: measure the children, optionally fit the box
/// to them (at most once), then place the children.
#[derive(Clone, Debug)]
pub struct BoxWidget {
    dir: Direction,
    config: BoxConfig,
    phase: Phase,
}

impl BoxWidget {
    /// Construct
    pub fn new(dir: Direction, config: BoxConfig) -> Self {
        BoxWidget {
            dir,
            config,
            phase: Phase::Idle,
        }
    }

    /// Layout direction
    #[inline]
    pub fn direction(&self) -> Direction {
        self.dir
    }

    /// Spacing, padding and auto-resize settings
    #[inline]
    pub fn config(&self) -> &BoxConfig {
        &self.config
    }

    /// Current layout phase
    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The widget kind
    pub fn kind(&self) -> WidgetKind {
        match self.dir {
            Direction::Right => WidgetKind::HBox,
            Direction::Down => WidgetKind::VBox,
        }
    }

    /// Set a box property (`Spacing`, `Padding` or `AutoResize`)
    ///
    /// Returns `Ok(false)` if `key` is not recognised.
    #[inline]
    pub fn set_property(&mut self, key: &str, value: &str) -> Result<bool> {
        self.config.set_property(key, value)
    }

    fn solver(&self) -> AxisSolver<Direction> {
        AxisSolver::new(self.dir, self.config)
    }
}

impl SizeNegotiable for BoxWidget {
    /// Measured content plus padding, as the box would fit itself
    fn requested_size(&self, tree: &Tree, id: WidgetId) -> Result<Size> {
        let solver = self.solver();
        let items = tree.layout_items(id)?;
        let m = solver.measure(&items)?;
        solver.fitted_size(&m)
    }
}

impl Tree {
    pub(crate) fn box_mut(&mut self, id: WidgetId) -> Result<&mut BoxWidget> {
        match &mut self.node_mut(id)?.variant {
            crate::node::Variant::Box(widget) => Ok(widget),
            _ => Err(Error::Logic("widget is not a box")),
        }
    }

    fn set_phase(&mut self, id: WidgetId, phase: Phase) -> Result<()> {
        self.box_mut(id)?.phase = phase;
        Ok(())
    }

    /// Solver items for the children of `id`
    ///
    /// Hidden children are reported by their current size without querying
    /// their requested size.
    pub(crate) fn layout_items(&self, id: WidgetId) -> Result<Items> {
        let node = self.node(id)?;
        let mut items = Items::with_capacity(node.children.len());
        for &child in &node.children {
            let child_node = self.node(child)?;
            let flags = child_node.attributes.flags;
            let item = match child_node.variant.negotiable() {
                Some(widget) if !child_node.attributes.is_hidden() => {
                    Item::negotiated(widget.requested_size(self, child)?, flags)
                }
                _ => Item::fixed(child_node.rect.size, flags),
            };
            items.push(item);
        }
        Ok(items)
    }

    /// Run layout of box `id`
    ///
    /// Does nothing if `id` is not a box.
    pub(crate) fn arrange(&mut self, id: WidgetId) -> Result<()> {
        let solver = match self.node(id)?.as_box() {
            Some(widget) if widget.phase != Phase::Idle => {
                return Err(Error::Logic("box layout re-entered"));
            }
            Some(widget) => widget.solver(),
            None => return Ok(()),
        };

        self.set_phase(id, Phase::Measuring)?;
        let result = self.arrange_phases(id, solver);
        self.set_phase(id, Phase::Idle)?;
        result
    }

    fn arrange_phases(&mut self, id: WidgetId, solver: AxisSolver<Direction>) -> Result<()> {
        let auto_resize = self.box_mut(id)?.config.auto_resize;
        let (items, m) = self.measure_and_fit(id, &solver, auto_resize)?;

        self.set_phase(id, Phase::Placing)?;
        let node = self.node(id)?;
        let size = node.rect.size;
        let placements = solver.place(&items, &m, size)?;
        let children: SmallVec<[WidgetId; 16]> =
            placements.iter().map(|p| node.children[p.index]).collect();

        log::trace!(
            "arrange: {id} dir={} size={size:?} totals=({}, {}) stretched={}",
            solver.direction().as_direction(),
            m.primary,
            m.cross,
            m.stretched,
        );

        for (child, placement) in children.into_iter().zip(placements) {
            self.set_coord(child, placement.rect)?;
        }
        Ok(())
    }

    /// Measure, fitting the box to its content if `auto_resize`
    ///
    /// Fitting happens at most once; content which still does not fit after
    /// a resize is reported as [`Error::Logic`].
    fn measure_and_fit(
        &mut self,
        id: WidgetId,
        solver: &AxisSolver<Direction>,
        auto_resize: bool,
    ) -> Result<(Items, Measure)> {
        let mut resized = false;
        loop {
            let items = self.layout_items(id)?;
            let m = solver.measure(&items)?;
            if !auto_resize {
                return Ok((items, m));
            }

            let size = self.node(id)?.rect.size;
            let fitted = solver.fitted_size(&m)?;
            if fitted == size {
                return Ok((items, m));
            } else if resized {
                return Err(Error::Logic("auto-resize did not converge"));
            }

            self.set_phase(id, Phase::Resizing)?;
            log::debug!("arrange: {id} auto-resize {size:?} -> {fitted:?}");
            self.node_mut(id)?.rect.size = fitted;
            resized = true;
            self.set_phase(id, Phase::Measuring)?;
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use boxlay_core::geom::{Coord, Rect};
    use boxlay_core::text::Monospace;

    fn tree() -> Tree {
        let _ = env_logger::builder().is_test(true).try_init();
        Tree::new(Monospace::new(Size(10, 20)))
    }

    #[test]
    fn phase_returns_to_idle() {
        let mut tree = tree();
        let hbox = tree
            .create(None, WidgetKind::HBox, Rect::new(Coord::ZERO, Size(100, 30)))
            .unwrap();
        tree.create(Some(hbox), WidgetKind::Widget, Rect::new(Coord::ZERO, Size(10, 10)))
            .unwrap();
        let node = tree.node(hbox).unwrap();
        assert_eq!(node.as_box().unwrap().phase(), Phase::Idle);
    }

    #[test]
    fn re_entry_is_refused() {
        let mut tree = tree();
        let vbox = tree
            .create(None, WidgetKind::VBox, Rect::new(Coord::ZERO, Size(50, 50)))
            .unwrap();
        tree.box_mut(vbox).unwrap().phase = Phase::Placing;
        assert_eq!(
            tree.set_size(vbox, Size(60, 60)),
            Err(Error::Logic("box layout re-entered"))
        );
    }

    #[test]
    fn hidden_negotiable_child_is_not_queried() {
        let mut tree = tree();
        let hbox = tree
            .create(None, WidgetKind::HBox, Rect::new(Coord::ZERO, Size(100, 30)))
            .unwrap();
        let edit = tree
            .create(Some(hbox), WidgetKind::EditField, Rect::new(Coord::ZERO, Size(40, 20)))
            .unwrap();
        tree.set_property(edit, "Align", "HStretch").unwrap();
        tree.set_user_string(edit, "Hidden", "true").unwrap();
        let items = tree.layout_items(hbox).unwrap();
        assert_eq!(items.len(), 1);
        assert!(!items[0].negotiated);
        assert!(tree.notify_children_size_changed(hbox).is_ok());
    }

    #[test]
    fn auto_resize_fits_once() {
        let mut tree = tree();
        let hbox = tree
            .create(None, WidgetKind::HBox, Rect::new(Coord::ZERO, Size(500, 500)))
            .unwrap();
        tree.set_property(hbox, "AutoResize", "true").unwrap();
        tree.set_property(hbox, "Padding", "3").unwrap();
        tree.create(Some(hbox), WidgetKind::Widget, Rect::new(Coord::ZERO, Size(10, 12)))
            .unwrap();
        assert_eq!(tree.size(hbox).unwrap(), Size(16, 18));
    }
}
