#![forbid(unsafe_code)]

//! A container bundled with its flow layout.
//!
//! [`GridPanel`] mirrors how a toolkit panel owns its layout engine: every
//! property change that affects geometry (breakpoints, auto-size, a child's
//! tables) immediately re-runs the layout.

use std::fmt;

use gridflow_core::debug;
use gridflow_core::geometry::Size;

use crate::flow::FlowLayout;
use crate::host::{LayoutChild, LayoutContainer};
use crate::{BreakFlagTable, Breakpoints, PercentageTable};

type ChildId<C> = <<C as LayoutContainer>::Child as LayoutChild>::Id;

/// A [`LayoutContainer`] and the [`FlowLayout`] that arranges it.
pub struct GridPanel<C: LayoutContainer> {
    container: C,
    layout: FlowLayout<ChildId<C>>,
}

impl<C> fmt::Debug for GridPanel<C>
where
    C: LayoutContainer + fmt::Debug,
    ChildId<C>: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridPanel")
            .field("container", &self.container)
            .field("layout", &self.layout)
            .finish()
    }
}

impl<C: LayoutContainer> GridPanel<C> {
    /// Wrap a container using [`Breakpoints::BOOTSTRAP`].
    pub fn new(container: C) -> Self {
        Self::with_breakpoints(container, Breakpoints::default())
    }

    /// Wrap a container using explicit breakpoints.
    pub fn with_breakpoints(container: C, breakpoints: Breakpoints) -> Self {
        Self {
            container,
            layout: FlowLayout::with_breakpoints(breakpoints),
        }
    }

    pub fn container(&self) -> &C {
        &self.container
    }

    /// Direct access to the container. Call [`perform_layout`] after
    /// changing anything that affects geometry.
    ///
    /// [`perform_layout`]: GridPanel::perform_layout
    pub fn container_mut(&mut self) -> &mut C {
        &mut self.container
    }

    /// The layout engine.
    pub fn flow(&self) -> &FlowLayout<ChildId<C>> {
        &self.layout
    }

    /// Unwrap the container, dropping all child specs.
    pub fn into_inner(self) -> C {
        self.container
    }

    pub fn breakpoints(&self) -> Breakpoints {
        self.layout.breakpoints()
    }

    /// Replace the breakpoints and re-layout.
    pub fn set_breakpoints(&mut self, breakpoints: Breakpoints) {
        self.layout.set_breakpoints(breakpoints);
        self.perform_layout();
    }

    pub fn auto_size(&self) -> bool {
        self.container.auto_size()
    }

    /// Toggle content-height sizing and re-layout.
    pub fn set_auto_size(&mut self, auto_size: bool) {
        self.container.set_auto_size(auto_size);
        self.perform_layout();
    }

    /// Whether `id` is a current child (only those accept column settings).
    pub fn can_extend(&self, id: ChildId<C>) -> bool {
        self.container.children().iter().any(|child| child.id() == id)
    }

    pub fn column_width(&mut self, id: ChildId<C>) -> PercentageTable {
        self.layout.column_width(id)
    }

    pub fn set_column_width(&mut self, id: ChildId<C>, width: PercentageTable) {
        self.layout.set_column_width(id, width);
        self.perform_layout();
    }

    pub fn column_offset(&mut self, id: ChildId<C>) -> PercentageTable {
        self.layout.column_offset(id)
    }

    pub fn set_column_offset(&mut self, id: ChildId<C>, offset: PercentageTable) {
        self.layout.set_column_offset(id, offset);
        self.perform_layout();
    }

    pub fn column_break(&mut self, id: ChildId<C>) -> BreakFlagTable {
        self.layout.column_break(id)
    }

    pub fn set_column_break(&mut self, id: ChildId<C>, breaks: BreakFlagTable) {
        self.layout.set_column_break(id, breaks);
        self.perform_layout();
    }

    /// Remove a child from the container, drop its spec and re-layout.
    pub fn remove_child(&mut self, id: ChildId<C>) -> Option<C::Child> {
        let removed = self.container.remove_child(id);
        self.layout.forget(&id);
        if removed.is_some() {
            self.perform_layout();
        }
        removed
    }

    /// Drop specs for ids that are no longer children of the container.
    ///
    /// Needed when the host removed children directly through
    /// [`container_mut`](Self::container_mut). Returns how many were dropped.
    pub fn prune_detached(&mut self) -> usize {
        let children = self.container.children();
        let before = self.layout.specs().len();
        self.layout
            .specs_mut()
            .retain(|id| children.iter().any(|child| child.id() == *id));
        let dropped = before - self.layout.specs().len();
        debug!(dropped, "pruned detached child specs");
        dropped
    }

    /// Run a placement pass. See [`FlowLayout::layout`].
    pub fn perform_layout(&mut self) -> bool {
        self.layout.layout(&mut self.container)
    }

    /// Size the panel would take for `proposed`. See [`FlowLayout::preferred_size`].
    pub fn preferred_size(&mut self, proposed: Size) -> Size {
        self.layout.preferred_size(&self.container, proposed)
    }
}
