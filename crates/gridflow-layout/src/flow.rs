#![forbid(unsafe_code)]

//! Row-flow layout: placement and measurement.
//!
//! Children are placed left to right in rows. Each child's column width and
//! offset come from its [`ChildLayoutSpec`] resolved against the active
//! [`Breakpoint`] of the container's content width. A child wraps to a new
//! row when it would overflow the row or when its [`BreakFlagTable`] forces a
//! break for the active bucket.
//!
//! # Invariants
//!
//! 1. Placement and measurement run the same routine ([`FlowLayout::flow`]),
//!    so they always agree on wrap decisions and content height. A container
//!    nested inside another auto-sizing layout therefore never oscillates.
//! 2. A pass has no hidden state: two passes over unchanged inputs produce
//!    identical bounds.
//! 3. Work is linear in the number of children.
//!
//! [`BreakFlagTable`]: crate::BreakFlagTable

use std::hash::Hash;

use gridflow_core::geometry::{Point, Rect, Size};
use gridflow_core::{debug, debug_span, trace};

use crate::child_spec::{ChildLayoutSpec, ChildSpecs};
use crate::host::{LayoutChild, LayoutContainer};
use crate::{BreakFlagTable, Breakpoint, Breakpoints, PercentageTable};

/// What a flow pass produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlowMode {
    /// Only compute the content height.
    Measure,
    /// Compute the content height and the bounds of every visible child.
    Place,
}

/// Final bounds for one child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildPlacement {
    /// Index into [`LayoutContainer::children`].
    pub index: usize,
    /// Location and size relative to the container's client area.
    pub bounds: Rect,
}

/// Result of [`FlowLayout::flow`].
///
/// `content_height` is `None` when the container has no visible children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowOutcome {
    /// A [`FlowMode::Measure`] pass: height only.
    Measured {
        /// Rows plus vertical padding, `None` without visible children.
        content_height: Option<i32>,
    },
    /// A [`FlowMode::Place`] pass: height and child bounds.
    Placed {
        /// Rows plus vertical padding, `None` without visible children.
        content_height: Option<i32>,
        /// One entry per visible child, in flow order.
        placements: Vec<ChildPlacement>,
    },
}

impl FlowOutcome {
    /// Total height of all rows plus top and bottom padding.
    #[must_use]
    pub fn content_height(&self) -> Option<i32> {
        match self {
            Self::Measured { content_height } | Self::Placed { content_height, .. } => {
                *content_height
            }
        }
    }

    /// Child bounds, in layout order. Empty for [`FlowOutcome::Measured`].
    #[must_use]
    pub fn placements(&self) -> &[ChildPlacement] {
        match self {
            Self::Measured { .. } => &[],
            Self::Placed { placements, .. } => placements,
        }
    }
}

/// Responsive row-flow layout engine.
///
/// Owns the container's [`Breakpoints`] and the per-child spec side table.
/// `K` is the child identity type ([`LayoutChild::Id`]).
#[derive(Debug, Clone)]
pub struct FlowLayout<K> {
    breakpoints: Breakpoints,
    specs: ChildSpecs<K>,
}

impl<K: Copy + Eq + Hash> Default for FlowLayout<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Copy + Eq + Hash> FlowLayout<K> {
    /// Engine with [`Breakpoints::BOOTSTRAP`].
    pub fn new() -> Self {
        Self::with_breakpoints(Breakpoints::default())
    }

    /// Engine with explicit breakpoints.
    pub fn with_breakpoints(breakpoints: Breakpoints) -> Self {
        Self {
            breakpoints,
            specs: ChildSpecs::new(),
        }
    }

    #[inline]
    pub fn breakpoints(&self) -> Breakpoints {
        self.breakpoints
    }

    pub fn set_breakpoints(&mut self, breakpoints: Breakpoints) {
        self.breakpoints = breakpoints;
    }

    /// The per-child spec table.
    pub fn specs(&self) -> &ChildSpecs<K> {
        &self.specs
    }

    pub fn specs_mut(&mut self) -> &mut ChildSpecs<K> {
        &mut self.specs
    }

    /// Full spec for a child, materialising the default.
    pub fn spec(&mut self, id: K) -> ChildLayoutSpec {
        *self.specs.entry(id)
    }

    pub fn column_width(&mut self, id: K) -> PercentageTable {
        self.specs.entry(id).width
    }

    pub fn set_column_width(&mut self, id: K, width: PercentageTable) {
        self.specs.entry(id).width = width;
    }

    pub fn column_offset(&mut self, id: K) -> PercentageTable {
        self.specs.entry(id).offset
    }

    pub fn set_column_offset(&mut self, id: K, offset: PercentageTable) {
        self.specs.entry(id).offset = offset;
    }

    pub fn column_break(&mut self, id: K) -> BreakFlagTable {
        self.specs.entry(id).breaks
    }

    pub fn set_column_break(&mut self, id: K, breaks: BreakFlagTable) {
        self.specs.entry(id).breaks = breaks;
    }

    /// Drop the spec of a child that left the container.
    pub fn forget(&mut self, id: &K) -> Option<ChildLayoutSpec> {
        self.specs.remove(id)
    }

    /// Bucket the container's current content width falls into.
    pub fn active_breakpoint<C>(&self, container: &C) -> Breakpoint
    where
        C: LayoutContainer,
    {
        let content = content_box(container, container.client_size().width);
        self.breakpoints.classify_width(content.width)
    }

    /// Place every visible child and auto-size the container.
    ///
    /// Returns the container's auto-size flag: `true` means the container's
    /// height was (re)computed from its content and the parent should lay out
    /// again.
    ///
    /// With no visible children an auto-sizing container keeps its current
    /// height. A bottom-docked container moves up by however much it grew so
    /// its bottom edge stays put.
    pub fn layout<C>(&mut self, container: &mut C) -> bool
    where
        C: LayoutContainer,
        C::Child: LayoutChild<Id = K>,
    {
        let client = container.client_size();
        let content = content_box(container, client.width);
        let outcome = self.flow(container, content, FlowMode::Place);

        let children = container.children_mut();
        for placement in outcome.placements() {
            if let Some(child) = children.get_mut(placement.index) {
                child.set_bounds(placement.bounds.location(), placement.bounds.size());
            }
        }

        let auto_size = container.auto_size();
        if auto_size {
            let height = outcome.content_height().unwrap_or(client.height);
            let grown = height - client.height;
            if container.docked_to_bottom() && grown != 0 {
                let location = container.location();
                container.set_location(Point::new(location.x, location.y - grown));
                debug!(grown, y = location.y - grown, "bottom-docked container moved");
            }
            container.set_client_height(height);
            debug!(from = client.height, to = height, "container auto-sized");
        }
        auto_size
    }

    /// Size the container would take for `proposed`, without moving children.
    ///
    /// The width is returned unchanged; a non-positive proposed width falls
    /// back to the current client width. With no visible children the
    /// container's current client height is returned, same as [`layout`].
    ///
    /// [`layout`]: FlowLayout::layout
    pub fn preferred_size<C>(&mut self, container: &C, proposed: Size) -> Size
    where
        C: LayoutContainer,
        C::Child: LayoutChild<Id = K>,
    {
        let client = container.client_size();
        let width = if proposed.width > 0 {
            proposed.width
        } else {
            client.width
        };
        let content = content_box(container, width);
        let height = self
            .flow(container, content, FlowMode::Measure)
            .content_height()
            .unwrap_or(client.height);
        Size::new(width, height)
    }

    /// Run one row-flow pass over `container`'s visible children.
    ///
    /// `content` is the content box size (client size minus padding); its
    /// width is the row width and the whole size is offered to auto-sizing
    /// children as their available space.
    pub fn flow<C>(&mut self, container: &C, content: Size, mode: FlowMode) -> FlowOutcome
    where
        C: LayoutContainer,
        C::Child: LayoutChild<Id = K>,
    {
        let padding = container.padding();
        let row_width = content.width;
        let bucket = self.breakpoints.classify_width(row_width);

        let span = debug_span!("flow_layout", ?mode, row_width, breakpoint = %bucket);
        let _guard = span.enter();

        let children = container.children();
        let mut placements = match mode {
            FlowMode::Place => Vec::with_capacity(children.len()),
            FlowMode::Measure => Vec::new(),
        };

        let mut cursor_x = 0.0f32;
        let mut row_top = padding.top;
        let mut row_max_height = 0i32;
        let mut visible = 0usize;

        // Back-to-front: the most recently added child is laid out first.
        // Hosts keep children in z-order with the newest at the end, and the
        // flow reads them in reverse so the first-added child ends up last.
        for (index, child) in children.iter().enumerate().rev() {
            if !child.is_visible() {
                continue;
            }
            visible += 1;

            let spec = *self.specs.entry(child.id());
            let margin = child.margin();
            let margin_x = margin.horizontal_sum() as f32;

            let height = if child.auto_size() {
                child.preferred_size(content).height
            } else {
                child.size().height
            }
            .max(0);

            let col_width = spec.width.pixels(row_width, bucket) - margin_x;
            cursor_x += spec.offset.pixels(row_width, bucket);

            // The offset is already applied, so an offset alone can push a
            // child onto the next row. Truncate before comparing so columns
            // summing to exactly the row width stay on it despite f32 drift.
            let overflow = ((cursor_x + margin_x + col_width) as i32) > row_width;
            let forced = spec.breaks.get(bucket);
            if overflow || forced {
                trace!(index, overflow, forced, row_top, "row wrap");
                cursor_x = 0.0;
                row_top = row_top.saturating_add(row_max_height);
                row_max_height = 0;
            }

            row_max_height = row_max_height.max(height.saturating_add(margin.vertical_sum()));

            if mode == FlowMode::Place {
                placements.push(ChildPlacement {
                    index,
                    bounds: Rect::new(
                        (cursor_x as i32)
                            .saturating_add(margin.left)
                            .saturating_add(padding.left),
                        row_top.saturating_add(margin.top),
                        (col_width as i32).max(0),
                        height,
                    ),
                });
            }

            cursor_x += col_width + margin_x;
        }

        let content_height = (visible > 0).then(|| {
            row_top
                .saturating_add(row_max_height)
                .saturating_add(padding.bottom)
        });
        debug!(visible, ?content_height, "flow pass complete");

        match mode {
            FlowMode::Measure => FlowOutcome::Measured { content_height },
            FlowMode::Place => FlowOutcome::Placed {
                content_height,
                placements,
            },
        }
    }
}

/// Content box size for a container `width` wide.
fn content_box<C: LayoutContainer>(container: &C, width: i32) -> Size {
    let client = container.client_size();
    Rect::new(0, 0, width, client.height)
        .inner(container.padding())
        .size()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridflow_core::geometry::Sides;

    #[derive(Debug, Clone)]
    struct Item {
        id: u32,
        size: Size,
        bounds: Option<Rect>,
    }

    impl LayoutChild for Item {
        type Id = u32;

        fn id(&self) -> u32 {
            self.id
        }
        fn is_visible(&self) -> bool {
            true
        }
        fn margin(&self) -> Sides {
            Sides::default()
        }
        fn auto_size(&self) -> bool {
            false
        }
        fn size(&self) -> Size {
            self.size
        }
        fn preferred_size(&self, _available: Size) -> Size {
            self.size
        }
        fn set_bounds(&mut self, location: Point, size: Size) {
            self.bounds = Some(Rect::from_parts(location, size));
        }
    }

    #[derive(Debug)]
    struct Row {
        items: Vec<Item>,
        client: Size,
        location: Point,
        auto_size: bool,
    }

    impl LayoutContainer for Row {
        type Child = Item;

        fn children(&self) -> &[Item] {
            &self.items
        }
        fn children_mut(&mut self) -> &mut [Item] {
            &mut self.items
        }
        fn client_size(&self) -> Size {
            self.client
        }
        fn padding(&self) -> Sides {
            Sides::default()
        }
        fn auto_size(&self) -> bool {
            self.auto_size
        }
        fn set_auto_size(&mut self, auto_size: bool) {
            self.auto_size = auto_size;
        }
        fn docked_to_bottom(&self) -> bool {
            false
        }
        fn location(&self) -> Point {
            self.location
        }
        fn set_location(&mut self, location: Point) {
            self.location = location;
        }
        fn set_client_height(&mut self, height: i32) {
            self.client.height = height;
        }
        fn remove_child(&mut self, id: u32) -> Option<Item> {
            let pos = self.items.iter().position(|item| item.id == id)?;
            Some(self.items.remove(pos))
        }
    }

    fn row(width: i32, heights: &[i32]) -> Row {
        Row {
            items: heights
                .iter()
                .enumerate()
                .map(|(i, &h)| Item {
                    id: i as u32,
                    size: Size::new(10, h),
                    bounds: None,
                })
                .collect(),
            client: Size::new(width, 0),
            location: Point::ORIGIN,
            auto_size: true,
        }
    }

    #[test]
    fn measure_emits_no_placements() {
        let container = row(300, &[10, 20]);
        let mut flow = FlowLayout::new();
        let outcome = flow.flow(&container, Size::new(300, 0), FlowMode::Measure);
        assert!(outcome.placements().is_empty());
        // Xs bucket: default width is 100%, so each child gets its own row.
        assert_eq!(outcome.content_height(), Some(30));
    }

    #[test]
    fn place_reports_children_back_to_front() {
        let container = row(300, &[10, 20, 30]);
        let mut flow = FlowLayout::new();
        let outcome = flow.flow(&container, Size::new(300, 0), FlowMode::Place);
        let order: Vec<usize> = outcome.placements().iter().map(|p| p.index).collect();
        assert_eq!(order, vec![2, 1, 0]);
        assert_eq!(outcome.placements()[0].bounds, Rect::new(0, 0, 300, 30));
        assert_eq!(outcome.placements()[2].bounds, Rect::new(0, 50, 300, 10));
    }

    #[test]
    fn flow_materialises_default_specs() {
        let container = row(300, &[10, 10]);
        let mut flow = FlowLayout::new();
        assert!(flow.specs().is_empty());
        flow.flow(&container, Size::new(300, 0), FlowMode::Measure);
        assert_eq!(flow.specs().len(), 2);
        assert_eq!(flow.specs().get(&0), Some(&ChildLayoutSpec::default()));
    }

    #[test]
    fn layout_applies_bounds_and_height() {
        let mut container = row(300, &[10, 20]);
        let mut flow = FlowLayout::new();
        assert!(flow.layout(&mut container));
        assert_eq!(container.items[1].bounds, Some(Rect::new(0, 0, 300, 20)));
        assert_eq!(container.items[0].bounds, Some(Rect::new(0, 20, 300, 10)));
        assert_eq!(container.client.height, 30);
    }

    #[test]
    fn fixed_height_container_reports_false() {
        let mut container = row(300, &[10]);
        container.auto_size = false;
        container.client.height = 77;
        let mut flow = FlowLayout::new();
        assert!(!flow.layout(&mut container));
        assert_eq!(container.client.height, 77);
    }

    #[test]
    fn active_breakpoint_tracks_width() {
        let flow: FlowLayout<u32> = FlowLayout::new();
        assert_eq!(flow.active_breakpoint(&row(300, &[])), Breakpoint::Xs);
        assert_eq!(flow.active_breakpoint(&row(800, &[])), Breakpoint::Md);
        assert_eq!(flow.active_breakpoint(&row(1200, &[])), Breakpoint::Xl);
    }

    #[test]
    fn accessors_materialise_and_forget() {
        let mut flow = FlowLayout::new();
        assert_eq!(flow.column_width(5u32), PercentageTable::default_width());
        assert!(flow.specs().contains(&5));

        flow.set_column_offset(5, PercentageTable::all(10.0));
        flow.set_column_break(5, BreakFlagTable::ALWAYS);
        let spec = flow.spec(5);
        assert_eq!(spec.offset, PercentageTable::all(10.0));
        assert_eq!(spec.breaks, BreakFlagTable::ALWAYS);

        assert_eq!(flow.forget(&5), Some(spec));
        assert!(flow.specs().is_empty());
    }
}
