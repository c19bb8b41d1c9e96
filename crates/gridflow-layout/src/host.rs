#![forbid(unsafe_code)]

//! Capabilities the layout engine needs from the host UI toolkit.

use std::hash::Hash;

use gridflow_core::geometry::{Point, Sides, Size};

/// A child element laid out by [`FlowLayout`](crate::FlowLayout).
pub trait LayoutChild {
    /// Stable identity used to key the child's layout spec.
    type Id: Copy + Eq + Hash;

    /// Identity of this child.
    fn id(&self) -> Self::Id;

    /// Hidden children take no space and are not touched.
    fn is_visible(&self) -> bool;

    /// Outer margin.
    fn margin(&self) -> Sides;

    /// When true the child's height comes from [`preferred_size`](Self::preferred_size).
    fn auto_size(&self) -> bool;

    /// Current size.
    fn size(&self) -> Size;

    /// Size the child would like given the available content area.
    fn preferred_size(&self, available: Size) -> Size;

    /// Move and resize the child.
    fn set_bounds(&mut self, location: Point, size: Size);
}

/// The container whose children are flowed into rows.
pub trait LayoutContainer {
    type Child: LayoutChild;

    /// Children in insertion order.
    fn children(&self) -> &[Self::Child];

    /// Mutable children, same order as [`children`](Self::children).
    fn children_mut(&mut self) -> &mut [Self::Child];

    /// Client area size (inside borders, including padding).
    fn client_size(&self) -> Size;

    /// Inner padding.
    fn padding(&self) -> Sides;

    /// When true the container takes the height of its content.
    fn auto_size(&self) -> bool;

    fn set_auto_size(&mut self, auto_size: bool);

    /// Docked to the bottom of its parent: grows upward.
    fn docked_to_bottom(&self) -> bool;

    /// Top-left location in the parent.
    fn location(&self) -> Point;

    fn set_location(&mut self, location: Point);

    fn set_client_height(&mut self, height: i32);

    /// Remove a child, returning it if it was present.
    fn remove_child(&mut self, id: <Self::Child as LayoutChild>::Id) -> Option<Self::Child>;
}
