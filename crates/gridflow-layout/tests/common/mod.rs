#![allow(dead_code)]

//! In-memory host used by the integration tests.

use gridflow_layout::{LayoutChild, LayoutContainer, Point, Rect, Sides, Size};

#[derive(Debug, Clone, PartialEq)]
pub struct Widget {
    pub id: u32,
    pub visible: bool,
    pub margin: Sides,
    pub auto_size: bool,
    pub size: Size,
    /// Height reported by `preferred_size` for auto-sizing widgets.
    pub preferred_height: i32,
    pub location: Point,
    pub set_bounds_calls: usize,
}

impl Widget {
    pub fn new(id: u32, height: i32) -> Self {
        Self {
            id,
            visible: true,
            margin: Sides::default(),
            auto_size: false,
            size: Size::new(0, height),
            preferred_height: height,
            location: Point::ORIGIN,
            set_bounds_calls: 0,
        }
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn with_margin(mut self, margin: impl Into<Sides>) -> Self {
        self.margin = margin.into();
        self
    }

    pub fn auto_sized(mut self, preferred_height: i32) -> Self {
        self.auto_size = true;
        self.preferred_height = preferred_height;
        self
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_parts(self.location, self.size)
    }
}

impl LayoutChild for Widget {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn margin(&self) -> Sides {
        self.margin
    }

    fn auto_size(&self) -> bool {
        self.auto_size
    }

    fn size(&self) -> Size {
        self.size
    }

    fn preferred_size(&self, available: Size) -> Size {
        Size::new(available.width, self.preferred_height)
    }

    fn set_bounds(&mut self, location: Point, size: Size) {
        self.location = location;
        self.size = size;
        self.set_bounds_calls += 1;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub widgets: Vec<Widget>,
    pub client: Size,
    pub padding: Sides,
    pub auto_size: bool,
    pub docked_bottom: bool,
    pub location: Point,
}

impl Panel {
    /// Fixed-height panel with no padding.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            widgets: Vec::new(),
            client: Size::new(width, height),
            padding: Sides::default(),
            auto_size: false,
            docked_bottom: false,
            location: Point::ORIGIN,
        }
    }

    pub fn with_padding(mut self, padding: impl Into<Sides>) -> Self {
        self.padding = padding.into();
        self
    }

    pub fn auto_sized(mut self) -> Self {
        self.auto_size = true;
        self
    }

    pub fn docked_bottom(mut self, location: Point) -> Self {
        self.docked_bottom = true;
        self.location = location;
        self
    }

    /// Add a widget on top; the flow visits it first.
    pub fn push(mut self, widget: Widget) -> Self {
        self.widgets.push(widget);
        self
    }

    pub fn widget(&self, id: u32) -> &Widget {
        self.widgets
            .iter()
            .find(|w| w.id == id)
            .expect("widget present")
    }
}

impl LayoutContainer for Panel {
    type Child = Widget;

    fn children(&self) -> &[Widget] {
        &self.widgets
    }

    fn children_mut(&mut self) -> &mut [Widget] {
        &mut self.widgets
    }

    fn client_size(&self) -> Size {
        self.client
    }

    fn padding(&self) -> Sides {
        self.padding
    }

    fn auto_size(&self) -> bool {
        self.auto_size
    }

    fn set_auto_size(&mut self, auto_size: bool) {
        self.auto_size = auto_size;
    }

    fn docked_to_bottom(&self) -> bool {
        self.docked_bottom
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

    fn remove_child(&mut self, id: u32) -> Option<Widget> {
        let pos = self.widgets.iter().position(|w| w.id == id)?;
        Some(self.widgets.remove(pos))
    }
}
