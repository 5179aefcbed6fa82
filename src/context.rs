//! Boundary between the interaction engine and whatever paints it.
//!
//! The engine never touches pixels. It asks a `DrawingContext` to realize or
//! erase elements, to show length labels, to switch the pointer cursor and to
//! resolve raw pointer coordinates into address-line points.

use crate::model::{Element, Point};
use serde::{Deserialize, Serialize};

/// Pointer cursor shown over the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CursorKind {
    #[default]
    Default,
    /// Over an interval body; dragging moves it
    Move,
    /// Over an interval boundary; dragging resizes it
    Resize,
}

/// Produces the label text for an element, or `None` for no label.
pub type Describer = Box<dyn Fn(&Element) -> Option<String>>;

/// Visual side effects requested by the engine.
///
/// Implementations are called synchronously from the pointer handlers and
/// must not call back into the engine.
pub trait DrawingContext {
    /// Realize an element. Drawing an interval also shows its own label.
    fn draw(&mut self, element: Element);

    /// Erase an element. Clearing an interval also hides its own label.
    fn clear(&mut self, element: Element);

    /// Show a length label anchored to `element`.
    fn add_text(&mut self, element: Element);

    /// Hide the label anchored to `element`, if any.
    fn clear_text(&mut self, element: Element);

    fn set_cursor(&mut self, cursor: CursorKind);

    /// Resolve device coordinates; see
    /// [`AddressMapper::device_to_address`](crate::input::coords::AddressMapper::device_to_address).
    fn pointer_to_address(&self, x: i32, y: i32, clamp: bool) -> Option<Point>;

    fn line_start(&self) -> Point;

    fn line_end(&self) -> Point;
}
