//! Pointer input handling for the interval board.
//!
//! This module implements all pointer interaction logic: selecting intervals
//! and their boundaries, creating intervals in free space, dragging them
//! around, resizing them and deleting them with a double click.
//!
//! ## Architecture
//!
//! The input system uses an explicit state machine (`InputState`): the board
//! is either idle (optionally showing a hover marker) or running exactly one
//! drag. The drag itself is a sum type over the three gesture kinds, each
//! carrying only what it needs and exposing a single `update(point)`.
//!
//! ## Modules
//!
//! - `coords` - Address line / section / device coordinate conversion
//! - `selection` - Hit testing of intervals and boundaries
//! - `drag` - Create, move and resize drag kinds and the move cascade
//! - `state` - Input state machine enum and helper methods
//! - `pointer_down` - Pointer down handling (drag start)
//! - `pointer_move` - Pointer move handling (drag updates, hover)
//! - `pointer_up` - Pointer up handling (finalize drag, forced cancel)
//! - `double_click` - Interval deletion

pub mod coords;
mod double_click;
mod drag;
mod pointer_down;
mod pointer_move;
mod pointer_up;
mod selection;
mod state;

pub use drag::{Drag, DragKind, MoveDrag, SpanDrag};
pub use selection::{Selection, Tolerance, select};
pub use state::InputState;
