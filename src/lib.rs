//! Interactive interval measuring over a row-wrapped 1D address space.
//!
//! The address line is laid out on a 2D surface as rows of equal width.
//! [`IntervalBoard`] turns pointer gestures on that surface into a set of
//! non-overlapping intervals, drawing through a [`DrawingContext`] and
//! reporting changes to a [`ChangeListener`].

pub mod board;
pub mod config;
pub mod constants;
pub mod context;
pub mod error;
pub mod input;
pub mod listener;
pub mod model;
pub mod perf;
pub mod replay;
pub mod surface;

pub use board::IntervalBoard;
pub use config::BoardConfig;
pub use context::{CursorKind, DrawingContext};
pub use error::{SpanError, SpanResult};
pub use listener::{ChangeEvent, ChangeListener, ChangeLog};
pub use model::{Element, Element1D, Interval, Point};
pub use surface::HeadlessSurface;
