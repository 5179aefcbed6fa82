//! Domain model for the 1D address line.
//!
//! Everything the engine stores or hands to a drawing context is built from
//! these value types:
//!
//! - `Point` - a zero-length position on the line
//! - `Interval` - a normalized `[start, end]` range with `start < end`
//! - `Element` - either of the two, used at the drawing-context boundary
//! - `Element1D` - shared geometry (center, length, overlap, displacement)
//! - `gaps` - open space between neighboring intervals

mod element;
pub mod gaps;
mod interval;
mod point;

pub use element::{Element, Element1D};
pub use interval::Interval;
pub use point::Point;
