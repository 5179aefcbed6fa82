//! Input state machine - idle with an optional hover marker, or one drag.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Dragging(Create)     (pointer down in free space)
//! Idle -> Dragging(Resize)     (pointer down on a boundary)
//! Idle -> Dragging(Move)       (pointer down on an interval body)
//!
//! Dragging -> Idle             (pointer up or forced cancel - finalizes)
//! ```

use super::drag::{Drag, DragKind};
use crate::model::{Interval, Point};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputState {
    /// No gesture in progress
    Idle {
        /// Marker currently drawn under the pointer
        hover: Option<Point>,
    },

    /// A drag owns all pointer input until release
    Dragging(Drag),
}

impl Default for InputState {
    fn default() -> Self {
        Self::Idle { hover: None }
    }
}

impl InputState {
    /// Returns true if no drag is active
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle { .. })
    }

    /// Returns true if a drag is active
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    pub fn drag(&self) -> Option<&Drag> {
        match self {
            Self::Dragging(drag) => Some(drag),
            Self::Idle { .. } => None,
        }
    }

    /// Kind of the active drag, if any
    pub fn drag_kind(&self) -> Option<DragKind> {
        self.drag().map(Drag::kind)
    }

    /// Working interval of the active drag, if any
    pub fn working_interval(&self) -> Option<Interval> {
        self.drag().and_then(Drag::result)
    }

    /// Hover marker position while idle
    pub fn hover(&self) -> Option<Point> {
        match self {
            Self::Idle { hover } => *hover,
            Self::Dragging(_) => None,
        }
    }

    /// Start a drag, dropping any hover marker bookkeeping
    pub fn start_drag(&mut self, drag: Drag) {
        *self = Self::Dragging(drag);
    }

    /// End the active drag, returning it; the state is Idle afterwards
    pub fn finish_drag(&mut self) -> Option<Drag> {
        match std::mem::take(self) {
            Self::Dragging(drag) => Some(drag),
            idle => {
                *self = idle;
                None
            }
        }
    }
}
