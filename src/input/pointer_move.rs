//! Pointer move handling - drag updates and hover tracking.
//!
//! While dragging, the pointer is resolved with clamping so that leaving the
//! rows still drives the drag. Redraws only happen when the working interval
//! actually changes.

use crate::board::IntervalBoard;
use crate::context::DrawingContext;
use crate::error::SpanResult;
use crate::input::InputState;
use crate::profile_scope;
use tracing::trace;

impl<C: DrawingContext> IntervalBoard<C> {
    pub fn pointer_move(&mut self, x: i32, y: i32) -> SpanResult<()> {
        profile_scope!("pointer_move");

        self.last_pointer = Some((x, y));

        let update = match &mut self.input_state {
            InputState::Dragging(drag) => match self.context.pointer_to_address(x, y, true) {
                Some(point) => {
                    let previous = drag.result();
                    let next = drag.update(point)?;
                    next.filter(|next| Some(*next) != previous).map(|next| (previous, next))
                }
                None => None,
            },
            InputState::Idle { .. } => None,
        };

        if let Some((previous, next)) = update {
            trace!(from = ?previous, to = %next, "Drag update");
            self.replace_working(previous, next);
            self.emit_drag(previous, next);
        }

        self.refresh_cursor();
        Ok(())
    }
}
