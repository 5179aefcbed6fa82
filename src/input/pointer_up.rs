//! Pointer up handling - finalize the active drag.

use crate::board::IntervalBoard;
use crate::context::DrawingContext;
use crate::error::SpanResult;
use crate::profile_scope;
use tracing::debug;

impl<C: DrawingContext> IntervalBoard<C> {
    pub fn pointer_up(&mut self, x: i32, y: i32) -> SpanResult<()> {
        profile_scope!("pointer_up");

        self.last_pointer = Some((x, y));
        self.finish_drag();
        self.refresh_cursor();
        Ok(())
    }

    /// End the active drag as if the pointer were released where it was last seen.
    ///
    /// Used when the drag must stop without a real release, for example when
    /// the pointer leaves the surface.
    pub fn cancel_drag(&mut self) -> SpanResult<()> {
        if self.input_state.is_dragging() {
            debug!("Drag cancelled");
        }
        self.finish_drag();
        self.refresh_cursor();
        Ok(())
    }

    fn finish_drag(&mut self) {
        let Some(drag) = self.input_state.finish_drag() else {
            return;
        };
        let origin = drag.origin();
        match drag.result() {
            Some(result) if Some(result) != origin => {
                debug!(kind = ?drag.kind(), from = ?origin, to = %result, "Drag finished");
                self.emit_change(origin, Some(result));
            }
            _ => debug!(kind = ?drag.kind(), "Drag finished without change"),
        }
    }
}
