//! Pointer down handling - hit testing and drag initiation.
//!
//! A press selects, in priority order, a boundary (resize), an interval body
//! (move) or free space (create). A press on a boundary coordinate that is
//! out of tolerance of every interval starts nothing.

use crate::board::IntervalBoard;
use crate::context::DrawingContext;
use crate::error::SpanResult;
use crate::profile_scope;
use tracing::{debug, trace, warn};

impl<C: DrawingContext> IntervalBoard<C> {
    pub fn pointer_down(&mut self, x: i32, y: i32) -> SpanResult<()> {
        profile_scope!("pointer_down");

        self.last_pointer = Some((x, y));
        if self.input_state.is_dragging() {
            warn!(x, y, "Pointer down ignored while dragging");
            return Ok(());
        }

        self.update_hover(None);

        if let Some(point) = self.context.pointer_to_address(x, y, false) {
            match self.begin_drag(point)? {
                Some(drag) => {
                    debug!(kind = ?drag.kind(), anchor = %point, origin = ?drag.origin(), "Drag started");
                    self.input_state.start_drag(drag);
                }
                None => trace!(%point, "No drag at pointer"),
            }
        }

        self.refresh_cursor();
        Ok(())
    }
}
