//! Double click handling - delete the interval under the pointer.

use crate::board::IntervalBoard;
use crate::context::DrawingContext;
use crate::error::SpanResult;
use crate::profile_scope;
use tracing::warn;

impl<C: DrawingContext> IntervalBoard<C> {
    /// Delete the interval containing the pointer. Ignored while dragging.
    pub fn pointer_double_click(&mut self, x: i32, y: i32) -> SpanResult<()> {
        profile_scope!("pointer_double_click");

        self.last_pointer = Some((x, y));
        if self.input_state.is_dragging() {
            warn!(x, y, "Double click ignored while dragging");
            return Ok(());
        }

        let target = self
            .context
            .pointer_to_address(x, y, false)
            .and_then(|point| self.interval_at(&point));
        if let Some(interval) = target {
            self.remove_interval(interval);
        }

        self.refresh_cursor();
        Ok(())
    }
}
