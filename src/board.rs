//! The interval board - live interval set plus gesture state.
//!
//! `IntervalBoard` owns the ordered set of non-overlapping intervals on the
//! address line and turns pointer events into drawing intents on its
//! [`DrawingContext`] and change notifications on its [`ChangeListener`].
//! The pointer handlers themselves live in `crate::input`, one file per event.

use crate::context::{CursorKind, DrawingContext};
use crate::error::{SpanError, SpanResult};
use crate::input::{Drag, DragKind, InputState, Selection, Tolerance, select};
use crate::listener::ChangeListener;
use crate::model::{Element1D, Interval, Point, gaps};
use std::collections::BTreeSet;
use std::fmt;
use tracing::debug;

pub struct IntervalBoard<C: DrawingContext> {
    pub(crate) context: C,
    /// Live intervals, ordered by start; never overlapping
    pub(crate) intervals: BTreeSet<Interval>,
    pub(crate) input_state: InputState,
    pub(crate) listener: Option<Box<dyn ChangeListener>>,
    pub(crate) tolerance: Tolerance,
    /// Last device position seen, for cursor refresh after a forced cancel
    pub(crate) last_pointer: Option<(i32, i32)>,
}

impl<C: DrawingContext> IntervalBoard<C> {
    /// Board with an empty line; the whole line is labeled as one gap.
    pub fn new(context: C) -> Self {
        let mut board = Self {
            context,
            intervals: BTreeSet::new(),
            input_state: InputState::default(),
            listener: None,
            tolerance: Tolerance::default(),
            last_pointer: None,
        };
        board.draw_gap_labels();
        board
    }

    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    /// Install the change listener, replacing any previous one.
    pub fn set_listener(&mut self, listener: impl ChangeListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    pub fn context(&self) -> &C {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut C {
        &mut self.context
    }

    pub fn into_context(self) -> C {
        self.context
    }

    /// Live intervals in ascending order.
    pub fn intervals(&self) -> impl Iterator<Item = &Interval> {
        self.intervals.iter()
    }

    pub fn interval_count(&self) -> usize {
        self.intervals.len()
    }

    /// Blank gaps currently labeled, ascending.
    pub fn gaps(&self) -> Vec<Interval> {
        gaps::blank_gaps(&self.intervals, self.context.line_start(), self.context.line_end())
    }

    /// First live interval overlapping `element`.
    pub fn interval_at<E: Element1D>(&self, element: &E) -> Option<Interval> {
        self.intervals.iter().find(|interval| interval.overlaps(element)).copied()
    }

    /// What a press at `point` would grab.
    pub fn selection_at(&self, point: Point) -> Option<Selection> {
        select(&self.intervals, point, self.tolerance)
    }

    pub fn input_state(&self) -> &InputState {
        &self.input_state
    }

    pub fn is_dragging(&self) -> bool {
        self.input_state.is_dragging()
    }

    pub fn drag_kind(&self) -> Option<DragKind> {
        self.input_state.drag_kind()
    }

    pub fn hover(&self) -> Option<Point> {
        self.input_state.hover()
    }

    /// Insert an interval directly, without notifying the listener.
    ///
    /// Fails if `interval` overlaps a live interval, leaves the line, or a
    /// drag is in progress.
    pub fn add_interval(&mut self, interval: Interval) -> SpanResult<()> {
        if self.is_dragging() {
            return Err(SpanError::UnresolvedGesture(format!(
                "cannot add {interval} while a drag is in progress"
            )));
        }
        let (start, end) = (self.context.line_start(), self.context.line_end());
        if interval.start() < start || interval.end() > end {
            return Err(SpanError::OutOfBounds { interval, start, end });
        }
        if let Some(existing) = self.interval_at(&interval) {
            return Err(SpanError::Overlap {
                new: interval,
                existing,
            });
        }

        self.clear_gap_labels();
        self.intervals.insert(interval);
        self.context.draw(interval.into());
        self.draw_gap_labels();
        debug!(%interval, count = self.intervals.len(), "Interval added");
        Ok(())
    }

    /// Delete a live interval, notifying the listener.
    ///
    /// Returns false if `interval` is not live or a drag is in progress.
    pub fn remove_interval(&mut self, interval: Interval) -> bool {
        if self.is_dragging() || !self.intervals.contains(&interval) {
            return false;
        }
        self.clear_gap_labels();
        self.context.clear(interval.into());
        self.intervals.remove(&interval);
        self.draw_gap_labels();
        debug!(%interval, count = self.intervals.len(), "Interval deleted");
        self.emit_change(Some(interval), None);
        true
    }

    /// Start the drag a press at `point` selects, if any.
    pub(crate) fn begin_drag(&self, point: Point) -> SpanResult<Option<Drag>> {
        let (start, end) = (self.context.line_start(), self.context.line_end());
        let Some(selection) = self.selection_at(point) else {
            return Ok(Drag::create(point, &self.intervals, start, end));
        };

        let parent = selection.parent();
        let others: Vec<Interval> = self.intervals.iter().filter(|i| **i != parent).copied().collect();
        match selection {
            Selection::Body(_) => Ok(Some(Drag::shift(point, parent, others, start, end))),
            Selection::Boundary { .. } => {
                let fixed = selection.fixed_boundary()?;
                Drag::resize(fixed, parent, &others, start, end).map(Some)
            }
        }
    }

    /// Swap the drawn working interval for `next`.
    pub(crate) fn replace_working(&mut self, previous: Option<Interval>, next: Interval) {
        self.clear_gap_labels();
        if let Some(previous) = previous {
            self.intervals.remove(&previous);
            self.context.clear(previous.into());
        }
        self.intervals.insert(next);
        self.context.draw(next.into());
        self.draw_gap_labels();
        debug_assert!(self.is_disjoint(), "overlapping intervals after drawing {next}");
    }

    pub(crate) fn clear_gap_labels(&mut self) {
        for gap in self.gaps() {
            self.context.clear_text(gap.into());
        }
    }

    pub(crate) fn draw_gap_labels(&mut self) {
        for gap in self.gaps() {
            self.context.add_text(gap.into());
        }
    }

    /// Move the hover marker to `next`, clearing the old one.
    pub(crate) fn update_hover(&mut self, next: Option<Point>) {
        let InputState::Idle { hover } = &mut self.input_state else {
            return;
        };
        if *hover == next {
            return;
        }
        if let Some(old) = hover.take() {
            self.context.clear(old.into());
        }
        if let Some(point) = next {
            self.context.draw(point.into());
            *hover = Some(point);
        }
    }

    /// Update cursor and hover for the last pointer position. No-op while dragging.
    pub(crate) fn refresh_cursor(&mut self) {
        if !self.input_state.is_idle() {
            return;
        }
        let Some((x, y)) = self.last_pointer else {
            return;
        };

        let point = self.context.pointer_to_address(x, y, false);
        match point.map(|point| (point, self.selection_at(point))) {
            Some((_, Some(selection))) => {
                self.update_hover(None);
                self.context.set_cursor(selection.cursor());
            }
            Some((point, None)) => {
                self.update_hover(Some(point));
                self.context.set_cursor(CursorKind::Default);
            }
            None => {
                self.update_hover(None);
                self.context.set_cursor(CursorKind::Default);
            }
        }
    }

    pub(crate) fn emit_change(&mut self, old: Option<Interval>, new: Option<Interval>) {
        if let Some(listener) = self.listener.as_mut() {
            listener.on_change(old, new);
        }
    }

    pub(crate) fn emit_drag(&mut self, old: Option<Interval>, new: Interval) {
        if let Some(listener) = self.listener.as_mut() {
            listener.on_drag(old, new);
        }
    }

    fn is_disjoint(&self) -> bool {
        let ordered: Vec<&Interval> = self.intervals.iter().collect();
        ordered.windows(2).all(|pair| !pair[0].overlaps(pair[1]))
    }
}

impl<C: DrawingContext + fmt::Debug> fmt::Debug for IntervalBoard<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntervalBoard")
            .field("context", &self.context)
            .field("intervals", &self.intervals)
            .field("input_state", &self.input_state)
            .field("has_listener", &self.listener.is_some())
            .field("tolerance", &self.tolerance)
            .finish()
    }
}
