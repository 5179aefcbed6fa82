//! Drag gestures - the working interval of a create, resize or move.
//!
//! ## Create and Resize
//!
//! Both keep one boundary fixed and follow the pointer with the other one,
//! clamped into the open gap (among the other intervals) around the fixed
//! boundary. A create starts without a working interval; the first update
//! that leaves the fixed point produces one.
//!
//! ## Move
//!
//! The interval is shifted by the pointer displacement since the press,
//! clamped so it stays on the line. If the shifted interval hits another
//! interval, it is placed flush against that blocker on the side the pointer
//! is on, provided the space there is wide enough. Otherwise the previous
//! working interval is kept.

use crate::error::{SpanError, SpanResult};
use crate::model::{Element1D, Interval, Point, gaps};
use serde::Serialize;
use tracing::debug;

/// Which gesture a drag performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DragKind {
    Create,
    Resize,
    Move,
}

/// One boundary fixed, the other following the pointer inside `space`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanDrag {
    fixed: Point,
    space: Interval,
    origin: Option<Interval>,
    current: Option<Interval>,
}

impl SpanDrag {
    fn new(fixed: Point, space: Interval, origin: Option<Interval>) -> Self {
        Self {
            fixed,
            space,
            origin,
            current: origin,
        }
    }

    pub fn fixed(&self) -> Point {
        self.fixed
    }

    /// Open gap the moving boundary is confined to.
    pub fn space(&self) -> Interval {
        self.space
    }

    fn update(&mut self, pointer: Point) -> SpanResult<Option<Interval>> {
        let moving = self.space.clamp_point(pointer);
        if moving != self.fixed {
            self.current = Some(Interval::new(self.fixed, moving)?);
        }
        Ok(self.current)
    }
}

/// Whole-interval shift with collision handling against a frozen snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveDrag {
    anchor: Point,
    origin: Interval,
    current: Interval,
    /// Every other interval, ascending, as of drag start
    obstacles: Vec<Interval>,
    line_start: Point,
    line_end: Point,
}

impl MoveDrag {
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn obstacles(&self) -> &[Interval] {
        &self.obstacles
    }

    fn update(&mut self, pointer: Point) -> SpanResult<Option<Interval>> {
        let shift = self.anchor.displacement(&pointer);
        let shift = if shift < 0 {
            shift.max(self.origin.start().displacement(&self.line_start))
        } else {
            shift.min(self.origin.end().displacement(&self.line_end))
        };

        let tentative = self.origin.moved_by(shift);
        self.current = self.resolve_collision(tentative, pointer)?;
        Ok(Some(self.current))
    }

    /// Index of the overlapping obstacle whose center is closest to `tentative`.
    fn blocker(&self, tentative: &Interval) -> Option<usize> {
        let mut best: Option<(usize, i64)> = None;
        for (index, obstacle) in self.obstacles.iter().enumerate() {
            if !obstacle.overlaps(tentative) {
                continue;
            }
            let distance = (obstacle.doubled_center() - tentative.doubled_center()).abs();
            if best.is_none_or(|(_, best_distance)| distance < best_distance) {
                best = Some((index, distance));
            }
        }
        best.map(|(index, _)| index)
    }

    fn resolve_collision(&self, tentative: Interval, pointer: Point) -> SpanResult<Interval> {
        let Some(index) = self.blocker(&tentative) else {
            return Ok(tentative);
        };
        let blocker = self.obstacles[index];
        let length = tentative.length();

        if blocker.center() > pointer.x() {
            let prev = index.checked_sub(1).and_then(|i| self.obstacles.get(i));
            let free_start = gaps::free_start_after(prev, self.line_start);
            if free_start.displacement(&blocker.start()) > length {
                let end = blocker.start().moved_by(-1);
                return Interval::new(end.moved_by(-length), end);
            }
        } else {
            let next = self.obstacles.get(index + 1);
            let free_end = gaps::free_end_before(next, self.line_end);
            if blocker.end().displacement(&free_end) > length {
                let start = blocker.end().moved_by(1);
                return Interval::new(start, start.moved_by(length));
            }
        }

        debug!(%tentative, %blocker, kept = %self.current, "Move blocked");
        Ok(self.current)
    }
}

/// An active drag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Drag {
    Create(SpanDrag),
    Resize(SpanDrag),
    Move(MoveDrag),
}

impl Drag {
    /// Start creating an interval at `anchor`.
    ///
    /// Returns `None` when `anchor` is not inside any open gap, which happens
    /// when it lies on a boundary of an existing interval or the gap around
    /// it has no width.
    pub fn create<'a, I>(anchor: Point, intervals: I, line_start: Point, line_end: Point) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Interval>,
    {
        let space = gaps::open_gap_containing(intervals, anchor, line_start, line_end)?;
        Some(Self::Create(SpanDrag::new(anchor, space, None)))
    }

    /// Start resizing `parent`, keeping `fixed` in place.
    ///
    /// `others` must hold every live interval except `parent`, ascending.
    pub fn resize(
        fixed: Point,
        parent: Interval,
        others: &[Interval],
        line_start: Point,
        line_end: Point,
    ) -> SpanResult<Self> {
        let space = gaps::open_gap_containing(others, fixed, line_start, line_end)
            .ok_or_else(|| SpanError::UnresolvedGesture(format!("no free space around {parent}")))?;
        Ok(Self::Resize(SpanDrag::new(fixed, space, Some(parent))))
    }

    /// Start moving `origin`, grabbed at `anchor`.
    ///
    /// `others` must hold every live interval except `origin`, ascending.
    pub fn shift(anchor: Point, origin: Interval, others: Vec<Interval>, line_start: Point, line_end: Point) -> Self {
        Self::Move(MoveDrag {
            anchor,
            origin,
            current: origin,
            obstacles: others,
            line_start,
            line_end,
        })
    }

    pub fn kind(&self) -> DragKind {
        match self {
            Self::Create(_) => DragKind::Create,
            Self::Resize(_) => DragKind::Resize,
            Self::Move(_) => DragKind::Move,
        }
    }

    /// The interval the drag started from; `None` for a create.
    pub fn origin(&self) -> Option<Interval> {
        match self {
            Self::Create(drag) | Self::Resize(drag) => drag.origin,
            Self::Move(drag) => Some(drag.origin),
        }
    }

    /// The current working interval.
    pub fn result(&self) -> Option<Interval> {
        match self {
            Self::Create(drag) | Self::Resize(drag) => drag.current,
            Self::Move(drag) => Some(drag.current),
        }
    }

    /// True once the working interval differs from where the drag started.
    pub fn is_modified(&self) -> bool {
        self.result().is_some() && self.result() != self.origin()
    }

    /// Feed a pointer position (clamped onto the line) and return the new
    /// working interval.
    pub fn update(&mut self, pointer: Point) -> SpanResult<Option<Interval>> {
        match self {
            Self::Create(drag) | Self::Resize(drag) => drag.update(pointer),
            Self::Move(drag) => drag.update(pointer),
        }
    }
}
