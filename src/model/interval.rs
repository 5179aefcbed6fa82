use super::{Element1D, Point};
use crate::error::{SpanError, SpanResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A normalized range `[start, end]` on the address line.
///
/// # Invariants
/// `start < end` always holds, so `length()` is at least 1, and `end - start`
/// fits in an `i32`. Construction from two coinciding points, or from two
/// points further apart than that, fails with [`SpanError::InvalidInterval`].
///
/// Ordering is by start, then end, which is the order the engine keeps its
/// live set in. Serialized as a `[start, end]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "[i32; 2]", into = "[i32; 2]")]
pub struct Interval {
    start: Point,
    end: Point,
}

impl Interval {
    /// Builds an interval from two boundaries given in either order.
    pub fn new(a: Point, b: Point) -> SpanResult<Self> {
        if a <= b { Self::ordered(a, b) } else { Self::ordered(b, a) }
    }

    fn ordered(start: Point, end: Point) -> SpanResult<Self> {
        match end.x().checked_sub(start.x()) {
            Some(length) if length > 0 => Ok(Self { start, end }),
            _ => Err(SpanError::InvalidInterval { a: start, b: end }),
        }
    }

    /// Shorthand for `Interval::new(Point::new(a), Point::new(b))`.
    pub fn from_coords(a: i32, b: i32) -> SpanResult<Self> {
        Self::new(Point::new(a), Point::new(b))
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Point {
        self.end
    }

    /// Shifts both boundaries independently.
    ///
    /// Unlike [`Interval::new`], the result is not re-normalized: a shift that
    /// would make the start reach or pass the end is rejected.
    pub fn resize(&self, start_delta: i32, end_delta: i32) -> SpanResult<Self> {
        Self::ordered(self.start.moved_by(start_delta), self.end.moved_by(end_delta))
    }

    /// Grows (or shrinks, for negative `delta`) symmetrically on both sides.
    pub fn grow(&self, delta: i32) -> SpanResult<Self> {
        self.resize(-delta, delta)
    }

    /// Returns the boundary that is not `boundary`, or `None` if `boundary`
    /// is neither the start nor the end.
    pub fn opposite(&self, boundary: Point) -> Option<Point> {
        if boundary == self.start {
            Some(self.end)
        } else if boundary == self.end {
            Some(self.start)
        } else {
            None
        }
    }

    /// Clamps `point` into `[start, end]`.
    pub fn clamp_point(&self, point: Point) -> Point {
        point.clamp(self.start, self.end)
    }
}

impl Element1D for Interval {
    #[inline]
    fn center(&self) -> i32 {
        self.start.x() + self.length() / 2
    }

    #[inline]
    fn length(&self) -> i32 {
        self.end.x() - self.start.x()
    }

    #[inline]
    fn moved_by(&self, n: i32) -> Self {
        Self {
            start: self.start.moved_by(n),
            end: self.end.moved_by(n),
        }
    }
}

impl TryFrom<[i32; 2]> for Interval {
    type Error = SpanError;

    fn try_from([a, b]: [i32; 2]) -> SpanResult<Self> {
        Self::from_coords(a, b)
    }
}

impl From<Interval> for [i32; 2] {
    fn from(interval: Interval) -> Self {
        [interval.start.x(), interval.end.x()]
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start.x(), self.end.x())
    }
}
