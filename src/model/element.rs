//! Shared 1D geometry for points and intervals.

use super::{Interval, Point};
use std::fmt;

/// Geometry shared by everything that lives on the address line.
///
/// Overlap and displacement compare doubled centers so that odd-length
/// intervals never need a fractional midpoint. Two elements overlap iff the
/// distance between their doubled centers is at most the sum of their lengths,
/// which makes touching intervals (`[0, 10]` and `[10, 20]`) overlap while a
/// one-unit gap (`[0, 10]` and `[11, 20]`) does not.
pub trait Element1D {
    /// Rounded-down center coordinate.
    fn center(&self) -> i32;

    /// Length in address units; zero for points.
    fn length(&self) -> i32;

    /// Exact center times two, widened so extreme coordinates cannot overflow.
    #[inline]
    fn doubled_center(&self) -> i64 {
        i64::from(self.center()) * 2 + i64::from(self.length() % 2)
    }

    /// Returns a copy shifted `n` units (right for positive `n`).
    fn moved_by(&self, n: i32) -> Self
    where
        Self: Sized;

    /// Returns true if the two elements share at least one coordinate.
    fn overlaps<E: Element1D + ?Sized>(&self, other: &E) -> bool {
        let reach = i64::from(self.length()) + i64::from(other.length());
        (other.doubled_center() - self.doubled_center()).abs() <= reach
    }

    /// Signed gap between the outer edges of `self` and `other`.
    ///
    /// Positive when `other` lies to the right, negative when it lies to the
    /// left and zero when the two overlap. Saturates at the `i32` range.
    fn displacement<E: Element1D + ?Sized>(&self, other: &E) -> i32 {
        let (this, this_len) = (self.doubled_center(), i64::from(self.length()));
        let (that, that_len) = (other.doubled_center(), i64::from(other.length()));
        if (that - this).abs() <= this_len + that_len {
            return 0;
        }
        let gap = if that >= this {
            ((that - that_len) - (this + this_len)) / 2
        } else {
            ((that + that_len) - (this - this_len)) / 2
        };
        gap.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
    }

    /// Unsigned gap between the outer edges; zero when overlapping.
    #[inline]
    fn distance<E: Element1D + ?Sized>(&self, other: &E) -> i32 {
        self.displacement(other).abs()
    }
}

/// A point or an interval, as passed to a drawing context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Element {
    Point(Point),
    Interval(Interval),
}

impl Element {
    pub fn as_point(&self) -> Option<Point> {
        match self {
            Self::Point(point) => Some(*point),
            Self::Interval(_) => None,
        }
    }

    pub fn as_interval(&self) -> Option<Interval> {
        match self {
            Self::Interval(interval) => Some(*interval),
            Self::Point(_) => None,
        }
    }
}

impl Element1D for Element {
    fn center(&self) -> i32 {
        match self {
            Self::Point(point) => point.center(),
            Self::Interval(interval) => interval.center(),
        }
    }

    fn length(&self) -> i32 {
        match self {
            Self::Point(point) => point.length(),
            Self::Interval(interval) => interval.length(),
        }
    }

    fn moved_by(&self, n: i32) -> Self {
        match self {
            Self::Point(point) => Self::Point(point.moved_by(n)),
            Self::Interval(interval) => Self::Interval(interval.moved_by(n)),
        }
    }
}

impl From<Point> for Element {
    fn from(point: Point) -> Self {
        Self::Point(point)
    }
}

impl From<Interval> for Element {
    fn from(interval: Interval) -> Self {
        Self::Interval(interval)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Point(point) => point.fmt(f),
            Self::Interval(interval) => interval.fmt(f),
        }
    }
}
