//! Hit testing - which interval (or which of its boundaries) a point picks.

use crate::constants::{INTERVAL_TOLERANCE_SPAN, POINT_TOLERANCE_SPAN};
use crate::context::CursorKind;
use crate::error::{SpanError, SpanResult};
use crate::model::{Element, Element1D, Interval, Point};
use serde::{Deserialize, Serialize};

/// Hit-test tolerances in address units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tolerance {
    /// Distance within which an interval counts as hit
    pub interval: i32,
    /// Distance within which a boundary is picked over the body
    pub point: i32,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            interval: INTERVAL_TOLERANCE_SPAN,
            point: POINT_TOLERANCE_SPAN,
        }
    }
}

/// What a pointer position picks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// The interval as a whole; dragging moves it
    Body(Interval),
    /// One boundary of `parent`; dragging resizes it
    Boundary { point: Point, parent: Interval },
}

impl Selection {
    /// The selected element itself.
    pub fn element(&self) -> Element {
        match self {
            Self::Body(interval) => Element::Interval(*interval),
            Self::Boundary { point, .. } => Element::Point(*point),
        }
    }

    /// The interval the selection belongs to.
    pub fn parent(&self) -> Interval {
        match self {
            Self::Body(interval) => *interval,
            Self::Boundary { parent, .. } => *parent,
        }
    }

    /// The boundary that stays put while the selected one is dragged.
    pub fn fixed_boundary(&self) -> SpanResult<Point> {
        match self {
            Self::Boundary { point, parent } => parent.opposite(*point).ok_or_else(|| {
                SpanError::UnresolvedGesture(format!("{point} is not a boundary of {parent}"))
            }),
            Self::Body(interval) => Err(SpanError::UnresolvedGesture(format!(
                "body selection of {interval} has no fixed boundary"
            ))),
        }
    }

    pub fn cursor(&self) -> CursorKind {
        match self {
            Self::Body(_) => CursorKind::Move,
            Self::Boundary { .. } => CursorKind::Resize,
        }
    }
}

/// Pick the element closest to `point`.
///
/// Every interval overlapping `point` or within `tolerance.interval` of it is
/// a candidate. A candidate contributes its start or end when `point` is
/// strictly closer to that boundary than to the other one and within
/// `tolerance.point`; otherwise it contributes itself. The contribution
/// closest to `point` wins, and ties keep the earlier interval.
pub fn select<'a, I>(intervals: I, point: Point, tolerance: Tolerance) -> Option<Selection>
where
    I: IntoIterator<Item = &'a Interval>,
{
    let mut best: Option<(Selection, i32)> = None;

    for interval in intervals {
        if !interval.overlaps(&point) && point.distance(interval) > tolerance.interval {
            continue;
        }

        let to_start = interval.start().distance(&point);
        let to_end = interval.end().distance(&point);

        let candidate = if to_start < to_end && to_start <= tolerance.point {
            Selection::Boundary {
                point: interval.start(),
                parent: *interval,
            }
        } else if to_start > to_end && to_end <= tolerance.point {
            Selection::Boundary {
                point: interval.end(),
                parent: *interval,
            }
        } else {
            Selection::Body(*interval)
        };

        let distance = candidate.element().distance(&point);
        if best.is_none_or(|(_, best_distance)| best_distance > distance) {
            best = Some((candidate, distance));
        }
    }

    best.map(|(selection, _)| selection)
}
