//! Open space between neighboring intervals.
//!
//! Two flavors of gap exist. The *open gap* is the space a boundary may be
//! dragged into: it excludes the neighbors' own boundary coordinates, so it
//! starts one unit after the previous interval and ends one unit before the
//! next. The *blank gap* is what gets measured and labeled: it runs from the
//! previous interval's end to the next interval's start.

use super::{Element1D, Interval, Point};

/// Intervals wrapped in `Some`, with a `None` sentinel at each end.
///
/// `windows(2)` over the result yields every neighbor pair including the
/// virtual pairs against the line bounds; `windows(3)` yields every interval
/// together with both neighbors.
pub fn padded<'a, I>(intervals: I) -> Vec<Option<Interval>>
where
    I: IntoIterator<Item = &'a Interval>,
{
    std::iter::once(None)
        .chain(intervals.into_iter().copied().map(Some))
        .chain(std::iter::once(None))
        .collect()
}

/// First free coordinate right of `prev`, or the line start.
#[inline]
pub fn free_start_after(prev: Option<&Interval>, line_start: Point) -> Point {
    prev.map_or(line_start, |prev| prev.end().moved_by(1))
}

/// Last free coordinate left of `next`, or the line end.
#[inline]
pub fn free_end_before(next: Option<&Interval>, line_end: Point) -> Point {
    next.map_or(line_end, |next| next.start().moved_by(-1))
}

/// Open gap between two neighbors, or `None` if it has no width.
pub fn open_gap(
    prev: Option<&Interval>,
    next: Option<&Interval>,
    line_start: Point,
    line_end: Point,
) -> Option<Interval> {
    let a = free_start_after(prev, line_start);
    let b = free_end_before(next, line_end);
    if a >= b {
        return None;
    }
    Interval::new(a, b).ok()
}

/// Open gap among `intervals` (sorted by start) that contains `point`.
pub fn open_gap_containing<'a, I>(
    intervals: I,
    point: Point,
    line_start: Point,
    line_end: Point,
) -> Option<Interval>
where
    I: IntoIterator<Item = &'a Interval>,
{
    padded(intervals)
        .windows(2)
        .filter_map(|pair| open_gap(pair[0].as_ref(), pair[1].as_ref(), line_start, line_end))
        .find(|gap| gap.overlaps(&point))
}

/// Blank gaps between every neighbor pair, including the stretches before the
/// first and after the last interval. Zero-width stretches are skipped.
pub fn blank_gaps<'a, I>(intervals: I, line_start: Point, line_end: Point) -> Vec<Interval>
where
    I: IntoIterator<Item = &'a Interval>,
{
    padded(intervals)
        .windows(2)
        .filter_map(|pair| {
            let a = pair[0].map_or(line_start, |prev| prev.end());
            let b = pair[1].map_or(line_end, |next| next.start());
            if a < b { Interval::new(a, b).ok() } else { None }
        })
        .collect()
}
