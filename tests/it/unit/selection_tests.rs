//! Unit tests for hit testing with custom tolerances.

use crate::helpers::{TestBoardBuilder, iv};
use spanboard::Point;
use spanboard::input::{Selection, Tolerance, select};

#[test]
fn test_zero_tolerance_needs_exact_hits() {
    let tolerance = Tolerance { interval: 0, point: 0 };
    let intervals = [iv(10, 20)];
    assert_eq!(select(&intervals, Point::new(9), tolerance), None);
    assert_eq!(
        select(&intervals, Point::new(10), tolerance),
        Some(Selection::Boundary {
            point: Point::new(10),
            parent: iv(10, 20)
        })
    );
    assert_eq!(select(&intervals, Point::new(11), tolerance), Some(Selection::Body(iv(10, 20))));
}

#[test]
fn test_board_uses_its_tolerance() {
    let (board, _) = TestBoardBuilder::new().with_interval(40, 60).build();
    assert!(board.selection_at(Point::new(32)).is_some());

    let board = board.with_tolerance(Tolerance { interval: 2, point: 2 });
    assert_eq!(board.selection_at(Point::new(32)), None);
    assert_eq!(board.selection_at(Point::new(45)), Some(Selection::Body(iv(40, 60))));
}
