//! Property-based invariant tests for the interval board.
//!
//! Arbitrary pointer sequences (including presses outside the rows and
//! releases far off the surface) must never:
//!
//! 1. Leave two live intervals overlapping or an interval off the line
//! 2. Let the painted set drift from the live set
//! 3. Report changes that do not add up to the final interval set

use crate::helpers::{TestBoardBuilder, TestBoard, assert_disjoint, intervals};
use proptest::prelude::*;
use spanboard::{ChangeEvent, Interval};
use std::collections::BTreeSet;

// ── Strategies ──────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
enum Op {
    Down(i32, i32),
    Move(i32, i32),
    Up(i32, i32),
    DoubleClick(i32, i32),
    Cancel,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    let pos = || (-20i32..220, -5i32..80);
    prop_oneof![
        2 => pos().prop_map(|(x, y)| Op::Down(x, y)),
        6 => pos().prop_map(|(x, y)| Op::Move(x, y)),
        2 => pos().prop_map(|(x, y)| Op::Up(x, y)),
        1 => pos().prop_map(|(x, y)| Op::DoubleClick(x, y)),
        1 => Just(Op::Cancel),
    ]
}

fn apply(board: &mut TestBoard, op: &Op) {
    match *op {
        Op::Down(x, y) => board.pointer_down(x, y).unwrap(),
        Op::Move(x, y) => board.pointer_move(x, y).unwrap(),
        Op::Up(x, y) => board.pointer_up(x, y).unwrap(),
        Op::DoubleClick(x, y) => board.pointer_double_click(x, y).unwrap(),
        Op::Cancel => board.cancel_drag().unwrap(),
    }
}

/// Fold finished-gesture notifications onto the seed set.
fn replay_changes(seed: &[Interval], events: &[ChangeEvent]) -> BTreeSet<Interval> {
    let mut set: BTreeSet<Interval> = seed.iter().copied().collect();
    for event in events {
        match *event {
            ChangeEvent::Created { interval } => {
                set.insert(interval);
            }
            ChangeEvent::Deleted { interval } => {
                set.remove(&interval);
            }
            ChangeEvent::Changed { from, to } => {
                set.remove(&from);
                set.insert(to);
            }
            ChangeEvent::Dragged { .. } => {}
        }
    }
    set
}

proptest! {
    #[test]
    fn live_set_stays_disjoint_and_painted(ops in prop::collection::vec(op_strategy(), 1..80)) {
        let (mut board, _) = TestBoardBuilder::new()
            .with_rows(3)
            .with_interval(20, 40)
            .with_interval(150, 170)
            .build();

        for op in &ops {
            apply(&mut board, op);
            assert_disjoint(&board);
            let painted: Vec<Interval> = board.context().painted().copied().collect();
            prop_assert_eq!(painted, intervals(&board));
            if board.is_dragging() {
                prop_assert_eq!(board.context().markers().count(), 0);
            }
        }
    }

    #[test]
    fn notifications_add_up(ops in prop::collection::vec(op_strategy(), 1..80)) {
        let seed = [Interval::from_coords(20, 40).unwrap(), Interval::from_coords(150, 170).unwrap()];
        let (mut board, log) = TestBoardBuilder::new()
            .with_rows(3)
            .with_interval(20, 40)
            .with_interval(150, 170)
            .without_labels()
            .build();

        for op in &ops {
            apply(&mut board, op);
        }
        board.cancel_drag().unwrap();

        let expected: Vec<Interval> = replay_changes(&seed, &log.changes()).into_iter().collect();
        prop_assert_eq!(intervals(&board), expected);
    }

    #[test]
    fn hover_marker_matches_state(ops in prop::collection::vec(op_strategy(), 1..60)) {
        let (mut board, _) = TestBoardBuilder::new().with_rows(3).build();
        for op in &ops {
            apply(&mut board, op);
            let markers: Vec<_> = board.context().markers().copied().collect();
            prop_assert_eq!(markers, board.hover().into_iter().collect::<Vec<_>>());
        }
    }
}
