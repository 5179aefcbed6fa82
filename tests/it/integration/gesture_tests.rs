//! Gesture Workflow Integration Tests

use crate::helpers::{TestBoard, TestBoardBuilder, at, double_click, drag, intervals, iv};
use spanboard::{ChangeEvent, CursorKind, Point};

#[test]
fn test_create_on_empty_line() {
    let (mut board, log) = TestBoardBuilder::new().build();
    drag(&mut board, 10, &[20, 40]);

    assert_eq!(intervals(&board), vec![iv(10, 40)]);
    assert_eq!(log.changes(), vec![ChangeEvent::Created { interval: iv(10, 40) }]);
    assert_eq!(
        log.events().iter().filter(|event| event.is_drag()).count(),
        2,
        "one drag notification per distinct working interval"
    );
}

#[test]
fn test_create_is_clamped_to_free_space() {
    let (mut board, log) = TestBoardBuilder::new().with_interval(0, 10).with_interval(50, 60).build();
    drag(&mut board, 30, &[90]);

    assert_eq!(intervals(&board), vec![iv(0, 10), iv(30, 49), iv(50, 60)]);
    assert_eq!(log.changes(), vec![ChangeEvent::Created { interval: iv(30, 49) }]);
}

#[test]
fn test_create_across_anchor_flips() {
    let (mut board, log) = TestBoardBuilder::new().build();
    drag(&mut board, 50, &[70, 20]);

    assert_eq!(intervals(&board), vec![iv(20, 50)]);
    assert_eq!(log.changes(), vec![ChangeEvent::Created { interval: iv(20, 50) }]);
}

#[test]
fn test_resize_clamps_against_neighbor() {
    let (mut board, log) = TestBoardBuilder::new().with_interval(10, 20).with_interval(40, 50).build();
    drag(&mut board, 20, &[45]);

    assert_eq!(intervals(&board), vec![iv(10, 39), iv(40, 50)]);
    assert_eq!(
        log.changes(),
        vec![ChangeEvent::Changed {
            from: iv(10, 20),
            to: iv(10, 39)
        }]
    );
}

#[test]
fn test_resize_start_boundary_past_end() {
    let (mut board, log) = TestBoardBuilder::new().with_interval(20, 60).build();
    drag(&mut board, 22, &[80]);

    assert_eq!(intervals(&board), vec![iv(60, 80)]);
    assert_eq!(
        log.changes(),
        vec![ChangeEvent::Changed {
            from: iv(20, 60),
            to: iv(60, 80)
        }]
    );
}

#[test]
fn test_move_cascades_left_of_blocker() {
    let (mut board, log) = TestBoardBuilder::new().with_interval(0, 10).with_interval(20, 30).build();
    // grabbed at 5, tentative [15, 25] with the pointer left of 25
    drag(&mut board, 5, &[20]);

    assert_eq!(intervals(&board), vec![iv(9, 19), iv(20, 30)]);
    assert_eq!(
        log.changes(),
        vec![ChangeEvent::Changed {
            from: iv(0, 10),
            to: iv(9, 19)
        }]
    );
}

#[test]
fn test_move_cascades_right_of_blocker() {
    let (mut board, _) = TestBoardBuilder::new().with_interval(0, 10).with_interval(20, 30).build();
    drag(&mut board, 5, &[25]);

    assert_eq!(intervals(&board), vec![iv(20, 30), iv(31, 41)]);
}

#[test]
fn test_move_without_room_stays_put() {
    let (mut board, log) = TestBoardBuilder::new()
        .with_interval(0, 5)
        .with_interval(12, 18)
        .with_interval(25, 35)
        .build();
    // tentative [8, 18] hits [12, 18]; the space after [0, 5] is too narrow
    drag(&mut board, 30, &[13]);

    assert_eq!(intervals(&board), vec![iv(0, 5), iv(12, 18), iv(25, 35)]);
    assert!(log.events().is_empty());
}

#[test]
fn test_move_stops_at_line_end() {
    let (mut board, _) = TestBoardBuilder::new().with_interval(40, 60).build();
    let (x, y) = at(&board, 50);
    board.pointer_down(x, y).unwrap();
    board.pointer_move(500, y).unwrap();
    board.pointer_up(500, y).unwrap();

    assert_eq!(intervals(&board), vec![iv(80, 100)]);
}

#[test]
fn test_double_click_deletes() {
    let (mut board, log) = TestBoardBuilder::new().with_interval(10, 40).with_interval(60, 70).build();
    double_click(&mut board, 25);
    double_click(&mut board, 50);

    assert_eq!(intervals(&board), vec![iv(60, 70)]);
    assert_eq!(log.events(), vec![ChangeEvent::Deleted { interval: iv(10, 40) }]);
    assert_eq!(board.context().label_for(iv(0, 60)), Some("60"));
    assert_eq!(board.context().label_for(iv(10, 40)), None);
}

#[test]
fn test_double_click_while_dragging_is_ignored() {
    let (mut board, _) = TestBoardBuilder::new().with_interval(10, 40).build();
    let (x, y) = at(&board, 25);
    board.pointer_down(x, y).unwrap();
    board.pointer_double_click(x, y).unwrap();
    assert!(board.is_dragging());
    assert_eq!(intervals(&board), vec![iv(10, 40)]);
}

#[test]
fn test_cursor_follows_selection() {
    let (mut board, _) = TestBoardBuilder::new().with_interval(20, 60).build();
    let mut cursor_at = |x| {
        let (dx, dy) = at(&board, x);
        board.pointer_move(dx, dy).unwrap();
        (board.context().cursor(), board.hover())
    };

    assert_eq!(cursor_at(40), (CursorKind::Move, None));
    assert_eq!(cursor_at(57), (CursorKind::Resize, None));
    assert_eq!(cursor_at(85), (CursorKind::Default, Some(Point::new(85))));
    assert_eq!(cursor_at(12), (CursorKind::Resize, None));
}

#[test]
fn test_pointer_off_surface_clears_hover() {
    let (mut board, _) = TestBoardBuilder::new().build();
    board.pointer_move(30, 5).unwrap();
    assert_eq!(board.hover(), Some(Point::new(30)));

    board.pointer_move(30, 500).unwrap();
    assert_eq!(board.hover(), None);
    assert_eq!(board.context().markers().count(), 0);
}

#[test]
fn test_cancel_drag_reports_working_interval() {
    let (mut board, log) = TestBoardBuilder::new().build();
    let (x, y) = at(&board, 10);
    board.pointer_down(x, y).unwrap();
    board.pointer_move(60, 300).unwrap();
    board.cancel_drag().unwrap();

    assert!(!board.is_dragging());
    assert_eq!(log.changes(), vec![ChangeEvent::Created { interval: iv(10, 60) }]);
}

#[test]
fn test_gap_labels_track_every_change() {
    let (mut board, _) = TestBoardBuilder::new().with_interval(20, 30).build();
    drag(&mut board, 50, &[70]);

    assert_eq!(board.gaps(), vec![iv(0, 20), iv(30, 50), iv(70, 100)]);
    let labels: Vec<(String, String)> = board
        .context()
        .labels()
        .iter()
        .map(|(element, text)| (element.to_string(), text.clone()))
        .collect();
    assert_eq!(
        labels,
        vec![
            ("[0, 20]".to_string(), "20".to_string()),
            ("[20, 30]".to_string(), "10".to_string()),
            ("[30, 50]".to_string(), "20".to_string()),
            ("[50, 70]".to_string(), "20".to_string()),
            ("[70, 100]".to_string(), "30".to_string()),
        ]
    );
}

#[test]
fn test_empty_line_label_survives_create_and_delete() {
    let (mut board, _) = TestBoardBuilder::new().build();
    let whole_line = || vec![("[0, 100]".to_string(), "100".to_string())];
    let labels = |board: &TestBoard| -> Vec<(String, String)> {
        board
            .context()
            .labels()
            .iter()
            .map(|(element, text)| (element.to_string(), text.clone()))
            .collect()
    };
    assert_eq!(labels(&board), whole_line());

    drag(&mut board, 20, &[40]);
    assert_eq!(board.context().label_for(iv(0, 100)), None);
    double_click(&mut board, 30);
    assert_eq!(labels(&board), whole_line());
}

#[test]
fn test_create_down_move_up() {
    let (mut board, log) = TestBoardBuilder::new().build();
    drag(&mut board, 20, &[40]);
    assert_eq!(log.events().last(), Some(&ChangeEvent::Created { interval: iv(20, 40) }));
}

#[test]
fn test_resize_toward_neighbor_stops_short() {
    let (mut board, _) = TestBoardBuilder::new().with_interval(10, 30).with_interval(40, 60).build();
    drag(&mut board, 30, &[50]);
    assert_eq!(intervals(&board), vec![iv(10, 39), iv(40, 60)]);
}

#[test]
fn test_double_click_removes_label() {
    let (mut board, log) = TestBoardBuilder::new().with_interval(5, 15).build();
    assert_eq!(board.context().label_for(iv(5, 15)), Some("10"));
    double_click(&mut board, 10);
    assert!(intervals(&board).is_empty());
    assert_eq!(board.context().label_for(iv(5, 15)), None);
    assert_eq!(log.changes(), vec![ChangeEvent::Deleted { interval: iv(5, 15) }]);
}
