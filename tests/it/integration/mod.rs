//! Integration tests for the interval board.
//!
//! These tests drive the board through device pointer events and check the
//! resulting interval set, surface state and listener notifications.

mod gesture_tests;
mod invariant_tests;
