//! Unit tests for spanboard.

mod geometry_props;
mod selection_tests;
