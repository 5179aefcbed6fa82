//! Single test binary entry point.
//!
//! All tests are compiled into one binary to keep linking to a single pass.
//!
//! Structure:
//! - helpers: Board builder and gesture shortcuts
//! - integration: Full gesture workflows through the board
//! - unit: Single-component tests against the public API

mod integration;
mod unit;
