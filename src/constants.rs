//! Crate-wide constants.
//!
//! Centralizes tolerances and default layout values so the engine and the
//! configuration builder agree on them.

// ============================================================================
// Hit Testing
// ============================================================================

/// Maximum distance (address units) at which an interval still counts as hit
pub const INTERVAL_TOLERANCE_SPAN: i32 = 10;

/// Maximum distance (address units) at which a boundary is picked for resizing
pub const POINT_TOLERANCE_SPAN: i32 = 10;

// ============================================================================
// Layout Defaults
// ============================================================================

/// Default left offset of every section row, in device pixels
pub const DEFAULT_SECTION_START: i32 = 0;

/// Default header height above the first row, in device pixels
pub const DEFAULT_OFFSET_Y: i32 = 0;

/// Default vertical gap between two rows, in device pixels
pub const DEFAULT_SECTION_GAP: i32 = 0;
