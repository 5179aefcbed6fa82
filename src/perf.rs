//! Profiling instrumentation for the pointer handlers.
//!
//! Enable with the `profiling` feature flag:
//! ```toml
//! [dependencies]
//! spanboard = { features = ["profiling"] }
//! ```
//!
//! ```ignore
//! fn pointer_move(&mut self, x: i32, y: i32) {
//!     profile_scope!("pointer_move");
//!     // ... gesture work ...
//! }
//! ```
//!
//! Without the feature, `profile_scope!` expands to nothing.

use std::time::Instant;
use tracing::{trace, warn};

/// Frame budget a single pointer event should stay well under (60 FPS)
pub const TARGET_FRAME_MS: f64 = 16.67;

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

pub use crate::profile_scope;

/// RAII timer that reports on drop.
///
/// Scopes slower than the threshold are logged at `warn`; with the
/// `profiling` feature every scope is additionally logged at `trace`.
#[derive(Debug)]
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    /// Timer with the frame budget as threshold.
    pub fn for_profiling(name: &'static str) -> Self {
        Self::new(name, TARGET_FRAME_MS)
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();

        if cfg!(feature = "profiling") {
            trace!("[PERF] {}: {:.3}ms", self.name, elapsed_ms);
        }

        if elapsed_ms > self.threshold_ms {
            warn!(
                operation = self.name,
                elapsed_ms = format!("{:.2}", elapsed_ms),
                threshold_ms = format!("{:.2}", self.threshold_ms),
                "Slow operation"
            );
        }
    }
}
