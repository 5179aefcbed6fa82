//! Gesture scripts - replay recorded pointer input against a headless board.
//!
//! A script is JSON:
//!
//! ```json
//! {
//!   "config": { "width": 200, "height": 40, "section_width": 100, "section_height": 10 },
//!   "seed": [[10, 30]],
//!   "events": [
//!     { "kind": "down", "x": 50, "y": 5 },
//!     { "kind": "move", "x": 80, "y": 5 },
//!     { "kind": "up", "x": 80, "y": 5 }
//!   ]
//! }
//! ```

use crate::board::IntervalBoard;
use crate::config::BoardConfig;
use crate::error::SpanResult;
use crate::listener::{ChangeEvent, ChangeLog};
use crate::model::Interval;
use crate::surface::{HeadlessSurface, length_labels};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerKind {
    Down,
    Move,
    Up,
    DoubleClick,
    /// Forced end of the active drag; coordinates are ignored
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub kind: PointerKind,
    #[serde(default)]
    pub x: i32,
    #[serde(default)]
    pub y: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    pub config: BoardConfig,
    #[serde(default)]
    pub seed: Vec<Interval>,
    #[serde(default)]
    pub events: Vec<PointerEvent>,
}

impl Script {
    pub fn from_json_str(json: &str) -> SpanResult<Self> {
        let script: Self = serde_json::from_str(json)?;
        script.config.validate()?;
        Ok(script)
    }

    pub fn load(path: impl AsRef<Path>) -> SpanResult<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading gesture script");
        Self::from_json_str(&std::fs::read_to_string(path)?)
    }
}

/// What a replay produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayOutcome {
    /// Listener notifications in order, drag updates included
    pub events: Vec<ChangeEvent>,
    pub intervals: Vec<Interval>,
    /// Labels shown at the end, keyed by the labeled element
    pub labels: BTreeMap<String, String>,
}

/// Seed a fresh board from `script` and feed it every event.
pub fn run(script: &Script) -> SpanResult<ReplayOutcome> {
    let surface = HeadlessSurface::new(script.config)?.with_describer(length_labels());
    let mut board = IntervalBoard::new(surface);
    for interval in &script.seed {
        board.add_interval(*interval)?;
    }

    let log = ChangeLog::new();
    board.set_listener(log.clone());

    for event in &script.events {
        let PointerEvent { kind, x, y } = *event;
        match kind {
            PointerKind::Down => board.pointer_down(x, y)?,
            PointerKind::Move => board.pointer_move(x, y)?,
            PointerKind::Up => board.pointer_up(x, y)?,
            PointerKind::DoubleClick => board.pointer_double_click(x, y)?,
            PointerKind::Cancel => board.cancel_drag()?,
        }
    }
    board.cancel_drag()?;

    let outcome = ReplayOutcome {
        events: log.events(),
        intervals: board.intervals().copied().collect(),
        labels: board
            .context()
            .labels()
            .iter()
            .map(|(element, text)| (element.to_string(), text.clone()))
            .collect(),
    };
    info!(
        events = script.events.len(),
        notifications = outcome.events.len(),
        intervals = outcome.intervals.len(),
        "Replay finished"
    );
    Ok(outcome)
}
