//! Change notifications emitted by the engine.

use crate::model::Interval;
use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;

/// Receives interval set changes.
///
/// `on_change` fires once per finished gesture:
/// - `old == None` - an interval was created
/// - `new == None` - an interval was deleted
/// - both present - an interval was moved or resized
///
/// `on_drag` fires for every intermediate working interval of a drag.
pub trait ChangeListener {
    fn on_change(&mut self, old: Option<Interval>, new: Option<Interval>);

    fn on_drag(&mut self, _old: Option<Interval>, _new: Interval) {}
}

impl<F> ChangeListener for F
where
    F: FnMut(Option<Interval>, Option<Interval>),
{
    fn on_change(&mut self, old: Option<Interval>, new: Option<Interval>) {
        self(old, new)
    }
}

/// One recorded notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ChangeEvent {
    Created { interval: Interval },
    Deleted { interval: Interval },
    Changed { from: Interval, to: Interval },
    Dragged { from: Option<Interval>, to: Interval },
}

impl ChangeEvent {
    /// Classify an `on_change` pair; `None` when both sides are missing.
    pub fn from_change(old: Option<Interval>, new: Option<Interval>) -> Option<Self> {
        match (old, new) {
            (None, Some(interval)) => Some(Self::Created { interval }),
            (Some(interval), None) => Some(Self::Deleted { interval }),
            (Some(from), Some(to)) => Some(Self::Changed { from, to }),
            (None, None) => None,
        }
    }

    pub fn is_drag(&self) -> bool {
        matches!(self, Self::Dragged { .. })
    }
}

/// Listener that records every notification into a shared log.
///
/// Clones share the same log, so one clone can be handed to the engine while
/// another is kept for inspection.
#[derive(Debug, Clone, Default)]
pub struct ChangeLog {
    events: Rc<RefCell<Vec<ChangeEvent>>>,
}

impl ChangeLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded events, drags included.
    pub fn events(&self) -> Vec<ChangeEvent> {
        self.events.borrow().clone()
    }

    /// Recorded events without the intermediate drag updates.
    pub fn changes(&self) -> Vec<ChangeEvent> {
        self.events.borrow().iter().filter(|e| !e.is_drag()).copied().collect()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl ChangeListener for ChangeLog {
    fn on_change(&mut self, old: Option<Interval>, new: Option<Interval>) {
        if let Some(event) = ChangeEvent::from_change(old, new) {
            self.events.borrow_mut().push(event);
        }
    }

    fn on_drag(&mut self, old: Option<Interval>, new: Interval) {
        self.events.borrow_mut().push(ChangeEvent::Dragged { from: old, to: new });
    }
}
