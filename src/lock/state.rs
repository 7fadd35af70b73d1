//! Widget state and observable events
//!
//! `LockState` owns the layout and the in-progress gesture. State changes
//! are mirrored into an event queue the host drains each frame, so any
//! rendering layer can subscribe without the core knowing about it.

use super::layout::{GridPoint, Layout};
use crate::consts::{POINT_COUNT, UNLOCK_PATTERN};

/// Gesture phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    /// No pointer down, gesture empty
    Idle,
    /// Pointer down, gesture growing
    Tracking,
}

/// Outcome of a completed gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validation {
    Success,
    Failure,
}

/// State-change notifications for the rendering layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockEvent {
    /// A point was appended to the gesture
    PointSelected { label: u8 },
    /// A gesture ended and was checked against the unlock pattern
    Validated { result: Validation },
    /// An in-flight gesture was dropped (the layout changed underneath it)
    GestureDiscarded,
}

/// Complete widget state
#[derive(Debug, Clone)]
pub struct LockState {
    /// Current point layout
    pub layout: Layout,
    /// Points touched during the current gesture, in touch order, no
    /// duplicates
    pub selected: Vec<GridPoint>,
    /// Current phase
    pub phase: GesturePhase,
    /// Outcome of the most recently completed gesture
    pub last_result: Option<Validation>,
    /// Pending notifications, drained by the host
    events: Vec<LockEvent>,
}

impl LockState {
    /// Create the widget state for a container size
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            layout: Layout::compute(width, height),
            selected: Vec::with_capacity(POINT_COUNT),
            phase: GesturePhase::Idle,
            last_result: None,
            events: Vec::new(),
        }
    }

    /// Whether a point is part of the current gesture
    pub fn is_selected(&self, point: &GridPoint) -> bool {
        self.selected.contains(point)
    }

    /// The gesture so far as a digit string
    pub fn pattern(&self) -> String {
        self.selected.iter().map(GridPoint::digit).collect()
    }

    /// Check the accumulated gesture against the unlock pattern
    pub(crate) fn validate(&self) -> Validation {
        if self.pattern() == UNLOCK_PATTERN {
            Validation::Success
        } else {
            Validation::Failure
        }
    }

    pub(crate) fn push_event(&mut self, event: LockEvent) {
        self.events.push(event);
    }

    /// Take all notifications queued since the last drain
    pub fn drain_events(&mut self) -> Vec<LockEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_idle_and_empty() {
        let state = LockState::new(300.0, 194.0);
        assert_eq!(state.phase, GesturePhase::Idle);
        assert!(state.selected.is_empty());
        assert!(state.last_result.is_none());
        assert_eq!(state.pattern(), "");
    }

    #[test]
    fn test_pattern_concatenates_labels_in_order() {
        let mut state = LockState::new(300.0, 194.0);
        for label in [1, 4, 7] {
            let point = state.layout.point(label).unwrap();
            state.selected.push(point);
        }
        assert_eq!(state.pattern(), "147");
    }

    #[test]
    fn test_membership_is_structural() {
        let state = LockState::new(300.0, 194.0);
        let point = state.layout.point(5).unwrap();
        // A fresh copy with equal fields counts as the same point
        let copy = GridPoint { pos: point.pos, label: point.label };

        let mut state = state;
        state.selected.push(point);
        assert!(state.is_selected(&copy));
    }

    #[test]
    fn test_empty_gesture_fails_validation() {
        let state = LockState::new(300.0, 194.0);
        assert_eq!(state.validate(), Validation::Failure);
    }

    #[test]
    fn test_drain_empties_the_queue() {
        let mut state = LockState::new(300.0, 194.0);
        state.push_event(LockEvent::PointSelected { label: 1 });
        state.push_event(LockEvent::GestureDiscarded);

        let events = state.drain_events();
        assert_eq!(events.len(), 2);
        assert!(state.drain_events().is_empty());
    }
}
