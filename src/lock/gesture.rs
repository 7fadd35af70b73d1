//! Pointer gesture handling
//!
//! Translates the host's pointer stream into state transitions. All
//! handlers run synchronously on the host's event thread; a gesture ends
//! at pointer-up, and the only other way out is a layout change.
//!
//! A hit or miss is an ordinary outcome, as is a pattern mismatch - none
//! of these paths can fail.

use glam::Vec2;

use super::layout::Layout;
use super::state::{GesturePhase, LockEvent, LockState};

/// Pointer went down: begin tracking and hit-test the initial position.
///
/// The reference recognizer delivers its first change event at touch-down,
/// so a press landing on a point selects it immediately.
pub fn pointer_down(state: &mut LockState, pos: Vec2) {
    if state.phase != GesturePhase::Idle {
        return;
    }
    state.phase = GesturePhase::Tracking;
    track(state, pos);
}

/// Pointer moved while down: append the hit point, if any and not already
/// part of the gesture. Ignored while idle.
pub fn pointer_move(state: &mut LockState, pos: Vec2) {
    if state.phase != GesturePhase::Tracking {
        return;
    }
    track(state, pos);
}

/// Pointer released: check the accumulated pattern, report the outcome,
/// and clear the gesture unconditionally. A press-and-release that never
/// touched a point validates the empty string and fails.
pub fn pointer_up(state: &mut LockState) {
    if state.phase != GesturePhase::Tracking {
        return;
    }
    let result = state.validate();
    state.last_result = Some(result);
    state.push_event(LockEvent::Validated { result });
    state.selected.clear();
    state.phase = GesturePhase::Idle;
}

/// Container resized: recompute the layout.
///
/// An in-flight gesture is discarded rather than validated - its points
/// were hit-tested against geometry that no longer exists.
pub fn resize(state: &mut LockState, width: f32, height: f32) {
    state.layout = Layout::compute(width, height);
    if state.phase == GesturePhase::Tracking {
        state.selected.clear();
        state.phase = GesturePhase::Idle;
        state.push_event(LockEvent::GestureDiscarded);
    }
}

fn track(state: &mut LockState, pos: Vec2) {
    if let Some(point) = state.layout.hit_test(pos)
        && !state.is_selected(&point)
    {
        state.selected.push(point);
        state.push_event(LockEvent::PointSelected { label: point.label });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lock::state::Validation;
    use proptest::prelude::*;

    const W: f32 = 300.0;
    const H: f32 = 194.0;

    fn label_pos(state: &LockState, label: u8) -> Vec2 {
        state.layout.point(label).unwrap().pos
    }

    /// Drag through the given labels and release
    fn swipe(state: &mut LockState, labels: &[u8]) {
        let positions: Vec<Vec2> = labels.iter().map(|&l| label_pos(state, l)).collect();
        let mut positions = positions.into_iter();
        match positions.next() {
            Some(first) => pointer_down(state, first),
            None => pointer_down(state, Vec2::new(0.0, 0.0)),
        }
        for pos in positions {
            pointer_move(state, pos);
        }
        pointer_up(state);
    }

    #[test]
    fn test_unlock_sequence_succeeds() {
        let mut state = LockState::new(W, H);
        swipe(&mut state, &[1, 4, 7, 8, 9]);

        assert_eq!(state.last_result, Some(Validation::Success));
        assert!(state.selected.is_empty());
        assert_eq!(state.phase, GesturePhase::Idle);
    }

    #[test]
    fn test_wrong_sequence_fails() {
        let mut state = LockState::new(W, H);
        swipe(&mut state, &[1, 2, 3]);

        assert_eq!(state.last_result, Some(Validation::Failure));
        assert!(state.selected.is_empty());
    }

    #[test]
    fn test_right_points_wrong_order_fails() {
        let mut state = LockState::new(W, H);
        swipe(&mut state, &[9, 8, 7, 4, 1]);
        assert_eq!(state.last_result, Some(Validation::Failure));
    }

    #[test]
    fn test_release_without_points_fails() {
        let mut state = LockState::new(W, H);
        swipe(&mut state, &[]);
        assert_eq!(state.last_result, Some(Validation::Failure));
    }

    #[test]
    fn test_revisited_point_is_not_duplicated() {
        let mut state = LockState::new(W, H);
        let p1 = label_pos(&state, 1);
        let p2 = label_pos(&state, 2);

        pointer_down(&mut state, p1);
        pointer_move(&mut state, p2);
        pointer_move(&mut state, p1);
        pointer_move(&mut state, p2);

        assert_eq!(state.pattern(), "12");
    }

    #[test]
    fn test_misses_between_points_are_ignored() {
        let mut state = LockState::new(W, H);
        let p1 = label_pos(&state, 1);
        let p4 = label_pos(&state, 4);
        pointer_down(&mut state, p1);
        // Wander through dead space on the way to 4
        pointer_move(&mut state, Vec2::new(30.0, 60.0));
        pointer_move(&mut state, Vec2::new(60.0, 60.0));
        pointer_move(&mut state, p4);

        assert_eq!(state.pattern(), "14");
    }

    #[test]
    fn test_move_and_release_ignored_while_idle() {
        let mut state = LockState::new(W, H);
        let p5 = label_pos(&state, 5);
        pointer_move(&mut state, p5);
        pointer_up(&mut state);

        assert!(state.selected.is_empty());
        assert!(state.last_result.is_none());
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_consecutive_gestures_are_independent() {
        let mut state = LockState::new(W, H);
        swipe(&mut state, &[1, 2, 3]);
        assert_eq!(state.last_result, Some(Validation::Failure));

        // The failed attempt leaves nothing behind
        swipe(&mut state, &[1, 4, 7, 8, 9]);
        assert_eq!(state.last_result, Some(Validation::Success));
    }

    #[test]
    fn test_events_arrive_in_order() {
        let mut state = LockState::new(W, H);
        swipe(&mut state, &[1, 4, 7]);

        let events = state.drain_events();
        assert_eq!(
            events,
            vec![
                LockEvent::PointSelected { label: 1 },
                LockEvent::PointSelected { label: 4 },
                LockEvent::PointSelected { label: 7 },
                LockEvent::Validated {
                    result: Validation::Failure
                },
            ]
        );
    }

    #[test]
    fn test_resize_discards_in_flight_gesture() {
        let mut state = LockState::new(W, H);
        let p1 = label_pos(&state, 1);
        let p4 = label_pos(&state, 4);
        pointer_down(&mut state, p1);
        pointer_move(&mut state, p4);
        state.drain_events();

        resize(&mut state, 400.0, 254.0);

        assert_eq!(state.phase, GesturePhase::Idle);
        assert!(state.selected.is_empty());
        assert_eq!(state.drain_events(), vec![LockEvent::GestureDiscarded]);
        // Discarding is not a validation
        assert!(state.last_result.is_none());
    }

    #[test]
    fn test_resize_while_idle_only_swaps_layout() {
        let mut state = LockState::new(W, H);
        resize(&mut state, 400.0, 254.0);

        assert_eq!(state.layout.cell_size(), 80.0);
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_release_after_resize_starts_fresh() {
        let mut state = LockState::new(W, H);
        let p1 = label_pos(&state, 1);
        let p5 = label_pos(&state, 5);
        pointer_down(&mut state, p1);
        resize(&mut state, 400.0, 254.0);

        // The old gesture is gone; the pointer is still down but the
        // recognizer is idle until the next press
        pointer_move(&mut state, p5);
        pointer_up(&mut state);
        assert!(state.last_result.is_none());

        swipe(&mut state, &[1, 4, 7, 8, 9]);
        assert_eq!(state.last_result, Some(Validation::Success));
    }

    proptest! {
        #[test]
        fn prop_no_duplicates_for_any_pointer_stream(
            xs in prop::collection::vec((0.0f32..W, 0.0f32..H), 0..64)
        ) {
            let mut state = LockState::new(W, H);
            let mut samples = xs.iter().map(|&(x, y)| Vec2::new(x, y));
            if let Some(first) = samples.next() {
                pointer_down(&mut state, first);
            }
            for pos in samples {
                pointer_move(&mut state, pos);
            }

            let mut labels: Vec<u8> = state.selected.iter().map(|p| p.label).collect();
            labels.sort_unstable();
            let before = labels.len();
            labels.dedup();
            prop_assert_eq!(labels.len(), before);
        }

        #[test]
        fn prop_release_always_resets(
            xs in prop::collection::vec((0.0f32..W, 0.0f32..H), 1..64)
        ) {
            let mut state = LockState::new(W, H);
            let mut samples = xs.iter().map(|&(x, y)| Vec2::new(x, y));
            pointer_down(&mut state, samples.next().unwrap());
            for pos in samples {
                pointer_move(&mut state, pos);
            }
            pointer_up(&mut state);

            prop_assert!(state.selected.is_empty());
            prop_assert_eq!(state.phase, GesturePhase::Idle);

            let validated = state
                .drain_events()
                .iter()
                .filter(|e| matches!(e, LockEvent::Validated { .. }))
                .count();
            prop_assert_eq!(validated, 1);
        }
    }
}
