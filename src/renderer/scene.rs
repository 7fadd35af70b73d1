//! Frame assembly: lock state -> vertex list
//!
//! Pure mesh building, shared by the wasm front end and tests. The grid
//! area is drawn below the status line, so everything here is offset by
//! the reserved status height.

use glam::Vec2;

use crate::consts::{
    DOT_DIAMETER, RING_DIAMETER, RING_STROKE, STATUS_BAR_HEIGHT, TRAIL_WIDTH,
};
use crate::lock::LockState;
use crate::settings::Settings;

use super::shapes;
use super::vertex::{Vertex, colors};

const RING_SEGMENTS: u32 = 48;
const DOT_SEGMENTS: u32 = 24;
const JOINT_SEGMENTS: u32 = 8;

/// Selection pulse angular frequency (~1.5 Hz)
const PULSE_OMEGA: f32 = 1.5 * std::f32::consts::TAU;

/// Subtle sine scale on a selected center dot
fn pulse_scale(time: f32) -> f32 {
    1.0 + 0.15 * (time * PULSE_OMEGA).sin()
}

/// Build the widget mesh for one frame. `time` is in seconds and only
/// drives the selection pulse.
pub fn build_frame(lock: &LockState, settings: &Settings, time: f32) -> Vec<Vertex> {
    let offset = Vec2::new(0.0, STATUS_BAR_HEIGHT);
    let mut vertices = Vec::new();

    // Trail first, so the points draw on top of it
    if settings.trail && lock.selected.len() > 1 {
        let path: Vec<Vec2> = lock.selected.iter().map(|p| p.pos + offset).collect();
        vertices.extend(shapes::trail(
            &path,
            TRAIL_WIDTH,
            colors::ACTIVE,
            JOINT_SEGMENTS,
        ));
    }

    let inactive = if settings.high_contrast {
        colors::INACTIVE_HIGH_CONTRAST
    } else {
        colors::INACTIVE
    };

    for point in lock.layout.points() {
        let selected = lock.is_selected(point);
        let color = if selected { colors::ACTIVE } else { inactive };
        let center = point.pos + offset;

        vertices.extend(shapes::ring(
            center,
            RING_DIAMETER / 2.0,
            RING_STROKE,
            color,
            RING_SEGMENTS,
        ));

        let mut dot_radius = DOT_DIAMETER / 2.0;
        if selected && settings.effective_pulse() {
            dot_radius *= pulse_scale(time);
        }
        vertices.extend(shapes::circle(center, dot_radius, color, DOT_SEGMENTS));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lock::{self, LockState};

    fn tracked_state() -> LockState {
        let mut state = LockState::new(300.0, 194.0);
        let first = state.layout.point(1).unwrap().pos;
        let second = state.layout.point(4).unwrap().pos;
        lock::pointer_down(&mut state, first);
        lock::pointer_move(&mut state, second);
        state
    }

    #[test]
    fn test_trail_setting_controls_trail_mesh() {
        let state = tracked_state();
        let mut settings = Settings::default();

        settings.trail = false;
        let without = build_frame(&state, &settings, 0.0).len();
        settings.trail = true;
        let with = build_frame(&state, &settings, 0.0).len();

        assert!(with > without);
    }

    #[test]
    fn test_selected_points_use_active_color() {
        let state = tracked_state();
        let settings = Settings::default();
        let vertices = build_frame(&state, &settings, 0.0);

        assert!(vertices.iter().any(|v| v.color == colors::ACTIVE));
        assert!(vertices.iter().any(|v| v.color == colors::INACTIVE));
    }

    #[test]
    fn test_idle_frame_has_no_trail_or_active_color() {
        let state = LockState::new(300.0, 194.0);
        let settings = Settings::default();
        let vertices = build_frame(&state, &settings, 0.0);

        // 9 rings + 9 dots, nothing else
        let expected = 9 * (RING_SEGMENTS * 6 + DOT_SEGMENTS * 3) as usize;
        assert_eq!(vertices.len(), expected);
        assert!(vertices.iter().all(|v| v.color != colors::ACTIVE));
    }
}
