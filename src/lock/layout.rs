//! Grid layout geometry and hit-testing
//!
//! The 3x3 grid lives in the widget's logical space: square cells sized
//! from the container height minus the status line, centered horizontally.
//! Point positions are a pure function of container size and must be
//! recomputed whenever the container changes.

use glam::Vec2;

use crate::consts::{GRID_COLS, GRID_ROWS, HIT_RADIUS, POINT_COUNT, STATUS_BAR_HEIGHT};

/// One of the nine fixed touch targets
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPoint {
    /// Center position, in the grid area's coordinate space
    pub pos: Vec2,
    /// Ordinal label, 1..=9 row-major from the top-left
    pub label: u8,
}

impl GridPoint {
    /// The label as a decimal digit
    #[inline]
    pub fn digit(&self) -> char {
        char::from(b'0' + self.label)
    }
}

/// The nine touch targets for one container size
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    points: [GridPoint; POINT_COUNT],
    cell: f32,
}

impl Layout {
    /// Compute point positions for a container.
    ///
    /// Cells are square, sized from the height left over once the status
    /// line is reserved; the horizontal offset centers the grid. Callers
    /// are expected to pass positive dimensions.
    pub fn compute(width: f32, height: f32) -> Self {
        let cell = (height - STATUS_BAR_HEIGHT) / GRID_ROWS as f32;
        let x_off = (width - height + STATUS_BAR_HEIGHT) / 2.0;

        let mut points = [GridPoint {
            pos: Vec2::ZERO,
            label: 0,
        }; POINT_COUNT];

        for row in 0..GRID_ROWS {
            for col in 0..GRID_COLS {
                let idx = row * GRID_COLS + col;
                points[idx] = GridPoint {
                    pos: Vec2::new(
                        cell * (col as f32 + 0.5) + x_off,
                        cell * (row as f32 + 0.5),
                    ),
                    label: (idx + 1) as u8,
                };
            }
        }

        Self { points, cell }
    }

    /// All points in enumeration order (label order)
    pub fn points(&self) -> &[GridPoint] {
        &self.points
    }

    /// The point carrying a given label
    pub fn point(&self, label: u8) -> Option<GridPoint> {
        self.points.iter().copied().find(|p| p.label == label)
    }

    /// Cell edge length
    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.cell
    }

    /// First point strictly within the hit radius of `pos`, if any.
    ///
    /// Enumeration order wins when several points qualify - the first
    /// match is taken, not the nearest.
    pub fn hit_test(&self, pos: Vec2) -> Option<GridPoint> {
        self.points
            .iter()
            .copied()
            .find(|p| p.pos.distance(pos) < HIT_RADIUS)
    }
}
