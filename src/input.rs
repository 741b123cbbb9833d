//! Input model: drawing modes, live style settings, and the drag state
//! machine.
//!
//! `Mode` and `AuthoringState` capture the user's intent at the time of a
//! pointer event; both are mutated by the host UI through the engine's
//! setters and read fresh on every placement, so a mid-drag change applies
//! to subsequent placements without touching what is already on the scene.
//! `InputState` tracks whether a drag is in progress between pointer-down
//! and pointer-up.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::consts::{DEFAULT_COLOR, DEFAULT_SEGMENTS, DEFAULT_SIZE_PX};
use crate::scene::Color;

/// Which drawing mode is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Stamp point sprites (default).
    #[default]
    Point,
    /// Stamp equilateral triangles.
    Triangle,
    /// Stamp tessellated circles.
    Circle,
    /// Stamp background-colored circles over existing paint.
    Eraser,
}

impl Mode {
    /// Parse the host-facing mode name. Names match the UI buttons:
    /// `"point"`, `"triangle"`, `"circle"`, `"eraser"`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "point" => Some(Self::Point),
            "triangle" => Some(Self::Triangle),
            "circle" => Some(Self::Circle),
            "eraser" => Some(Self::Eraser),
            _ => None,
        }
    }
}

/// Live style settings consumed at each placement.
#[derive(Debug, Clone, Copy)]
pub struct AuthoringState {
    /// Active drawing mode.
    pub mode: Mode,
    /// Paint color. Alpha is fixed at 1.0; the UI supplies RGB only.
    pub color: Color,
    /// Brush size in pixels.
    pub size: f64,
    /// Boundary segment count for circles placed from now on.
    pub segments: u32,
}

impl Default for AuthoringState {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            color: DEFAULT_COLOR,
            size: DEFAULT_SIZE_PX,
            segments: DEFAULT_SEGMENTS,
        }
    }
}

/// Drag state between pointer-down and pointer-up.
///
/// Orthogonal to [`Mode`]: the gesture carries no mode snapshot, so the
/// active mode is re-read at every placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputState {
    /// No drag in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The primary button went down on the surface; move events stamp
    /// additional primitives until release.
    Dragging,
}

impl InputState {
    #[must_use]
    pub fn is_dragging(self) -> bool {
        self == Self::Dragging
    }
}
