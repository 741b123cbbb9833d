//! Shared constants: authoring defaults and fixed colors.

use crate::scene::Color;

// ── Tessellation ────────────────────────────────────────────────

/// Fewest boundary segments a circle may have (a triangle).
pub const MIN_SEGMENTS: u32 = 3;

// ── Authoring defaults ──────────────────────────────────────────

/// Default paint color: opaque white.
pub const DEFAULT_COLOR: Color = Color::opaque(1.0, 1.0, 1.0);

/// Default brush size in pixels.
pub const DEFAULT_SIZE_PX: f64 = 20.0;

/// Default circle tessellation.
pub const DEFAULT_SEGMENTS: u32 = 36;

// ── Fixed colors ────────────────────────────────────────────────

/// Frame clear color: opaque black.
pub const CLEAR_COLOR: Color = Color::opaque(0.0, 0.0, 0.0);

/// The eraser paints circles in this color. Hardcoded to match
/// [`CLEAR_COLOR`]; erasing relies on insertion-order compositing, not on
/// removing primitives.
pub const ERASER_COLOR: Color = CLEAR_COLOR;

/// Color of the built-in reference drawing.
pub const REFERENCE_COLOR: Color = Color::opaque(1.0, 1.0, 1.0);

// ── Input ───────────────────────────────────────────────────────

/// `buttons` bitmask value meaning the primary button alone is held.
pub const PRIMARY_BUTTONS: u16 = 1;

// ── Diagnostics ─────────────────────────────────────────────────

/// Minimum interval between scene-size debug logs, in milliseconds.
pub const SCENE_LOG_INTERVAL_MS: f64 = 500.0;
