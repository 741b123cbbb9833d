//! The built-in reference drawing: a pixel-art grid of triangle pairs.
//!
//! Drawn as one immediate triangle list straight to the renderer — it never
//! enters the scene, so it cannot be erased or cleared primitive by
//! primitive. Toggling the reference *image* next to the canvas is host-side
//! DOM work and does not involve this module.

#[cfg(test)]
#[path = "reference_test.rs"]
mod reference_test;

use crate::consts::REFERENCE_COLOR;
use crate::error::EngineError;
use crate::render::{Renderer, Topology};
use crate::surface::Point2D;

/// Interleaved x, y pairs in NDC. Each pair of rows is one grid cell split
/// into two triangles.
#[rustfmt::skip]
const REFERENCE_COORDS: [f64; 204] = [
    -0.875,  0.0,     0.0,   0.75,   0.0,   0.0,
     0.875,  0.0,     0.0,   0.75,   0.0,   0.0,

    -0.625,  0.0,    -0.375,  0.0,   -0.625, -0.25,
    -0.375,  0.0,    -0.375, -0.25,  -0.625, -0.25,

    -0.375,  0.0,    -0.125,  0.0,   -0.375, -0.25,
    -0.125,  0.0,    -0.125, -0.25,  -0.375, -0.25,

    -0.125,  0.0,     0.125,  0.0,   -0.125, -0.25,
     0.125,  0.0,     0.125, -0.25,  -0.125, -0.25,

     0.125,  0.0,     0.375,  0.0,    0.125, -0.25,
     0.375,  0.0,     0.375, -0.25,   0.125, -0.25,

     0.375,  0.0,     0.625,  0.0,    0.375, -0.25,
     0.625,  0.0,     0.625, -0.25,   0.375, -0.25,

    -0.625, -0.25,   -0.375, -0.25,  -0.625, -0.5,
    -0.375, -0.25,   -0.375, -0.5,   -0.625, -0.5,

    -0.125, -0.25,    0.125, -0.25,  -0.125, -0.5,
     0.125, -0.25,    0.125, -0.5,   -0.125, -0.5,

     0.375, -0.25,    0.625, -0.25,   0.375, -0.5,
     0.625, -0.25,    0.625, -0.5,    0.375, -0.5,

    -0.625, -0.5,    -0.375, -0.5,   -0.625, -0.75,
    -0.375, -0.5,    -0.375, -0.75,  -0.625, -0.75,

    -0.375, -0.5,    -0.125, -0.5,   -0.375, -0.75,
    -0.125, -0.5,    -0.125, -0.75,  -0.375, -0.75,

     0.125, -0.5,     0.375, -0.5,    0.125, -0.75,
     0.375, -0.5,     0.375, -0.75,   0.125, -0.75,

     0.375, -0.5,     0.625, -0.5,    0.375, -0.75,
     0.625, -0.5,     0.625, -0.75,   0.375, -0.75,

    -0.625, -0.75,   -0.375, -0.75,  -0.625, -1.0,
    -0.375, -0.75,   -0.375, -1.0,   -0.625, -1.0,

    -0.375, -0.75,   -0.125, -0.75,  -0.375, -1.0,
    -0.125, -0.75,   -0.125, -1.0,   -0.375, -1.0,

     0.125, -0.75,    0.375, -0.75,   0.125, -1.0,
     0.375, -0.75,    0.375, -1.0,    0.125, -1.0,

     0.375, -0.75,    0.625, -0.75,   0.375, -1.0,
     0.625, -0.75,    0.625, -1.0,    0.375, -1.0,
];

/// The reference drawing's vertex run, in triangle-list order.
#[must_use]
pub fn vertices() -> Vec<Point2D> {
    REFERENCE_COORDS
        .chunks_exact(2)
        .map(|pair| Point2D::new(pair[0], pair[1]))
        .collect()
}

/// Draw the reference drawing over whatever is currently rasterized.
///
/// # Errors
///
/// Propagates the renderer's resource failures.
pub fn draw(renderer: &mut impl Renderer) -> Result<(), EngineError> {
    renderer.draw_immediate(&vertices(), REFERENCE_COLOR, Topology::TriangleList)
}
