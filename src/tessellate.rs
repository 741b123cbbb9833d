//! Tessellation: pure, stateless transforms from a primitive's logical
//! parameters to the vertex run the renderer consumes. Identical inputs
//! always produce bit-identical output.

#[cfg(test)]
#[path = "tessellate_test.rs"]
mod tessellate_test;

use std::f64::consts::{FRAC_PI_2, PI};

use crate::consts::MIN_SEGMENTS;
use crate::surface::Point2D;

/// A point renders as a single vertex; the sprite is sized by the point-size
/// uniform, not by geometry.
#[must_use]
pub fn point(position: Point2D) -> [Point2D; 1] {
    [position]
}

/// Equilateral triangle of circumradius `size` around `center`.
///
/// The first vertex sits at angle -90° on the unit circle; the other two
/// follow at +120° steps.
#[must_use]
pub fn triangle(center: Point2D, size: f64) -> [Point2D; 3] {
    let step = 2.0 * PI / 3.0;
    std::array::from_fn(|i| {
        let angle = i as f64 * step - FRAC_PI_2;
        Point2D::new(center.x + size * angle.cos(), center.y + size * angle.sin())
    })
}

/// Triangle-fan approximation of a circle: the hub (`center`) followed by
/// `segments + 1` boundary vertices, the last repeating the first boundary
/// angle to close the loop. Returns `segments + 2` vertices.
///
/// `segments` must be at least [`MIN_SEGMENTS`]; range enforcement beyond
/// that lives at the UI boundary.
#[must_use]
pub fn circle(center: Point2D, radius: f64, segments: u32) -> Vec<Point2D> {
    assert!(segments >= MIN_SEGMENTS, "circle tessellation needs at least {MIN_SEGMENTS} segments");

    let mut vertices = Vec::with_capacity(segments as usize + 2);
    vertices.push(center);

    let step = 2.0 * PI / f64::from(segments);
    for i in 0..=segments {
        let angle = f64::from(i) * step;
        vertices.push(Point2D::new(
            center.x + radius * angle.cos(),
            center.y + radius * angle.sin(),
        ));
    }
    vertices
}
