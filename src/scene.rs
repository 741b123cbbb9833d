//! Scene model: drawable primitives and the ordered sequence that holds them.
//!
//! A `Primitive` is one immutable unit placed by the user — its vertices are
//! derived from its logical parameters exactly once, at construction, and
//! never recomputed. The `Scene` is append-only: insertion order is paint
//! order (later primitives composite on top), and the only other mutation is
//! an atomic full clear. The renderer reads primitives through
//! [`crate::render::render_primitive`]; nothing in this module touches the
//! graphics context.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use uuid::Uuid;

use crate::surface::Point2D;
use crate::tessellate;

/// Unique identifier for a placed primitive. Renderer-side resources
/// (vertex buffers) are keyed by this.
pub type PrimitiveId = Uuid;

/// An RGBA color with each channel in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// A fully opaque color.
    #[must_use]
    pub const fn opaque(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

/// The geometry of a primitive: its logical parameters plus the vertex run
/// derived from them at construction time.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// A point sprite. `size` is in pixels and drives the point-size
    /// uniform; the geometry is the single position vertex.
    Point { position: Point2D, size: f64 },
    /// An equilateral triangle of circumradius `size` (NDC units).
    Triangle {
        center: Point2D,
        size: f64,
        vertices: [Point2D; 3],
    },
    /// A triangle-fan circle. `vertices` holds `segments + 2` entries:
    /// the hub, then the closed boundary loop. A placed circle keeps the
    /// segment count in effect at its creation; later setting changes
    /// never re-tessellate it.
    Circle {
        center: Point2D,
        radius: f64,
        segments: u32,
        vertices: Vec<Point2D>,
    },
}

/// One immutable drawable unit placed by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    /// Stable identity, assigned at creation.
    pub id: PrimitiveId,
    /// Paint color, fixed at creation.
    pub color: Color,
    /// Logical parameters and derived vertices.
    pub shape: Shape,
}

impl Primitive {
    /// A point sprite at `position`, `size` pixels across.
    #[must_use]
    pub fn point(position: Point2D, color: Color, size: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            color,
            shape: Shape::Point { position, size },
        }
    }

    /// An equilateral triangle centered on `center` with circumradius
    /// `size` in NDC units.
    #[must_use]
    pub fn triangle(center: Point2D, size: f64, color: Color) -> Self {
        Self {
            id: Uuid::new_v4(),
            color,
            shape: Shape::Triangle {
                center,
                size,
                vertices: tessellate::triangle(center, size),
            },
        }
    }

    /// A circle of `radius` NDC units approximated by `segments` fan
    /// segments. `segments` must be at least [`crate::consts::MIN_SEGMENTS`].
    #[must_use]
    pub fn circle(center: Point2D, radius: f64, color: Color, segments: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            color,
            shape: Shape::Circle {
                center,
                radius,
                segments,
                vertices: tessellate::circle(center, radius, segments),
            },
        }
    }
}

/// The ordered collection of all primitives placed since the last clear.
///
/// Grows monotonically through [`Scene::append`]; [`Scene::clear`] discards
/// the whole sequence atomically. Clearing the scene does not by itself
/// erase already-rasterized pixels — the caller clears the frame buffer
/// separately (see [`crate::render::redraw_scene`]).
#[derive(Debug, Default)]
pub struct Scene {
    primitives: Vec<Primitive>,
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a primitive at the top of the paint order, returning its id
    /// so the caller can issue the one incremental draw. O(1) amortized.
    pub fn append(&mut self, primitive: Primitive) -> PrimitiveId {
        let id = primitive.id;
        self.primitives.push(primitive);
        id
    }

    /// Discard every primitive.
    pub fn clear(&mut self) {
        self.primitives.clear();
    }

    /// Look up a primitive by id. Scans from the most recent append, since
    /// the usual caller is the incremental draw of the primitive just
    /// placed.
    #[must_use]
    pub fn get(&self, id: &PrimitiveId) -> Option<&Primitive> {
        self.primitives.iter().rev().find(|p| p.id == *id)
    }

    /// Primitives in insertion (paint) order.
    pub fn iter(&self) -> impl Iterator<Item = &Primitive> {
        self.primitives.iter()
    }

    /// Number of primitives currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// Returns `true` if nothing has been placed since the last clear.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}
