#![allow(clippy::float_cmp)]

use std::f64::consts::PI;

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn distance(a: Point2D, b: Point2D) -> f64 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

/// Angle of `p` around `center`, in [0, 2π).
fn angle_about(center: Point2D, p: Point2D) -> f64 {
    let a = (p.y - center.y).atan2(p.x - center.x);
    if a < 0.0 { a + 2.0 * PI } else { a }
}

// =============================================================
// point
// =============================================================

#[test]
fn point_is_single_vertex() {
    let pos = Point2D::new(0.3, -0.7);
    let vertices = point(pos);
    assert_eq!(vertices.len(), 1);
    assert_eq!(vertices[0], pos);
}

// =============================================================
// triangle
// =============================================================

#[test]
fn triangle_has_three_vertices() {
    assert_eq!(triangle(Point2D::new(0.0, 0.0), 0.1).len(), 3);
}

#[test]
fn triangle_vertices_at_exact_distance() {
    let center = Point2D::new(0.2, -0.4);
    let size = 0.15;
    for v in triangle(center, size) {
        assert!(approx_eq(distance(center, v), size));
    }
}

#[test]
fn triangle_vertices_separated_by_120_degrees() {
    let center = Point2D::new(-0.1, 0.3);
    let vertices = triangle(center, 0.25);
    let step = 2.0 * PI / 3.0;
    for i in 0..3 {
        let a = angle_about(center, vertices[i]);
        let b = angle_about(center, vertices[(i + 1) % 3]);
        let separation = (b - a).rem_euclid(2.0 * PI);
        assert!(approx_eq(separation, step), "separation {separation} between vertices {i} and {}", (i + 1) % 3);
    }
}

#[test]
fn triangle_first_vertex_on_vertical_axis() {
    // θ_0 = -90°: the first vertex sits straight below the center on the
    // device y axis.
    let center = Point2D::new(0.5, 0.5);
    let vertices = triangle(center, 0.2);
    assert!(approx_eq(vertices[0].x, center.x));
    assert!(approx_eq(vertices[0].y, center.y - 0.2));
}

#[test]
fn triangle_is_deterministic() {
    let center = Point2D::new(0.123, -0.456);
    let a = triangle(center, 0.0789);
    let b = triangle(center, 0.0789);
    assert_eq!(a, b);
}

#[test]
fn triangle_translates_with_center() {
    let a = triangle(Point2D::new(0.0, 0.0), 0.1);
    let b = triangle(Point2D::new(0.5, -0.25), 0.1);
    for (va, vb) in a.iter().zip(b.iter()) {
        assert!(approx_eq(vb.x - va.x, 0.5));
        assert!(approx_eq(vb.y - va.y, -0.25));
    }
}

// =============================================================
// circle
// =============================================================

#[test]
fn circle_vertex_count_is_segments_plus_two() {
    for segments in [3_u32, 4, 12, 36, 100] {
        let vertices = circle(Point2D::new(0.0, 0.0), 0.5, segments);
        assert_eq!(vertices.len(), segments as usize + 2);
    }
}

#[test]
fn circle_hub_is_center() {
    let center = Point2D::new(0.4, -0.2);
    let vertices = circle(center, 0.3, 12);
    assert_eq!(vertices[0], center);
}

#[test]
fn circle_boundary_loop_closes() {
    let vertices = circle(Point2D::new(0.1, 0.1), 0.25, 36);
    let first = vertices[1];
    let last = vertices[vertices.len() - 1];
    assert!(approx_eq(first.x, last.x));
    assert!(approx_eq(first.y, last.y));
}

#[test]
fn circle_boundary_at_exact_radius() {
    let center = Point2D::new(-0.3, 0.6);
    let radius = 0.2;
    for v in circle(center, radius, 24).iter().skip(1) {
        assert!(approx_eq(distance(center, *v), radius));
    }
}

#[test]
fn circle_first_boundary_vertex_at_angle_zero() {
    let center = Point2D::new(0.0, 0.0);
    let vertices = circle(center, 0.5, 8);
    assert!(approx_eq(vertices[1].x, 0.5));
    assert!(approx_eq(vertices[1].y, 0.0));
}

#[test]
fn circle_is_deterministic() {
    let center = Point2D::new(0.777, -0.111);
    let a = circle(center, 0.0123, 17);
    let b = circle(center, 0.0123, 17);
    assert_eq!(a, b);
}

#[test]
fn circle_minimum_segments_accepted() {
    let vertices = circle(Point2D::new(0.0, 0.0), 0.1, 3);
    assert_eq!(vertices.len(), 5);
}

#[test]
#[should_panic(expected = "at least")]
fn circle_below_minimum_segments_rejected() {
    circle(Point2D::new(0.0, 0.0), 0.1, 2);
}
