use super::*;
use crate::scene::Color;

#[test]
fn reference_has_complete_triangles() {
    let v = vertices();
    assert_eq!(v.len() % 3, 0);
}

#[test]
fn reference_vertex_count() {
    assert_eq!(vertices().len(), 102);
}

#[test]
fn reference_fits_in_device_coordinates() {
    for v in vertices() {
        assert!((-1.0..=1.0).contains(&v.x), "x out of range: {}", v.x);
        assert!((-1.0..=1.0).contains(&v.y), "y out of range: {}", v.y);
    }
}

#[test]
fn reference_is_deterministic() {
    assert_eq!(vertices(), vertices());
}

#[test]
fn reference_color_is_opaque_white() {
    assert_eq!(REFERENCE_COLOR, Color::opaque(1.0, 1.0, 1.0));
}
