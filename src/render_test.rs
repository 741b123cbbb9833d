#![allow(clippy::float_cmp)]

use super::*;
use crate::error::EngineError;
use crate::scene::{Color, Primitive, PrimitiveId, Scene};
use crate::surface::Point2D;

/// Records draw calls instead of touching a graphics context.
#[derive(Debug, Default)]
struct RecordingRenderer {
    calls: Vec<Call>,
}

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Draw {
        id: PrimitiveId,
        vertex_count: usize,
        color: Color,
        topology: Topology,
        point_size: Option<f64>,
    },
    DrawImmediate {
        vertex_count: usize,
        color: Color,
        topology: Topology,
    },
    ClearFrame,
}

impl Renderer for RecordingRenderer {
    fn draw(
        &mut self,
        id: PrimitiveId,
        vertices: &[Point2D],
        color: Color,
        topology: Topology,
        point_size: Option<f64>,
    ) -> Result<(), EngineError> {
        self.calls.push(Call::Draw {
            id,
            vertex_count: vertices.len(),
            color,
            topology,
            point_size,
        });
        Ok(())
    }

    fn draw_immediate(
        &mut self,
        vertices: &[Point2D],
        color: Color,
        topology: Topology,
    ) -> Result<(), EngineError> {
        self.calls.push(Call::DrawImmediate {
            vertex_count: vertices.len(),
            color,
            topology,
        });
        Ok(())
    }

    fn clear_frame(&mut self) {
        self.calls.push(Call::ClearFrame);
    }
}

fn white() -> Color {
    Color::opaque(1.0, 1.0, 1.0)
}

fn origin() -> Point2D {
    Point2D::new(0.0, 0.0)
}

// =============================================================
// render_primitive dispatch
// =============================================================

#[test]
fn point_draws_one_vertex_as_points_with_size() {
    let mut renderer = RecordingRenderer::default();
    let p = Primitive::point(Point2D::new(0.5, 0.5), white(), 10.0);
    render_primitive(&mut renderer, &p).unwrap();

    assert_eq!(
        renderer.calls,
        vec![Call::Draw {
            id: p.id,
            vertex_count: 1,
            color: white(),
            topology: Topology::Points,
            point_size: Some(10.0),
        }]
    );
}

#[test]
fn triangle_draws_three_vertices_as_triangle_list() {
    let mut renderer = RecordingRenderer::default();
    let p = Primitive::triangle(origin(), 0.1, white());
    render_primitive(&mut renderer, &p).unwrap();

    match &renderer.calls[..] {
        [Call::Draw { vertex_count, topology, point_size, .. }] => {
            assert_eq!(*vertex_count, 3);
            assert_eq!(*topology, Topology::TriangleList);
            assert_eq!(*point_size, None);
        }
        other => panic!("unexpected calls: {other:?}"),
    }
}

#[test]
fn circle_draws_fan_of_segments_plus_two() {
    let mut renderer = RecordingRenderer::default();
    let p = Primitive::circle(origin(), 0.2, white(), 16);
    render_primitive(&mut renderer, &p).unwrap();

    match &renderer.calls[..] {
        [Call::Draw { vertex_count, topology, point_size, .. }] => {
            assert_eq!(*vertex_count, 18);
            assert_eq!(*topology, Topology::TriangleFan);
            assert_eq!(*point_size, None);
        }
        other => panic!("unexpected calls: {other:?}"),
    }
}

#[test]
fn draw_carries_the_primitive_color() {
    let mut renderer = RecordingRenderer::default();
    let color = Color::opaque(0.2, 0.4, 0.6);
    let p = Primitive::circle(origin(), 0.2, color, 8);
    render_primitive(&mut renderer, &p).unwrap();

    match &renderer.calls[..] {
        [Call::Draw { color: drawn, .. }] => assert_eq!(*drawn, color),
        other => panic!("unexpected calls: {other:?}"),
    }
}

// =============================================================
// redraw_scene
// =============================================================

#[test]
fn redraw_clears_frame_first() {
    let mut renderer = RecordingRenderer::default();
    let mut scene = Scene::new();
    scene.append(Primitive::point(origin(), white(), 5.0));

    redraw_scene(&mut renderer, &scene).unwrap();
    assert_eq!(renderer.calls[0], Call::ClearFrame);
    assert_eq!(renderer.calls.len(), 2);
}

#[test]
fn redraw_of_empty_scene_only_clears() {
    let mut renderer = RecordingRenderer::default();
    let scene = Scene::new();

    redraw_scene(&mut renderer, &scene).unwrap();
    assert_eq!(renderer.calls, vec![Call::ClearFrame]);
}

#[test]
fn redraw_draws_in_insertion_order() {
    let mut renderer = RecordingRenderer::default();
    let mut scene = Scene::new();
    let first = scene.append(Primitive::point(origin(), white(), 1.0));
    let second = scene.append(Primitive::triangle(origin(), 0.1, white()));
    let third = scene.append(Primitive::circle(origin(), 0.1, white(), 8));

    redraw_scene(&mut renderer, &scene).unwrap();

    let drawn_ids: Vec<PrimitiveId> = renderer
        .calls
        .iter()
        .filter_map(|c| match c {
            Call::Draw { id, .. } => Some(*id),
            _ => None,
        })
        .collect();
    assert_eq!(drawn_ids, vec![first, second, third]);
}

// =============================================================
// Topology
// =============================================================

#[test]
fn topology_equality() {
    assert_eq!(Topology::Points, Topology::Points);
    assert_ne!(Topology::TriangleList, Topology::TriangleFan);
}

#[test]
fn topology_maps_to_gl_modes() {
    assert_eq!(gl_mode(Topology::Points), WebGlRenderingContext::POINTS);
    assert_eq!(gl_mode(Topology::TriangleList), WebGlRenderingContext::TRIANGLES);
    assert_eq!(gl_mode(Topology::TriangleFan), WebGlRenderingContext::TRIANGLE_FAN);
}
