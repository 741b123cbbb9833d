//! Rendering: the renderer capability and the WebGL implementation of it.
//!
//! The core never calls the graphics API directly — it goes through the
//! [`Renderer`] trait, so everything above this module is testable without a
//! browser. [`render_primitive`] is the single dispatch point from a scene
//! primitive to a draw call; [`redraw_scene`] is the full-reconstruction
//! path (frame clear, then every primitive in paint order) and is never
//! invoked on append — appends draw exactly one primitive incrementally.
//!
//! [`GlRenderer`] is the only place that touches [`web_sys`]. It keeps one
//! vertex buffer per primitive, keyed by [`PrimitiveId`]; primitives are
//! immutable, so a buffer is uploaded once and reused for every redraw
//! until the scene is cleared.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    HtmlCanvasElement, WebGlBuffer, WebGlProgram, WebGlRenderingContext, WebGlShader,
    WebGlUniformLocation,
};

use crate::consts::CLEAR_COLOR;
use crate::error::EngineError;
use crate::scene::{Color, Primitive, PrimitiveId, Scene, Shape};
use crate::surface::Point2D;
use crate::tessellate;

/// Draw topology for a vertex run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    /// One sprite per vertex, sized by the point-size parameter.
    Points,
    /// Every three vertices form an independent triangle.
    TriangleList,
    /// Vertex 0 is a shared hub; each consecutive boundary pair forms a
    /// triangle with it.
    TriangleFan,
}

/// The capability the authoring core draws through.
pub trait Renderer {
    /// Draw a retained vertex run. `id` is stable for the run's lifetime,
    /// so implementations may cache per-primitive resources under it.
    /// `point_size` is set only for [`Topology::Points`].
    ///
    /// # Errors
    ///
    /// [`EngineError::ResourceLookup`] when a GPU resource cannot be
    /// allocated.
    fn draw(
        &mut self,
        id: PrimitiveId,
        vertices: &[Point2D],
        color: Color,
        topology: Topology,
        point_size: Option<f64>,
    ) -> Result<(), EngineError>;

    /// Draw an unretained vertex run, bypassing any per-primitive caching.
    /// Used for the reference drawing, which is not part of the scene.
    ///
    /// # Errors
    ///
    /// Same failure surface as [`Renderer::draw`].
    fn draw_immediate(
        &mut self,
        vertices: &[Point2D],
        color: Color,
        topology: Topology,
    ) -> Result<(), EngineError>;

    /// Clear the frame buffer to the background color.
    fn clear_frame(&mut self);
}

/// Dispatch one primitive to the renderer.
///
/// # Errors
///
/// Propagates the renderer's resource failures.
pub fn render_primitive(
    renderer: &mut impl Renderer,
    primitive: &Primitive,
) -> Result<(), EngineError> {
    match &primitive.shape {
        Shape::Point { position, size } => renderer.draw(
            primitive.id,
            &tessellate::point(*position),
            primitive.color,
            Topology::Points,
            Some(*size),
        ),
        Shape::Triangle { vertices, .. } => renderer.draw(
            primitive.id,
            vertices,
            primitive.color,
            Topology::TriangleList,
            None,
        ),
        Shape::Circle { vertices, .. } => renderer.draw(
            primitive.id,
            vertices,
            primitive.color,
            Topology::TriangleFan,
            None,
        ),
    }
}

/// Clear the frame, then draw every scene primitive in insertion order.
///
/// # Errors
///
/// Stops at the first failing draw and propagates it.
pub fn redraw_scene(renderer: &mut impl Renderer, scene: &Scene) -> Result<(), EngineError> {
    renderer.clear_frame();
    for primitive in scene.iter() {
        render_primitive(renderer, primitive)?;
    }
    Ok(())
}

// =============================================================
// WebGL implementation
// =============================================================

const VERTEX_SHADER: &str = "
attribute vec4 a_Position;
uniform float u_PointSize;
void main() {
  gl_Position = a_Position;
  gl_PointSize = u_PointSize;
}
";

const FRAGMENT_SHADER: &str = "
precision mediump float;
uniform vec4 u_FragColor;
void main() {
  gl_FragColor = u_FragColor;
}
";

/// WebGL1 renderer bound to a canvas element.
///
/// The context is created with `preserveDrawingBuffer` so incremental draws
/// accumulate across frames instead of being discarded on composite.
pub struct GlRenderer {
    gl: WebGlRenderingContext,
    a_position: u32,
    u_frag_color: WebGlUniformLocation,
    u_point_size: WebGlUniformLocation,
    /// One uploaded vertex buffer per retained primitive.
    retained: HashMap<PrimitiveId, WebGlBuffer>,
    /// Re-uploaded on every immediate draw.
    scratch: WebGlBuffer,
}

impl GlRenderer {
    /// Bind a WebGL context to `canvas`, compile the shader program, and
    /// resolve the shader variable locations.
    ///
    /// # Errors
    ///
    /// [`EngineError::Initialization`] when the context or program cannot be
    /// created, [`EngineError::ResourceLookup`] when a shader variable or
    /// buffer is missing. Both are fatal to the session.
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, EngineError> {
        let gl = request_context(canvas)?;
        let program = link_program(&gl)?;
        gl.use_program(Some(&program));

        let a_position = gl.get_attrib_location(&program, "a_Position");
        if a_position < 0 {
            return Err(EngineError::ResourceLookup { name: "a_Position" });
        }
        let u_frag_color = gl
            .get_uniform_location(&program, "u_FragColor")
            .ok_or(EngineError::ResourceLookup { name: "u_FragColor" })?;
        let u_point_size = gl
            .get_uniform_location(&program, "u_PointSize")
            .ok_or(EngineError::ResourceLookup { name: "u_PointSize" })?;

        let scratch = gl
            .create_buffer()
            .ok_or(EngineError::ResourceLookup { name: "scratch buffer" })?;

        gl.clear_color(
            CLEAR_COLOR.r as f32,
            CLEAR_COLOR.g as f32,
            CLEAR_COLOR.b as f32,
            CLEAR_COLOR.a as f32,
        );

        Ok(Self {
            gl,
            a_position: a_position as u32,
            u_frag_color,
            u_point_size,
            retained: HashMap::new(),
            scratch,
        })
    }

    /// Delete every retained vertex buffer. Called when the scene is
    /// cleared; the next redraw re-uploads nothing because the scene is
    /// empty too.
    pub fn discard_retained(&mut self) {
        for (_, buffer) in self.retained.drain() {
            self.gl.delete_buffer(Some(&buffer));
        }
    }

    /// Issue the draw call for whatever buffer is currently bound.
    fn draw_bound(&self, count: usize, color: Color, topology: Topology, point_size: Option<f64>) {
        self.gl.vertex_attrib_pointer_with_i32(
            self.a_position,
            2,
            WebGlRenderingContext::FLOAT,
            false,
            0,
            0,
        );
        self.gl.enable_vertex_attrib_array(self.a_position);

        self.gl.uniform4f(
            Some(&self.u_frag_color),
            color.r as f32,
            color.g as f32,
            color.b as f32,
            color.a as f32,
        );
        if let Some(size) = point_size {
            self.gl.uniform1f(Some(&self.u_point_size), size as f32);
        }

        self.gl.draw_arrays(gl_mode(topology), 0, count as i32);
    }
}

impl Renderer for GlRenderer {
    fn draw(
        &mut self,
        id: PrimitiveId,
        vertices: &[Point2D],
        color: Color,
        topology: Topology,
        point_size: Option<f64>,
    ) -> Result<(), EngineError> {
        match self.retained.entry(id) {
            Entry::Occupied(entry) => {
                self.gl
                    .bind_buffer(WebGlRenderingContext::ARRAY_BUFFER, Some(entry.get()));
            }
            Entry::Vacant(entry) => {
                let buffer = self
                    .gl
                    .create_buffer()
                    .ok_or(EngineError::ResourceLookup { name: "vertex buffer" })?;
                self.gl
                    .bind_buffer(WebGlRenderingContext::ARRAY_BUFFER, Some(&buffer));
                upload(&self.gl, vertices);
                entry.insert(buffer);
            }
        }
        self.draw_bound(vertices.len(), color, topology, point_size);
        Ok(())
    }

    fn draw_immediate(
        &mut self,
        vertices: &[Point2D],
        color: Color,
        topology: Topology,
    ) -> Result<(), EngineError> {
        self.gl
            .bind_buffer(WebGlRenderingContext::ARRAY_BUFFER, Some(&self.scratch));
        upload(&self.gl, vertices);
        self.draw_bound(vertices.len(), color, topology, None);
        Ok(())
    }

    fn clear_frame(&mut self) {
        self.gl.clear(WebGlRenderingContext::COLOR_BUFFER_BIT);
    }
}

/// Upload a vertex run to the currently bound `ARRAY_BUFFER`.
fn upload(gl: &WebGlRenderingContext, vertices: &[Point2D]) {
    let flat: Vec<f32> = vertices
        .iter()
        .flat_map(|p| [p.x as f32, p.y as f32])
        .collect();
    let view = js_sys::Float32Array::from(flat.as_slice());
    gl.buffer_data_with_array_buffer_view(
        WebGlRenderingContext::ARRAY_BUFFER,
        &view,
        WebGlRenderingContext::STATIC_DRAW,
    );
}

fn gl_mode(topology: Topology) -> u32 {
    match topology {
        Topology::Points => WebGlRenderingContext::POINTS,
        Topology::TriangleList => WebGlRenderingContext::TRIANGLES,
        Topology::TriangleFan => WebGlRenderingContext::TRIANGLE_FAN,
    }
}

fn request_context(canvas: &HtmlCanvasElement) -> Result<WebGlRenderingContext, EngineError> {
    let options = js_sys::Object::new();
    js_sys::Reflect::set(
        &options,
        &JsValue::from_str("preserveDrawingBuffer"),
        &JsValue::TRUE,
    )
    .map_err(|e| EngineError::Initialization(format!("context options rejected: {e:?}")))?;

    canvas
        .get_context_with_context_options("webgl", &options)
        .map_err(|e| EngineError::Initialization(format!("context request failed: {e:?}")))?
        .ok_or_else(|| EngineError::Initialization("webgl is not supported here".into()))?
        .dyn_into::<WebGlRenderingContext>()
        .map_err(|_| EngineError::Initialization("context is not webgl".into()))
}

fn compile_shader(
    gl: &WebGlRenderingContext,
    kind: u32,
    source: &str,
) -> Result<WebGlShader, EngineError> {
    let shader = gl
        .create_shader(kind)
        .ok_or(EngineError::ResourceLookup { name: "shader object" })?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    let compiled = gl
        .get_shader_parameter(&shader, WebGlRenderingContext::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false);
    if compiled {
        Ok(shader)
    } else {
        let info = gl.get_shader_info_log(&shader).unwrap_or_default();
        Err(EngineError::Initialization(format!("shader compile failed: {info}")))
    }
}

fn link_program(gl: &WebGlRenderingContext) -> Result<WebGlProgram, EngineError> {
    let vertex = compile_shader(gl, WebGlRenderingContext::VERTEX_SHADER, VERTEX_SHADER)?;
    let fragment = compile_shader(gl, WebGlRenderingContext::FRAGMENT_SHADER, FRAGMENT_SHADER)?;

    let program = gl
        .create_program()
        .ok_or(EngineError::ResourceLookup { name: "program object" })?;
    gl.attach_shader(&program, &vertex);
    gl.attach_shader(&program, &fragment);
    gl.link_program(&program);

    let linked = gl
        .get_program_parameter(&program, WebGlRenderingContext::LINK_STATUS)
        .as_bool()
        .unwrap_or(false);
    if linked {
        Ok(program)
    } else {
        let info = gl.get_program_info_log(&program).unwrap_or_default();
        Err(EngineError::Initialization(format!("program link failed: {info}")))
    }
}
