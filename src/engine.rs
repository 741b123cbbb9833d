use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsValue;
use web_sys::HtmlCanvasElement;

use crate::consts::{ERASER_COLOR, MIN_SEGMENTS, PRIMARY_BUTTONS, SCENE_LOG_INTERVAL_MS};
use crate::input::{AuthoringState, InputState, Mode};
use crate::reference;
use crate::render::{redraw_scene, render_primitive, GlRenderer, Renderer};
use crate::scene::{Color, Primitive, PrimitiveId, Scene};
use crate::surface::Surface;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Core authoring state — all logic that doesn't depend on the canvas
/// element or the graphics context.
///
/// Separated from [`Engine`] so it can be tested without WASM/browser
/// dependencies. Single-threaded by construction: every input event is
/// handled to completion before the next arrives, so no locking is needed.
#[derive(Debug, Default)]
pub struct EngineCore {
    pub scene: Scene,
    pub authoring: AuthoringState,
    pub input: InputState,
    pub surface: Surface,
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Settings (side channel from the host UI) ---

    /// Set the active drawing mode. Takes effect at the next placement,
    /// including mid-drag.
    pub fn set_mode(&mut self, mode: Mode) {
        self.authoring.mode = mode;
    }

    /// Set the paint color from UI sliders. Alpha is fixed at 1.0.
    pub fn set_color(&mut self, r: f64, g: f64, b: f64) {
        self.authoring.color = Color::opaque(r, g, b);
    }

    /// Set the brush size in pixels.
    pub fn set_size(&mut self, size: f64) {
        self.authoring.size = size;
    }

    /// Set the segment count for circles placed from now on. Clamped to
    /// [`MIN_SEGMENTS`] here, at the UI boundary; already-placed circles
    /// keep their creation-time count.
    pub fn set_segments(&mut self, segments: u32) {
        self.authoring.segments = segments.max(MIN_SEGMENTS);
    }

    /// Update the surface pixel dimensions used for coordinate
    /// normalization.
    pub fn set_surface_size(&mut self, width: f64, height: f64) {
        self.surface = Surface::new(width, height);
    }

    // --- Pointer events (element-local pixel coordinates) ---

    /// Pointer-down: begin a drag and place one primitive at the down
    /// position. Returns the placed primitive's id.
    pub fn on_pointer_down(&mut self, x: f64, y: f64) -> Option<PrimitiveId> {
        self.input = InputState::Dragging;
        self.place(x, y)
    }

    /// Pointer-move: while dragging with the primary button alone held,
    /// stamp one more independent primitive at the new position.
    pub fn on_pointer_move(&mut self, x: f64, y: f64, buttons: u16) -> Option<PrimitiveId> {
        if self.input.is_dragging() && buttons == PRIMARY_BUTTONS {
            self.place(x, y)
        } else {
            None
        }
    }

    /// Pointer-up: end the drag. Places nothing.
    pub fn on_pointer_up(&mut self) {
        self.input = InputState::Idle;
    }

    /// Discard every placed primitive. Does not touch the frame buffer —
    /// the caller clears and redraws separately.
    pub fn clear(&mut self) {
        self.scene.clear();
    }

    /// Construct one primitive from the current settings at an
    /// element-local pixel position and append it to the scene.
    ///
    /// The mode, color, size, and segment count are read fresh here on
    /// every call. Returns `None` only when the surface has no area yet.
    fn place(&mut self, x: f64, y: f64) -> Option<PrimitiveId> {
        if !self.surface.has_area() {
            return None;
        }
        let position = self.surface.to_ndc(x, y);
        let style = self.authoring;
        let primitive = match style.mode {
            Mode::Point => Primitive::point(position, style.color, style.size),
            Mode::Triangle => Primitive::triangle(
                position,
                self.surface.extent_to_ndc(style.size),
                style.color,
            ),
            Mode::Circle => Primitive::circle(
                position,
                self.surface.extent_to_ndc(style.size),
                style.color,
                style.segments,
            ),
            // Erasing is a color override, not a primitive kind: an
            // insertion-ordered circle in the background color.
            Mode::Eraser => Primitive::circle(
                position,
                self.surface.extent_to_ndc(style.size),
                ERASER_COLOR,
                style.segments,
            ),
        };
        Some(self.scene.append(primitive))
    }
}

/// The full drawing engine. Wraps [`EngineCore`] and owns the browser
/// canvas element and the WebGL renderer.
///
/// Pointer methods take client (viewport) coordinates as reported by the
/// browser event; the engine subtracts the canvas bounding rect itself.
#[wasm_bindgen]
pub struct Engine {
    canvas: HtmlCanvasElement,
    renderer: GlRenderer,
    core: EngineCore,
    last_scene_log_ms: f64,
}

#[wasm_bindgen]
impl Engine {
    /// Create an engine bound to the given canvas element.
    ///
    /// # Errors
    ///
    /// Fails when the WebGL context or shader program cannot be set up —
    /// fatal to the session; the host should report it and stop.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement) -> Result<Engine, JsValue> {
        let renderer = GlRenderer::new(&canvas)?;
        let mut core = EngineCore::new();
        core.set_surface_size(f64::from(canvas.width()), f64::from(canvas.height()));

        let mut engine = Engine {
            canvas,
            renderer,
            core,
            last_scene_log_ms: 0.0,
        };
        engine.renderer.clear_frame();
        Ok(engine)
    }

    // --- Pointer events ---

    pub fn on_pointer_down(&mut self, client_x: f64, client_y: f64) {
        let (x, y) = self.element_local(client_x, client_y);
        if let Some(id) = self.core.on_pointer_down(x, y) {
            self.draw_placed(id);
        }
    }

    pub fn on_pointer_move(&mut self, client_x: f64, client_y: f64, buttons: u16) {
        let (x, y) = self.element_local(client_x, client_y);
        if let Some(id) = self.core.on_pointer_move(x, y, buttons) {
            self.draw_placed(id);
        }
    }

    pub fn on_pointer_up(&mut self) {
        self.core.on_pointer_up();
    }

    // --- Settings ---

    /// Set the drawing mode by its UI name: `"point"`, `"triangle"`,
    /// `"circle"`, or `"eraser"`. Unknown names are ignored with a warning.
    pub fn set_mode(&mut self, name: &str) {
        match Mode::from_name(name) {
            Some(mode) => self.core.set_mode(mode),
            None => log::warn!("ignoring unknown drawing mode {name:?}"),
        }
    }

    pub fn set_color(&mut self, r: f64, g: f64, b: f64) {
        self.core.set_color(r, g, b);
    }

    pub fn set_size(&mut self, size: f64) {
        self.core.set_size(size);
    }

    pub fn set_segments(&mut self, segments: u32) {
        self.core.set_segments(segments);
    }

    /// Update the surface dimensions after a host-side canvas resize.
    pub fn set_surface_size(&mut self, width: f64, height: f64) {
        self.core.set_surface_size(width, height);
    }

    // --- Commands ---

    /// Discard the scene, drop the retained GPU buffers, and clear the
    /// frame.
    pub fn clear(&mut self) {
        self.core.clear();
        self.renderer.discard_retained();
        self.renderer.clear_frame();
    }

    /// Clear the frame and redraw every retained primitive in paint order.
    pub fn redraw_all(&mut self) {
        if let Err(err) = redraw_scene(&mut self.renderer, &self.core.scene) {
            log::error!("redraw failed: {err}");
        }
    }

    /// Draw the built-in reference drawing over the current frame. It
    /// bypasses the scene, so a later [`Engine::redraw_all`] will not
    /// restore it.
    pub fn recreate_reference_drawing(&mut self) {
        if let Err(err) = reference::draw(&mut self.renderer) {
            log::error!("reference drawing failed: {err}");
        }
    }

    // --- Queries ---

    /// Number of primitives placed since the last clear.
    #[must_use]
    pub fn primitive_count(&self) -> usize {
        self.core.scene.len()
    }
}

impl Engine {
    /// Convert client coordinates to element-local pixels using the canvas
    /// bounding rect, as of this event.
    fn element_local(&self, client_x: f64, client_y: f64) -> (f64, f64) {
        let rect = self.canvas.get_bounding_client_rect();
        (client_x - rect.left(), client_y - rect.top())
    }

    /// Draw the just-placed primitive — and only it; earlier primitives
    /// stay as already rasterized.
    fn draw_placed(&mut self, id: PrimitiveId) {
        if let Some(primitive) = self.core.scene.get(&id) {
            if let Err(err) = render_primitive(&mut self.renderer, primitive) {
                log::error!("draw failed: {err}");
            }
        }
        self.log_scene_size();
    }

    /// Debug-log the scene size, throttled so drag storms don't flood the
    /// console.
    fn log_scene_size(&mut self) {
        let now = js_sys::Date::now();
        if now - self.last_scene_log_ms > SCENE_LOG_INTERVAL_MS {
            log::debug!("scene holds {} primitives", self.core.scene.len());
            self.last_scene_log_ms = now;
        }
    }
}
