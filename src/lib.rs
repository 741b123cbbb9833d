//! Pointer-driven WebGL drawing canvas.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns
//! the drawing lifecycle of the canvas: translating pointer events into
//! placed primitives, retaining them in paint order, tessellating them into
//! vertex runs, and issuing the incremental WebGL draws. The host layer is
//! responsible only for wiring DOM events and UI controls (mode buttons,
//! color/size/segment sliders) to the [`engine::Engine`] methods.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`scene`] | Placed primitives and the paint-ordered scene |
//! | [`tessellate`] | Logical parameters → vertex runs |
//! | [`surface`] | Pixel space → normalized device coordinates |
//! | [`input`] | Drawing modes, style settings, drag state machine |
//! | [`render`] | Renderer capability, dispatch, WebGL implementation |
//! | [`reference`] | Built-in reference drawing (bypasses the scene) |
//! | [`error`] | Failure taxonomy |
//! | [`consts`] | Defaults and fixed colors |

pub mod consts;
pub mod engine;
pub mod error;
pub mod input;
pub mod reference;
pub mod render;
pub mod scene;
pub mod surface;
pub mod tessellate;

use wasm_bindgen::prelude::wasm_bindgen;

/// Module-load hook: route panics and the `log` facade to the browser
/// console.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"glpaint: console logger already installed".into());
    }
}
