//! Error taxonomy for the engine and renderer.

use wasm_bindgen::JsValue;

/// Failures surfaced by the renderer boundary.
///
/// `Initialization` is fatal to the session: no context or shader program
/// means nothing further can proceed. `ResourceLookup` is fatal only to the
/// affected draw; the rest of the system continues degraded. Normal drawing
/// operations raise neither — coordinate math and tessellation are total
/// over valid inputs.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Rendering context or shader program unavailable.
    #[error("renderer initialization failed: {0}")]
    Initialization(String),

    /// A required shader variable location or GPU resource is missing.
    #[error("required rendering resource `{name}` is missing")]
    ResourceLookup { name: &'static str },
}

impl From<EngineError> for JsValue {
    fn from(err: EngineError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
