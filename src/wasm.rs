//! WASM bindings for lisp-syntax-view.
//!
//! Exposes `layoutJson`, `renderSvg` and `renderAscii` to JavaScript via
//! wasm-bindgen. An editor calls one of them on every text change and keeps
//! its previous drawing when the call throws.

use wasm_bindgen::prelude::*;

use crate::config::{OutputFormat, RenderConfig};

fn render(src: &str, config: &RenderConfig) -> Result<String, JsError> {
    crate::render_source(src, config).map_err(|e| JsError::new(&e.to_string()))
}

/// Lay out `src` and return the node records as compact JSON.
#[wasm_bindgen(js_name = "layoutJson")]
pub fn layout_json(src: &str) -> Result<String, JsError> {
    let layout = crate::convert(src).map_err(|e| JsError::new(&e.to_string()))?;
    serde_json::to_string(&layout).map_err(|e| JsError::new(&e.to_string()))
}

/// Render `src` as an SVG document with default sizes.
#[wasm_bindgen(js_name = "renderSvg")]
pub fn render_svg(src: &str) -> Result<String, JsError> {
    render(src, &RenderConfig::with_format(OutputFormat::Svg))
}

/// Render `src` as text.
///
/// - `unicode`: true for Unicode line characters, false for plain ASCII
#[wasm_bindgen(js_name = "renderAscii")]
pub fn render_ascii(src: &str, unicode: bool) -> Result<String, JsError> {
    let config = RenderConfig {
        format: OutputFormat::Ascii,
        unicode,
        ..RenderConfig::default()
    };
    render(src, &config)
}
