//! WASM bindings for linkgraph.
//!
//! Exposes `render` and `renderSvg` to JavaScript via wasm-bindgen.

use wasm_bindgen::prelude::*;

use crate::renderers::OutputFormat;

/// Render a YAML graph definition to an HTML page.
#[wasm_bindgen]
pub fn render(src: &str) -> Result<String, JsError> {
    crate::render_gdf(src, OutputFormat::Html).map_err(|e| JsError::new(&e.to_string()))
}

/// Render a YAML graph definition to a standalone SVG document.
#[wasm_bindgen(js_name = "renderSvg")]
pub fn render_svg(src: &str) -> Result<String, JsError> {
    crate::render_gdf(src, OutputFormat::Svg).map_err(|e| JsError::new(&e.to_string()))
}
