//! linkgraph: dependency graph definition (YAML) to a static box-and-line
//! diagram.
//!
//! Public API: [`render_gdf`], or the pieces it wires together:
//! [`parsers::parse`] → [`layout::full_layout`] → a [`renderers::Renderer`].

pub mod config;
pub mod error;
pub mod job;
pub mod layout;
pub mod parsers;
pub mod renderers;
#[cfg(feature = "serve")]
pub mod serve;
pub mod syntax;

#[cfg(feature = "wasm")]
mod wasm;

pub use error::{Error, LayoutError, LayoutFault, LoadError};
pub use renderers::OutputFormat;

use crate::layout::full_layout;
use crate::parsers::parse;

/// Parse a Graph Definition File and render it in the given format.
pub fn render_gdf(src: &str, format: OutputFormat) -> Result<String, Error> {
    let def = parse(src)?;
    let layout_result = full_layout(&def)?;
    let renderer = format.renderer(def.head_config.clone());
    Ok(renderer.render(&layout_result))
}

#[cfg(test)]
#[path = "../tests/rust/test_lib.rs"]
mod tests;
