//! Definition loading: read and validate a Graph Definition File.

pub mod base;
pub mod gdf;
pub mod validate;

pub use base::Parser;

use std::fs;
use std::path::Path;

use crate::error::LoadError;
use crate::syntax::types::GraphDef;
use gdf::GdfParser;

/// Parse and validate a YAML definition string.
pub fn parse(src: &str) -> Result<GraphDef, LoadError> {
    GdfParser.parse(src)
}

/// Read, parse and validate a definition file.
pub fn load_file(path: &Path) -> Result<GraphDef, LoadError> {
    let src = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = src.len(), "read graph definition");
    parse(&src)
}

#[cfg(test)]
#[path = "../../tests/rust/test_parsers.rs"]
mod tests;
