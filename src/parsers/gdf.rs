//! YAML Graph Definition File parser.

use super::base::Parser;
use super::validate::validate_and_fill;
use crate::error::LoadError;
use crate::syntax::types::GraphDef;

/// Strict YAML parser: unknown keys are rejected, then the definition is
/// validated and its optional fields filled.
pub struct GdfParser;

impl Parser for GdfParser {
    fn parse(&self, src: &str) -> Result<GraphDef, LoadError> {
        let mut def: GraphDef = serde_yaml::from_str(src)?;
        validate_and_fill(&mut def)?;
        Ok(def)
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_parsers_gdf.rs"]
mod tests;
