//! Parser trait definition.

use crate::error::LoadError;
use crate::syntax::types::GraphDef;

/// Trait for definition parsers.
pub trait Parser {
    /// Parse the input source string into a validated [`GraphDef`].
    fn parse(&self, src: &str) -> Result<GraphDef, LoadError>;
}
