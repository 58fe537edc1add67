//! Layout engine: turns a node definition list into geometry.
//!
//! Stages, each mutating the same node arena in place:
//!   1. identity resolution (`graph`)
//!   2. level assignment (`levels`)
//!   3. level map + shifts (`placement`)
//!   4. element ids and dots (`connectors`)
//!   5. pixel placement (`placement`)
//!   6. dot untangling (`connectors`)
//!   7. resource links (`links`)

pub mod connectors;
pub mod graph;
pub mod levels;
pub mod links;
pub mod placement;
pub mod types;

pub use levels::LevelStrategy;
pub use types::{Dot, DotRole, LayoutNode, LayoutResult, LevelMap, NodeId};

use crate::config::LayoutConfig;
use crate::error::LayoutError;
use crate::syntax::types::{GraphDef, NodeDef, ResourceMap};

/// Run the full layout pipeline on a definition.
///
/// The config is derived from the definition first, so an unknown strategy
/// fails before any level is assigned.
pub fn full_layout(def: &GraphDef) -> Result<LayoutResult, LayoutError> {
    let config = LayoutConfig::from_definition(def)?;
    full_layout_with_config(&def.nodes, &def.resources, &config)
}

/// Run the full layout pipeline with an explicit config.
pub fn full_layout_with_config(
    defs: &[NodeDef],
    resources: &ResourceMap,
    config: &LayoutConfig,
) -> Result<LayoutResult, LayoutError> {
    config.validate()?;
    let mut nodes = graph::resolve_identities(defs)?;
    levels::assign_levels(&mut nodes, config.strategy)?;
    let level_map = placement::build_level_map(&mut nodes)?;
    connectors::assign_elem_ids(&mut nodes);
    placement::place_nodes(
        &mut nodes,
        &level_map,
        config.horizontal_step_px,
        config.vertical_step_px,
    );
    connectors::untangle(&mut nodes);
    links::resolve_links(&mut nodes, resources)?;

    tracing::debug!(
        nodes = nodes.len(),
        levels = level_map.len(),
        "layout complete"
    );
    Ok(LayoutResult {
        nodes,
        level_map,
        config: config.clone(),
    })
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_pipeline.rs"]
mod tests;
