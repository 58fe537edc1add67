//! Identity resolver: dense node ids and adjacency in both directions.

use std::collections::HashMap;

use super::types::{LayoutNode, NodeId};
use crate::error::LayoutError;
use crate::syntax::types::NodeDef;

/// Build the node arena from the input definitions.
///
/// Each node gets the id equal to its input position. Dependency names are
/// resolved to ids (`depends_on_ids`) and the node is appended to every
/// dependency's `used_by_ids`, so adjacency comes out consistent in both
/// directions and in input order. A dependency named twice by one node is
/// rejected, since both ends of an edge must have a unique element id.
pub fn resolve_identities(defs: &[NodeDef]) -> Result<Vec<LayoutNode>, LayoutError> {
    let mut name_to_id: HashMap<&str, NodeId> = HashMap::with_capacity(defs.len());
    for (idx, def) in defs.iter().enumerate() {
        if name_to_id.insert(def.name.as_str(), idx).is_some() {
            return Err(LayoutError::DuplicateNode {
                node: def.name.clone(),
            });
        }
    }

    let mut nodes: Vec<LayoutNode> = defs
        .iter()
        .enumerate()
        .map(|(idx, def)| LayoutNode::new(idx, def.clone()))
        .collect();

    for (idx, def) in defs.iter().enumerate() {
        for dep_name in &def.depends_on {
            let dep_id = *name_to_id.get(dep_name.as_str()).ok_or_else(|| {
                LayoutError::UnknownDependency {
                    node: def.name.clone(),
                    dependency: dep_name.clone(),
                }
            })?;
            if nodes[idx].depends_on_ids.contains(&dep_id) {
                return Err(LayoutError::RepeatedDependency {
                    node: def.name.clone(),
                    dependency: dep_name.clone(),
                });
            }
            nodes[idx].depends_on_ids.push(dep_id);
            nodes[dep_id].used_by_ids.push(idx);
        }
    }

    tracing::debug!(nodes = nodes.len(), "resolved node identities");
    Ok(nodes)
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_graph.rs"]
mod tests;
