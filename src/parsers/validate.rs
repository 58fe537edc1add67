//! Validation of a deserialized definition.
//!
//! Checks the user can fix (bad names, dangling dependencies, cycles,
//! missing resources) are reported here as [`LoadError`]s; the layout
//! engine re-checks the ones it depends on.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use regex::Regex;

use crate::config::{DisplayConfig, MAX_DISPLAY_PX};
use crate::error::LoadError;
use crate::syntax::types::{GraphDef, NodeDef, ResourceMap};

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_]+$").expect("node name pattern compiles"));

/// Validate `def` and fill its optional fields (titles, display defaults).
pub fn validate_and_fill(def: &mut GraphDef) -> Result<(), LoadError> {
    validate_nodes(&mut def.nodes)?;
    check_acyclic(&def.nodes)?;
    validate_display(&mut def.display_config)?;
    validate_resources(&def.resources, &def.nodes)?;
    tracing::debug!(
        nodes = def.nodes.len(),
        resources = def.resources.len(),
        "validated graph definition"
    );
    Ok(())
}

/// Replace underscores with spaces and capitalize the first letter of every word.
pub fn name_to_title(name: &str) -> String {
    name.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

fn validate_nodes(nodes: &mut [NodeDef]) -> Result<(), LoadError> {
    let mut names: HashSet<String> = HashSet::with_capacity(nodes.len());
    let mut roots = 0usize;
    for node in nodes.iter_mut() {
        if !NAME_PATTERN.is_match(&node.name) {
            return Err(LoadError::InvalidName(node.name.clone()));
        }
        if !names.insert(node.name.clone()) {
            return Err(LoadError::DuplicateName(node.name.clone()));
        }
        if node.depends_on.is_empty() {
            roots += 1;
        }
        if node.title.is_empty() {
            node.title = name_to_title(&node.name);
        }
    }

    if roots == 0 {
        return Err(LoadError::NoRootNodes);
    }

    for node in nodes.iter() {
        let mut seen: HashSet<&str> = HashSet::with_capacity(node.depends_on.len());
        for dep in &node.depends_on {
            if !names.contains(dep) {
                return Err(LoadError::UnknownDependency {
                    node: node.name.clone(),
                    dependency: dep.clone(),
                });
            }
            if !seen.insert(dep.as_str()) {
                return Err(LoadError::RepeatedDependency {
                    node: node.name.clone(),
                    dependency: dep.clone(),
                });
            }
        }
    }
    Ok(())
}

/// Reject dependency cycles. Expects names to be unique and resolvable.
fn check_acyclic(nodes: &[NodeDef]) -> Result<(), LoadError> {
    let mut graph: DiGraph<&str, ()> = DiGraph::with_capacity(nodes.len(), 0);
    let index: HashMap<&str, NodeIndex> = nodes
        .iter()
        .map(|n| (n.name.as_str(), graph.add_node(n.name.as_str())))
        .collect();
    for node in nodes {
        let to = index[node.name.as_str()];
        for dep in &node.depends_on {
            if let Some(&from) = index.get(dep.as_str()) {
                graph.add_edge(from, to, ());
            }
        }
    }
    toposort(&graph, None)
        .map(|_| ())
        .map_err(|cycle| LoadError::CyclicDependency(graph[cycle.node_id()].to_string()))
}

fn validate_display(display: &mut DisplayConfig) -> Result<(), LoadError> {
    for (field, value) in display.fields() {
        if value < 0 {
            return Err(LoadError::NegativeDisplayValue { field, value });
        }
        if value > MAX_DISPLAY_PX {
            return Err(LoadError::DisplayValueTooLarge {
                field,
                value,
                max: MAX_DISPLAY_PX,
            });
        }
    }
    if display.horizontal_step_px % 2 != 0 {
        return Err(LoadError::OddHorizontalStep(display.horizontal_step_px));
    }
    display.fill_defaults();
    Ok(())
}

fn validate_resources(resources: &ResourceMap, nodes: &[NodeDef]) -> Result<(), LoadError> {
    for node in nodes {
        if let Some(resource) = node.resource() {
            if !resources.contains_key(resource) {
                return Err(LoadError::UnknownResource {
                    node: node.name.clone(),
                    resource: resource.to_string(),
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/rust/test_parsers_validate.rs"]
mod tests;
