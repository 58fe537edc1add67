//! Level assignment: layered BFS over the dependency DAG.
//!
//! Two directions are supported:
//!
//! - [`LevelStrategy::BottomToTop`] (dependency-driven): nodes without
//!   dependencies sit at level 0 and every node is one above its highest
//!   dependency.
//! - [`LevelStrategy::TopToBottom`] (dependent-driven): nodes without
//!   dependents are seeded first and levels grow along the dependency edges;
//!   the result is then flipped so dependencies still end up below their
//!   dependents. Every node sits one below its lowest dependent.
//!
//! After propagation the levels are re-derived from the neighbours and any
//! disagreement is reported as a [`LayoutFault`].

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use super::types::{LayoutNode, NodeId};
use crate::error::{LayoutError, LayoutFault};

// ─── LevelStrategy ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LevelStrategy {
    #[default]
    BottomToTop,
    TopToBottom,
}

impl LevelStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            LevelStrategy::BottomToTop => "bottom2top",
            LevelStrategy::TopToBottom => "top2bottom",
        }
    }

    /// Whether the node belongs to the initial frontier.
    fn is_seed(&self, node: &LayoutNode) -> bool {
        match self {
            LevelStrategy::BottomToTop => node.depends_on_ids.is_empty(),
            LevelStrategy::TopToBottom => node.used_by_ids.is_empty(),
        }
    }

    /// Nodes that receive `level + 1` from this node during propagation.
    fn propagation_targets<'a>(&self, node: &'a LayoutNode) -> &'a [NodeId] {
        match self {
            LevelStrategy::BottomToTop => &node.used_by_ids,
            LevelStrategy::TopToBottom => &node.depends_on_ids,
        }
    }

    /// Level the node must have, derived from its neighbours' final levels.
    fn expected_level(
        &self,
        node: &LayoutNode,
        nodes: &[LayoutNode],
        max_level: usize,
    ) -> Result<usize, LayoutFault> {
        match self {
            LevelStrategy::BottomToTop => {
                let highest = neighbour_levels(&node.depends_on_ids, nodes)?
                    .into_iter()
                    .max();
                Ok(highest.map_or(0, |l| l + 1))
            }
            LevelStrategy::TopToBottom => {
                let lowest = neighbour_levels(&node.used_by_ids, nodes)?
                    .into_iter()
                    .min();
                match lowest {
                    None => Ok(max_level),
                    Some(l) => l.checked_sub(1).ok_or_else(|| LayoutFault::LevelMismatch {
                        node: node.name().to_string(),
                        got: node.level.unwrap_or_default(),
                        expected: 0,
                    }),
                }
            }
        }
    }
}

impl fmt::Display for LevelStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LevelStrategy {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bottom2top" => Ok(LevelStrategy::BottomToTop),
            "top2bottom" => Ok(LevelStrategy::TopToBottom),
            other => Err(LayoutError::UnknownStrategy(other.to_string())),
        }
    }
}

// ─── Assignment ──────────────────────────────────────────────────────────────

/// Assign a level to every node.
///
/// Fails with [`LayoutError::NoRootNodes`] when no node qualifies as a seed
/// for the strategy and with [`LayoutError::Fault`] when the post-hoc
/// validation disagrees with the propagated levels.
pub fn assign_levels(nodes: &mut [LayoutNode], strategy: LevelStrategy) -> Result<(), LayoutError> {
    let mut frontier: Vec<NodeId> = Vec::new();
    for node in nodes.iter_mut() {
        node.level = None;
        if strategy.is_seed(node) {
            node.level = Some(0);
            frontier.push(node.uid);
        }
    }
    if frontier.is_empty() {
        return Err(LayoutError::NoRootNodes(strategy));
    }

    // Longest path in a DAG has at most n - 1 edges, so this is only a fuse.
    let max_rounds = nodes.len().saturating_sub(1);
    let mut rounds = 0;
    while !frontier.is_empty() && rounds < max_rounds {
        let next_level = rounds + 1;
        let mut seen: HashSet<NodeId> = HashSet::new();
        let mut next: Vec<NodeId> = Vec::new();
        for id in frontier {
            let targets = strategy.propagation_targets(&nodes[id]).to_vec();
            for target in targets {
                nodes[target].level = Some(next_level);
                if seen.insert(target) {
                    next.push(target);
                }
            }
        }
        frontier = next;
        rounds += 1;
    }
    if !frontier.is_empty() {
        tracing::warn!(
            rounds,
            pending = frontier.len(),
            "level propagation stopped at the iteration bound"
        );
    }

    if strategy == LevelStrategy::TopToBottom {
        let max_level = max_assigned_level(nodes)?;
        for node in nodes.iter_mut() {
            if let Some(level) = node.level {
                node.level = Some(max_level - level);
            }
        }
    }

    validate_levels(nodes, strategy)?;
    let levels = max_assigned_level(nodes)? + 1;
    tracing::debug!(%strategy, rounds, levels, "assigned levels");
    Ok(())
}

/// Check every node against the level invariants of `strategy`.
///
/// Every node must have a level, every dependent must sit strictly above,
/// every dependency strictly below, and the level must match the
/// strategy-specific formula.
pub fn validate_levels(nodes: &[LayoutNode], strategy: LevelStrategy) -> Result<(), LayoutFault> {
    let max_level = max_assigned_level(nodes)?;
    for node in nodes {
        let level = level_of(node)?;

        for &dependent_id in &node.used_by_ids {
            let dependent = &nodes[dependent_id];
            let dependent_level = level_of(dependent)?;
            if dependent_level <= level {
                return Err(LayoutFault::DependentNotAbove {
                    node: node.name().to_string(),
                    level,
                    dependent: dependent.name().to_string(),
                    dependent_level,
                });
            }
        }

        for &dependency_id in &node.depends_on_ids {
            let dependency = &nodes[dependency_id];
            let dependency_level = level_of(dependency)?;
            if dependency_level >= level {
                return Err(LayoutFault::DependencyNotBelow {
                    node: node.name().to_string(),
                    level,
                    dependency: dependency.name().to_string(),
                    dependency_level,
                });
            }
        }

        let expected = strategy.expected_level(node, nodes, max_level)?;
        if level != expected {
            return Err(LayoutFault::LevelMismatch {
                node: node.name().to_string(),
                got: level,
                expected,
            });
        }
    }
    Ok(())
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

fn level_of(node: &LayoutNode) -> Result<usize, LayoutFault> {
    node.level.ok_or_else(|| LayoutFault::UnassignedLevel {
        node: node.name().to_string(),
    })
}

fn neighbour_levels(ids: &[NodeId], nodes: &[LayoutNode]) -> Result<Vec<usize>, LayoutFault> {
    ids.iter().map(|&id| level_of(&nodes[id])).collect()
}

/// Highest level carried by any node.
pub fn max_assigned_level(nodes: &[LayoutNode]) -> Result<usize, LayoutFault> {
    nodes
        .iter()
        .filter_map(|n| n.level)
        .max()
        .ok_or(LayoutFault::NoMaxLevel)
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_levels.rs"]
mod tests;
