//! Layout types: LayoutNode, Dot, LevelMap, LayoutResult.

use crate::config::LayoutConfig;
use crate::syntax::types::NodeDef;

// ─── Constants ────────────────────────────────────────────────────────────────

/// Digits used when rendering a node id into an element id.
pub const ELEM_ID_WIDTH: usize = 5;
pub const NODE_ELEM_PREFIX: &str = "N_";
pub const DEPENDS_ON_DOT_PREFIX: &str = "D_";
pub const USED_BY_DOT_PREFIX: &str = "U_";

/// Dense node identifier: the node's position in input order.
pub type NodeId = usize;

// ─── Dot ─────────────────────────────────────────────────────────────────────

/// Which end of an edge a dot represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DotRole {
    /// Sits at the bottom of the node that depends on the partner.
    DependsOn,
    /// Sits at the top of the node the partner depends on.
    UsedBy,
}

impl DotRole {
    pub fn prefix(&self) -> &'static str {
        match self {
            DotRole::DependsOn => DEPENDS_ON_DOT_PREFIX,
            DotRole::UsedBy => USED_BY_DOT_PREFIX,
        }
    }
}

/// One end of a dependency edge, owned by exactly one node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dot {
    pub role: DotRole,
    /// Edge identifier: the dependent's formatted id followed by the
    /// dependency's. Both ends of an edge carry the same value.
    pub edge_id: String,
    pub partner: NodeId,
    /// Element id of the partner node.
    pub partner_elem_id: String,
}

impl Dot {
    /// Element id of the dot itself: role prefix + edge id.
    pub fn elem_id(&self) -> String {
        format!("{}{}", self.role.prefix(), self.edge_id)
    }
}

// ─── LayoutNode ───────────────────────────────────────────────────────────────

/// A node record carried through every layout stage.
///
/// `def` is the immutable input; every other field is computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutNode {
    pub def: NodeDef,
    pub uid: NodeId,
    pub depends_on_ids: Vec<NodeId>,
    pub used_by_ids: Vec<NodeId>,
    /// `None` until the level assigner reaches the node.
    pub level: Option<usize>,
    pub shift: usize,
    pub left: i64,
    pub top: i64,
    pub elem_id: String,
    pub depends_on_dots: Vec<Dot>,
    pub used_by_dots: Vec<Dot>,
    /// Resolved resource link, empty when the node links nowhere.
    pub link: String,
}

impl LayoutNode {
    pub fn new(uid: NodeId, def: NodeDef) -> Self {
        Self {
            def,
            uid,
            depends_on_ids: Vec::new(),
            used_by_ids: Vec::new(),
            level: None,
            shift: 0,
            left: 0,
            top: 0,
            elem_id: String::new(),
            depends_on_dots: Vec::new(),
            used_by_dots: Vec::new(),
            link: String::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.def.name
    }
}

// ─── LevelMap ─────────────────────────────────────────────────────────────────

/// Node ids grouped by level (index = level), each level in shift order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelMap {
    levels: Vec<Vec<NodeId>>,
}

impl LevelMap {
    pub fn new(levels: Vec<Vec<NodeId>>) -> Self {
        Self { levels }
    }

    /// Number of levels.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn level(&self, level: usize) -> &[NodeId] {
        self.levels.get(level).map(|v| v.as_slice()).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = &[NodeId]> {
        self.levels.iter().map(|v| v.as_slice())
    }

    /// Node count of the widest level, `None` when there are no levels.
    pub fn widest(&self) -> Option<usize> {
        self.levels.iter().map(Vec::len).max()
    }

    pub fn max_level(&self) -> Option<usize> {
        self.levels.len().checked_sub(1)
    }
}

// ─── LayoutResult ─────────────────────────────────────────────────────────────

/// The full output of the layout pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutResult {
    pub nodes: Vec<LayoutNode>,
    pub level_map: LevelMap,
    pub config: LayoutConfig,
}

impl LayoutResult {
    /// Canvas size in pixels: the furthest node corner, counting one node box
    /// width to the right and one vertical step below the lowest row.
    pub fn canvas_size(&self) -> (i64, i64) {
        let max_left = self.nodes.iter().map(|n| n.left).max().unwrap_or(0);
        let max_top = self.nodes.iter().map(|n| n.top).max().unwrap_or(0);
        (
            max_left + self.config.node_box_width_px,
            max_top + self.config.vertical_step_px,
        )
    }

    pub fn node(&self, id: NodeId) -> Option<&LayoutNode> {
        self.nodes.get(id)
    }

    pub fn find(&self, name: &str) -> Option<&LayoutNode> {
        self.nodes.iter().find(|n| n.name() == name)
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_types.rs"]
mod tests;
