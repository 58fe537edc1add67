//! Element ids for nodes and dots, and angular untangling of dots.

use std::cmp::Ordering;

use super::types::{Dot, DotRole, ELEM_ID_WIDTH, LayoutNode, NODE_ELEM_PREFIX, NodeId};

/// Zero-padded decimal rendering of a node id.
pub fn format_uid(uid: NodeId) -> String {
    format!("{uid:0width$}", width = ELEM_ID_WIDTH)
}

pub fn node_elem_id(uid: NodeId) -> String {
    format!("{NODE_ELEM_PREFIX}{}", format_uid(uid))
}

/// Edge id shared by both ends of "`dependent` depends on `dependency`".
pub fn edge_id(dependent: NodeId, dependency: NodeId) -> String {
    format!("{}{}", format_uid(dependent), format_uid(dependency))
}

impl Dot {
    /// Create the dot `owner` holds for its connection to `partner`.
    ///
    /// A depends-on dot puts the owner's id first, a used-by dot puts the
    /// partner's id first, so the two ends of one edge share `edge_id`.
    pub fn new(role: DotRole, owner: NodeId, partner: NodeId) -> Self {
        let id = match role {
            DotRole::DependsOn => edge_id(owner, partner),
            DotRole::UsedBy => edge_id(partner, owner),
        };
        Self {
            role,
            edge_id: id,
            partner,
            partner_elem_id: node_elem_id(partner),
        }
    }
}

/// Fill `elem_id` and both dot lists for every node, in adjacency order.
pub fn assign_elem_ids(nodes: &mut [LayoutNode]) {
    for node in nodes.iter_mut() {
        let uid = node.uid;
        node.elem_id = node_elem_id(uid);
        node.depends_on_dots = node
            .depends_on_ids
            .iter()
            .map(|&p| Dot::new(DotRole::DependsOn, uid, p))
            .collect();
        node.used_by_dots = node
            .used_by_ids
            .iter()
            .map(|&p| Dot::new(DotRole::UsedBy, uid, p))
            .collect();
    }
}

/// Angle from `origin` to `partner` in screen coordinates (y grows down).
///
/// Depends-on dots use the negated angle so partners below the node sort
/// left to right, the same order used-by dots get for partners above.
fn dot_angle(origin: (i64, i64), partner: (i64, i64), role: DotRole) -> f64 {
    let dx = (partner.0 - origin.0) as f64;
    let dy = (partner.1 - origin.1) as f64;
    let angle = dy.atan2(dx);
    match role {
        DotRole::DependsOn => -angle,
        DotRole::UsedBy => angle,
    }
}

fn sort_dots(dots: &mut Vec<Dot>, origin: (i64, i64), positions: &[(i64, i64)]) {
    let mut keyed: Vec<(f64, Dot)> = dots
        .drain(..)
        .map(|d| (dot_angle(origin, positions[d.partner], d.role), d))
        .collect();
    keyed.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
    dots.extend(keyed.into_iter().map(|(_, d)| d));
}

/// Reorder every node's dots by the angle to their partner.
///
/// Greedy and local to each node: connectors fan out in angular order, which
/// removes crossings among the lines leaving one node. Requires geometry.
pub fn untangle(nodes: &mut [LayoutNode]) {
    let positions: Vec<(i64, i64)> = nodes.iter().map(|n| (n.left, n.top)).collect();
    for node in nodes.iter_mut() {
        let origin = (node.left, node.top);
        sort_dots(&mut node.depends_on_dots, origin, &positions);
        sort_dots(&mut node.used_by_dots, origin, &positions);
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_connectors.rs"]
mod tests;
