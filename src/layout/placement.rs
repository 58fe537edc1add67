//! Level map construction and pixel placement.
//!
//! Centering contract: every level uses the same horizontal step. The
//! widest level starts at x = 0; any other level is shifted right by
//! `(widest - len) * horizontal_step / 2` so its span is centered on the
//! widest level's span. The step is even (see `LayoutConfig::validate`),
//! so the half-step shift lands on whole pixels. Level 0 is the bottom row:
//! `top = (max_level - level) * vertical_step`.

use super::levels::max_assigned_level;
use super::types::{LayoutNode, LevelMap, NodeId};
use crate::error::LayoutFault;

/// Group nodes by level and assign each its shift.
///
/// Nodes are scanned in id order, so within a level the input order decides
/// the left-to-right position.
pub fn build_level_map(nodes: &mut [LayoutNode]) -> Result<LevelMap, LayoutFault> {
    let max_level = max_assigned_level(nodes)?;
    let mut levels: Vec<Vec<NodeId>> = vec![Vec::new(); max_level + 1];
    for node in nodes.iter_mut() {
        let level = node.level.ok_or_else(|| LayoutFault::UnassignedLevel {
            node: node.name().to_string(),
        })?;
        node.shift = levels[level].len();
        levels[level].push(node.uid);
    }
    if let Some(level) = levels.iter().position(Vec::is_empty) {
        return Err(LayoutFault::EmptyLevel { level });
    }
    Ok(LevelMap::new(levels))
}

/// Horizontal offset of a level holding `len` nodes.
pub fn centering_offset(widest: usize, len: usize, horizontal_step: i64) -> i64 {
    widest.saturating_sub(len) as i64 * horizontal_step / 2
}

/// Convert (level, shift) into pixel `left`/`top`.
///
/// No-op when the level map is empty or its widest level has no nodes.
pub fn place_nodes(
    nodes: &mut [LayoutNode],
    level_map: &LevelMap,
    horizontal_step: i64,
    vertical_step: i64,
) {
    let (Some(widest), Some(max_level)) = (level_map.widest(), level_map.max_level()) else {
        return;
    };
    if widest == 0 {
        return;
    }

    for (level, ids) in level_map.iter().enumerate() {
        let offset = centering_offset(widest, ids.len(), horizontal_step);
        let top = (max_level - level) as i64 * vertical_step;
        for &id in ids {
            let node = &mut nodes[id];
            node.left = node.shift as i64 * horizontal_step + offset;
            node.top = top;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_placement.rs"]
mod tests;
