use super::*;
use crate::syntax::types::NodeDef;

#[test]
fn test_layout_node_new() {
    let n = LayoutNode::new(3, NodeDef::new("c", &["a"]));
    assert_eq!(n.uid, 3);
    assert_eq!(n.name(), "c");
    assert!(n.level.is_none());
    assert_eq!(n.shift, 0);
    assert_eq!((n.left, n.top), (0, 0));
    assert!(n.depends_on_ids.is_empty());
    assert!(n.used_by_ids.is_empty());
    assert_eq!(n.link, "");
}

#[test]
fn test_dot_elem_id_prefix() {
    let dot = Dot {
        role: DotRole::DependsOn,
        edge_id: "0000100000".into(),
        partner: 0,
        partner_elem_id: "N_00000".into(),
    };
    assert_eq!(dot.elem_id(), "D_0000100000");
    let dot = Dot {
        role: DotRole::UsedBy,
        ..dot
    };
    assert_eq!(dot.elem_id(), "U_0000100000");
}

#[test]
fn test_level_map_empty() {
    let m = LevelMap::default();
    assert!(m.is_empty());
    assert_eq!(m.widest(), None);
    assert_eq!(m.max_level(), None);
    assert!(m.level(0).is_empty());
}

#[test]
fn test_level_map_widest_and_max_level() {
    let m = LevelMap::new(vec![vec![0], vec![1, 2, 3], vec![4]]);
    assert_eq!(m.len(), 3);
    assert_eq!(m.widest(), Some(3));
    assert_eq!(m.max_level(), Some(2));
    assert_eq!(m.level(1), &[1, 2, 3]);
    assert_eq!(m.iter().count(), 3);
}

#[test]
fn test_canvas_size() {
    let mut a = LayoutNode::new(0, NodeDef::new("a", &[]));
    a.left = 400;
    a.top = 300;
    let b = LayoutNode::new(1, NodeDef::new("b", &["a"]));
    let result = LayoutResult {
        nodes: vec![a, b],
        level_map: LevelMap::new(vec![vec![0], vec![1]]),
        config: LayoutConfig::default(),
    };
    assert_eq!(result.canvas_size(), (700, 600));
    assert_eq!(result.find("b").map(|n| n.uid), Some(1));
    assert!(result.find("zzz").is_none());
}
