use super::*;
use crate::syntax::types::NodeDef;

fn def_with_strategy(strategy: &str) -> GraphDef {
    let mut def = GraphDef::new(vec![NodeDef::new("a", &[])]);
    def.algo_config.level_strategy = strategy.to_string();
    def
}

#[test]
fn test_layout_config_default() {
    let c = LayoutConfig::new();
    assert_eq!(c.strategy, LevelStrategy::BottomToTop);
    assert_eq!(c.horizontal_step_px, 400);
    assert_eq!(c.vertical_step_px, 300);
    assert_eq!(c.node_box_width_px, 300);
}

#[test]
fn test_display_fill_defaults_keeps_set_values() {
    let mut d = DisplayConfig {
        horizontal_step_px: 250,
        vertical_step_px: 0,
        node_box_width_px: 0,
    };
    d.fill_defaults();
    assert_eq!(d.horizontal_step_px, 250);
    assert_eq!(d.vertical_step_px, DEFAULT_VERTICAL_STEP_PX);
    assert_eq!(d.node_box_width_px, DEFAULT_NODE_BOX_WIDTH_PX);
}

#[test]
fn test_from_definition_empty_strategy_is_default() {
    let c = LayoutConfig::from_definition(&def_with_strategy("")).unwrap();
    assert_eq!(c.strategy, LevelStrategy::BottomToTop);
}

#[test]
fn test_from_definition_top2bottom() {
    let c = LayoutConfig::from_definition(&def_with_strategy("top2bottom")).unwrap();
    assert_eq!(c.strategy, LevelStrategy::TopToBottom);
}

#[test]
fn test_from_definition_unknown_strategy() {
    let err = LayoutConfig::from_definition(&def_with_strategy("sideways")).unwrap_err();
    assert_eq!(err, LayoutError::UnknownStrategy("sideways".to_string()));
    assert!(!err.is_fault());
}

#[test]
fn test_from_definition_display_values() {
    let mut def = def_with_strategy("bottom2top");
    def.display_config.horizontal_step_px = 200;
    def.display_config.vertical_step_px = 150;
    let c = LayoutConfig::from_definition(&def).unwrap();
    assert_eq!(c.horizontal_step_px, 200);
    assert_eq!(c.vertical_step_px, 150);
    assert_eq!(c.node_box_width_px, DEFAULT_NODE_BOX_WIDTH_PX);
}

#[test]
fn test_display_config_yaml_keys() {
    let yaml = "horizontal-step-px: 10\nvertical-step-px: 20\nnode-box-width-px: 30\n";
    let d: DisplayConfig = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(d.horizontal_step_px, 10);
    assert_eq!(d.vertical_step_px, 20);
    assert_eq!(d.node_box_width_px, 30);
}

#[test]
fn test_validate_default_config() {
    assert_eq!(LayoutConfig::new().validate(), Ok(()));
}

#[test]
fn test_validate_rejects_out_of_range() {
    let zero = LayoutConfig {
        node_box_width_px: 0,
        ..LayoutConfig::new()
    };
    assert!(matches!(
        zero.validate(),
        Err(LayoutError::InvalidDisplay { field: "node-box-width-px", reason: "must be positive", .. })
    ));
    let huge = LayoutConfig {
        horizontal_step_px: MAX_DISPLAY_PX + 2,
        ..LayoutConfig::new()
    };
    assert!(matches!(
        huge.validate(),
        Err(LayoutError::InvalidDisplay { reason: "too large", .. })
    ));
}

#[test]
fn test_from_definition_rejects_odd_step() {
    let mut def = def_with_strategy("");
    def.display_config.horizontal_step_px = 333;
    assert!(matches!(
        LayoutConfig::from_definition(&def),
        Err(LayoutError::InvalidDisplay { value: 333, .. })
    ));
}
