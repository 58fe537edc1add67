use super::*;
use crate::config::{DEFAULT_HORIZONTAL_STEP_PX, DEFAULT_NODE_BOX_WIDTH_PX, DEFAULT_VERTICAL_STEP_PX};
use crate::syntax::types::{Importance, LinkTo};

fn parse(src: &str) -> Result<GraphDef, LoadError> {
    GdfParser.parse(src)
}

const FULL: &str = r#"
head-config:
  title: Build graph
  description: Crates and who uses them
  author: Release team
display-config:
  horizontal-step-px: 250
algo-config:
  level-strategy: top2bottom
resources:
  docs: docs/index.html
  manual: manual.pdf#page=4
nodes:
  - name: core_lib
    subtitle: shared code
    importance: highest
  - name: app
    title: The App
    depends-on: [core_lib]
    linkto:
      resource: docs
      target: app
"#;

#[test]
fn test_parse_minimal() {
    let def = parse("nodes:\n  - name: a\n").unwrap();
    assert_eq!(def.nodes.len(), 1);
    assert_eq!(def.nodes[0].name, "a");
    assert_eq!(def.nodes[0].title, "A");
    assert_eq!(def.nodes[0].importance, Importance::Normal);
    assert!(def.resources.is_empty());
    assert_eq!(def.algo_config.level_strategy, "");
}

#[test]
fn test_parse_full() {
    let def = parse(FULL).unwrap();
    assert_eq!(def.head_config.title, "Build graph");
    assert_eq!(def.head_config.author, "Release team");
    assert_eq!(def.algo_config.level_strategy, "top2bottom");
    assert_eq!(def.resources["manual"], "manual.pdf#page=4");

    let core = &def.nodes[0];
    assert_eq!(core.title, "Core Lib");
    assert_eq!(core.subtitle, "shared code");
    assert_eq!(core.importance, Importance::Highest);

    let app = &def.nodes[1];
    assert_eq!(app.title, "The App");
    assert_eq!(app.depends_on, vec!["core_lib".to_string()]);
    assert_eq!(app.linkto, Some(LinkTo::new("docs", "app")));
}

#[test]
fn test_display_defaults_filled() {
    let def = parse(FULL).unwrap();
    assert_eq!(def.display_config.horizontal_step_px, 250);
    assert_eq!(def.display_config.vertical_step_px, DEFAULT_VERTICAL_STEP_PX);
    assert_eq!(def.display_config.node_box_width_px, DEFAULT_NODE_BOX_WIDTH_PX);

    let def = parse("nodes:\n  - name: a\n").unwrap();
    assert_eq!(def.display_config.horizontal_step_px, DEFAULT_HORIZONTAL_STEP_PX);
}

#[test]
fn test_unknown_key_rejected() {
    let err = parse("nodes:\n  - name: a\n    colour: red\n").unwrap_err();
    assert!(matches!(err, LoadError::Yaml(_)));
}

#[test]
fn test_unknown_importance_rejected() {
    let err = parse("nodes:\n  - name: a\n    importance: urgent\n").unwrap_err();
    assert!(matches!(err, LoadError::Yaml(_)));
}

#[test]
fn test_missing_nodes_rejected() {
    let err = parse("resources: {}\n").unwrap_err();
    assert!(matches!(err, LoadError::Yaml(_)));
}

#[test]
fn test_validation_runs_after_deserialize() {
    let err = parse("nodes:\n  - name: a\n    depends-on: [b]\n  - name: c\n").unwrap_err();
    assert!(matches!(err, LoadError::UnknownDependency { .. }));
}
