use super::*;

const GRAPH: &str = "
head-config:
  title: Tiny
nodes:
  - name: a
  - name: b
    depends-on: [a]
";

#[test]
fn test_render_gdf_html() {
    let out = render_gdf(GRAPH, OutputFormat::Html).unwrap();
    assert!(out.contains("<title>Tiny</title>"));
    assert!(out.contains(r#"id="D_0000100000""#));
}

#[test]
fn test_render_gdf_svg() {
    let out = render_gdf(GRAPH, OutputFormat::Svg).unwrap();
    assert!(out.starts_with("<svg "));
    assert!(out.contains("<title>Tiny</title>"));
}

#[test]
fn test_render_gdf_load_error() {
    let err = render_gdf("nodes: []\n", OutputFormat::Html).unwrap_err();
    assert!(matches!(err, Error::Load(LoadError::NoRootNodes)));
    assert!(!err.is_fault());
}

#[test]
fn test_render_gdf_unknown_strategy() {
    let src = "algo-config:\n  level-strategy: diagonal\nnodes:\n  - name: a\n";
    let err = render_gdf(src, OutputFormat::Html).unwrap_err();
    assert!(matches!(
        err,
        Error::Layout(LayoutError::UnknownStrategy(ref s)) if s == "diagonal"
    ));
}

#[test]
fn test_render_gdf_repeated_dependency() {
    let src = "nodes:\n  - name: a\n  - name: b\n    depends-on: [a, a]\n";
    let err = render_gdf(src, OutputFormat::Html).unwrap_err();
    assert!(matches!(
        err,
        Error::Load(LoadError::RepeatedDependency { .. })
    ));
}

#[test]
fn test_element_ids_unique_in_page() {
    let src = "nodes:\n  - name: a\n  - name: b\n    depends-on: [a]\n  - name: c\n    depends-on: [a, b]\n";
    let out = render_gdf(src, OutputFormat::Html).unwrap();
    let mut ids: Vec<&str> = out
        .split(r#" id=""#)
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .collect();
    let total = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), total);
    assert!(total > 0);
}
