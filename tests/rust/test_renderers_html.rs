use super::*;
use crate::layout::full_layout;
use crate::syntax::types::{GraphDef, NodeDef};

fn layout() -> LayoutResult {
    let mut def = GraphDef::new(vec![
        NodeDef::new("base", &[]),
        NodeDef::new("app", &["base"]).with_link("docs", "app"),
    ]);
    def.nodes[0].title = "Base <core>".into();
    def.nodes[0].subtitle = "shared".into();
    def.nodes[1].title = "App".into();
    def.resources.insert("docs".into(), "docs.html".into());
    full_layout(&def).unwrap()
}

fn render(head: HeadConfig) -> String {
    HtmlRenderer::new(head).render(&layout())
}

#[test]
fn test_document_frame() {
    let out = render(HeadConfig::default());
    assert!(out.starts_with("<!DOCTYPE html>"));
    assert!(out.contains("<title>Graph</title>"));
    assert!(out.trim_end().ends_with("</html>"));
    assert!(!out.contains(r#"name="description""#));
}

#[test]
fn test_head_config() {
    let out = render(HeadConfig {
        title: "Deps & more".into(),
        description: "All crates".into(),
        author: "Ops".into(),
    });
    assert!(out.contains("<title>Deps &amp; more</title>"));
    assert!(out.contains(r#"<meta name="description" content="All crates">"#));
    assert!(out.contains(r#"<meta name="author" content="Ops">"#));
}

#[test]
fn test_canvas_size() {
    let out = render(HeadConfig::default());
    assert!(out.contains(r#"<div id="graph" style="width: 300px; height: 600px;"#));
}

#[test]
fn test_node_boxes() {
    let out = render(HeadConfig::default());
    assert!(out.contains(
        r#"<div id="N_00000" class="node importance-normal" style="left: 0px; top: 300px; width: 300px; height: 120px;">"#
    ));
    assert!(out.contains(r#"id="N_00001""#));
    assert!(out.contains(r#"<div class="title">Base &lt;core&gt;</div>"#));
    assert!(out.contains(r#"<div class="subtitle">shared</div>"#));
}

#[test]
fn test_link_wraps_title() {
    let out = render(HeadConfig::default());
    assert!(out.contains(r#"<div class="title"><a href="docs.html#app">App</a></div>"#));
}

#[test]
fn test_dots_and_lines() {
    let out = render(HeadConfig::default());
    assert!(out.contains(
        r#"<div id="D_0000100000" class="dot link-source" data-partner="N_00000""#
    ));
    assert!(out.contains(
        r#"<div id="U_0000100000" class="dot link-target" data-partner="N_00001""#
    ));
    assert!(out.contains(r#"<line id="L_0000100000" x1="150" y1="120" x2="150" y2="300""#));
    assert_eq!(out.matches("<line ").count(), 1);
}
