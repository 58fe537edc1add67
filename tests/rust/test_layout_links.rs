use super::*;
use crate::layout::graph::resolve_identities;
use crate::syntax::types::NodeDef;

fn resources() -> ResourceMap {
    let mut r = ResourceMap::new();
    r.insert("doc".into(), "spec.pdf#page=1".into());
    r.insert("web".into(), "page.html".into());
    r
}

#[test]
fn test_join_target_plain_fragment() {
    assert_eq!(join_target("page.html", "intro"), "page.html#intro");
}

#[test]
fn test_join_target_pdf_viewer_parameter() {
    assert_eq!(
        join_target("spec.pdf#page=1", "section2"),
        "spec.pdf#page=1&section2"
    );
}

#[test]
fn test_join_target_pdf_without_fragment() {
    assert_eq!(join_target("spec.pdf", "page=3"), "spec.pdf#page=3");
}

#[test]
fn test_join_target_empty_target() {
    assert_eq!(join_target("page.html", ""), "page.html");
}

#[test]
fn test_resolve_links() {
    let defs = vec![
        NodeDef::new("a", &[]),
        NodeDef::new("b", &["a"]).with_link("doc", "section2"),
        NodeDef::new("c", &["a"]).with_link("web", "intro"),
        NodeDef::new("d", &["a"]).with_link("web", ""),
    ];
    let mut nodes = resolve_identities(&defs).unwrap();
    resolve_links(&mut nodes, &resources()).unwrap();
    let links: Vec<&str> = nodes.iter().map(|n| n.link.as_str()).collect();
    assert_eq!(
        links,
        vec!["", "spec.pdf#page=1&section2", "page.html#intro", "page.html"]
    );
}

#[test]
fn test_unknown_resource_leaves_links_untouched() {
    let defs = vec![
        NodeDef::new("a", &[]).with_link("web", "intro"),
        NodeDef::new("b", &["a"]).with_link("missing", ""),
    ];
    let mut nodes = resolve_identities(&defs).unwrap();
    let err = resolve_links(&mut nodes, &resources()).unwrap_err();
    assert_eq!(
        err,
        LayoutError::UnknownResource {
            node: "b".into(),
            resource: "missing".into()
        }
    );
    assert!(nodes.iter().all(|n| n.link.is_empty()));
}

#[test]
fn test_no_resources_needed() {
    let defs = vec![NodeDef::new("a", &[])];
    let mut nodes = resolve_identities(&defs).unwrap();
    resolve_links(&mut nodes, &ResourceMap::new()).unwrap();
    assert_eq!(nodes[0].link, "");
}
