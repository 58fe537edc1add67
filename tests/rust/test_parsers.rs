use super::*;
use std::fs;

#[test]
fn test_parse_entry() {
    let def = parse("nodes:\n  - name: a\n  - name: b\n    depends-on: [a]\n").unwrap();
    assert_eq!(def.nodes.len(), 2);
    assert_eq!(def.nodes[1].title, "B");
}

#[test]
fn test_load_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("graph.yaml");
    fs::write(&path, "nodes:\n  - name: solo\n").unwrap();
    let def = load_file(&path).unwrap();
    assert_eq!(def.nodes[0].name, "solo");
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.yaml");
    let err = load_file(&path).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
    assert!(err.to_string().contains("missing.yaml"));
}
