use super::*;

#[test]
fn test_fault_is_fault() {
    let e = LayoutError::from(LayoutFault::EmptyLevel { level: 2 });
    assert!(e.is_fault());
    assert_eq!(e.to_string(), "internal layout fault: level 2 has no nodes");
}

#[test]
fn test_user_errors_are_not_faults() {
    let errors = [
        LayoutError::UnknownStrategy("x".into()),
        LayoutError::NoRootNodes(LevelStrategy::TopToBottom),
        LayoutError::UnknownResource {
            node: "a".into(),
            resource: "doc".into(),
        },
        LayoutError::UnknownDependency {
            node: "a".into(),
            dependency: "b".into(),
        },
        LayoutError::DuplicateNode { node: "a".into() },
    ];
    for e in errors {
        assert!(!e.is_fault(), "{e} should not be a fault");
    }
}

#[test]
fn test_no_root_nodes_message_names_strategy() {
    let e = LayoutError::NoRootNodes(LevelStrategy::TopToBottom);
    assert_eq!(e.to_string(), "no root nodes for level strategy top2bottom");
}

#[test]
fn test_crate_error_is_fault() {
    let fault: Error = LayoutError::Fault(LayoutFault::NoMaxLevel).into();
    assert!(fault.is_fault());
    let user: Error = LayoutError::UnknownStrategy("x".into()).into();
    assert!(!user.is_fault());
    let load: Error = LoadError::NoRootNodes.into();
    assert!(!load.is_fault());
}

#[test]
fn test_load_error_messages() {
    assert_eq!(
        LoadError::InvalidName("a b".into()).to_string(),
        "invalid node name (only letters, numbers, _) 'a b'"
    );
    assert_eq!(
        LoadError::UnknownResource {
            node: "a".into(),
            resource: "doc".into()
        }
        .to_string(),
        "error in node 'a': linkto resource 'doc' not found"
    );
}
