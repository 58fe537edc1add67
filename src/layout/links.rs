//! Resource link resolution.

use super::types::LayoutNode;
use crate::error::LayoutError;
use crate::syntax::types::ResourceMap;

/// Links containing this already carry a PDF viewer fragment; a sub-target is
/// appended as another viewer parameter instead of a second fragment.
pub const PDF_FRAGMENT_MARKER: &str = ".pdf#";

/// Join a resolved link and an optional sub-target.
pub fn join_target(link: &str, target: &str) -> String {
    if target.is_empty() {
        link.to_string()
    } else if link.contains(PDF_FRAGMENT_MARKER) {
        format!("{link}&{target}")
    } else {
        format!("{link}#{target}")
    }
}

/// Resolve every node's resource reference into `node.link`.
///
/// Nodes without a reference keep an empty link. All references are resolved
/// before any node is written, so a failure leaves every link untouched.
pub fn resolve_links(nodes: &mut [LayoutNode], resources: &ResourceMap) -> Result<(), LayoutError> {
    let mut resolved: Vec<String> = Vec::with_capacity(nodes.len());
    for node in nodes.iter() {
        let link = match (node.def.resource(), node.def.linkto.as_ref()) {
            (Some(resource), Some(linkto)) => {
                let base = resources
                    .get(resource)
                    .ok_or_else(|| LayoutError::UnknownResource {
                        node: node.name().to_string(),
                        resource: resource.to_string(),
                    })?;
                join_target(base, &linkto.target)
            }
            _ => String::new(),
        };
        resolved.push(link);
    }

    for (node, link) in nodes.iter_mut().zip(resolved) {
        node.link = link;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_links.rs"]
mod tests;
