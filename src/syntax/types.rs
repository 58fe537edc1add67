//! Data structures for the Graph Definition File (GDF).
//!
//! These types represent the deserialized form of the YAML input:
//! the node list, its importance tiers and resource links, plus the
//! top-level [`GraphDef`] that also carries the configuration blocks.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::{AlgoConfig, DisplayConfig, HeadConfig};

// ─── Importance ──────────────────────────────────────────────────────────────

/// Seven point importance scale for a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    Lowest,
    Lower,
    Low,
    #[default]
    Normal,
    High,
    Higher,
    Highest,
}

impl Importance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Importance::Lowest => "lowest",
            Importance::Lower => "lower",
            Importance::Low => "low",
            Importance::Normal => "normal",
            Importance::High => "high",
            Importance::Higher => "higher",
            Importance::Highest => "highest",
        }
    }
}

impl fmt::Display for Importance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── LinkTo ──────────────────────────────────────────────────────────────────

/// Symbolic reference to a resource plus an optional sub-target
/// (page, section, element id) inside it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LinkTo {
    #[serde(default)]
    pub resource: String,
    #[serde(default)]
    pub target: String,
}

impl LinkTo {
    pub fn new(resource: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            target: target.into(),
        }
    }
}

// ─── NodeDef ─────────────────────────────────────────────────────────────────

/// A node as written by the user.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct NodeDef {
    /// Unique name (letters, digits, `_`).
    pub name: String,
    /// Shown in big font. Filled from `name` by the loader when empty.
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub importance: Importance,
    /// Names of the nodes this node depends on.
    #[serde(default)]
    pub depends_on: Vec<String>,
    #[serde(default)]
    pub linkto: Option<LinkTo>,
}

impl NodeDef {
    /// Create a node with the given dependencies and no display attributes.
    pub fn new(name: impl Into<String>, depends_on: &[&str]) -> Self {
        Self {
            name: name.into(),
            depends_on: depends_on.iter().map(|d| d.to_string()).collect(),
            ..Self::default()
        }
    }

    /// Attach a resource link.
    pub fn with_link(mut self, resource: impl Into<String>, target: impl Into<String>) -> Self {
        self.linkto = Some(LinkTo::new(resource, target));
        self
    }

    /// Resource name this node links to, if any (empty names count as none).
    pub fn resource(&self) -> Option<&str> {
        self.linkto
            .as_ref()
            .map(|l| l.resource.as_str())
            .filter(|r| !r.is_empty())
    }
}

// ─── GraphDef ────────────────────────────────────────────────────────────────

/// Resource name → link.
pub type ResourceMap = BTreeMap<String, String>;

/// The whole definition file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct GraphDef {
    pub nodes: Vec<NodeDef>,
    #[serde(default)]
    pub head_config: HeadConfig,
    #[serde(default)]
    pub display_config: DisplayConfig,
    #[serde(default)]
    pub resources: ResourceMap,
    #[serde(default)]
    pub algo_config: AlgoConfig,
}

impl GraphDef {
    pub fn new(nodes: Vec<NodeDef>) -> Self {
        Self {
            nodes,
            ..Self::default()
        }
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_syntax_types.rs"]
mod tests;
