//! Error types.
//!
//! Two classes of failure come out of the layout engine:
//!
//! - user-input errors ([`LayoutError`] variants other than `Fault`): the
//!   definition is wrong and the user can fix it and run again;
//! - internal-consistency faults ([`LayoutFault`]): an invariant of the
//!   layout algorithm itself was violated. These signal a defect and the
//!   caller is expected to abort rather than report and carry on.
//!
//! [`LoadError`] covers reading, parsing and validating the definition file.

use std::path::PathBuf;

use crate::layout::levels::LevelStrategy;

/// Internal-consistency fault in the layout engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutFault {
    #[error("node '{node}' was never assigned a level")]
    UnassignedLevel { node: String },

    #[error("level mismatch for node '{node}': got {got}, expected {expected}")]
    LevelMismatch {
        node: String,
        got: usize,
        expected: usize,
    },

    #[error("dependent '{dependent}' (level {dependent_level}) is not above '{node}' (level {level})")]
    DependentNotAbove {
        node: String,
        level: usize,
        dependent: String,
        dependent_level: usize,
    },

    #[error("dependency '{dependency}' (level {dependency_level}) is not below '{node}' (level {level})")]
    DependencyNotBelow {
        node: String,
        level: usize,
        dependency: String,
        dependency_level: usize,
    },

    #[error("level {level} has no nodes")]
    EmptyLevel { level: usize },

    #[error("unable to find the maximum level")]
    NoMaxLevel,
}

/// Failure of the layout pipeline.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("node name repeated '{node}'")]
    DuplicateNode { node: String },

    #[error("unknown dependency for node '{node}': '{dependency}'")]
    UnknownDependency { node: String, dependency: String },

    #[error("node '{node}' links to unknown resource '{resource}'")]
    UnknownResource { node: String, resource: String },

    #[error("node '{node}' lists dependency '{dependency}' more than once")]
    RepeatedDependency { node: String, dependency: String },

    #[error("unknown level strategy '{0}'; use bottom2top or top2bottom")]
    UnknownStrategy(String),

    #[error("display setting {field} = {value} out of range: {reason}")]
    InvalidDisplay {
        field: &'static str,
        value: i64,
        reason: &'static str,
    },

    #[error("no root nodes for level strategy {0}")]
    NoRootNodes(LevelStrategy),

    #[error("internal layout fault: {0}")]
    Fault(#[from] LayoutFault),
}

impl LayoutError {
    /// True for internal-consistency faults, false for user-input errors.
    pub fn is_fault(&self) -> bool {
        matches!(self, LayoutError::Fault(_))
    }
}

/// Failure while reading or validating a definition file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid graph definition: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid node name (only letters, numbers, _) '{0}'")]
    InvalidName(String),

    #[error("node name repeated '{0}'")]
    DuplicateName(String),

    #[error("there must be at least 1 node without any dependency")]
    NoRootNodes,

    #[error("unknown dependency for node '{node}': '{dependency}'")]
    UnknownDependency { node: String, dependency: String },

    #[error("node '{node}' lists dependency '{dependency}' more than once")]
    RepeatedDependency { node: String, dependency: String },

    #[error("dependency cycle through node '{0}'")]
    CyclicDependency(String),

    #[error("error in node '{node}': linkto resource '{resource}' not found")]
    UnknownResource { node: String, resource: String },

    #[error("display-config {field} must not be negative (got {value})")]
    NegativeDisplayValue { field: &'static str, value: i64 },

    #[error("display-config {field} must be at most {max} (got {value})")]
    DisplayValueTooLarge {
        field: &'static str,
        value: i64,
        max: i64,
    },

    #[error("display-config horizontal-step-px must be even (got {0})")]
    OddHorizontalStep(i64),
}

/// Crate-level error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True when the error signals a defect in the layout engine.
    pub fn is_fault(&self) -> bool {
        matches!(self, Error::Layout(e) if e.is_fault())
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_error.rs"]
mod tests;
