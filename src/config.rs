//! Configuration blocks of the definition file and the typed layout config.
//!
//! The YAML blocks (`head-config`, `display-config`, `algo-config`) are kept
//! as plain deserialized values; [`LayoutConfig`] is the validated form the
//! layout engine consumes.

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::layout::levels::LevelStrategy;
use crate::syntax::types::GraphDef;

pub const DEFAULT_HORIZONTAL_STEP_PX: i64 = 400;
pub const DEFAULT_VERTICAL_STEP_PX: i64 = 300;
pub const DEFAULT_NODE_BOX_WIDTH_PX: i64 = 300;
/// Upper bound for every display value. Keeps pixel arithmetic far from
/// overflow for any graph whose ids fit the element id width.
pub const MAX_DISPLAY_PX: i64 = 100_000;

/// Page metadata written into the `<head>` of the generated document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeadConfig {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub author: String,
}

/// Grid sizes in pixels. Zero means "use the default".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct DisplayConfig {
    #[serde(default)]
    pub horizontal_step_px: i64,
    #[serde(default)]
    pub vertical_step_px: i64,
    #[serde(default)]
    pub node_box_width_px: i64,
}

impl DisplayConfig {
    /// Values paired with their YAML key names.
    pub fn fields(&self) -> [(&'static str, i64); 3] {
        [
            ("horizontal-step-px", self.horizontal_step_px),
            ("vertical-step-px", self.vertical_step_px),
            ("node-box-width-px", self.node_box_width_px),
        ]
    }

    /// Replace unset (zero) values with the defaults.
    pub fn fill_defaults(&mut self) {
        if self.horizontal_step_px == 0 {
            self.horizontal_step_px = DEFAULT_HORIZONTAL_STEP_PX;
        }
        if self.vertical_step_px == 0 {
            self.vertical_step_px = DEFAULT_VERTICAL_STEP_PX;
        }
        if self.node_box_width_px == 0 {
            self.node_box_width_px = DEFAULT_NODE_BOX_WIDTH_PX;
        }
    }
}

/// Algorithm selection. The strategy string is parsed by the layout engine.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct AlgoConfig {
    #[serde(default)]
    pub level_strategy: String,
}

/// Validated configuration for the layout pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutConfig {
    pub strategy: LevelStrategy,
    pub horizontal_step_px: i64,
    pub vertical_step_px: i64,
    pub node_box_width_px: i64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            strategy: LevelStrategy::default(),
            horizontal_step_px: DEFAULT_HORIZONTAL_STEP_PX,
            vertical_step_px: DEFAULT_VERTICAL_STEP_PX,
            node_box_width_px: DEFAULT_NODE_BOX_WIDTH_PX,
        }
    }
}

impl LayoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the layout config from a definition.
    ///
    /// An empty strategy string selects the default strategy; any other
    /// unrecognized value fails with [`LayoutError::UnknownStrategy`].
    /// Unset display values fall back to the defaults.
    pub fn from_definition(def: &GraphDef) -> Result<Self, LayoutError> {
        let strategy = match def.algo_config.level_strategy.as_str() {
            "" => LevelStrategy::default(),
            s => s.parse()?,
        };
        let mut display = def.display_config.clone();
        display.fill_defaults();
        let config = Self {
            strategy,
            horizontal_step_px: display.horizontal_step_px,
            vertical_step_px: display.vertical_step_px,
            node_box_width_px: display.node_box_width_px,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the display values the layout relies on.
    ///
    /// Every value must lie in `1..=MAX_DISPLAY_PX`. The horizontal step
    /// must be even so a level shifted by half a step stays on whole pixels
    /// and short levels share the widest level's center exactly.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let fields = [
            ("horizontal-step-px", self.horizontal_step_px),
            ("vertical-step-px", self.vertical_step_px),
            ("node-box-width-px", self.node_box_width_px),
        ];
        for (field, value) in fields {
            let reason = if value < 1 {
                "must be positive"
            } else if value > MAX_DISPLAY_PX {
                "too large"
            } else {
                continue;
            };
            return Err(LayoutError::InvalidDisplay {
                field,
                value,
                reason,
            });
        }
        if self.horizontal_step_px % 2 != 0 {
            return Err(LayoutError::InvalidDisplay {
                field: "horizontal-step-px",
                value: self.horizontal_step_px,
                reason: "must be even",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_config.rs"]
mod tests;
