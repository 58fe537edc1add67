//! Renderers and the geometry they share.
//!
//! Both renderers draw one straight line per dependency edge, from the
//! depends-on dot at the bottom of the dependent to the used-by dot at the
//! top of the dependency. Dots are spread evenly across the box width in
//! their (untangled) list order.

pub mod html;
pub mod svg;

pub use html::HtmlRenderer;
pub use svg::SvgRenderer;

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::config::HeadConfig;
use crate::layout::types::{LayoutNode, LayoutResult};

/// Height of a node box in pixels, before clamping to the vertical step.
pub const NODE_BOX_HEIGHT_PX: i64 = 120;
/// Hue increment between consecutive edge colors, in degrees.
pub const HUE_STEP: u32 = 67;

/// Trait for diagram renderers.
pub trait Renderer {
    /// Render a laid-out graph to a string.
    fn render(&self, layout: &LayoutResult) -> String;
}

// ─── OutputFormat ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Html,
    Svg,
}

impl OutputFormat {
    pub fn renderer(&self, head: HeadConfig) -> Box<dyn Renderer> {
        match self {
            OutputFormat::Html => Box::new(HtmlRenderer::new(head)),
            OutputFormat::Svg => Box::new(SvgRenderer::new(head)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Html => f.write_str("html"),
            OutputFormat::Svg => f.write_str("svg"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "html" => Ok(OutputFormat::Html),
            "svg" => Ok(OutputFormat::Svg),
            other => Err(format!("Unknown output format '{other}'; use html or svg")),
        }
    }
}

// ─── Shared geometry ─────────────────────────────────────────────────────────

/// A straight line between the two dots of one edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectorLine {
    pub edge_id: String,
    pub from: (i64, i64),
    pub to: (i64, i64),
    pub color: String,
}

/// Box height used for every node of this layout.
pub fn node_box_height(layout: &LayoutResult) -> i64 {
    NODE_BOX_HEIGHT_PX.min((layout.config.vertical_step_px * 2 / 3).max(1))
}

/// Horizontal offset of dot `index` out of `count` inside a box of `width`.
pub fn dot_offset(index: usize, count: usize, width: i64) -> i64 {
    (index as i64 + 1) * width / (count as i64 + 1)
}

/// Color for the `n`-th edge.
pub fn edge_color(n: usize) -> String {
    let hue = (n as u64 * HUE_STEP as u64) % 360;
    format!("hsl({hue}, 40%, 50%)")
}

/// One line per edge, in node order then depends-on dot order.
pub fn connector_lines(layout: &LayoutResult) -> Vec<ConnectorLine> {
    let width = layout.config.node_box_width_px;
    let height = node_box_height(layout);
    let mut lines = Vec::new();
    for node in &layout.nodes {
        let count = node.depends_on_dots.len();
        for (i, dot) in node.depends_on_dots.iter().enumerate() {
            let Some(partner) = layout.node(dot.partner) else {
                continue;
            };
            let Some(j) = partner
                .used_by_dots
                .iter()
                .position(|d| d.edge_id == dot.edge_id)
            else {
                tracing::warn!(edge = %dot.edge_id, "no matching used-by dot");
                continue;
            };
            lines.push(ConnectorLine {
                edge_id: dot.edge_id.clone(),
                from: (node.left + dot_offset(i, count, width), node.top + height),
                to: (
                    partner.left + dot_offset(j, partner.used_by_dots.len(), width),
                    partner.top,
                ),
                color: edge_color(lines.len()),
            });
        }
    }
    lines
}

/// Edge id → color, for painting dots the same color as their line.
pub fn edge_colors(lines: &[ConnectorLine]) -> HashMap<&str, &str> {
    lines
        .iter()
        .map(|l| (l.edge_id.as_str(), l.color.as_str()))
        .collect()
}

/// Importance class used for styling a node box.
pub fn importance_class(node: &LayoutNode) -> String {
    format!("importance-{}", node.def.importance)
}

pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers.rs"]
mod tests;
