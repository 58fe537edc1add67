//! SVG renderer: converts a layout to a standalone SVG string.

use std::collections::HashMap;

use super::{Renderer, connector_lines, dot_offset, edge_colors, escape, node_box_height};
use crate::config::HeadConfig;
use crate::layout::types::{Dot, LayoutNode, LayoutResult};
use crate::syntax::types::Importance;

// ── Constants ────────────────────────────────────────────────────────────────

const TITLE_FONT_SIZE: i64 = 18;
const SUBTITLE_FONT_SIZE: i64 = 13;
const FONT_FAMILY: &str = "sans-serif";
const PADDING: i64 = 20;
const DOT_RADIUS: i64 = 5;

const FILL_STROKE: &str = r#"fill="white" stroke="black""#;

fn font(size: i64) -> String {
    format!(r#"font-family="{FONT_FAMILY}" font-size="{size}""#)
}

/// Stroke width and opacity for a node box by importance tier.
fn importance_attrs(node: &LayoutNode) -> &'static str {
    match node.def.importance {
        Importance::Lowest => r#"stroke-width="1.5" opacity="0.55""#,
        Importance::Lower => r#"stroke-width="1.5" opacity="0.7""#,
        Importance::Low => r#"stroke-width="1.5" opacity="0.85""#,
        Importance::Normal => r#"stroke-width="1.5""#,
        Importance::High => r#"stroke-width="2""#,
        Importance::Higher => r#"stroke-width="3""#,
        Importance::Highest => r#"stroke-width="4""#,
    }
}

fn render_dots(
    parts: &mut Vec<String>,
    dots: &[Dot],
    left: i64,
    y: i64,
    width: i64,
    colors: &HashMap<&str, &str>,
) {
    for (i, dot) in dots.iter().enumerate() {
        let cx = PADDING + left + dot_offset(i, dots.len(), width);
        let cy = PADDING + y;
        let fill = colors.get(dot.edge_id.as_str()).copied().unwrap_or("#999");
        parts.push(format!(
            r#"<circle id="{}" cx="{cx}" cy="{cy}" r="{DOT_RADIUS}" fill="{fill}"/>"#,
            dot.elem_id()
        ));
    }
}

fn render_node(node: &LayoutNode, width: i64, height: i64) -> String {
    let sx = PADDING + node.left;
    let sy = PADDING + node.top;
    let cx = sx + width / 2;
    let title_y = sy + height / 2 - if node.def.subtitle.is_empty() { 0 } else { 8 };
    let attrs = importance_attrs(node);

    let mut parts = vec![format!(
        r#"<rect id="{}" x="{sx}" y="{sy}" width="{width}" height="{height}" rx="6" {FILL_STROKE} {attrs}/>"#,
        node.elem_id
    )];

    let title = format!(
        r#"<text x="{cx}" y="{title_y}" dominant-baseline="central" text-anchor="middle" {}>{}</text>"#,
        font(TITLE_FONT_SIZE),
        escape(&node.def.title)
    );
    if node.link.is_empty() {
        parts.push(title);
    } else {
        parts.push(format!(r#"<a href="{}">{title}</a>"#, escape(&node.link)));
    }

    if !node.def.subtitle.is_empty() {
        let sub_y = title_y + TITLE_FONT_SIZE;
        parts.push(format!(
            r##"<text x="{cx}" y="{sub_y}" dominant-baseline="central" text-anchor="middle" {} fill="#555">{}</text>"##,
            font(SUBTITLE_FONT_SIZE),
            escape(&node.def.subtitle)
        ));
    }
    parts.join("\n")
}

/// Renders a layout as an SVG document.
pub struct SvgRenderer {
    pub head: HeadConfig,
}

impl SvgRenderer {
    pub fn new(head: HeadConfig) -> Self {
        Self { head }
    }
}

impl Renderer for SvgRenderer {
    fn render(&self, layout: &LayoutResult) -> String {
        if layout.nodes.is_empty() {
            return String::new();
        }

        let (canvas_w, canvas_h) = layout.canvas_size();
        let svg_w = PADDING * 2 + canvas_w;
        let svg_h = PADDING * 2 + canvas_h;
        let width = layout.config.node_box_width_px;
        let height = node_box_height(layout);
        let lines = connector_lines(layout);
        let colors = edge_colors(&lines);

        let mut parts = vec![
            format!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="{svg_w}" height="{svg_h}" viewBox="0 0 {svg_w} {svg_h}">"#
            ),
            format!(r#"<rect width="{svg_w}" height="{svg_h}" fill="white"/>"#),
        ];
        if !self.head.title.is_empty() {
            parts.push(format!("<title>{}</title>", escape(&self.head.title)));
        }
        if !self.head.description.is_empty() {
            parts.push(format!("<desc>{}</desc>", escape(&self.head.description)));
        }

        // Lines first, behind the boxes.
        for line in &lines {
            parts.push(format!(
                r#"<line id="L_{}" x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="2"/>"#,
                line.edge_id,
                PADDING + line.from.0,
                PADDING + line.from.1,
                PADDING + line.to.0,
                PADDING + line.to.1,
                line.color
            ));
        }

        for node in &layout.nodes {
            parts.push(render_node(node, width, height));
            render_dots(&mut parts, &node.used_by_dots, node.left, node.top, width, &colors);
            render_dots(
                &mut parts,
                &node.depends_on_dots,
                node.left,
                node.top + height,
                width,
                &colors,
            );
        }

        parts.push("</svg>".to_string());
        parts.join("\n")
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_svg.rs"]
mod tests;
