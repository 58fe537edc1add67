//! HTML renderer: a self-contained page with positioned node boxes,
//! connector dots and an inline SVG layer for the lines.

use std::collections::HashMap;

use super::{
    Renderer, connector_lines, dot_offset, edge_colors, escape, importance_class,
    node_box_height,
};
use crate::config::HeadConfig;
use crate::layout::types::{Dot, LayoutNode, LayoutResult};

// ── Constants ────────────────────────────────────────────────────────────────

const MARGIN_PX: i64 = 40;
const DOT_SIZE_PX: i64 = 10;
const DEFAULT_TITLE: &str = "Graph";

const STYLE: &str = r#"
body { margin: 0; font-family: sans-serif; background: #fafafa; }
#graph { position: relative; }
svg.links { position: absolute; left: 0; top: 0; pointer-events: none; }
.node { position: absolute; box-sizing: border-box; border: 1px solid #555;
        border-radius: 6px; background: white; text-align: center; }
.node .title { font-size: 18px; margin-top: 22px; }
.node .subtitle { font-size: 13px; color: #555; margin-top: 6px; }
.node a { color: inherit; }
.dot { position: absolute; width: 10px; height: 10px; border-radius: 50%; background: #999; }
.dots.used-by .dot { top: -5px; }
.dots.depends-on .dot { bottom: -5px; }
.importance-lowest { opacity: 0.55; }
.importance-lower { opacity: 0.7; }
.importance-low { opacity: 0.85; }
.importance-high { border-width: 2px; }
.importance-higher { border-width: 3px; }
.importance-highest { border-width: 4px; font-weight: bold; }
"#;

/// Renders a layout as an HTML document.
pub struct HtmlRenderer {
    pub head: HeadConfig,
}

impl HtmlRenderer {
    pub fn new(head: HeadConfig) -> Self {
        Self { head }
    }

    fn render_head(&self, parts: &mut Vec<String>) {
        let title = if self.head.title.is_empty() {
            DEFAULT_TITLE
        } else {
            self.head.title.as_str()
        };
        parts.push("<head>".to_string());
        parts.push(r#"<meta charset="utf-8">"#.to_string());
        parts.push(format!("<title>{}</title>", escape(title)));
        if !self.head.description.is_empty() {
            parts.push(format!(
                r#"<meta name="description" content="{}">"#,
                escape(&self.head.description)
            ));
        }
        if !self.head.author.is_empty() {
            parts.push(format!(
                r#"<meta name="author" content="{}">"#,
                escape(&self.head.author)
            ));
        }
        parts.push(format!("<style>{STYLE}</style>"));
        parts.push("</head>".to_string());
    }
}

fn render_dots(
    parts: &mut Vec<String>,
    dots: &[Dot],
    class: &str,
    dot_class: &str,
    width: i64,
    colors: &HashMap<&str, &str>,
) {
    if dots.is_empty() {
        return;
    }
    parts.push(format!(r#"  <div class="dots {class}">"#));
    for (i, dot) in dots.iter().enumerate() {
        let left = dot_offset(i, dots.len(), width) - DOT_SIZE_PX / 2;
        let color = colors
            .get(dot.edge_id.as_str())
            .map(|c| format!(" background-color: {c};"))
            .unwrap_or_default();
        parts.push(format!(
            r#"    <div id="{}" class="dot {dot_class}" data-partner="{}" style="left: {left}px;{color}"></div>"#,
            dot.elem_id(),
            dot.partner_elem_id,
        ));
    }
    parts.push("  </div>".to_string());
}

fn render_node(
    parts: &mut Vec<String>,
    node: &LayoutNode,
    width: i64,
    height: i64,
    colors: &HashMap<&str, &str>,
) {
    parts.push(format!(
        r#"<div id="{}" class="node {}" style="left: {}px; top: {}px; width: {width}px; height: {height}px;">"#,
        node.elem_id,
        importance_class(node),
        node.left,
        node.top,
    ));
    render_dots(parts, &node.used_by_dots, "used-by", "link-target", width, colors);

    let title = escape(&node.def.title);
    if node.link.is_empty() {
        parts.push(format!(r#"  <div class="title">{title}</div>"#));
    } else {
        parts.push(format!(
            r#"  <div class="title"><a href="{}">{title}</a></div>"#,
            escape(&node.link)
        ));
    }
    if !node.def.subtitle.is_empty() {
        parts.push(format!(
            r#"  <div class="subtitle">{}</div>"#,
            escape(&node.def.subtitle)
        ));
    }

    render_dots(parts, &node.depends_on_dots, "depends-on", "link-source", width, colors);
    parts.push("</div>".to_string());
}

impl Renderer for HtmlRenderer {
    fn render(&self, layout: &LayoutResult) -> String {
        let (canvas_w, canvas_h) = layout.canvas_size();
        let width = layout.config.node_box_width_px;
        let height = node_box_height(layout);
        let lines = connector_lines(layout);
        let colors = edge_colors(&lines);

        let mut parts = vec![
            "<!DOCTYPE html>".to_string(),
            r#"<html lang="en">"#.to_string(),
        ];
        self.render_head(&mut parts);
        parts.push("<body>".to_string());
        parts.push(format!(
            r#"<div id="graph" style="width: {canvas_w}px; height: {canvas_h}px; margin: {MARGIN_PX}px;">"#
        ));

        parts.push(format!(
            r#"<svg class="links" xmlns="http://www.w3.org/2000/svg" width="{canvas_w}" height="{canvas_h}">"#
        ));
        for line in &lines {
            parts.push(format!(
                r#"  <line id="L_{}" x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="2"/>"#,
                line.edge_id, line.from.0, line.from.1, line.to.0, line.to.1, line.color
            ));
        }
        parts.push("</svg>".to_string());

        for node in &layout.nodes {
            render_node(&mut parts, node, width, height, &colors);
        }

        parts.push("</div>".to_string());
        parts.push("</body>".to_string());
        parts.push("</html>".to_string());
        let mut out = parts.join("\n");
        out.push('\n');
        out
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_html.rs"]
mod tests;
