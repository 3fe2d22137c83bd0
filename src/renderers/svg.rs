//! SVG renderer — circles per node, Bézier curves per `childs` edge.
//!
//! A node sits at `(column_width * offset, row_height * depth)`, translated so
//! the leftmost node clears the padding. Every edge leaves the parent's lower
//! rim at a slot spread by argument position and ends on the child's top,
//! marked with a small triangle where it leaves the parent.

use super::Renderer;
use crate::config::RenderConfig;
use crate::layout::types::{Layout, NodeKind, PlacedNode};

// ── Constants ────────────────────────────────────────────────────────────────

/// Half-width of the edge triangle.
const ARROW_SCALE: f64 = 3.0;
const FONT_FAMILY: &str = "Consolas, monospace";

const FILL_STROKE: &str = r#"fill="white" stroke="black" stroke-width="1.5""#;
const VARIABLE_DASH: &str = r#" stroke-dasharray="4 2""#;

// ── Helpers ──────────────────────────────────────────────────────────────────

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Format a coordinate with at most two decimals and no trailing zeros.
fn num(v: f64) -> String {
    let s = format!("{v:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

// ── Renderer ─────────────────────────────────────────────────────────────────

pub struct SvgRenderer {
    pub column_width: f64,
    pub row_height: f64,
    pub node_radius: f64,
    pub font_size: f64,
    pub padding: f64,
}

impl SvgRenderer {
    pub fn from_config(config: &RenderConfig) -> Self {
        Self {
            column_width: config.column_width,
            row_height: config.row_height,
            node_radius: config.node_radius,
            font_size: config.font_size,
            padding: config.padding,
        }
    }

    /// Pixel centre of a node.
    fn centre(&self, node: &PlacedNode, min_offset: f64) -> (f64, f64) {
        let inset = self.padding + self.node_radius;
        (
            inset + self.column_width * (node.offset - min_offset),
            inset + self.row_height * node.depth as f64,
        )
    }

    fn render_edge(&self, from: (f64, f64), slot: usize, slots: usize, to: (f64, f64)) -> String {
        let r = self.node_radius;
        let x1 = from.0 + (slot + 1) as f64 / (slots + 1) as f64 * 2.0 * r - r;
        let y1 = from.1 + r;
        let (x2, y2) = (to.0, to.1 - r);
        let mid = (y1 + y2) / 2.0;
        let s = ARROW_SCALE;
        let tip = y1 + 3f64.sqrt() * s;

        format!(
            "<polygon points=\"{},{} {},{} {},{}\" fill=\"black\"/>\n\
             <path d=\"M {} {} C {} {}, {} {}, {} {}\" fill=\"none\" stroke=\"black\" stroke-width=\"1.5\"/>",
            num(x1),
            num(y1),
            num(x1 - s),
            num(tip),
            num(x1 + s),
            num(tip),
            num(x1),
            num(y1),
            num(x1),
            num(mid),
            num(x2),
            num(mid),
            num(x2),
            num(y2),
        )
    }

    fn render_node(&self, node: &PlacedNode, (cx, cy): (f64, f64)) -> String {
        let dash = if node.kind == NodeKind::Variable {
            VARIABLE_DASH
        } else {
            ""
        };
        let (cx, cy) = (num(cx), num(cy));
        format!(
            "<circle cx=\"{cx}\" cy=\"{cy}\" r=\"{}\" {FILL_STROKE}{dash}/>\n\
             <text x=\"{cx}\" y=\"{cy}\" dominant-baseline=\"central\" text-anchor=\"middle\" \
             font-family=\"{FONT_FAMILY}\" font-size=\"{}\">{}</text>",
            num(self.node_radius),
            num(self.font_size),
            escape(&node.label)
        )
    }
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::from_config(&RenderConfig::default())
    }
}

impl Renderer for SvgRenderer {
    fn render(&self, layout: &Layout) -> String {
        if layout.is_empty() {
            return String::new();
        }

        let min_offset = layout.min_offset();
        let centres: Vec<(f64, f64)> = layout
            .nodes
            .iter()
            .map(|n| self.centre(n, min_offset))
            .collect();

        let inset = self.padding + self.node_radius;
        let svg_w = num(self.column_width * layout.width() + 2.0 * inset);
        let svg_h = num(self.row_height * (layout.height() - 1) as f64 + 2.0 * inset);

        let mut parts = vec![
            format!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="{svg_w}" height="{svg_h}" viewBox="0 0 {svg_w} {svg_h}">"#
            ),
            format!(r#"<rect width="{svg_w}" height="{svg_h}" fill="white"/>"#),
        ];

        // Edges first so circles cover their ends.
        for node in &layout.nodes {
            let slots = node.childs.len();
            for (slot, &child) in node.childs.iter().enumerate() {
                parts.push(self.render_edge(centres[node.id], slot, slots, centres[child]));
            }
        }

        for node in &layout.nodes {
            parts.push(self.render_node(node, centres[node.id]));
        }

        parts.push("</svg>".to_string());
        let mut out = parts.join("\n");
        out.push('\n');
        out
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_svg.rs"]
mod tests;
