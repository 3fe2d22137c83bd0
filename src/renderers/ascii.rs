//! Text renderer — the layout painted on a character `Canvas`.
//!
//! Each depth is one label row, `row_height` lines apart. Labels are centred
//! on their column; edges drop from the parent to a bus line just below it,
//! run across, and fall to the child with an arrowhead above its label.

use super::Renderer;
use super::canvas::Canvas;
use super::charset::{CharSet, Junction, LineChars};
use crate::config::RenderConfig;
use crate::layout::types::{Layout, NodeKind, PlacedNode};

const MIN_COLUMN_WIDTH: usize = 4;
const MIN_ROW_HEIGHT: usize = 2;

pub struct AsciiRenderer {
    pub charset: CharSet,
    /// Columns per offset unit; 0 derives it from the widest label.
    pub column_width: usize,
    pub row_height: usize,
}

impl AsciiRenderer {
    pub fn new(unicode: bool) -> Self {
        Self {
            charset: CharSet::from_unicode_flag(unicode),
            column_width: 0,
            row_height: 4,
        }
    }

    pub fn from_config(config: &RenderConfig) -> Self {
        Self {
            charset: CharSet::from_unicode_flag(config.unicode),
            column_width: config.ascii_column_width,
            row_height: config.ascii_row_height,
        }
    }

    fn label(&self, node: &PlacedNode, chars: &LineChars) -> String {
        match node.kind {
            NodeKind::Variable => {
                format!("{}{}{}", chars.variable_open, node.label, chars.variable_close)
            }
            _ => node.label.clone(),
        }
    }
}

/// Wire one edge: up-arm at the parent, across the bus row, down to the child.
fn wire(canvas: &mut Canvas, (px, prow): (usize, usize), (cx, crow): (usize, usize), arrow: char) {
    let bus = prow + 1;
    if bus >= crow {
        return;
    }
    let dx = cx as i64 - px as i64;
    let up = Junction::new(true, false, false, false);
    let down = Junction::new(false, true, false, false);

    canvas.join(px, bus, up.merge(Junction::toward(dx)));
    canvas.hline_between(bus, px, cx);
    canvas.join(cx, bus, down.merge(Junction::toward(-dx)));
    if crow - 1 > bus {
        canvas.vline(cx, bus + 1, crow - 2);
        canvas.set(cx, crow - 1, arrow);
    }
}

impl Renderer for AsciiRenderer {
    fn render(&self, layout: &Layout) -> String {
        if layout.is_empty() {
            return String::new();
        }

        let chars = LineChars::for_charset(self.charset);
        let labels: Vec<String> = layout.nodes.iter().map(|n| self.label(n, &chars)).collect();
        let widest = labels.iter().map(|l| l.chars().count()).max().unwrap_or(1);
        let unit = match self.column_width {
            0 => (widest + 2).max(MIN_COLUMN_WIDTH),
            w => w,
        };
        let rows = self.row_height.max(MIN_ROW_HEIGHT);

        let margin = widest / 2;
        let min_offset = layout.min_offset();
        let columns: Vec<usize> = layout
            .nodes
            .iter()
            .map(|n| margin + ((n.offset - min_offset) * unit as f64).round() as usize)
            .collect();
        let width = columns.iter().max().copied().unwrap_or(0) + widest + 1;
        let height = (layout.height() - 1) * rows + 1;

        let mut canvas = Canvas::new(width, height, self.charset);
        for (parent, child, _) in layout.edges() {
            let from = (columns[parent], layout.node(parent).depth * rows);
            let to = (columns[child], layout.node(child).depth * rows);
            wire(&mut canvas, from, to, chars.arrow_down);
        }
        // Labels last so wiring never hides them.
        for (node, label) in layout.nodes.iter().zip(&labels) {
            let half = label.chars().count() / 2;
            canvas.write_str(columns[node.id] - half, node.depth * rows, label);
        }

        canvas.render_to_string()
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_ascii.rs"]
mod tests;
