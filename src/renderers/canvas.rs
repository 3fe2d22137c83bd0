//! Canvas — 2D character grid that text layouts are painted on.

use super::charset::{CharSet, Junction};

/// A 2D character grid used as a painting surface.
pub struct Canvas {
    pub width: usize,
    pub height: usize,
    pub charset: CharSet,
    cells: Vec<Vec<char>>,
}

impl Canvas {
    pub fn new(width: usize, height: usize, charset: CharSet) -> Self {
        Self {
            width,
            height,
            charset,
            cells: vec![vec![' '; width]; height],
        }
    }

    pub fn get(&self, col: usize, row: usize) -> char {
        if row < self.height && col < self.width {
            self.cells[row][col]
        } else {
            ' '
        }
    }

    pub fn set(&mut self, col: usize, row: usize, ch: char) {
        if row < self.height && col < self.width {
            self.cells[row][col] = ch;
        }
    }

    /// Add the arms of `junction` to whatever wiring is already in the cell.
    pub fn join(&mut self, col: usize, row: usize, junction: Junction) {
        if row >= self.height || col >= self.width {
            return;
        }
        let merged = match Junction::from_char(self.cells[row][col]) {
            Some(existing) => existing.merge(junction),
            None => junction,
        };
        self.cells[row][col] = merged.to_char(self.charset);
    }

    /// Horizontal run on `row` between two columns, both ends exclusive.
    pub fn hline_between(&mut self, row: usize, a: usize, b: usize) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        for col in lo + 1..hi {
            self.join(col, row, Junction::HORIZONTAL);
        }
    }

    /// Vertical run in `col` from `top` to `bottom`, inclusive.
    pub fn vline(&mut self, col: usize, top: usize, bottom: usize) {
        for row in top..=bottom {
            self.join(col, row, Junction::VERTICAL);
        }
    }

    /// Write a string starting at (col, row).
    pub fn write_str(&mut self, col: usize, row: usize, s: &str) {
        for (i, ch) in s.chars().enumerate() {
            let c = col + i;
            if c >= self.width || row >= self.height {
                break;
            }
            self.cells[row][c] = ch;
        }
    }

    /// Render the canvas to a string, trimming trailing whitespace per line.
    pub fn render_to_string(&self) -> String {
        let mut lines: Vec<String> = self
            .cells
            .iter()
            .map(|row| row.iter().collect::<String>().trim_end().to_string())
            .collect();
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

impl std::fmt::Display for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render_to_string())
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
