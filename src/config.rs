//! Configuration for the rendering pipeline.

use std::fmt;
use std::str::FromStr;

// ─── OutputFormat ────────────────────────────────────────────────────────────

/// Which renderer turns a `Layout` into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Node records with depth and offset, for an external renderer.
    #[default]
    Json,
    Svg,
    Ascii,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "svg" => Ok(OutputFormat::Svg),
            "ascii" | "text" => Ok(OutputFormat::Ascii),
            other => Err(format!(
                "unknown output format '{other}' (expected json, svg or ascii)"
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Json => "json",
            OutputFormat::Svg => "svg",
            OutputFormat::Ascii => "ascii",
        };
        f.write_str(name)
    }
}

// ─── RenderConfig ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub format: OutputFormat,
    /// Use Unicode line characters (true) or plain ASCII (false) in text output.
    pub unicode: bool,
    /// SVG pixels per offset unit.
    pub column_width: f64,
    /// SVG pixels per depth level.
    pub row_height: f64,
    /// SVG node circle radius.
    pub node_radius: f64,
    pub font_size: f64,
    /// SVG margin around the drawing.
    pub padding: f64,
    /// Text columns per offset unit; 0 derives it from the longest label.
    pub ascii_column_width: usize,
    /// Text lines per depth level (at least 2).
    pub ascii_row_height: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Json,
            unicode: true,
            column_width: 80.0,
            row_height: 120.0,
            node_radius: 24.0,
            font_size: 20.0,
            padding: 40.0,
            ascii_column_width: 0,
            ascii_row_height: 4,
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_format(format: OutputFormat) -> Self {
        Self {
            format,
            ..Self::default()
        }
    }
}
