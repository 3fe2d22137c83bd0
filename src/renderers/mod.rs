//! Renderer registry and Renderer trait.

pub mod ascii;
pub mod canvas;
pub mod charset;
pub mod json;
pub mod svg;

pub use ascii::AsciiRenderer;
pub use json::JsonRenderer;
pub use svg::SvgRenderer;

use crate::config::{OutputFormat, RenderConfig};
use crate::layout::types::Layout;

/// Trait for layout renderers.
pub trait Renderer {
    /// Render a finished layout to a string.
    fn render(&self, layout: &Layout) -> String;
}

/// Pick the renderer for `config.format`, configured from `config`.
pub fn renderer_for(config: &RenderConfig) -> Box<dyn Renderer> {
    match config.format {
        OutputFormat::Json => Box::new(JsonRenderer::new()),
        OutputFormat::Svg => Box::new(SvgRenderer::from_config(config)),
        OutputFormat::Ascii => Box::new(AsciiRenderer::from_config(config)),
    }
}
