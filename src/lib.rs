//! lisp-syntax-view — s-expression programs to tidy tree layouts.
//!
//! Public API: `convert()` for the node records, `render_source()` for text
//! output through one of the renderers.
//!
//! Pipeline: tokenize → parse (with `define` bindings) → node graph →
//! depths → spanning `belows` tree → contour offsets → `Layout`.

pub mod config;
pub mod error;
pub mod layout;
pub mod parsers;
pub mod renderers;
pub mod syntax;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use config::{OutputFormat, RenderConfig};
pub use error::{Error, LayoutError, ParseError, Result};
pub use layout::{Layout, NodeId, NodeKind, PlacedNode};

/// Parse `src` and lay it out.
///
/// Any syntax error fails the whole call; no partial layout is returned.
pub fn convert(src: &str) -> Result<Layout> {
    let program = parsers::parse(src)?;
    Ok(layout::full_layout(&program)?)
}

/// Parse, lay out and render `src` with the renderer `config` selects.
pub fn render_source(src: &str, config: &RenderConfig) -> Result<String> {
    let layout = convert(src)?;
    Ok(renderers::renderer_for(config).render(&layout))
}

#[cfg(test)]
#[path = "../tests/rust/test_lib.rs"]
mod tests;
