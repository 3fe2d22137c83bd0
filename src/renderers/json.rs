//! JSON renderer — the layout records handed to an external drawing surface.

use log::error;

use super::Renderer;
use crate::layout::types::Layout;

/// Serialises a `Layout` (root id plus one record per node) as JSON.
pub struct JsonRenderer {
    pub pretty: bool,
}

impl JsonRenderer {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    pub fn compact() -> Self {
        Self { pretty: false }
    }
}

impl Default for JsonRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for JsonRenderer {
    fn render(&self, layout: &Layout) -> String {
        let encoded = if self.pretty {
            serde_json::to_string_pretty(layout)
        } else {
            serde_json::to_string(layout)
        };
        match encoded {
            Ok(mut out) => {
                out.push('\n');
                out
            }
            Err(e) => {
                error!("cannot serialise layout: {e}");
                String::new()
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_json.rs"]
mod tests;
