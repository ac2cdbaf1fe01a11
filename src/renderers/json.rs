//! JSON layout output via serde_json.

use serde::Serialize;

use super::Renderer;
use crate::error::Result;
use crate::geometry::Point;
use crate::layout::types::LayoutResult;

#[derive(Serialize)]
struct JsonDocument<'a> {
    #[serde(flatten)]
    layout: &'a LayoutResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    hull: Option<Vec<Point>>,
}

/// Pretty-printed JSON of the whole [`LayoutResult`].
#[derive(Debug, Clone, Default)]
pub struct JsonRenderer {
    /// Node names to wrap in a hull; empty = all nodes, None = no hull field.
    pub hull: Option<Vec<String>>,
}

impl JsonRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hull(mut self, hull: Option<Vec<String>>) -> Self {
        self.hull = hull;
        self
    }
}

impl Renderer for JsonRenderer {
    fn render(&self, layout: &LayoutResult) -> Result<String> {
        let hull = self.hull.as_ref().map(|names| {
            let names: Vec<&str> = names.iter().map(String::as_str).collect();
            layout.hull(&names)
        });
        let doc = JsonDocument { layout, hull };
        let mut out = serde_json::to_string_pretty(&doc)?;
        out.push('\n');
        Ok(out)
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_json.rs"]
mod tests;
