//! Renderer trait and output formats.

pub mod json;
pub mod text;

pub use json::JsonRenderer;
pub use text::TextRenderer;

use std::str::FromStr;

use crate::error::Result;
use crate::layout::types::LayoutResult;

/// Trait for layout renderers.
pub trait Renderer {
    /// Render a laid-out graph to a string.
    fn render(&self, layout: &LayoutResult) -> Result<String>;
}

/// Output formats understood by [`crate::render_dsl`] and the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Text,
    Json,
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Format::Text),
            "json" => Ok(Format::Json),
            other => Err(format!("unknown format '{other}'; use text or json")),
        }
    }
}

/// The renderer for `format`, printing a hull over `hull` when set
/// (an empty list means every node).
pub fn renderer_for(format: Format, hull: Option<Vec<String>>) -> Box<dyn Renderer> {
    match format {
        Format::Text => Box::new(TextRenderer::new().with_hull(hull)),
        Format::Json => Box::new(JsonRenderer::new().with_hull(hull)),
    }
}
