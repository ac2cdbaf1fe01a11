//! flowlayout: layered layout for directed flowchart graphs.
//!
//! Public API: `layout_dsl()` and `render_dsl()` for flowchart text, or the
//! individual stages in [`layout`] for graphs built in code:
//!
//! ```text
//! Graph → remove_cycles → rank_vertices → align_vertices → LayoutResult
//! ```
//!
//! [`geometry::convex_hull`] is independent of the pipeline and is used to
//! outline a selection of laid-out nodes.

pub mod config;
pub mod error;
pub mod geometry;
pub mod graph;
pub mod layout;
pub mod renderers;
pub mod syntax;

pub use config::LayoutConfig;
pub use error::{Error, Result};
pub use graph::{Graph, Vertex, VertexId};
pub use layout::{LayoutResult, full_layout};
pub use renderers::Format;

use crate::layout::layout_with_direction;
use crate::renderers::{Renderer, renderer_for};
use crate::syntax::parse;

/// Parse a flowchart string and lay it out.
///
/// The config direction, when set, overrides the diagram header.
pub fn layout_dsl(src: &str, config: &LayoutConfig) -> Result<LayoutResult> {
    let mut chart = parse(src)?;
    let direction = config.resolve_direction(chart.direction);
    layout_with_direction(&mut chart.graph, direction, config)
}

/// Parse a flowchart string, lay it out and render it in `format`.
///
/// `hull` selects node names to outline (empty = all nodes); `None` skips the
/// hull.
pub fn render_dsl(
    src: &str,
    format: Format,
    config: &LayoutConfig,
    hull: Option<Vec<String>>,
) -> Result<String> {
    let layout = layout_dsl(src, config)?;
    renderer_for(format, hull).render(&layout)
}

#[cfg(test)]
#[path = "../tests/rust/test_api.rs"]
mod tests;
