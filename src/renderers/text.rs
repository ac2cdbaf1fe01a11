//! Plain-text layout listing.
//!
//! ```text
//! direction: TD
//! layer 0: A@(0.0,0.0)
//! layer 1: B@(0.0,80.0) C@(60.0,80.0)
//! bounds: (0.0,0.0)-(60.0,80.0)
//! hull: (0.0,80.0) (60.0,80.0) (0.0,0.0)
//! ```

use std::fmt::Write;

use super::Renderer;
use crate::error::Result;
use crate::geometry::Point;
use crate::layout::types::LayoutResult;

/// Renders one line per layer, followed by reversed edges, bounds and an
/// optional hull.
#[derive(Debug, Clone, Default)]
pub struct TextRenderer {
    /// Node names to wrap in a hull; empty = all nodes, None = no hull line.
    pub hull: Option<Vec<String>>,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hull(mut self, hull: Option<Vec<String>>) -> Self {
        self.hull = hull;
        self
    }
}

fn fmt_point(p: Point) -> String {
    format!("({:.1},{:.1})", p.x, p.y)
}

impl Renderer for TextRenderer {
    fn render(&self, layout: &LayoutResult) -> Result<String> {
        if layout.nodes.is_empty() {
            return Ok(String::new());
        }

        let mut out = String::new();
        let _ = writeln!(out, "direction: {}", layout.direction);
        for layer in 0..layout.layer_count() {
            let entries: Vec<String> = layout
                .layer(layer)
                .iter()
                .map(|n| format!("{}@{}", n.name, fmt_point(n.position())))
                .collect();
            let _ = writeln!(out, "layer {layer}: {}", entries.join(" "));
        }
        for edge in layout.edges.iter().filter(|e| e.reversed) {
            // Shown in the direction it was written.
            let _ = writeln!(out, "reversed: {} -> {}", edge.to, edge.from);
        }
        for name in &layout.dropped_self_loops {
            let _ = writeln!(out, "dropped self-loop: {name}");
        }
        let b = &layout.bounds;
        let _ = writeln!(
            out,
            "bounds: {}-{}",
            fmt_point(Point::new(b.left, b.top)),
            fmt_point(Point::new(b.right, b.bottom))
        );
        if let Some(names) = &self.hull {
            let names: Vec<&str> = names.iter().map(String::as_str).collect();
            let points: Vec<String> = layout.hull(&names).into_iter().map(fmt_point).collect();
            let _ = writeln!(out, "hull: {}", points.join(" "));
        }
        Ok(out)
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_text.rs"]
mod tests;
