//! Layout types: Ranking, Alignment, LayoutNode, LayoutEdge, LayoutResult.

use serde::Serialize;

use crate::geometry::{BoundingBox, Point, convex_hull};
use crate::graph::VertexId;
use crate::syntax::Direction;

// ─── Ranking ─────────────────────────────────────────────────────────────────

/// Vertices sharing one rank, in display order.
pub type Layer = Vec<VertexId>;

/// Layers indexed by rank, plus the rank of every vertex.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Ranking {
    pub(crate) layers: Vec<Layer>,
    pub(crate) rank: Vec<usize>,
}

impl Ranking {
    /// A ranking with a caller-chosen layer order; the rank of each vertex is
    /// the index of the layer that lists it.
    ///
    /// Vertices listed in no layer have no rank. A vertex listed twice takes
    /// the later layer.
    pub fn from_layers(layers: Vec<Layer>) -> Self {
        let len = layers
            .iter()
            .flatten()
            .map(|v| v.index() + 1)
            .max()
            .unwrap_or(0);
        let mut rank = vec![usize::MAX; len];
        for (r, layer) in layers.iter().enumerate() {
            for v in layer {
                rank[v.index()] = r;
            }
        }
        Self { layers, rank }
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn layer(&self, rank: usize) -> Option<&Layer> {
        self.layers.get(rank)
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Rank of `v`, or `None` for vertices the ranking does not place.
    pub fn rank_of(&self, v: VertexId) -> Option<usize> {
        self.rank
            .get(v.index())
            .copied()
            .filter(|&r| r < self.layers.len())
    }

    /// Position of `v` within its layer.
    pub fn column_of(&self, v: VertexId) -> Option<usize> {
        let layer = self.layers.get(self.rank_of(v)?)?;
        layer.iter().position(|&u| u == v)
    }
}

// ─── Alignment ───────────────────────────────────────────────────────────────

/// A ranking with layers reordered by horizontal position.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Alignment {
    pub ranking: Ranking,
    pub(crate) x: Vec<f64>,
}

impl Alignment {
    pub fn x_of(&self, v: VertexId) -> Option<f64> {
        self.x.get(v.index()).copied()
    }

    pub fn layers(&self) -> &[Layer] {
        self.ranking.layers()
    }
}

// ─── LayoutNode ──────────────────────────────────────────────────────────────

/// A vertex with its final canvas position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutNode {
    pub name: String,
    pub label: String,
    pub layer: usize,
    pub order: usize,
    /// Barycenter position within the layer before spacing is applied.
    pub offset: f64,
    pub x: f64,
    pub y: f64,
}

impl LayoutNode {
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

// ─── LayoutEdge ──────────────────────────────────────────────────────────────

/// An edge of the laid-out (acyclic) graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutEdge {
    pub from: String,
    pub to: String,
    /// True when the input edge ran `to → from` and was flipped to break a
    /// cycle. Renderers draw the arrowhead at `from` for these.
    pub reversed: bool,
}

impl LayoutEdge {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            reversed: false,
        }
    }
}

// ─── LayoutResult ────────────────────────────────────────────────────────────

/// The full output of the layout pipeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutResult {
    pub direction: Direction,
    /// Nodes grouped by layer, each layer in aligned order.
    pub nodes: Vec<LayoutNode>,
    pub edges: Vec<LayoutEdge>,
    /// Self-loops dropped during cycle elimination, by vertex name.
    pub dropped_self_loops: Vec<String>,
    /// Omitted from serialized output when there are no nodes.
    #[serde(skip_serializing_if = "BoundingBox::is_empty")]
    pub bounds: BoundingBox,
}

impl LayoutResult {
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            nodes: Vec::new(),
            edges: Vec::new(),
            dropped_self_loops: Vec::new(),
            bounds: BoundingBox::empty(),
        }
    }

    pub fn node(&self, name: &str) -> Option<&LayoutNode> {
        self.nodes.iter().find(|n| n.name == name)
    }

    pub fn layer_count(&self) -> usize {
        self.nodes.iter().map(|n| n.layer + 1).max().unwrap_or(0)
    }

    /// Nodes of one layer in display order.
    pub fn layer(&self, layer: usize) -> Vec<&LayoutNode> {
        let mut nodes: Vec<&LayoutNode> = self.nodes.iter().filter(|n| n.layer == layer).collect();
        nodes.sort_by_key(|n| n.order);
        nodes
    }

    /// Convex hull around the named nodes, or around every node when
    /// `names` is empty. Unknown names are ignored.
    pub fn hull(&self, names: &[&str]) -> Vec<Point> {
        let points: Vec<Point> = self
            .nodes
            .iter()
            .filter(|n| names.is_empty() || names.contains(&n.name.as_str()))
            .map(LayoutNode::position)
            .collect();
        convex_hull(&points)
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_types.rs"]
mod tests;
