//! Layout engine: cycle removal, ranking, alignment and placement.
//!
//! Stages, in the order [`full_layout`] runs them:
//!   1. Strongly connected components ([`scc`])
//!   2. Cycle elimination by back-edge reversal ([`acyclic`])
//!   3. Layer assignment ([`rank`])
//!   4. One-pass barycenter alignment ([`align`])
//!   5. Placement on the canvas from (rank, x) and the config spacing

pub mod acyclic;
pub mod align;
pub mod rank;
pub mod scc;
pub mod types;

use std::collections::HashSet;

use tracing::debug;

pub use acyclic::{acyclic_copy, make_acyclic, remove_cycles};
pub use align::align_vertices;
pub use rank::rank_vertices;
pub use scc::{Component, condensation, strongly_connected_components};
pub use types::{Alignment, Layer, LayoutEdge, LayoutNode, LayoutResult, Ranking};

use crate::config::LayoutConfig;
use crate::error::Result;
use crate::geometry::{BoundingBox, Point};
use crate::graph::{Graph, VertexId};
use crate::syntax::Direction;

/// Run the whole pipeline on `graph`, leaving it acyclic.
///
/// `adj` is rewritten by cycle elimination and `adj_inverted` is rebuilt from
/// the result before alignment. The direction is the config override, TD
/// when none is set.
pub fn full_layout(graph: &mut Graph, config: &LayoutConfig) -> Result<LayoutResult> {
    layout_with_direction(graph, config.resolve_direction(Direction::TD), config)
}

/// Non-mutating variant of [`full_layout`]: lays out a copy of `graph`.
pub fn layout_graph(graph: &Graph, config: &LayoutConfig) -> Result<LayoutResult> {
    let mut copy = graph.clone();
    full_layout(&mut copy, config)
}

pub(crate) fn layout_with_direction(
    graph: &mut Graph,
    direction: Direction,
    config: &LayoutConfig,
) -> Result<LayoutResult> {
    let original: HashSet<(VertexId, VertexId)> = graph.edges().into_iter().collect();

    let removed = remove_cycles(graph);
    graph.derive_inverted();
    let ranking = rank_vertices(graph)?;
    let alignment = align_vertices(graph, Some(ranking))?;

    let mut result = LayoutResult::new(direction);
    let last_layer = alignment.layers().len().saturating_sub(1);
    for (layer_idx, layer) in alignment.layers().iter().enumerate() {
        for (order, &v) in layer.iter().enumerate() {
            let offset = alignment.x_of(v).unwrap_or(0.0);
            let p = place(direction, layer_idx, last_layer, offset, config);
            let (name, label) = match graph.vertex(v) {
                Some(vertex) => (vertex.name.clone(), vertex.label.clone()),
                None => continue,
            };
            result.nodes.push(LayoutNode {
                name,
                label,
                layer: layer_idx,
                order,
                offset,
                x: p.x,
                y: p.y,
            });
        }
    }

    result.edges = graph
        .edges()
        .into_iter()
        .map(|(from, to)| LayoutEdge {
            from: graph.name(from).to_string(),
            to: graph.name(to).to_string(),
            reversed: !original.contains(&(from, to)),
        })
        .collect();
    result.dropped_self_loops = removed
        .iter()
        .filter(|(from, to)| from == to)
        .map(|&(v, _)| graph.name(v).to_string())
        .collect();
    let positions: Vec<Point> = result.nodes.iter().map(LayoutNode::position).collect();
    result.bounds = BoundingBox::from_points(&positions);

    debug!(
        nodes = result.nodes.len(),
        edges = result.edges.len(),
        layers = last_layer + 1,
        %direction,
        "layout complete"
    );
    Ok(result)
}

/// Map a (layer, in-layer offset) pair to canvas coordinates.
fn place(
    direction: Direction,
    layer: usize,
    last_layer: usize,
    offset: f64,
    config: &LayoutConfig,
) -> Point {
    let along = |l: usize| l as f64 * config.layer_spacing;
    let across = offset * config.column_spacing;
    match direction {
        Direction::TD => Point::new(across, along(layer)),
        Direction::BT => Point::new(across, along(last_layer - layer)),
        Direction::LR => Point::new(along(layer), across),
        Direction::RL => Point::new(along(last_layer - layer), across),
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_pipeline.rs"]
mod tests;
