//! Cycle elimination by back-edge reversal.
//!
//! Each strongly connected component is walked depth-first on its own. An
//! edge `v → w` whose target is still on the walk's stack closes a cycle: it
//! is removed from `v`'s list and `w → v` is appended to `w`'s list unless
//! `w` already has an edge to `v`. Edges between components are never
//! touched; the component order already makes them acyclic.
//!
//! Self-loops are dropped outright. Their reverse is the same edge.

use tracing::{debug, trace};

use super::scc::strongly_connected_components;
use crate::graph::adjacency::{AdjacencyLists, EdgeHandle};
use crate::graph::{Graph, VertexId};

/// Break every cycle of `graph` in place and return it for chaining.
///
/// The vertex set is unchanged. Only the direction of the edges that close a
/// cycle during the walk changes.
pub fn make_acyclic(graph: &mut Graph) -> &mut Graph {
    remove_cycles(graph);
    graph
}

/// Non-mutating variant of [`make_acyclic`].
pub fn acyclic_copy(graph: &Graph) -> Graph {
    let mut copy = graph.clone();
    remove_cycles(&mut copy);
    copy
}

/// Break every cycle of `graph` in place.
///
/// Returns the removed edges in their original direction, in removal order.
/// For each one, `graph` now holds the reverse edge unless it was a self-loop.
pub fn remove_cycles(graph: &mut Graph) -> Vec<(VertexId, VertexId)> {
    let n = graph.len();
    let mut lists = AdjacencyLists::from_graph(graph);
    let sccs = strongly_connected_components(graph);

    let mut component_of = vec![0usize; n];
    for (c, members) in sccs.iter().enumerate() {
        for &v in members {
            component_of[v.index()] = c;
        }
    }

    let mut walk = BackEdgeWalk {
        lists: &mut lists,
        component_of: &component_of,
        marked: vec![false; n],
        on_stack: vec![false; n],
        removed: Vec::new(),
    };

    for (c, members) in sccs.iter().enumerate() {
        for &v in members {
            walk.marked[v.index()] = false;
        }
        for &v in members {
            if !walk.marked[v.index()] {
                walk.traverse(v, c);
            }
        }
    }

    let removed = walk.removed;
    lists.write_back(graph);

    debug!(
        vertices = n,
        components = sccs.len(),
        reversed = removed.len(),
        "removed cycles"
    );
    removed
}

/// Depth-first walk state shared across the components of one call.
struct BackEdgeWalk<'a> {
    lists: &'a mut AdjacencyLists,
    component_of: &'a [usize],
    marked: Vec<bool>,
    on_stack: Vec<bool>,
    removed: Vec<(VertexId, VertexId)>,
}

/// One suspended vertex on the walk.
struct Frame {
    vertex: VertexId,
    /// Last kept edge examined; `None` while still before the head.
    cursor: Option<EdgeHandle>,
}

impl BackEdgeWalk<'_> {
    fn enter(&mut self, v: VertexId) -> Frame {
        self.marked[v.index()] = true;
        self.on_stack[v.index()] = true;
        Frame {
            vertex: v,
            cursor: None,
        }
    }

    fn traverse(&mut self, root: VertexId, component: usize) {
        let first = self.enter(root);
        let mut work = vec![first];

        while let Some(frame) = work.last_mut() {
            let v = frame.vertex;
            // The successor is read now, so edges appended to a suspended
            // vertex's list while it waited are still visited.
            let next = match frame.cursor {
                None => self.lists.head(v),
                Some(edge) => self.lists.next(edge),
            };
            let Some(edge) = next else {
                self.on_stack[v.index()] = false;
                work.pop();
                continue;
            };

            let w = self.lists.target(edge);
            if self.on_stack[w.index()] {
                self.lists.remove(v, edge);
                self.removed.push((v, w));
                if w != v && !self.lists.contains(w, v) {
                    self.lists.push_back(w, v);
                }
                trace!(from = v.index(), to = w.index(), "reversed back edge");
                continue;
            }

            frame.cursor = Some(edge);
            if !self.marked[w.index()] && self.component_of[w.index()] == component {
                let child = self.enter(w);
                work.push(child);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_acyclic.rs"]
mod tests;
