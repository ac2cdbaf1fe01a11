//! Directed graph with order-significant adjacency.
//!
//! Vertices live in a dense `Vec` and are addressed by [`VertexId`]. Each
//! vertex owns its outgoing adjacency (`adj`), whose order decides the initial
//! column order during layering, and a caller-maintained predecessor list
//! (`adj_inverted`) consumed by alignment.
//!
//! Layout algorithms keep their per-vertex scratch state in tables owned by
//! the call; nothing transient is ever stored on a [`Vertex`].

pub mod adjacency;

use std::collections::HashMap;
use std::fmt;

use petgraph::algo::is_cyclic_directed;
use petgraph::graph::{DiGraph, NodeIndex};
use serde::Serialize;

use crate::error::{Error, Result};

// ── VertexId ─────────────────────────────────────────────────────────────────

/// Index of a vertex inside the [`Graph`] that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct VertexId(usize);

impl VertexId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// ── Vertex ───────────────────────────────────────────────────────────────────

/// A vertex with its outgoing and (caller-supplied) incoming neighbours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    pub name: String,
    pub label: String,
    /// Outgoing neighbours, in insertion order.
    pub adj: Vec<VertexId>,
    /// Incoming neighbours. Not maintained by `add_edge`; see
    /// [`Graph::derive_inverted`] and [`Graph::set_predecessors`].
    pub adj_inverted: Vec<VertexId>,
}

impl Vertex {
    fn new(name: String, label: String) -> Self {
        Self {
            name,
            label,
            adj: Vec::new(),
            adj_inverted: Vec::new(),
        }
    }
}

// ── Graph ────────────────────────────────────────────────────────────────────

/// Directed multigraph keyed by vertex name.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: Vec<Vertex>,
    /// Maps vertex name → id.
    by_name: HashMap<String, VertexId>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(capacity),
            by_name: HashMap::with_capacity(capacity),
        }
    }

    // ── Mutation ─────────────────────────────────────────────────────────────

    /// Add a vertex labelled with its own name.
    ///
    /// Returns the existing id if a vertex with the same name is present.
    pub fn add_vertex(&mut self, name: &str) -> VertexId {
        if let Some(&id) = self.by_name.get(name) {
            return id;
        }
        let id = VertexId(self.vertices.len());
        self.vertices
            .push(Vertex::new(name.to_string(), name.to_string()));
        self.by_name.insert(name.to_string(), id);
        id
    }

    /// Add a vertex with a display label. An existing vertex keeps its id and
    /// takes the new label.
    pub fn add_labeled_vertex(&mut self, name: &str, label: &str) -> VertexId {
        let id = self.add_vertex(name);
        self.vertices[id.0].label = label.to_string();
        id
    }

    /// Append the edge `from → to` to `from`'s adjacency.
    ///
    /// Parallel edges are kept; the adjacency is a sequence, not a set.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId) -> Result<()> {
        self.check(to)?;
        self.vertex_mut(from)?.adj.push(to);
        Ok(())
    }

    /// Add an edge between two named vertices, creating placeholders for
    /// names not seen before.
    pub fn connect(&mut self, from: &str, to: &str) -> (VertexId, VertexId) {
        let a = self.add_vertex(from);
        let b = self.add_vertex(to);
        self.vertices[a.0].adj.push(b);
        (a, b)
    }

    /// Replace the outgoing adjacency of `id`.
    pub fn set_adj(&mut self, id: VertexId, adj: Vec<VertexId>) -> Result<()> {
        for &w in &adj {
            self.check(w)?;
        }
        self.vertex_mut(id)?.adj = adj;
        Ok(())
    }

    /// Replace the predecessor list of `id`.
    pub fn set_predecessors(&mut self, id: VertexId, preds: Vec<VertexId>) -> Result<()> {
        for &p in &preds {
            self.check(p)?;
        }
        self.vertex_mut(id)?.adj_inverted = preds;
        Ok(())
    }

    /// Rebuild every `adj_inverted` from the current `adj` lists.
    ///
    /// Predecessors are listed in vertex-id order, one entry per edge.
    pub fn derive_inverted(&mut self) {
        let mut inverted: Vec<Vec<VertexId>> = vec![Vec::new(); self.vertices.len()];
        for (i, v) in self.vertices.iter().enumerate() {
            for &w in &v.adj {
                inverted[w.0].push(VertexId(i));
            }
        }
        for (v, preds) in self.vertices.iter_mut().zip(inverted) {
            v.adj_inverted = preds;
        }
    }

    // ── Queries ──────────────────────────────────────────────────────────────

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.vertices.iter().map(|v| v.adj.len()).sum()
    }

    pub fn contains(&self, id: VertexId) -> bool {
        id.0 < self.vertices.len()
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id.0)
    }

    pub fn vertex_id(&self, name: &str) -> Option<VertexId> {
        self.by_name.get(name).copied()
    }

    /// Name of `id`, or an empty string for ids from another graph.
    pub fn name(&self, id: VertexId) -> &str {
        self.vertices.get(id.0).map(|v| v.name.as_str()).unwrap_or("")
    }

    /// Outgoing neighbours of `id` (empty for unknown ids).
    pub fn adj(&self, id: VertexId) -> &[VertexId] {
        self.vertices
            .get(id.0)
            .map(|v| v.adj.as_slice())
            .unwrap_or(&[])
    }

    /// Incoming neighbours of `id` as last supplied (empty for unknown ids).
    pub fn adj_inverted(&self, id: VertexId) -> &[VertexId] {
        self.vertices
            .get(id.0)
            .map(|v| v.adj_inverted.as_slice())
            .unwrap_or(&[])
    }

    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &Vertex)> {
        self.vertices
            .iter()
            .enumerate()
            .map(|(i, v)| (VertexId(i), v))
    }

    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + use<> {
        (0..self.vertices.len()).map(VertexId)
    }

    /// All edges as `(from, to)`, grouped by source in adjacency order.
    pub fn edges(&self) -> Vec<(VertexId, VertexId)> {
        self.vertices()
            .flat_map(|(id, v)| v.adj.iter().map(move |&w| (id, w)))
            .collect()
    }

    pub fn has_edge(&self, from: VertexId, to: VertexId) -> bool {
        self.adj(from).contains(&to)
    }

    // ── petgraph view ────────────────────────────────────────────────────────

    /// Copy the topology into a petgraph `DiGraph` weighted by vertex name.
    ///
    /// Node indices match vertex ids.
    pub fn to_digraph(&self) -> DiGraph<String, ()> {
        let mut dg = DiGraph::with_capacity(self.vertices.len(), self.edge_count());
        for v in &self.vertices {
            dg.add_node(v.name.clone());
        }
        for (from, to) in self.edges() {
            dg.add_edge(NodeIndex::new(from.0), NodeIndex::new(to.0), ());
        }
        dg
    }

    /// Returns true if the graph has no directed cycles (self-loops count).
    pub fn is_dag(&self) -> bool {
        !is_cyclic_directed(&self.to_digraph())
    }

    // ── Private helpers ──────────────────────────────────────────────────────

    fn check(&self, id: VertexId) -> Result<()> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(Error::UnknownVertex(id.0))
        }
    }

    fn vertex_mut(&mut self, id: VertexId) -> Result<&mut Vertex> {
        self.vertices
            .get_mut(id.0)
            .ok_or(Error::UnknownVertex(id.0))
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_graph.rs"]
mod tests;
