//! Arena-backed doubly linked adjacency lists.
//!
//! One [`AdjacencyLists`] holds an outgoing edge list per vertex. All edge
//! nodes live in a single arena and link to each other by index, which gives
//! O(1) append and O(1) removal by [`EdgeHandle`] while a traversal holds
//! handles into several lists at once.
//!
//! Removed nodes are unlinked but never reused; the arena is dropped with the
//! structure at the end of the algorithm that built it.

use super::{Graph, VertexId};

/// Handle to one edge node in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeHandle(usize);

#[derive(Debug, Clone, Copy)]
struct EdgeNode {
    target: VertexId,
    prev: Option<usize>,
    next: Option<usize>,
}

#[derive(Debug, Clone, Copy, Default)]
struct ListEnds {
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

/// Per-vertex outgoing edge lists sharing one node arena.
#[derive(Debug, Clone)]
pub struct AdjacencyLists {
    nodes: Vec<EdgeNode>,
    lists: Vec<ListEnds>,
}

impl AdjacencyLists {
    /// Empty lists for `vertex_count` vertices.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            nodes: Vec::new(),
            lists: vec![ListEnds::default(); vertex_count],
        }
    }

    /// Mirror every vertex's `adj`, preserving order.
    pub fn from_graph(graph: &Graph) -> Self {
        let mut lists = Self::new(graph.len());
        lists.nodes.reserve(graph.edge_count());
        for (v, vertex) in graph.vertices() {
            for &w in &vertex.adj {
                lists.push_back(v, w);
            }
        }
        lists
    }

    /// Append `from → to` at the tail of `from`'s list.
    pub fn push_back(&mut self, from: VertexId, to: VertexId) -> EdgeHandle {
        let idx = self.nodes.len();
        let ends = &mut self.lists[from.index()];
        self.nodes.push(EdgeNode {
            target: to,
            prev: ends.tail,
            next: None,
        });
        match ends.tail {
            Some(t) => self.nodes[t].next = Some(idx),
            None => ends.head = Some(idx),
        }
        ends.tail = Some(idx);
        ends.len += 1;
        EdgeHandle(idx)
    }

    /// Unlink `edge` from `from`'s list.
    ///
    /// `edge` must belong to `from`'s list and must not have been removed
    /// already.
    pub fn remove(&mut self, from: VertexId, edge: EdgeHandle) {
        let EdgeNode { prev, next, .. } = self.nodes[edge.0];
        let ends = &mut self.lists[from.index()];
        match prev {
            Some(p) => self.nodes[p].next = next,
            None => ends.head = next,
        }
        match next {
            Some(n) => self.nodes[n].prev = prev,
            None => ends.tail = prev,
        }
        ends.len -= 1;
    }

    pub fn head(&self, v: VertexId) -> Option<EdgeHandle> {
        self.lists[v.index()].head.map(EdgeHandle)
    }

    /// The node after `edge` in its list, read at call time.
    pub fn next(&self, edge: EdgeHandle) -> Option<EdgeHandle> {
        self.nodes[edge.0].next.map(EdgeHandle)
    }

    pub fn target(&self, edge: EdgeHandle) -> VertexId {
        self.nodes[edge.0].target
    }

    pub fn len(&self, v: VertexId) -> usize {
        self.lists[v.index()].len
    }

    /// Linear scan of `from`'s list for an edge to `to`.
    pub fn contains(&self, from: VertexId, to: VertexId) -> bool {
        self.iter(from).any(|w| w == to)
    }

    /// Targets of `v`'s list in order.
    pub fn iter(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        let mut cursor = self.lists[v.index()].head;
        std::iter::from_fn(move || {
            let idx = cursor?;
            let node = &self.nodes[idx];
            cursor = node.next;
            Some(node.target)
        })
    }

    /// Write every list back into the matching vertex's `adj`.
    pub fn write_back(&self, graph: &mut Graph) {
        for (i, vertex) in graph.vertices.iter_mut().enumerate() {
            vertex.adj = self.iter(VertexId::new(i)).collect();
        }
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_graph_adjacency.rs"]
mod tests;
