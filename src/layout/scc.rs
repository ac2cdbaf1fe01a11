//! Strongly connected components (Tarjan).
//!
//! The depth-first search runs on an explicit work stack, so graph depth is
//! bounded by heap rather than by the thread's call stack. Visitation order
//! and low-link updates follow the textbook recursive formulation exactly:
//! which component is emitted when, and in which member order, matches it
//! vertex for vertex.

use std::collections::HashSet;

use tracing::debug;

use crate::graph::{Graph, VertexId};

/// A strongly connected component, members in stack-pop order.
pub type Component = Vec<VertexId>;

/// Computes the strongly connected components of `graph`.
///
/// DFS roots are taken in vertex-id order and each vertex's edges in `adj`
/// order. Components come out in **reverse topological order** of the
/// condensation: if an edge leads from component A to component B, B is
/// emitted before A.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V)
pub fn strongly_connected_components(graph: &Graph) -> Vec<Component> {
    let n = graph.len();
    if n == 0 {
        return Vec::new();
    }

    let mut state = TarjanState::new(n);
    for v in graph.vertex_ids() {
        if state.index[v.index()].is_none() {
            state.strongconnect(graph, v);
        }
    }

    debug!(
        vertices = n,
        components = state.sccs.len(),
        "computed strongly connected components"
    );
    state.sccs
}

/// Collapses each component to a single node.
///
/// Returns the component index of every vertex (indices into `sccs`) and
/// the distinct inter-component edges `(from_component, to_component)` in
/// first-seen order. The edge set is acyclic.
pub fn condensation(graph: &Graph, sccs: &[Component]) -> (Vec<usize>, Vec<(usize, usize)>) {
    let mut component_of = vec![usize::MAX; graph.len()];
    for (c, members) in sccs.iter().enumerate() {
        for &v in members {
            component_of[v.index()] = c;
        }
    }

    let mut seen: HashSet<(usize, usize)> = HashSet::new();
    let mut edges = Vec::new();
    for (from, to) in graph.edges() {
        let pair = (component_of[from.index()], component_of[to.index()]);
        if pair.0 != pair.1 && seen.insert(pair) {
            edges.push(pair);
        }
    }
    (component_of, edges)
}

/// Per-call state for Tarjan's algorithm.
struct TarjanState {
    /// Discovery index for each vertex (None if not yet visited)
    index: Vec<Option<usize>>,
    /// Lowlink value for each vertex
    lowlink: Vec<usize>,
    /// Whether a vertex is currently on the component stack
    on_stack: Vec<bool>,
    /// The component stack
    stack: Vec<VertexId>,
    /// Next discovery index
    current_index: usize,
    /// Collected components
    sccs: Vec<Component>,
}

impl TarjanState {
    fn new(n: usize) -> Self {
        Self {
            index: vec![None; n],
            lowlink: vec![0; n],
            on_stack: vec![false; n],
            stack: Vec::new(),
            current_index: 0,
            sccs: Vec::new(),
        }
    }

    fn discover(&mut self, v: VertexId) {
        let i = v.index();
        self.index[i] = Some(self.current_index);
        self.lowlink[i] = self.current_index;
        self.current_index += 1;
        self.stack.push(v);
        self.on_stack[i] = true;
    }

    fn strongconnect(&mut self, graph: &Graph, root: VertexId) {
        // (vertex, position of the next edge to examine in its adj)
        let mut work: Vec<(VertexId, usize)> = vec![(root, 0)];
        self.discover(root);

        while let Some(frame) = work.last_mut() {
            let v = frame.0;
            let v_idx = v.index();

            if let Some(&w) = graph.adj(v).get(frame.1) {
                frame.1 += 1;
                let w_idx = w.index();
                match self.index[w_idx] {
                    None => {
                        // Unvisited: descend; lowlink is folded in on return.
                        self.discover(w);
                        work.push((w, 0));
                    }
                    Some(w_index) if self.on_stack[w_idx] => {
                        self.lowlink[v_idx] = self.lowlink[v_idx].min(w_index);
                    }
                    // Already emitted in an earlier component.
                    Some(_) => {}
                }
                continue;
            }

            work.pop();

            if Some(self.lowlink[v_idx]) == self.index[v_idx] {
                let mut scc = Vec::new();
                while let Some(w) = self.stack.pop() {
                    self.on_stack[w.index()] = false;
                    scc.push(w);
                    if w == v {
                        break;
                    }
                }
                self.sccs.push(scc);
            }

            if let Some(&(parent, _)) = work.last() {
                let p_idx = parent.index();
                self.lowlink[p_idx] = self.lowlink[p_idx].min(self.lowlink[v_idx]);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_scc.rs"]
mod tests;
