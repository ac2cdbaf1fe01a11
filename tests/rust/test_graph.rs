use super::*;

fn abc() -> (Graph, VertexId, VertexId, VertexId) {
    let mut g = Graph::new();
    let a = g.add_vertex("A");
    let b = g.add_vertex("B");
    let c = g.add_vertex("C");
    (g, a, b, c)
}

// ── Construction ──────────────────────────────────────────────────────────────

#[test]
fn test_empty_graph() {
    let g = Graph::new();
    assert_eq!(g.len(), 0);
    assert!(g.is_empty());
    assert_eq!(g.edge_count(), 0);
    assert!(g.is_dag());
}

#[test]
fn test_add_vertex_dedup() {
    let mut g = Graph::new();
    let a = g.add_vertex("A");
    let again = g.add_vertex("A");
    assert_eq!(a, again);
    assert_eq!(g.len(), 1);
    assert_eq!(g.vertex(a).unwrap().label, "A");
}

#[test]
fn test_add_labeled_vertex_updates_label() {
    let mut g = Graph::new();
    let a = g.add_vertex("A");
    let same = g.add_labeled_vertex("A", "Start");
    assert_eq!(a, same);
    assert_eq!(g.vertex(a).unwrap().label, "Start");
    assert_eq!(g.vertex(a).unwrap().name, "A");
}

#[test]
fn test_vertex_ids_are_dense() {
    let (g, a, b, c) = abc();
    assert_eq!((a.index(), b.index(), c.index()), (0, 1, 2));
    assert_eq!(g.vertex_ids().collect::<Vec<_>>(), vec![a, b, c]);
    assert_eq!(g.vertex_id("B"), Some(b));
    assert_eq!(g.vertex_id("missing"), None);
}

// ── Edges ─────────────────────────────────────────────────────────────────────

#[test]
fn test_add_edge_keeps_order_and_duplicates() {
    let (mut g, a, b, c) = abc();
    g.add_edge(a, c).unwrap();
    g.add_edge(a, b).unwrap();
    g.add_edge(a, c).unwrap();
    assert_eq!(g.adj(a), &[c, b, c]);
    assert_eq!(g.edge_count(), 3);
    assert!(g.has_edge(a, b));
    assert!(!g.has_edge(b, a));
}

#[test]
fn test_add_edge_rejects_foreign_vertex() {
    let (mut g, a, _, _) = abc();
    let stranger = VertexId::new(42);
    assert!(matches!(g.add_edge(a, stranger), Err(Error::UnknownVertex(42))));
    assert!(matches!(g.add_edge(stranger, a), Err(Error::UnknownVertex(42))));
    assert!(g.adj(a).is_empty());
}

#[test]
fn test_connect_creates_placeholders() {
    let mut g = Graph::new();
    let (x, y) = g.connect("X", "Y");
    assert_eq!(g.len(), 2);
    assert_eq!(g.adj(x), &[y]);
    assert_eq!(g.name(y), "Y");
}

#[test]
fn test_edges_in_adjacency_order() {
    let (mut g, a, b, c) = abc();
    g.add_edge(b, c).unwrap();
    g.add_edge(a, c).unwrap();
    g.add_edge(a, b).unwrap();
    assert_eq!(g.edges(), vec![(a, c), (a, b), (b, c)]);
}

#[test]
fn test_set_adj_validates_targets() {
    let (mut g, a, b, c) = abc();
    g.set_adj(a, vec![c, b]).unwrap();
    assert_eq!(g.adj(a), &[c, b]);
    assert!(g.set_adj(a, vec![VertexId::new(9)]).is_err());
    assert_eq!(g.adj(a), &[c, b]);
}

// ── Inverted adjacency ────────────────────────────────────────────────────────

#[test]
fn test_adj_inverted_not_maintained_by_add_edge() {
    let (mut g, a, b, _) = abc();
    g.add_edge(a, b).unwrap();
    assert!(g.adj_inverted(b).is_empty());
}

#[test]
fn test_derive_inverted() {
    let (mut g, a, b, c) = abc();
    g.add_edge(b, c).unwrap();
    g.add_edge(a, c).unwrap();
    g.add_edge(a, b).unwrap();
    g.derive_inverted();
    assert_eq!(g.adj_inverted(c), &[a, b]);
    assert_eq!(g.adj_inverted(b), &[a]);
    assert!(g.adj_inverted(a).is_empty());
}

#[test]
fn test_set_predecessors() {
    let (mut g, a, b, c) = abc();
    g.set_predecessors(c, vec![b, a]).unwrap();
    assert_eq!(g.adj_inverted(c), &[b, a]);
    assert!(g.set_predecessors(VertexId::new(7), vec![]).is_err());
}

#[test]
fn test_unknown_id_queries_are_empty() {
    let g = Graph::new();
    let v = VertexId::new(3);
    assert!(g.adj(v).is_empty());
    assert!(g.adj_inverted(v).is_empty());
    assert_eq!(g.name(v), "");
    assert!(g.vertex(v).is_none());
}

// ── petgraph view ─────────────────────────────────────────────────────────────

#[test]
fn test_to_digraph_matches_topology() {
    let (mut g, a, b, c) = abc();
    g.add_edge(a, b).unwrap();
    g.add_edge(b, c).unwrap();
    let dg = g.to_digraph();
    assert_eq!(dg.node_count(), 3);
    assert_eq!(dg.edge_count(), 2);
    assert_eq!(dg[NodeIndex::new(1)], "B");
    assert!(dg.contains_edge(NodeIndex::new(0), NodeIndex::new(1)));
}

#[test]
fn test_is_dag() {
    let (mut g, a, b, c) = abc();
    g.add_edge(a, b).unwrap();
    g.add_edge(b, c).unwrap();
    assert!(g.is_dag());
    g.add_edge(c, a).unwrap();
    assert!(!g.is_dag());
}

#[test]
fn test_self_loop_is_not_dag() {
    let (mut g, a, _, _) = abc();
    g.add_edge(a, a).unwrap();
    assert!(!g.is_dag());
}

#[test]
fn test_clone_is_independent() {
    let (mut g, a, b, _) = abc();
    let copy = g.clone();
    g.add_edge(a, b).unwrap();
    assert_eq!(copy.edge_count(), 0);
    assert_eq!(g.edge_count(), 1);
}
