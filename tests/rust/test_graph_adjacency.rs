use super::*;

fn ids(n: usize) -> Vec<VertexId> {
    (0..n).map(VertexId::new).collect()
}

#[test]
fn test_from_graph_mirrors_adj() {
    let mut g = Graph::new();
    let a = g.add_vertex("A");
    let b = g.add_vertex("B");
    let c = g.add_vertex("C");
    g.add_edge(a, c).unwrap();
    g.add_edge(a, b).unwrap();
    let lists = AdjacencyLists::from_graph(&g);
    assert_eq!(lists.iter(a).collect::<Vec<_>>(), vec![c, b]);
    assert_eq!(lists.len(a), 2);
    assert_eq!(lists.len(b), 0);
    assert!(lists.head(b).is_none());
}

#[test]
fn test_remove_head_middle_tail() {
    let v = ids(5);
    let mut lists = AdjacencyLists::new(5);
    let h1 = lists.push_back(v[0], v[1]);
    let h2 = lists.push_back(v[0], v[2]);
    let h3 = lists.push_back(v[0], v[3]);
    let h4 = lists.push_back(v[0], v[4]);

    lists.remove(v[0], h2);
    assert_eq!(lists.iter(v[0]).collect::<Vec<_>>(), vec![v[1], v[3], v[4]]);
    lists.remove(v[0], h1);
    assert_eq!(lists.head(v[0]), Some(h3));
    lists.remove(v[0], h4);
    assert_eq!(lists.iter(v[0]).collect::<Vec<_>>(), vec![v[3]]);
    assert_eq!(lists.len(v[0]), 1);
    lists.remove(v[0], h3);
    assert!(lists.head(v[0]).is_none());
    assert_eq!(lists.len(v[0]), 0);
}

#[test]
fn test_append_after_removing_tail() {
    let v = ids(3);
    let mut lists = AdjacencyLists::new(3);
    let h = lists.push_back(v[0], v[1]);
    lists.remove(v[0], h);
    lists.push_back(v[0], v[2]);
    assert_eq!(lists.iter(v[0]).collect::<Vec<_>>(), vec![v[2]]);
}

#[test]
fn test_next_reads_live_links() {
    let v = ids(4);
    let mut lists = AdjacencyLists::new(4);
    let h1 = lists.push_back(v[0], v[1]);
    assert!(lists.next(h1).is_none());
    let h2 = lists.push_back(v[0], v[2]);
    assert_eq!(lists.next(h1), Some(h2));
    assert_eq!(lists.target(h2), v[2]);
}

#[test]
fn test_lists_are_independent() {
    let v = ids(3);
    let mut lists = AdjacencyLists::new(3);
    lists.push_back(v[0], v[1]);
    lists.push_back(v[1], v[2]);
    lists.push_back(v[0], v[2]);
    assert_eq!(lists.iter(v[0]).collect::<Vec<_>>(), vec![v[1], v[2]]);
    assert_eq!(lists.iter(v[1]).collect::<Vec<_>>(), vec![v[2]]);
    assert!(lists.contains(v[1], v[2]));
    assert!(!lists.contains(v[1], v[0]));
}

#[test]
fn test_write_back() {
    let mut g = Graph::new();
    let a = g.add_vertex("A");
    let b = g.add_vertex("B");
    g.add_edge(a, b).unwrap();
    let mut lists = AdjacencyLists::from_graph(&g);
    let head = lists.head(a).unwrap();
    lists.remove(a, head);
    lists.push_back(b, a);
    lists.write_back(&mut g);
    assert!(g.adj(a).is_empty());
    assert_eq!(g.adj(b), &[a]);
}
