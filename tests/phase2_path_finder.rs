//! Phase 2 tests: path finder — BFS shortest paths and reconstruction.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use hopgraph::graph::{find_path, hop_distance, Graph};
use hopgraph::types::error::GraphError;
use hopgraph::types::{Edge, Path};

// ==================== Helper ====================

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Build a graph from vertex names and edges, adding edges in order.
fn build(
    directed: bool,
    loops_allowed: bool,
    vertices: &[&'static str],
    edges: &[(&'static str, &'static str)],
) -> Graph<&'static str> {
    init_logger();
    let mut graph = Graph::new(directed, loops_allowed);
    for &v in vertices {
        graph.add_vertex(v);
    }
    for (u, v) in edges {
        graph.add_edge(u, v).unwrap();
    }
    graph
}

fn path_of(edges: &[(&'static str, &'static str)]) -> Path<&'static str> {
    Path::from_edges(edges.iter().map(|&(u, v)| Edge::new(u, v)).collect())
}

// ==================== Argument Tests ====================

#[test]
fn test_path_when_one_vertex_not_in_graph() {
    let graph = build(false, false, &["a"], &[]);
    let err = find_path(&graph, &"a", &"b").unwrap_err();
    assert!(matches!(err, GraphError::VertexNotFound(_)));
    let err = find_path(&graph, &"b", &"a").unwrap_err();
    assert!(matches!(err, GraphError::VertexNotFound(_)));
}

#[test]
fn test_path_when_both_vertices_not_in_graph() {
    let graph = build(false, false, &["c"], &[]);
    let err = find_path(&graph, &"a", &"b").unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
fn test_path_between_isolated_vertices_is_empty() {
    let graph = build(false, false, &["a", "b"], &[]);
    let path = find_path(&graph, &"a", &"b").unwrap();
    assert!(path.is_empty());
    assert_eq!(path.to_string(), "");
}

#[test]
fn test_path_between_connected_and_unconnected_vertices() {
    let graph = build(false, false, &["a", "b", "c"], &[("a", "c")]);
    let path = find_path(&graph, &"a", &"b").unwrap();
    assert!(path.is_empty());
}

// ==================== Same Vertex Tests ====================

#[test]
fn test_path_to_self_without_loop() {
    let graph = build(false, false, &["a", "b"], &[("a", "b")]);
    let path = find_path(&graph, &"a", &"a").unwrap();
    assert!(path.is_empty());
    assert_eq!(hop_distance(&graph, &"a", &"a").unwrap(), Some(0));
}

#[test]
fn test_path_to_self_with_loop() {
    let graph = build(false, true, &["a", "b"], &[("a", "a"), ("a", "b")]);
    let path = find_path(&graph, &"a", &"a").unwrap();
    assert_eq!(path, path_of(&[("a", "a")]));
    assert_eq!(path.to_string(), "a - a");
    assert_eq!(hop_distance(&graph, &"a", &"a").unwrap(), Some(1));
}

#[test]
fn test_path_to_self_on_loop_graph_without_loop_edge() {
    let graph = build(true, true, &["a", "b"], &[("a", "b"), ("b", "a")]);
    let path = find_path(&graph, &"a", &"a").unwrap();
    assert!(path.is_empty());
}

// ==================== Scenario Tests ====================

#[test]
fn test_path_for_vertices_of_one_edge() {
    let graph = build(false, false, &["a", "b", "c"], &[("a", "b"), ("a", "c")]);
    let path = find_path(&graph, &"a", &"b").unwrap();
    assert_eq!(path.to_string(), "a - b");
}

#[test]
fn test_undirected_direct_edge_from_other_end() {
    let graph = build(false, false, &["a", "b"], &[("a", "b")]);
    let path = find_path(&graph, &"b", &"a").unwrap();
    assert_eq!(path, path_of(&[("b", "a")]));
}

#[test]
fn test_undirected_chain() {
    let graph = build(false, false, &["a", "b", "c"], &[("a", "b"), ("b", "c")]);
    let path = find_path(&graph, &"a", &"c").unwrap();
    assert_eq!(path, path_of(&[("a", "b"), ("b", "c")]));
    assert_eq!(path.to_string(), "a - b, b - c");

    // And back again
    let path = find_path(&graph, &"c", &"a").unwrap();
    assert_eq!(path, path_of(&[("c", "b"), ("b", "a")]));
}

#[test]
fn test_branching_prefers_shortest() {
    let graph = build(
        false,
        false,
        &["a", "b", "c", "d", "e", "f", "g", "h"],
        &[
            ("a", "b"),
            ("a", "c"),
            ("a", "d"),
            ("d", "f"),
            ("f", "g"),
            ("c", "e"),
            ("g", "h"),
        ],
    );
    let path = find_path(&graph, &"a", &"f").unwrap();
    assert_eq!(path, path_of(&[("a", "d"), ("d", "f")]));
    assert_eq!(path.to_string(), "a - d, d - f");

    let path = find_path(&graph, &"e", &"h").unwrap();
    assert_eq!(path.len(), 6);
    assert_eq!(path.source(), Some(&"e"));
    assert_eq!(path.destination(), Some(&"h"));
}

#[test]
fn test_directed_non_reachability() {
    let graph = build(true, false, &["a", "b", "c"], &[("a", "b"), ("c", "b")]);
    let path = find_path(&graph, &"a", &"c").unwrap();
    assert!(path.is_empty());
    assert_eq!(hop_distance(&graph, &"a", &"c").unwrap(), None);

    let path = find_path(&graph, &"c", &"b").unwrap();
    assert_eq!(path, path_of(&[("c", "b")]));
}

#[test]
fn test_directed_follows_edge_direction() {
    let graph = build(
        true,
        false,
        &["a", "b", "c", "d"],
        &[("a", "b"), ("b", "c"), ("c", "d"), ("d", "a")],
    );
    // Going "backwards" has to walk the whole cycle
    let path = find_path(&graph, &"b", &"a").unwrap();
    assert_eq!(path, path_of(&[("b", "c"), ("c", "d"), ("d", "a")]));
}

#[test]
fn test_cycle_does_not_loop_forever() {
    let graph = build(
        false,
        true,
        &["a", "b", "c", "x"],
        &[("a", "b"), ("b", "c"), ("c", "a"), ("b", "b")],
    );
    assert!(find_path(&graph, &"a", &"x").unwrap().is_empty());
}

#[test]
fn test_tie_break_follows_insertion_order() {
    // Two shortest routes a-b-d and a-c-d; b was added first
    let graph = build(
        true,
        false,
        &["a", "b", "c", "d"],
        &[("a", "b"), ("a", "c"), ("b", "d"), ("c", "d")],
    );
    let path = find_path(&graph, &"a", &"d").unwrap();
    assert_eq!(path, path_of(&[("a", "b"), ("b", "d")]));

    let graph = build(
        true,
        false,
        &["a", "b", "c", "d"],
        &[("a", "c"), ("a", "b"), ("b", "d"), ("c", "d")],
    );
    let path = find_path(&graph, &"a", &"d").unwrap();
    assert_eq!(path, path_of(&[("a", "c"), ("c", "d")]));
}

#[test]
fn test_path_reflects_mutations() {
    let mut graph = build(false, false, &["a", "b", "c"], &[("a", "b"), ("b", "c")]);
    assert_eq!(graph.path(&"a", &"c").unwrap().len(), 2);

    graph.add_edge(&"a", &"c").unwrap();
    assert_eq!(graph.path(&"a", &"c").unwrap(), path_of(&[("a", "c")]));

    graph.remove_vertex(&"b");
    graph.remove_edge(&"a", &"c").unwrap();
    assert!(graph.path(&"a", &"c").unwrap().is_empty());
}

#[test]
fn test_path_is_chained() {
    let graph = build(
        false,
        false,
        &["a", "b", "c", "d", "e"],
        &[("a", "b"), ("b", "c"), ("c", "d"), ("d", "e")],
    );
    let path = find_path(&graph, &"a", &"e").unwrap();
    for pair in path.edges().windows(2) {
        assert_eq!(pair[0].destination, pair[1].source);
    }
    assert_eq!(path.vertices(), vec![&"a", &"b", &"c", &"d", &"e"]);
}

// ==================== Oracle Tests ====================

/// Hop distances from `source` computed by Floyd–Warshall over `has_edge`.
fn oracle_distances(graph: &Graph<usize>, n: usize) -> Vec<Vec<Option<usize>>> {
    let mut dist = vec![vec![None; n]; n];
    for (u, row) in dist.iter_mut().enumerate() {
        for (v, cell) in row.iter_mut().enumerate() {
            if u != v && graph.has_edge(&u, &v) {
                *cell = Some(1);
            }
        }
    }
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                if let (Some(ik), Some(kj)) = (dist[i][k], dist[k][j]) {
                    if dist[i][j].is_none_or(|d| ik + kj < d) {
                        dist[i][j] = Some(ik + kj);
                    }
                }
            }
        }
    }
    dist
}

fn random_graph(rng: &mut StdRng, n: usize, edges: usize, directed: bool) -> Graph<usize> {
    let mut graph = Graph::new(directed, true);
    for v in 0..n {
        graph.add_vertex(v);
    }
    for _ in 0..edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        graph.add_edge(&u, &v).unwrap();
    }
    graph
}

/// Independent reachability check with a plain queue, used to double check
/// the empty-path cases.
fn reachable(graph: &Graph<usize>, source: usize, destination: usize) -> bool {
    let mut seen = vec![false; graph.vertex_count()];
    let mut queue = VecDeque::from([source]);
    seen[source] = true;
    while let Some(u) = queue.pop_front() {
        for &v in graph.adjacent_vertices(&u).unwrap() {
            if v == destination {
                return true;
            }
            if !seen[v] {
                seen[v] = true;
                queue.push_back(v);
            }
        }
    }
    false
}

#[test]
fn test_path_length_matches_oracle() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for round in 0..40 {
        let n = rng.gen_range(2..12);
        let edges = rng.gen_range(0..n * 2);
        let directed = round % 2 == 0;
        let graph = random_graph(&mut rng, n, edges, directed);
        let dist = oracle_distances(&graph, n);

        for s in 0..n {
            for d in 0..n {
                if s == d {
                    continue;
                }
                let path = find_path(&graph, &s, &d).unwrap();
                match dist[s][d] {
                    Some(hops) => {
                        assert_eq!(path.len(), hops, "round {} {} -> {}", round, s, d);
                        assert_eq!(path.source(), Some(&s));
                        assert_eq!(path.destination(), Some(&d));
                        for edge in path.edges() {
                            assert!(graph.has_edge(&edge.source, &edge.destination));
                            if directed {
                                assert!(graph
                                    .adjacent_vertices(&edge.source)
                                    .unwrap()
                                    .contains(&edge.destination));
                            }
                        }
                        for pair in path.edges().windows(2) {
                            assert_eq!(pair[0].destination, pair[1].source);
                        }
                    }
                    None => {
                        assert!(path.is_empty(), "round {} {} -> {}", round, s, d);
                        assert!(!reachable(&graph, s, d));
                    }
                }
            }
        }
    }
}

#[test]
fn test_self_path_on_random_graphs() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..10 {
        let graph = random_graph(&mut rng, 6, 10, false);
        for v in 0..6 {
            let path = find_path(&graph, &v, &v).unwrap();
            if graph.has_edge(&v, &v) {
                assert_eq!(path.edges(), &[Edge::new(v, v)]);
            } else {
                assert!(path.is_empty());
            }
        }
    }
}
