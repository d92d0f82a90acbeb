//! Shortest-path search (BFS) over a read-only graph.

use std::collections::{HashMap, HashSet, VecDeque};

use log::{debug, trace};

use crate::types::{Edge, GraphError, GraphResult, Path, Vertex};

use super::Graph;

/// Shortest path (fewest edges) from `source` to `destination`.
///
/// Both vertices must be in the graph. An unreachable destination yields an
/// empty path, not an error. `source == destination` yields the self-loop
/// edge if the graph has one, otherwise an empty path.
///
/// When several shortest paths exist, the one returned follows adjacency
/// insertion order. Callers should rely only on its length being minimal.
pub fn find_path<V: Vertex>(
    graph: &Graph<V>,
    source: &V,
    destination: &V,
) -> GraphResult<Path<V>> {
    check_membership(graph, source, destination)?;

    // Direct edge (or self-loop) needs no search.
    let path = if graph.has_edge(source, destination) {
        Path::from_edges(vec![Edge::new(source.clone(), destination.clone())])
    } else if source == destination {
        Path::empty()
    } else {
        match bfs_predecessors(graph, source, destination) {
            Some(predecessors) => reconstruct_path(&predecessors, source, destination),
            None => Path::empty(),
        }
    };
    debug!(
        "Path between {:?} and {:?} has {} edge(s)",
        source,
        destination,
        path.len()
    );
    Ok(path)
}

/// Minimum number of edges from `source` to `destination`, or None when
/// unreachable. A vertex is at distance 0 from itself unless it has a loop,
/// in which case the loop (distance 1) is the reported path.
pub fn hop_distance<V: Vertex>(
    graph: &Graph<V>,
    source: &V,
    destination: &V,
) -> GraphResult<Option<usize>> {
    let path = find_path(graph, source, destination)?;
    if path.is_empty() {
        return Ok((source == destination).then_some(0));
    }
    Ok(Some(path.len()))
}

fn check_membership<V: Vertex>(graph: &Graph<V>, source: &V, destination: &V) -> GraphResult<()> {
    if !graph.has_vertex(source) {
        return Err(GraphError::vertex_not_found(source));
    }
    if !graph.has_vertex(destination) {
        return Err(GraphError::vertex_not_found(destination));
    }
    Ok(())
}

/// BFS from `source`, stopping as soon as `destination` is discovered.
/// Returns the predecessor map, or None if the queue drains first.
fn bfs_predecessors<'g, V: Vertex>(
    graph: &'g Graph<V>,
    source: &'g V,
    destination: &V,
) -> Option<HashMap<&'g V, &'g V>> {
    let mut visited: HashSet<&V> = HashSet::new();
    let mut predecessors: HashMap<&V, &V> = HashMap::new();
    let mut queue: VecDeque<&V> = VecDeque::new();

    visited.insert(source);
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        let Some(adjacent) = graph.adjacent_vertices(current) else {
            continue;
        };
        trace!("Expanding {:?} ({} adjacent)", current, adjacent.len());

        for next in adjacent {
            if !visited.insert(next) {
                continue;
            }
            predecessors.insert(next, current);

            if next == destination {
                return Some(predecessors);
            }
            queue.push_back(next);
        }
    }

    None
}

/// Walk predecessors back from `destination` and emit edges source-first.
fn reconstruct_path<V: Vertex>(
    predecessors: &HashMap<&V, &V>,
    source: &V,
    destination: &V,
) -> Path<V> {
    let mut edges = Vec::new();
    let mut current = destination;

    while current != source {
        let Some(&previous) = predecessors.get(current) else {
            break;
        };
        edges.push(Edge::new(previous.clone(), current.clone()));
        current = previous;
    }

    edges.reverse();
    Path::from_edges(edges)
}
