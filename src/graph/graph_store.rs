//! Core graph structure — vertex set + insertion-ordered adjacency sets.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use indexmap::IndexSet;
use log::{debug, info};

use crate::types::{Edge, GraphError, GraphResult, Path, Vertex};

use super::traversal::find_path;

/// In-memory graph over caller-supplied vertex values.
///
/// Directedness and loop support are fixed at construction. Every vertex in
/// the graph is a key of the adjacency map, even when it has no edges, so
/// "absent" and "isolated" are distinct states.
pub struct Graph<V> {
    /// Process-unique identity; a clone gets a fresh one.
    id: u64,
    /// Whether an edge u -> v implies only one traversal direction.
    directed: bool,
    /// Whether u -> u edges may be created.
    loops_allowed: bool,
    /// Adjacency relation: vertex -> adjacent vertices in insertion order.
    adjacency: HashMap<V, IndexSet<V>>,
    /// Each logical edge once, in the order it was added.
    edge_log: IndexSet<Edge<V>>,
    /// Bumped on every successful mutation.
    generation: u64,
}

static NEXT_GRAPH_ID: AtomicU64 = AtomicU64::new(1);

fn next_graph_id() -> u64 {
    NEXT_GRAPH_ID.fetch_add(1, Ordering::Relaxed)
}

impl<V: Vertex> Graph<V> {
    /// Create an empty graph with the given configuration.
    pub fn new(directed: bool, loops_allowed: bool) -> Self {
        Self {
            id: next_graph_id(),
            directed,
            loops_allowed,
            adjacency: HashMap::new(),
            edge_log: IndexSet::new(),
            generation: 0,
        }
    }

    /// Empty directed graph without loops.
    pub fn directed() -> Self {
        Self::new(true, false)
    }

    /// Empty undirected graph without loops.
    pub fn undirected() -> Self {
        Self::new(false, false)
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn are_loops_allowed(&self) -> bool {
        self.loops_allowed
    }

    /// Identity of this graph instance. Never shared with another graph,
    /// including clones.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Mutation counter. Two equal readings mean the adjacency relation has
    /// not changed in between.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of logical edges. Undirected edges and loops count once.
    pub fn edge_count(&self) -> usize {
        self.edge_log.len()
    }

    /// Add a vertex with no edges. Returns false if it was already present.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.adjacency.contains_key(&vertex) {
            debug!("Vertex {:?} already exists in the graph", vertex);
            return false;
        }
        info!("Added vertex {:?}", vertex);
        self.adjacency.insert(vertex, IndexSet::new());
        self.generation += 1;
        true
    }

    /// Remove a vertex and every edge touching it. Returns whether it existed.
    pub fn remove_vertex(&mut self, vertex: &V) -> bool {
        if self.adjacency.remove(vertex).is_none() {
            debug!("Cannot remove vertex {:?}: not in the graph", vertex);
            return false;
        }
        for adjacent in self.adjacency.values_mut() {
            adjacent.shift_remove(vertex);
        }
        self.edge_log
            .retain(|e| &e.source != vertex && &e.destination != vertex);
        self.generation += 1;
        info!("Removed vertex {:?}", vertex);
        true
    }

    pub fn has_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Add an edge between two existing vertices.
    ///
    /// In an undirected graph the reverse entry is stored as well. Returns
    /// `Ok(false)` if the edge already exists.
    pub fn add_edge(&mut self, source: &V, destination: &V) -> GraphResult<bool> {
        if !self.has_vertex(source) {
            return Err(GraphError::vertex_not_found(source));
        }
        if !self.has_vertex(destination) {
            return Err(GraphError::vertex_not_found(destination));
        }
        let is_loop = source == destination;
        if is_loop && !self.loops_allowed {
            return Err(GraphError::loop_not_allowed(source));
        }
        if self.has_edge(source, destination) {
            debug!(
                "Edge {:?} - {:?} already exists in the graph",
                source, destination
            );
            return Ok(false);
        }

        self.insert_adjacent(source, destination);
        if !self.directed && !is_loop {
            self.insert_adjacent(destination, source);
        }
        self.edge_log
            .insert(Edge::new(source.clone(), destination.clone()));
        self.generation += 1;

        if is_loop {
            info!("Added loop edge {:?} - {:?}", source, destination);
        } else {
            info!("Added edge {:?} - {:?}", source, destination);
        }
        Ok(true)
    }

    /// Remove an existing edge, including the reverse entry of an undirected
    /// edge. Fails if `has_edge` is false.
    pub fn remove_edge(&mut self, source: &V, destination: &V) -> GraphResult<()> {
        if !self.has_edge(source, destination) {
            return Err(GraphError::edge_not_found(source, destination));
        }

        if let Some(adjacent) = self.adjacency.get_mut(source) {
            adjacent.shift_remove(destination);
        }
        if !self.directed && source != destination {
            if let Some(adjacent) = self.adjacency.get_mut(destination) {
                adjacent.shift_remove(source);
            }
        }
        let edge = Edge::new(source.clone(), destination.clone());
        if !self.edge_log.shift_remove(&edge) && !self.directed {
            self.edge_log.shift_remove(&edge.reversed());
        }
        self.generation += 1;

        info!("Removed edge {:?} - {:?}", source, destination);
        Ok(())
    }

    /// Whether an edge exists. Undirected graphs check both directions.
    /// Returns false when either vertex is absent.
    pub fn has_edge(&self, source: &V, destination: &V) -> bool {
        let (Some(from_source), Some(from_destination)) = (
            self.adjacency.get(source),
            self.adjacency.get(destination),
        ) else {
            debug!(
                "Edge lookup {:?} - {:?}: vertex not in the graph",
                source, destination
            );
            return false;
        };

        from_source.contains(destination)
            || (!self.directed && from_destination.contains(source))
    }

    /// All vertices, in no particular order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.adjacency.keys()
    }

    /// Adjacency set of a vertex in insertion order, or None if the vertex
    /// is not in the graph.
    pub fn adjacent_vertices(&self, vertex: &V) -> Option<&IndexSet<V>> {
        self.adjacency.get(vertex)
    }

    /// Out-degree (directed) or degree (undirected) of a vertex.
    pub fn degree(&self, vertex: &V) -> Option<usize> {
        self.adjacency.get(vertex).map(IndexSet::len)
    }

    /// Every logical edge exactly once, in the order the edges were added and
    /// in the direction they were added. Re-adding them in this order to an
    /// empty graph reproduces every adjacency order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge<V>> + '_ {
        self.edge_log.iter()
    }

    /// Shortest path between two vertices. See [`find_path`].
    pub fn path(&self, source: &V, destination: &V) -> GraphResult<Path<V>> {
        find_path(self, source, destination)
    }

    /// Remove every vertex and edge. The configuration is kept.
    pub fn clear(&mut self) {
        if self.adjacency.is_empty() {
            return;
        }
        self.adjacency.clear();
        self.edge_log.clear();
        self.generation += 1;
        info!("Cleared graph");
    }

    fn insert_adjacent(&mut self, vertex: &V, adjacent: &V) {
        if let Some(set) = self.adjacency.get_mut(vertex) {
            set.insert(adjacent.clone());
        }
    }
}

impl<V: Clone> Clone for Graph<V> {
    fn clone(&self) -> Self {
        Self {
            id: next_graph_id(),
            directed: self.directed,
            loops_allowed: self.loops_allowed,
            adjacency: self.adjacency.clone(),
            edge_log: self.edge_log.clone(),
            generation: self.generation,
        }
    }
}

impl<V: Vertex> Default for Graph<V> {
    fn default() -> Self {
        Self::undirected()
    }
}

impl<V: fmt::Debug> fmt::Debug for Graph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("directed", &self.directed)
            .field("loops_allowed", &self.loops_allowed)
            .field("adjacency", &self.adjacency)
            .finish()
    }
}

impl<V: fmt::Display> fmt::Display for Graph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Graph: {")?;
        for (i, (vertex, adjacent)) in self.adjacency.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: [", vertex)?;
            for (j, other) in adjacent.iter().enumerate() {
                if j > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}", other)?;
            }
            f.write_str("]")?;
        }
        f.write_str("}")
    }
}
