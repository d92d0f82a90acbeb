//! Fluent API for building Graph instances.

use crate::types::{GraphResult, Vertex};

use super::Graph;

/// Fluent builder for constructing a [`Graph`].
///
/// Vertices and edges may be declared in any order; all vertices are added
/// before any edge, and edges are added in declaration order, which fixes the
/// adjacency order used by path search.
pub struct GraphBuilder<V> {
    directed: bool,
    loops_allowed: bool,
    vertices: Vec<V>,
    edges: Vec<(V, V)>,
}

impl<V: Vertex> GraphBuilder<V> {
    /// Undirected, loop-free builder with nothing declared.
    pub fn new() -> Self {
        Self {
            directed: false,
            loops_allowed: false,
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    pub fn loops_allowed(mut self, loops_allowed: bool) -> Self {
        self.loops_allowed = loops_allowed;
        self
    }

    /// Declare a vertex. Duplicates are ignored.
    pub fn vertex(mut self, vertex: V) -> Self {
        self.vertices.push(vertex);
        self
    }

    /// Declare several vertices.
    pub fn vertices<I: IntoIterator<Item = V>>(mut self, vertices: I) -> Self {
        self.vertices.extend(vertices);
        self
    }

    /// Declare an edge. Both endpoints must also be declared as vertices.
    pub fn edge(mut self, source: V, destination: V) -> Self {
        self.edges.push((source, destination));
        self
    }

    /// Build the graph. Fails on the first edge that references an
    /// undeclared vertex or is a disallowed loop.
    pub fn build(self) -> GraphResult<Graph<V>> {
        let mut graph = Graph::new(self.directed, self.loops_allowed);
        for vertex in self.vertices {
            graph.add_vertex(vertex);
        }
        for (source, destination) in &self.edges {
            graph.add_edge(source, destination)?;
        }
        Ok(graph)
    }
}

impl<V: Vertex> Default for GraphBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}
