//! The edge struct — an ordered pair of vertices.

use std::fmt;

use serde::Serialize;

/// An ordered (source, destination) pair of vertices.
///
/// Equality and hashing are order-sensitive: `a - b` and `b - a` are different
/// edges even in an undirected graph. Undirected symmetry lives in the graph's
/// adjacency relation, not here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Edge<V> {
    /// Vertex the edge leaves from.
    pub source: V,
    /// Vertex the edge arrives at.
    pub destination: V,
}

impl<V> Edge<V> {
    /// Create a new edge.
    pub fn new(source: V, destination: V) -> Self {
        Self {
            source,
            destination,
        }
    }

    /// Consume the edge, returning `(source, destination)`.
    pub fn into_parts(self) -> (V, V) {
        (self.source, self.destination)
    }
}

impl<V: PartialEq> Edge<V> {
    /// Whether source and destination are the same vertex.
    pub fn is_loop(&self) -> bool {
        self.source == self.destination
    }
}

impl<V: Clone> Edge<V> {
    /// The same edge with its endpoints swapped.
    pub fn reversed(&self) -> Self {
        Self::new(self.destination.clone(), self.source.clone())
    }
}

impl<V: fmt::Display> fmt::Display for Edge<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.source, self.destination)
    }
}

impl<V> From<(V, V)> for Edge<V> {
    fn from((source, destination): (V, V)) -> Self {
        Self::new(source, destination)
    }
}
