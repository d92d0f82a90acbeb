//! Path — the result of a shortest-path query.

use std::fmt;

use serde::Serialize;

use super::Edge;

/// An ordered sequence of edges where each edge's destination is the next
/// edge's source. Empty when no path exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Path<V> {
    edges: Vec<Edge<V>>,
}

impl<V> Path<V> {
    /// A path with no edges.
    pub fn empty() -> Self {
        Self { edges: Vec::new() }
    }

    /// Wrap an already-chained list of edges.
    pub fn from_edges(edges: Vec<Edge<V>>) -> Self {
        Self { edges }
    }

    /// The edges in source-to-destination order.
    pub fn edges(&self) -> &[Edge<V>] {
        &self.edges
    }

    /// Number of hops.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// First vertex of the path, if any.
    pub fn source(&self) -> Option<&V> {
        self.edges.first().map(|e| &e.source)
    }

    /// Last vertex of the path, if any.
    pub fn destination(&self) -> Option<&V> {
        self.edges.last().map(|e| &e.destination)
    }

    /// Vertices visited by the path, source first. Empty for an empty path.
    pub fn vertices(&self) -> Vec<&V> {
        let mut result = Vec::with_capacity(self.edges.len() + 1);
        if let Some(first) = self.edges.first() {
            result.push(&first.source);
        }
        result.extend(self.edges.iter().map(|e| &e.destination));
        result
    }

    pub fn into_edges(self) -> Vec<Edge<V>> {
        self.edges
    }
}

impl<V> Default for Path<V> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<'a, V> IntoIterator for &'a Path<V> {
    type Item = &'a Edge<V>;
    type IntoIter = std::slice::Iter<'a, Edge<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}

impl<V: fmt::Display> fmt::Display for Path<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, edge) in self.edges.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", edge)?;
        }
        Ok(())
    }
}
