//! Path result memoization with generation-based invalidation.

use std::collections::HashMap;

use log::debug;

use crate::graph::{find_path, Graph};
use crate::types::{GraphResult, Path, Vertex};

/// Hit/miss counters for a [`PathCache`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    /// Times the cache was emptied because the graph changed or
    /// [`PathCache::invalidate`] was called.
    pub invalidations: u64,
}

/// Memoizes [`find_path`] results keyed by the ordered (source, destination)
/// pair.
///
/// The cache remembers which graph (by [`Graph::id`]) and which generation it
/// was filled against and starts over whenever either differs, so neither a
/// mutated graph nor a different graph is answered from stale entries. Failed
/// queries are not cached.
pub struct PathCache<V> {
    entries: HashMap<(V, V), Path<V>>,
    /// (graph id, generation) the entries were computed against.
    filled_for: Option<(u64, u64)>,
    stats: CacheStats,
}

impl<V: Vertex> PathCache<V> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            filled_for: None,
            stats: CacheStats::default(),
        }
    }

    /// Shortest path from `source` to `destination`, served from the cache
    /// for exact repeat queries against an unchanged graph.
    pub fn get_path(
        &mut self,
        graph: &Graph<V>,
        source: &V,
        destination: &V,
    ) -> GraphResult<Path<V>> {
        let current = (graph.id(), graph.generation());
        if self.filled_for != Some(current) {
            if !self.entries.is_empty() {
                debug!(
                    "Graph {} at generation {} differs from cached state, dropping {} path(s)",
                    current.0,
                    current.1,
                    self.entries.len()
                );
                self.invalidate();
            }
            self.filled_for = Some(current);
        }

        let key = (source.clone(), destination.clone());
        if let Some(path) = self.entries.get(&key) {
            self.stats.hits += 1;
            return Ok(path.clone());
        }

        self.stats.misses += 1;
        let path = find_path(graph, source, destination)?;
        self.entries.insert(key, path.clone());
        Ok(path)
    }

    /// Drop every cached path.
    pub fn invalidate(&mut self) {
        self.entries.clear();
        self.filled_for = None;
        self.stats.invalidations += 1;
    }

    /// Number of cached paths.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}

impl<V: Vertex> Default for PathCache<V> {
    fn default() -> Self {
        Self::new()
    }
}
