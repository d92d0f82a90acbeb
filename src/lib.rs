//! hopgraph — generic in-memory graph with shortest-path queries.
//!
//! A [`Graph`] holds caller-supplied vertex values and an insertion-ordered
//! adjacency relation, either directed or undirected, with or without
//! self-loops. [`find_path`] runs a breadth-first search over a borrowed graph
//! and returns the fewest-edge [`Path`] between two vertices.

pub mod cli;
pub mod engine;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use engine::{CacheStats, PathCache};
pub use format::GraphFile;
pub use graph::{find_path, hop_distance, Graph, GraphBuilder};
pub use types::{Edge, GraphError, GraphResult, Path, Vertex};
