//! In-memory graph operations — the core data structure and path search.

pub mod builder;
pub mod graph_store;
pub mod traversal;

pub use builder::GraphBuilder;
pub use graph_store::Graph;
pub use traversal::{find_path, hop_distance};
