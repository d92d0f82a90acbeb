//! All data types for the hopgraph library.

pub mod edge;
pub mod error;
pub mod path;

use std::fmt::Debug;
use std::hash::Hash;

pub use edge::Edge;
pub use error::{GraphError, GraphResult};
pub use path::Path;

/// Capability contract for vertex values: identity equality, a stable hash
/// (vertices are map keys) and a debug rendering for errors and logs.
///
/// Implemented for every type that satisfies the bounds.
pub trait Vertex: Eq + Hash + Clone + Debug {}

impl<T: Eq + Hash + Clone + Debug> Vertex for T {}
