//! JSON graph description read and written by the `hopg` CLI.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::graph::Graph;
use crate::types::{GraphError, GraphResult};

/// On-disk description of a graph with string vertices.
///
/// ```json
/// { "directed": false, "loops_allowed": false,
///   "vertices": ["a", "b"], "edges": [["a", "b"]] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphFile {
    #[serde(default)]
    pub directed: bool,
    #[serde(default)]
    pub loops_allowed: bool,
    #[serde(default)]
    pub vertices: Vec<String>,
    #[serde(default)]
    pub edges: Vec<(String, String)>,
}

impl GraphFile {
    /// Read and parse a graph file.
    pub fn read_from_file(path: &Path) -> GraphResult<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    pub fn from_json(data: &str) -> GraphResult<Self> {
        serde_json::from_str(data).map_err(|e| GraphError::Format(e.to_string()))
    }

    /// Serialize as pretty JSON and write to `path`.
    pub fn write_to_file(&self, path: &Path) -> GraphResult<()> {
        let data =
            serde_json::to_string_pretty(self).map_err(|e| GraphError::Format(e.to_string()))?;
        std::fs::write(path, data)?;
        Ok(())
    }

    /// Build the described graph. Edges may only reference listed vertices.
    pub fn into_graph(self) -> GraphResult<Graph<String>> {
        let mut graph = Graph::new(self.directed, self.loops_allowed);
        for vertex in self.vertices {
            graph.add_vertex(vertex);
        }
        for (source, destination) in &self.edges {
            graph.add_edge(source, destination)?;
        }
        Ok(graph)
    }

    /// Describe a graph. Vertices are sorted; edges are listed once each in
    /// the order they were added, so loading the file reproduces every
    /// adjacency order.
    pub fn from_graph(graph: &Graph<String>) -> Self {
        let mut vertices: Vec<String> = graph.vertices().cloned().collect();
        vertices.sort();

        let edges = graph
            .edges()
            .map(|e| (e.source.clone(), e.destination.clone()))
            .collect();

        Self {
            directed: graph.is_directed(),
            loops_allowed: graph.are_loops_allowed(),
            vertices,
            edges,
        }
    }
}
