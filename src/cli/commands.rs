//! CLI command implementations.

use std::path::Path;

use indexmap::IndexSet;

use crate::format::GraphFile;
use crate::graph::{find_path, Graph};
use crate::types::{GraphError, GraphResult, Path as GraphPath};

fn load_graph(path: &Path) -> GraphResult<Graph<String>> {
    GraphFile::read_from_file(path)?.into_graph()
}

fn save_graph(graph: &Graph<String>, path: &Path) -> GraphResult<()> {
    GraphFile::from_graph(graph).write_to_file(path)
}

/// Create a new graph file with no vertices.
pub fn cmd_create(path: &Path, directed: bool, loops_allowed: bool) -> GraphResult<()> {
    let file = GraphFile {
        directed,
        loops_allowed,
        ..GraphFile::default()
    };
    file.write_to_file(path)?;
    println!("Created {}", path.display());
    Ok(())
}

/// Display configuration and size of a graph file.
pub fn cmd_info(path: &Path, json: bool) -> GraphResult<()> {
    let graph = load_graph(path)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&info_json(path, &graph)).unwrap_or_default()
        );
    } else {
        println!("File: {}", path.display());
        println!("Directed: {}", yes_no(graph.is_directed()));
        println!("Loops allowed: {}", yes_no(graph.are_loops_allowed()));
        println!("Vertices: {}", graph.vertex_count());
        println!("Edges: {}", graph.edge_count());
    }
    Ok(())
}

/// Add a vertex and save the file.
pub fn cmd_add_vertex(path: &Path, vertex: &str, json: bool) -> GraphResult<()> {
    let mut graph = load_graph(path)?;
    let added = graph.add_vertex(vertex.to_string());
    if added {
        save_graph(&graph, path)?;
    }

    if json {
        println!("{}", serde_json::json!({"vertex": vertex, "added": added}));
    } else if added {
        println!("Added vertex {} to {}", vertex, path.display());
    } else {
        println!("Vertex {} already exists", vertex);
    }
    Ok(())
}

/// Remove a vertex and its edges, then save the file.
pub fn cmd_remove_vertex(path: &Path, vertex: &str, json: bool) -> GraphResult<()> {
    let mut graph = load_graph(path)?;
    let removed = graph.remove_vertex(&vertex.to_string());
    if removed {
        save_graph(&graph, path)?;
    }

    if json {
        println!("{}", serde_json::json!({"vertex": vertex, "removed": removed}));
    } else if removed {
        println!("Removed vertex {} from {}", vertex, path.display());
    } else {
        println!("Vertex {} is not in the graph", vertex);
    }
    Ok(())
}

/// Add an edge between two existing vertices and save the file.
pub fn cmd_add_edge(path: &Path, source: &str, destination: &str, json: bool) -> GraphResult<()> {
    let mut graph = load_graph(path)?;
    let added = graph.add_edge(&source.to_string(), &destination.to_string())?;
    if added {
        save_graph(&graph, path)?;
    }

    if json {
        println!(
            "{}",
            serde_json::json!({"source": source, "destination": destination, "added": added})
        );
    } else if added {
        println!("Added edge {} - {} to {}", source, destination, path.display());
    } else {
        println!("Edge {} - {} already exists", source, destination);
    }
    Ok(())
}

/// Remove an existing edge and save the file.
pub fn cmd_remove_edge(
    path: &Path,
    source: &str,
    destination: &str,
    json: bool,
) -> GraphResult<()> {
    let mut graph = load_graph(path)?;
    graph.remove_edge(&source.to_string(), &destination.to_string())?;
    save_graph(&graph, path)?;

    if json {
        println!(
            "{}",
            serde_json::json!({"source": source, "destination": destination, "removed": true})
        );
    } else {
        println!(
            "Removed edge {} - {} from {}",
            source,
            destination,
            path.display()
        );
    }
    Ok(())
}

/// List the vertices adjacent to `vertex`, in insertion order.
pub fn cmd_neighbors(path: &Path, vertex: &str, json: bool) -> GraphResult<()> {
    let graph = load_graph(path)?;
    let key = vertex.to_string();
    let adjacent = graph
        .adjacent_vertices(&key)
        .ok_or_else(|| GraphError::vertex_not_found(&key))?;

    if json {
        let list: Vec<&String> = adjacent.iter().collect();
        println!(
            "{}",
            serde_json::json!({"vertex": vertex, "adjacent": list})
        );
    } else {
        println!("{}", neighbors_line(vertex, adjacent));
    }
    Ok(())
}

/// Print the shortest path between two vertices.
pub fn cmd_path(path: &Path, source: &str, destination: &str, json: bool) -> GraphResult<()> {
    let graph = load_graph(path)?;
    let result = find_path(&graph, &source.to_string(), &destination.to_string())?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&path_json(source, destination, &result))
                .unwrap_or_default()
        );
    } else {
        println!("{}", result);
    }
    Ok(())
}

/// JSON summary printed by `info --format json`.
pub fn info_json(path: &Path, graph: &Graph<String>) -> serde_json::Value {
    serde_json::json!({
        "file": path.display().to_string(),
        "directed": graph.is_directed(),
        "loops_allowed": graph.are_loops_allowed(),
        "vertices": graph.vertex_count(),
        "edges": graph.edge_count(),
    })
}

/// Text line printed by `neighbors`.
pub fn neighbors_line(vertex: &str, adjacent: &IndexSet<String>) -> String {
    if adjacent.is_empty() {
        return format!("{}: no adjacent vertices", vertex);
    }
    let list: Vec<&str> = adjacent.iter().map(String::as_str).collect();
    format!("{}: {}", vertex, list.join(", "))
}

/// JSON result printed by `path --format json`.
pub fn path_json(source: &str, destination: &str, path: &GraphPath<String>) -> serde_json::Value {
    let edges: Vec<[&str; 2]> = path
        .edges()
        .iter()
        .map(|e| [e.source.as_str(), e.destination.as_str()])
        .collect();
    serde_json::json!({
        "source": source,
        "destination": destination,
        "hops": path.len(),
        "edges": edges,
    })
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
