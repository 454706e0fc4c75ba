//! Writer for the graph description format
//!
//! Emits the same sectioned format the reader consumes. The edge-weights
//! form is preferred when weights exist, then the adjacency list, then the
//! matrix. Undirected weighted edges are written once per pair; the reader
//! mirrors them back.

use trellis_core::graph::{Graph, VertexId};

pub fn write_graph(graph: &Graph) -> String {
    let mut out = String::from("# trellis graph description\n");
    if !graph.description().is_empty() {
        out.push_str("; desc\n");
        out.push_str(graph.description());
        out.push('\n');
    }
    out.push_str("; isDirected\n");
    out.push_str(if graph.is_directed() {
        "directed\n"
    } else {
        "undirected\n"
    });
    out.push_str("; vertices\n");
    out.push_str(&format!("{}\n", graph.vertex_count()));

    if graph.has_vertex_weights() {
        out.push_str("; vertex weights\n");
        let weights: Vec<String> = (0..graph.vertex_count())
            .map(|vertex| graph.vertex_weight(vertex).unwrap_or(0).to_string())
            .collect();
        out.push_str(&weights.join(", "));
        out.push('\n');
    }

    if graph.has_edge_weights() {
        write_edge_weights(graph, &mut out);
    } else if let Some(list) = graph.adjacency_list() {
        out.push_str("; adjacency list\n");
        for neighbors in list {
            if neighbors.is_empty() {
                out.push_str("none\n");
            } else {
                let row: Vec<String> = neighbors.iter().map(ToString::to_string).collect();
                out.push_str(&row.join(", "));
                out.push('\n');
            }
        }
    } else if let Some(matrix) = graph.adjacency_matrix() {
        out.push_str("; adjacency matrix\n");
        for row in matrix {
            let cells: Vec<String> = row.iter().map(ToString::to_string).collect();
            out.push_str(&cells.join(", "));
            out.push('\n');
        }
    }

    out.push_str("; end\n");
    out
}

fn write_edge_weights(graph: &Graph, out: &mut String) {
    let mut edges: Vec<(VertexId, VertexId, i64)> = Vec::new();
    for from in 0..graph.vertex_count() {
        for to in 0..graph.vertex_count() {
            if !graph.is_directed() && to < from {
                continue;
            }
            let weight = graph
                .edge_weight(from, to)
                .or_else(|| graph.edge_weight(to, from));
            if let Some(weight) = weight {
                edges.push((from, to, weight));
            }
        }
    }
    out.push_str("; edge weights\n");
    out.push_str(&format!("{}\n", edges.len()));
    for (from, to, weight) in edges {
        out.push_str(&format!("{}, {}, {}\n", from, to, weight));
    }
}
