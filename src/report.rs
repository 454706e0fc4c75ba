//! Multi-column report renderer
//!
//! Produces the human-readable analysis report: header, adjacency
//! sections, vertex table, distance and path tables, components. Tables
//! are truncated to the requested vertex count; unreachable distances
//! render as `INF`, never-analyzed rows as `?`.

use trellis_core::graph::{Graph, INFINITY};

const WEIGHT_WIDTH: usize = 5;

pub fn render(graph: &Graph, max_vertices: usize) -> String {
    let shown = graph.vertex_count().min(max_vertices);
    let idx_width = if shown < 100 { 2 } else { 3 };
    let mut out = String::new();
    header(graph, shown, &mut out);
    adjacency_list_section(graph, shown, idx_width, &mut out);
    vertex_table(graph, shown, &mut out);
    matrix_section(graph, shown, idx_width, &mut out);
    distance_section(graph, shown, idx_width, &mut out);
    next_hop_section(graph, shown, idx_width, &mut out);
    predecessor_section(graph, shown, idx_width, &mut out);
    components_section(graph, &mut out);
    out
}

fn header(graph: &Graph, shown: usize, out: &mut String) {
    out.push_str("GRAPH REPORT: ");
    out.push_str(graph.description());
    out.push_str("\n  ");
    if graph.is_directed() {
        out.push_str("directed ");
    }
    out.push_str(&format!("graph: {}", graph.vertex_count()));
    if graph.has_vertex_weights() {
        out.push_str(" weighted");
    }
    out.push_str(" vertices");
    if let Some(edges) = graph.edge_count() {
        out.push_str(&format!(", {}", edges));
        if graph.has_edge_weights() {
            out.push_str(" weighted");
        }
        out.push_str(" edges");
    }
    if let Some(components) = graph.component_count() {
        out.push_str(&format!(", {} components", components));
    }
    out.push('\n');
    if graph.vertex_count() > shown {
        out.push_str(&format!("  (showing first {} vertices)\n", shown));
    }
    if let Some(negative) = graph.has_negative_weight() {
        if graph.has_vertex_weights() || graph.has_edge_weights() {
            let qualifier = if negative { "" } else { "no " };
            out.push_str(&format!("  graph has {}negative weight.\n", qualifier));
        }
    }
    if let Some(cycle) = graph.has_negative_cycle() {
        let qualifier = if cycle { "" } else { "no " };
        out.push_str(&format!("  graph has {}negative cycle.\n", qualifier));
    }
}

fn adjacency_list_section(graph: &Graph, shown: usize, idx_width: usize, out: &mut String) {
    let Some(list) = graph.adjacency_list() else {
        return;
    };
    out.push_str("  adjacency list:\n");
    for (vertex, neighbors) in list.iter().take(shown).enumerate() {
        out.push_str(&format!("    vertex #{:<width$}: ", vertex, width = idx_width));
        if neighbors.is_empty() {
            out.push_str("[none]");
        } else {
            out.push_str("edges to ");
            let rendered: Vec<String> = neighbors
                .iter()
                .map(|&to| match graph.edge_weight(vertex, to) {
                    Some(weight) => format!("{:<width$} (W= {})", to, weight, width = idx_width),
                    None => format!("{:<width$}", to, width = idx_width),
                })
                .collect();
            out.push_str(&rendered.join(", "));
        }
        out.push('\n');
    }
}

fn vertex_table(graph: &Graph, shown: usize, out: &mut String) {
    out.push_str("  vertices:     ");
    for vertex in 0..shown {
        out.push_str(&format!("+#{:-<width$}", vertex, width = WEIGHT_WIDTH - 1));
    }
    out.push('\n');
    if graph.has_vertex_weights() {
        out.push_str("    weight:     ");
        for vertex in 0..shown {
            let cell = graph
                .vertex_weight(vertex)
                .map_or_else(|| "-".to_string(), |weight| weight.to_string());
            out.push_str(&format!("|{:<width$}", cell, width = WEIGHT_WIDTH));
        }
        out.push('\n');
    }
    if let Some(degrees) = graph.out_degree() {
        out.push_str("    out degree: ");
        for &degree in degrees.iter().take(shown) {
            out.push_str(&format!("|{:<width$}", degree, width = WEIGHT_WIDTH));
        }
        out.push('\n');
    }
    if let Some(degrees) = graph.in_degree() {
        out.push_str("    in degree:  ");
        for &degree in degrees.iter().take(shown) {
            out.push_str(&format!("|{:<width$}", degree, width = WEIGHT_WIDTH));
        }
        out.push('\n');
    }
    if let Some(scores) = graph.heuristic() {
        out.push_str("       h-score: ");
        for &score in scores.iter().take(shown) {
            out.push_str(&format!("|{:<width$}", score, width = WEIGHT_WIDTH));
        }
        out.push('\n');
    }
}

fn matrix_section(graph: &Graph, shown: usize, idx_width: usize, out: &mut String) {
    let Some(matrix) = graph.adjacency_matrix() else {
        return;
    };
    out.push_str("  adjacency matrix:\n");
    out.push_str(&" ".repeat(5 + idx_width));
    out.push('+');
    for column in 0..shown {
        out.push_str(&format!("{:-<width$}", column, width = idx_width + 1));
    }
    if graph.has_edge_weights() {
        out.push_str("+ weights: ");
        for column in 0..shown {
            out.push_str(&format!("+#{:-<width$}", column, width = WEIGHT_WIDTH - 1));
        }
    }
    out.push('\n');
    for (row_index, row) in matrix.iter().take(shown).enumerate() {
        out.push_str(&format!("    #{:<width$}|", row_index, width = idx_width));
        for &cell in row.iter().take(shown) {
            out.push_str(&format!("{:<width$} ", cell, width = idx_width));
        }
        if graph.has_edge_weights() {
            out.push_str("|          ");
            for column in 0..shown {
                let cell = graph
                    .edge_weight(row_index, column)
                    .map_or_else(|| "-".to_string(), |weight| weight.to_string());
                out.push_str(&format!("|{:<width$}", cell, width = WEIGHT_WIDTH));
            }
        }
        out.push('\n');
    }
}

fn distance_section(graph: &Graph, shown: usize, idx_width: usize, out: &mut String) {
    if graph.analyzed_sources().is_empty() {
        return;
    }
    out.push_str("  shortest path distances:\n");
    out.push_str(&" ".repeat(idx_width + 5));
    for column in 0..shown {
        out.push_str(&format!("+#{:-<width$}", column, width = WEIGHT_WIDTH - 1));
    }
    out.push('\n');
    for row_index in 0..shown {
        out.push_str(&format!("    #{:<width$}", row_index, width = idx_width));
        if let Some(row) = graph.distance_row(row_index) {
            for &distance in row.iter().take(shown) {
                if distance >= INFINITY {
                    out.push_str(&format!("{:<width$}", "|INF", width = WEIGHT_WIDTH + 1));
                } else {
                    out.push_str(&format!("|{:<width$}", distance, width = WEIGHT_WIDTH));
                }
            }
        } else {
            for _ in 0..shown {
                out.push_str(&format!("{:<width$}", "|?", width = WEIGHT_WIDTH + 1));
            }
        }
        out.push('\n');
    }
}

fn next_hop_section(graph: &Graph, shown: usize, idx_width: usize, out: &mut String) {
    if !graph.has_path_next() {
        return;
    }
    out.push_str("  shortest path - next vertices:\n");
    path_table(out, shown, idx_width, |from, to| graph.path_next(from, to));
}

fn predecessor_section(graph: &Graph, shown: usize, idx_width: usize, out: &mut String) {
    if !(0..graph.vertex_count()).any(|source| graph.has_path_prev(source)) {
        return;
    }
    out.push_str("  shortest path - previous vertices:\n");
    path_table(out, shown, idx_width, |from, to| graph.path_prev(from, to));
}

fn path_table<F>(out: &mut String, shown: usize, idx_width: usize, cell: F)
where
    F: Fn(usize, usize) -> Option<usize>,
{
    out.push_str(&" ".repeat(idx_width + 5));
    for column in 0..shown {
        out.push_str(&format!("+{:-<width$}", column, width = idx_width));
    }
    out.push('\n');
    for from in 0..shown {
        out.push_str(&format!("    #{:<width$}", from, width = idx_width));
        for to in 0..shown {
            let value = cell(from, to).map_or_else(|| "x".to_string(), |v| v.to_string());
            out.push_str(&format!("|{:<width$}", value, width = idx_width));
        }
        out.push('\n');
    }
}

fn components_section(graph: &Graph, out: &mut String) {
    let Some(count) = graph.component_count() else {
        return;
    };
    if count <= 1 {
        return;
    }
    out.push_str("  components:\n");
    for component in 0..count {
        out.push_str(&format!("    #{}:", component));
        for vertex in 0..graph.vertex_count() {
            if graph.component_id(vertex) == Some(component) {
                out.push_str(&format!(" {}", vertex));
            }
        }
        out.push('\n');
    }
}
