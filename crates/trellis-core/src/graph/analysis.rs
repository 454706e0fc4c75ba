//! Full analysis pipeline
//!
//! A convenience driver over the individual operations; every step remains
//! independently callable.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::Result;
use crate::graph::{Graph, VertexId, INFINITY};

impl Graph {
    /// Run the whole pipeline: mirror edges if undirected, sync both
    /// adjacency representations, count edges and degrees, inspect
    /// weights, compute shortest paths from every source (Bellman-Ford
    /// plus Floyd-Warshall when negative weights are present, Dijkstra
    /// otherwise), label components, then run one A*, one BFS and one DFS
    /// from vertex 0 with the target fixed to the last vertex.
    #[tracing::instrument(skip(self), fields(vertices = self.vertex_count(), directed = self.is_directed()))]
    pub fn analyze(&mut self) -> Result<()> {
        if !self.is_directed() {
            self.mirror_edges();
        }
        self.ensure_matrix();
        self.ensure_list();
        self.count_edges();
        self.count_degrees();
        if self.check_negative_weight() {
            for source in 0..self.vertex_count() {
                self.bellman_ford(source);
            }
            if self.has_negative_cycle().is_none() {
                self.set_has_negative_cycle(false);
            }
            self.floyd_warshall(true);
        } else {
            for source in 0..self.vertex_count() {
                self.dijkstra(source)?;
            }
        }
        self.calculate_components();
        self.set_endpoints(0, self.vertex_count().saturating_sub(1));
        self.a_star(self.start())?;
        self.bfs(self.start(), |_| false);
        self.dfs(self.start(), |_| false);
        Ok(())
    }

    /// Snapshot of the derived results for serialized output.
    pub fn summary(&self) -> AnalysisSummary {
        let distances = self
            .analyzed_sources()
            .into_iter()
            .filter_map(|source| {
                self.distance_row(source).map(|row| {
                    let row = row
                        .iter()
                        .map(|&distance| (distance < INFINITY).then_some(distance))
                        .collect();
                    (source, row)
                })
            })
            .collect();

        AnalysisSummary {
            description: self.description().to_string(),
            vertex_count: self.vertex_count(),
            directed: self.is_directed(),
            edge_count: self.edge_count(),
            out_degree: self.out_degree().map(<[usize]>::to_vec),
            in_degree: self.in_degree().map(<[usize]>::to_vec),
            has_negative_weight: self.has_negative_weight(),
            has_negative_cycle: self.has_negative_cycle(),
            component_count: self.component_count(),
            component_id: (0..self.vertex_count())
                .map(|vertex| self.component_id(vertex))
                .collect(),
            start: self.start(),
            target: self.target(),
            shortest_path: self.get_path(self.start(), self.target()),
            distances,
        }
    }
}

/// Serialized view of a fully or partially analyzed graph.
///
/// Unreachable distances serialize as `null` rather than exposing the
/// sentinel value.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisSummary {
    pub description: String,
    pub vertex_count: usize,
    pub directed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edge_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_degree: Option<Vec<usize>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_degree: Option<Vec<usize>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_negative_weight: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_negative_cycle: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_count: Option<usize>,
    pub component_id: Vec<Option<usize>>,
    pub start: VertexId,
    pub target: VertexId,
    pub shortest_path: Vec<VertexId>,
    pub distances: BTreeMap<VertexId, Vec<Option<i64>>>,
}
