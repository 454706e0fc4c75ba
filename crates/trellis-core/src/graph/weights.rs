//! Weight inspection and the shared edge-cost rule

use super::{Graph, VertexId};

impl Graph {
    /// Scan edge weights, then vertex weights, for a negative value.
    ///
    /// Short-circuits on the first hit; records and returns `false` when no
    /// weights are negative or none were supplied. The result drives the
    /// orchestrator's choice between Dijkstra and Bellman-Ford.
    pub fn check_negative_weight(&mut self) -> bool {
        let negative = self
            .edge_weights_map()
            .is_some_and(|weights| weights.values().any(|&weight| weight < 0))
            || self
                .vertex_weights_map()
                .is_some_and(|weights| weights.values().any(|&weight| weight < 0));
        self.set_has_negative_weight(negative);
        negative
    }

    /// Default cost of an edge with no explicit weight: 1 for a fully
    /// unweighted graph, 0 as soon as any vertex or edge weights exist.
    pub(crate) fn default_edge_weight(&self) -> i64 {
        if self.has_vertex_weights() || self.has_edge_weights() {
            0
        } else {
            1
        }
    }

    /// Effective cost of traversing `from -> to`: the edge weight (or the
    /// default) plus the visiting cost of `to`. The source vertex's own
    /// weight is not included here; each algorithm adds it once at the end.
    pub(crate) fn edge_cost(&self, from: VertexId, to: VertexId) -> i64 {
        self.edge_weight(from, to)
            .unwrap_or_else(|| self.default_edge_weight())
            + self.vertex_weight(to).unwrap_or(0)
    }

    /// Add the source's own visiting cost to every reachable entry of a
    /// freshly computed distance row.
    pub(crate) fn add_source_weight(&self, source: VertexId, distances: &mut [i64]) {
        if let Some(weight) = self.vertex_weight(source) {
            for distance in distances.iter_mut() {
                if *distance < super::INFINITY {
                    *distance += weight;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::{Graph, INFINITY};

    #[test]
    fn negative_edge_weight_detected() {
        let mut g = Graph::from_list(2, true, vec![vec![1], vec![]])
            .unwrap()
            .with_edge_weights([((0, 1), -4)].into())
            .unwrap();
        assert!(g.check_negative_weight());
        assert_eq!(g.has_negative_weight(), Some(true));
    }

    #[test]
    fn negative_vertex_weight_detected() {
        let mut g = Graph::from_list(2, true, vec![vec![1], vec![]])
            .unwrap()
            .with_vertex_weights([(1, -1)].into())
            .unwrap();
        assert!(g.check_negative_weight());
    }

    #[test]
    fn absent_weights_are_not_negative() {
        let mut g = Graph::from_list(2, true, vec![vec![1], vec![]]).unwrap();
        assert!(!g.check_negative_weight());
        assert_eq!(g.has_negative_weight(), Some(false));
    }

    #[test]
    fn unweighted_graph_defaults_edges_to_one() {
        let g = Graph::from_list(2, true, vec![vec![1], vec![]]).unwrap();
        assert_eq!(g.edge_cost(0, 1), 1);
    }

    #[test]
    fn weighted_graph_defaults_missing_edges_to_zero() {
        let g = Graph::from_list(3, true, vec![vec![1, 2], vec![], vec![]])
            .unwrap()
            .with_edge_weights([((0, 1), 5)].into())
            .unwrap();
        assert_eq!(g.edge_cost(0, 1), 5);
        assert_eq!(g.edge_cost(0, 2), 0);
    }

    #[test]
    fn edge_cost_includes_target_vertex_weight() {
        let g = Graph::from_list(2, true, vec![vec![1], vec![]])
            .unwrap()
            .with_vertex_weights([(1, 3)].into())
            .unwrap()
            .with_edge_weights([((0, 1), 5)].into())
            .unwrap();
        assert_eq!(g.edge_cost(0, 1), 8);
    }

    #[test]
    fn source_weight_skips_unreachable_entries() {
        let g = Graph::from_list(2, true, vec![vec![], vec![]])
            .unwrap()
            .with_vertex_weights([(0, 7)].into())
            .unwrap();
        let mut row = vec![0, INFINITY];
        g.add_source_weight(0, &mut row);
        assert_eq!(row, vec![7, INFINITY]);
    }
}
