//! Floyd-Warshall all-pairs shortest paths
//!
//! <https://en.wikipedia.org/wiki/Floyd%E2%80%93Warshall_algorithm>

use crate::graph::{Graph, VertexId, INFINITY};

impl Graph {
    /// Compute shortest distances between every pair of vertices,
    /// overwriting the distance row of each source.
    ///
    /// Supports negative weights but not negative cycles; cycle detection
    /// is Bellman-Ford's job. With `build_paths` the next-hop table for
    /// path reconstruction is maintained as well. O(v^3) time, O(v^2)
    /// memory.
    #[tracing::instrument(skip(self), fields(vertices = self.vertex_count()))]
    pub fn floyd_warshall(&mut self, build_paths: bool) {
        self.ensure_list();
        let vertex_count = self.vertex_count();
        let mut distances = vec![vec![INFINITY; vertex_count]; vertex_count];
        let mut next_hop: Vec<Vec<Option<VertexId>>> = vec![vec![None; vertex_count]; vertex_count];

        let adjacency = self.adjacency();
        for (from, neighbors) in adjacency.iter().enumerate() {
            for &to in neighbors {
                distances[from][to] = self.edge_cost(from, to);
                if build_paths {
                    next_hop[from][to] = Some(to);
                }
            }
        }
        for i in 0..vertex_count {
            distances[i][i] = 0;
            if build_paths {
                next_hop[i][i] = Some(i);
            }
        }

        for k in 0..vertex_count {
            for i in 0..vertex_count {
                if distances[i][k] >= INFINITY {
                    continue;
                }
                for j in 0..vertex_count {
                    if distances[k][j] >= INFINITY {
                        continue;
                    }
                    let alternative = distances[i][k] + distances[k][j];
                    if alternative < distances[i][j] {
                        distances[i][j] = alternative;
                        if build_paths {
                            if let Some(hop) = next_hop[i][k] {
                                next_hop[i][j] = Some(hop);
                            }
                        }
                    }
                }
            }
        }

        for (source, row) in distances.iter_mut().enumerate() {
            self.add_source_weight(source, row);
        }
        for (source, row) in distances.into_iter().enumerate() {
            self.insert_distance_row(source, row);
        }
        if build_paths {
            self.set_path_next_table(next_hop);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::{Graph, INFINITY};

    fn weighted_line() -> Graph {
        // 0 -> 1 -> 2 with a 10-cost shortcut 0 -> 2
        Graph::from_list(3, true, vec![vec![1, 2], vec![2], vec![]])
            .unwrap()
            .with_edge_weights([((0, 1), 1), ((1, 2), 2), ((0, 2), 10)].into())
            .unwrap()
    }

    #[test]
    fn relaxes_through_intermediates() {
        let mut g = weighted_line();
        g.floyd_warshall(true);
        assert_eq!(g.distance(0, 2), Some(3));
        assert_eq!(g.distance(1, 2), Some(2));
        assert_eq!(g.distance(2, 0), Some(INFINITY));
    }

    #[test]
    fn diagonal_is_zero() {
        let mut g = weighted_line();
        g.floyd_warshall(false);
        for i in 0..3 {
            assert_eq!(g.distance(i, i), Some(0));
        }
    }

    #[test]
    fn next_hop_follows_the_improved_route() {
        let mut g = weighted_line();
        g.floyd_warshall(true);
        assert_eq!(g.path_next(0, 2), Some(1));
        assert_eq!(g.path_next(1, 2), Some(2));
        assert_eq!(g.get_path(0, 2), vec![0, 1, 2]);
    }

    #[test]
    fn handles_negative_weights_without_cycles() {
        let mut g = Graph::from_list(3, true, vec![vec![1], vec![2], vec![]])
            .unwrap()
            .with_edge_weights([((0, 1), 4), ((1, 2), -2)].into())
            .unwrap();
        g.floyd_warshall(false);
        assert_eq!(g.distance(0, 2), Some(2));
    }

    #[test]
    fn source_vertex_weight_added_once_per_row() {
        let mut g = Graph::from_list(2, true, vec![vec![1], vec![]])
            .unwrap()
            .with_vertex_weights([(0, 5), (1, 2)].into())
            .unwrap();
        g.floyd_warshall(false);
        // edge cost is the target weight (2); the source's own 5 lands on
        // the whole row, including the diagonal
        assert_eq!(g.distance(0, 1), Some(7));
        assert_eq!(g.distance(0, 0), Some(5));
        assert_eq!(g.distance(1, 1), Some(2));
    }

    #[test]
    fn zero_vertices_is_a_noop() {
        let mut g = Graph::from_list(0, true, vec![]).unwrap();
        g.floyd_warshall(true);
        assert!(g.analyzed_sources().is_empty());
    }
}
