//! Bellman-Ford single-source shortest paths with negative-cycle detection
//!
//! <https://en.wikipedia.org/wiki/Bellman%E2%80%93Ford_algorithm>

use crate::graph::{Graph, VertexId, INFINITY};

impl Graph {
    /// Compute shortest distances from `source`, tolerating negative
    /// weights.
    ///
    /// Relaxes every edge `vertex_count` times; a further pass that still
    /// improves a distance proves a negative cycle reachable from
    /// `source`, in which case the negative-cycle flag is set and `false`
    /// is returned without publishing tables for this source. An
    /// out-of-range source also returns `false`. O(v * e).
    #[tracing::instrument(skip(self), fields(vertices = self.vertex_count()))]
    pub fn bellman_ford(&mut self, source: VertexId) -> bool {
        if source >= self.vertex_count() {
            return false;
        }
        self.ensure_list();

        let vertex_count = self.vertex_count();
        let mut distances = vec![INFINITY; vertex_count];
        let mut predecessors: Vec<Option<VertexId>> = vec![None; vertex_count];
        distances[source] = 0;

        let adjacency = self.adjacency();
        for _ in 0..vertex_count {
            for (from, neighbors) in adjacency.iter().enumerate() {
                if distances[from] >= INFINITY {
                    continue;
                }
                for &to in neighbors {
                    let alternative = distances[from] + self.edge_cost(from, to);
                    if alternative < distances[to] {
                        distances[to] = alternative;
                        predecessors[to] = Some(from);
                    }
                }
            }
        }

        // any remaining improvement can only come from a negative cycle
        let mut cycle = false;
        'detect: for (from, neighbors) in adjacency.iter().enumerate() {
            if distances[from] >= INFINITY {
                continue;
            }
            for &to in neighbors {
                if distances[from] + self.edge_cost(from, to) < distances[to] {
                    cycle = true;
                    break 'detect;
                }
            }
        }
        if cycle {
            self.set_has_negative_cycle(true);
            return false;
        }

        self.add_source_weight(source, &mut distances);
        self.insert_distance_row(source, distances);
        self.insert_prev_row(source, predecessors);
        true
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::{Graph, INFINITY};

    #[test]
    fn agrees_with_dijkstra_on_non_negative_graphs() {
        let list = vec![vec![1, 2], vec![2], vec![0], vec![]];
        let weights = [((0, 1), 1), ((1, 2), 2), ((0, 2), 10), ((2, 0), 3)];
        let mut bf = Graph::from_list(4, true, list.clone())
            .unwrap()
            .with_edge_weights(weights.into())
            .unwrap();
        let mut dj = Graph::from_list(4, true, list)
            .unwrap()
            .with_edge_weights(weights.into())
            .unwrap();
        assert!(bf.bellman_ford(0));
        assert!(dj.dijkstra(0).unwrap());
        for target in 0..4 {
            assert_eq!(bf.distance(0, target), dj.distance(0, target));
        }
    }

    #[test]
    fn relaxes_negative_edges() {
        let mut g = Graph::from_list(3, true, vec![vec![1], vec![2], vec![]])
            .unwrap()
            .with_edge_weights([((0, 1), 5), ((1, 2), -3)].into())
            .unwrap();
        assert!(g.bellman_ford(0));
        assert_eq!(g.distance(0, 2), Some(2));
        assert_eq!(g.path_prev(0, 2), Some(1));
        assert_eq!(g.has_negative_cycle(), None);
    }

    #[test]
    fn negative_triangle_is_reported() {
        let mut g = Graph::from_list(3, true, vec![vec![1], vec![2], vec![0]])
            .unwrap()
            .with_edge_weights([((0, 1), -1), ((1, 2), -1), ((2, 0), -1)].into())
            .unwrap();
        assert!(!g.bellman_ford(0));
        assert_eq!(g.has_negative_cycle(), Some(true));
        // tables for the failed source are not published
        assert!(g.distance_row(0).is_none());
    }

    #[test]
    fn unreachable_negative_cycle_does_not_trip_detection() {
        // the 1 <-> 2 negative cycle is not reachable from 3
        let mut g = Graph::from_list(4, true, vec![vec![], vec![2], vec![1], vec![]])
            .unwrap()
            .with_edge_weights([((1, 2), -2), ((2, 1), -2)].into())
            .unwrap();
        assert!(g.bellman_ford(3));
        assert_eq!(g.distance(3, 3), Some(0));
        assert_eq!(g.distance(3, 1), Some(INFINITY));
    }

    #[test]
    fn out_of_range_source_returns_false() {
        let mut g = Graph::from_list(2, true, vec![vec![1], vec![]]).unwrap();
        assert!(!g.bellman_ford(5));
    }
}
