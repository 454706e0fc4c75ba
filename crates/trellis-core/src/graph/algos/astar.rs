//! A* single-source search toward the designated target
//!
//! <https://en.wikipedia.org/wiki/A*_search_algorithm>

use crate::error::Result;
use crate::graph::{Graph, MinPriorityQueue, VertexId, INFINITY};

impl Graph {
    /// Search for the shortest path from `source` to the designated target
    /// vertex, guided by the heuristic scores. Without heuristic scores
    /// every estimate is 0 and the search degenerates to Dijkstra.
    ///
    /// Returns `Ok(true)` as soon as the target is extracted from the open
    /// set; distances and predecessors are then only guaranteed for the
    /// vertices actually processed. Returns `Ok(false)` when the target is
    /// unreachable or either endpoint is out of range (the latter without
    /// mutating any state).
    ///
    /// # Errors
    /// Propagates priority-queue contract violations.
    #[tracing::instrument(skip(self), fields(target = self.target(), vertices = self.vertex_count()))]
    pub fn a_star(&mut self, source: VertexId) -> Result<bool> {
        let vertex_count = self.vertex_count();
        let target = self.target();
        if source >= vertex_count || target >= vertex_count {
            return Ok(false);
        }
        self.ensure_list();

        let mut distances = vec![INFINITY; vertex_count];
        let mut f_scores = vec![INFINITY; vertex_count];
        let mut predecessors: Vec<Option<VertexId>> = vec![None; vertex_count];
        let mut closed = vec![false; vertex_count];

        let heuristic = self.heuristic();
        let estimate = |vertex: VertexId| heuristic.map_or(0, |scores| scores[vertex]);

        distances[source] = 0;
        f_scores[source] = estimate(source);

        let mut open = MinPriorityQueue::new();
        open.insert(source, f_scores[source])?;

        let adjacency = self.adjacency();
        let mut reached = false;
        while !open.is_empty() {
            let current = open.extract_min()?;
            closed[current] = true;
            if current == target {
                reached = true;
                break;
            }
            for &neighbor in &adjacency[current] {
                if closed[neighbor] {
                    continue;
                }
                // recomputed unconditionally; the sentinel is sized so an
                // unreached `current` cannot overflow the sum
                let tentative = distances[current] + self.edge_cost(current, neighbor);
                if !open.contains(neighbor) {
                    open.insert(neighbor, f_scores[neighbor])?;
                }
                if tentative < distances[neighbor] {
                    predecessors[neighbor] = Some(current);
                    distances[neighbor] = tentative;
                    f_scores[neighbor] = tentative + estimate(neighbor);
                    open.change_priority(neighbor, f_scores[neighbor])?;
                }
            }
        }

        self.add_source_weight(source, &mut distances);
        self.insert_distance_row(source, distances);
        self.insert_prev_row(source, predecessors);
        Ok(reached)
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::Graph;

    fn diamond() -> Graph {
        // 0 - 1 - 3 and 0 - 2 - 3, undirected, already mirrored
        Graph::from_list(4, false, vec![vec![1, 2], vec![0, 3], vec![0, 3], vec![1, 2]])
            .unwrap()
            .with_edge_weights(
                [
                    ((0, 1), 1),
                    ((1, 0), 1),
                    ((1, 3), 1),
                    ((3, 1), 1),
                    ((0, 2), 2),
                    ((2, 0), 2),
                    ((2, 3), 2),
                    ((3, 2), 2),
                ]
                .into(),
            )
            .unwrap()
    }

    #[test]
    fn reaches_target_along_cheapest_route() {
        let mut g = diamond().with_heuristic(vec![2, 1, 3, 0]).unwrap();
        g.set_endpoints(0, 3);
        assert!(g.a_star(0).unwrap());
        assert_eq!(g.distance(0, 3), Some(2));
        assert_eq!(g.get_path(0, 3), vec![0, 1, 3]);
    }

    #[test]
    fn zero_heuristic_matches_dijkstra() {
        let mut astar = diamond();
        astar.set_endpoints(0, 3);
        assert!(astar.a_star(0).unwrap());

        let mut dijkstra = diamond();
        dijkstra.dijkstra(0).unwrap();
        assert_eq!(astar.distance(0, 3), dijkstra.distance(0, 3));
    }

    #[test]
    fn unreachable_target_returns_false() {
        let mut g = Graph::from_list(3, true, vec![vec![1], vec![], vec![]]).unwrap();
        g.set_endpoints(0, 2);
        assert!(!g.a_star(0).unwrap());
        assert_eq!(g.get_path(0, 2), Vec::<usize>::new());
    }

    #[test]
    fn out_of_range_endpoints_leave_state_untouched() {
        let mut g = diamond();
        g.set_endpoints(0, 9);
        assert!(!g.a_star(0).unwrap());
        assert!(g.distance_row(0).is_none());

        g.set_endpoints(0, 3);
        assert!(!g.a_star(7).unwrap());
        assert!(g.distance_row(7).is_none());
    }

    #[test]
    fn search_stops_once_target_is_settled() {
        // long tail 3 - 4 - 5 behind the target never gets expanded when
        // the heuristic pulls straight toward 3
        let mut g = Graph::from_list(
            6,
            true,
            vec![vec![1, 2], vec![3], vec![3], vec![4], vec![5], vec![]],
        )
        .unwrap()
        .with_edge_weights(
            [((0, 1), 1), ((0, 2), 5), ((1, 3), 1), ((2, 3), 1), ((3, 4), 1), ((4, 5), 1)].into(),
        )
        .unwrap()
        .with_heuristic(vec![2, 1, 1, 0, 9, 9])
        .unwrap();
        g.set_endpoints(0, 3);
        assert!(g.a_star(0).unwrap());
        assert_eq!(g.distance(0, 3), Some(2));
        // vertices past the target were never relaxed
        assert_eq!(g.path_prev(0, 4), None);
        assert_eq!(g.path_prev(0, 5), None);
    }
}
