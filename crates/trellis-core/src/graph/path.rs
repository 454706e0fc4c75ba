//! Shortest-path reconstruction from the next-hop and predecessor tables

use crate::graph::{Graph, VertexId};

impl Graph {
    /// Materialize the shortest path `from -> to` computed by a previous
    /// algorithm run.
    ///
    /// Prefers the next-hop table (Floyd-Warshall) and walks it forward;
    /// falls back to the predecessor row of `from` (Dijkstra,
    /// Bellman-Ford, A*) walked backward and reversed. Returns the
    /// single-vertex path for `from == to`, and an empty sequence when the
    /// pair is unreachable, never analyzed, or out of range.
    pub fn get_path(&self, from: VertexId, to: VertexId) -> Vec<VertexId> {
        let vertex_count = self.vertex_count();
        if from >= vertex_count || to >= vertex_count {
            return Vec::new();
        }
        if from == to {
            return vec![from];
        }

        if let Some(next_hop) = self.path_next_table() {
            if next_hop[from][to].is_some() {
                let mut path = vec![from];
                let mut current = from;
                while current != to {
                    match next_hop[current][to] {
                        Some(next) => {
                            current = next;
                            path.push(current);
                        }
                        // dangling chain: the table was never completed
                        None => return Vec::new(),
                    }
                }
                return path;
            }
        }

        if let Some(predecessors) = self.prev_row(from) {
            if predecessors[to].is_some() {
                let mut path = vec![to];
                let mut current = to;
                while current != from {
                    match predecessors[current] {
                        Some(previous) => {
                            current = previous;
                            path.push(current);
                        }
                        None => return Vec::new(),
                    }
                }
                path.reverse();
                return path;
            }
        }

        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::Graph;

    fn line() -> Graph {
        Graph::from_list(4, true, vec![vec![1], vec![2], vec![3], vec![]]).unwrap()
    }

    #[test]
    fn single_vertex_path_for_equal_endpoints() {
        let mut g = line();
        g.dijkstra(0).unwrap();
        assert_eq!(g.get_path(2, 2), vec![2]);
        g.floyd_warshall(true);
        assert_eq!(g.get_path(2, 2), vec![2]);
    }

    #[test]
    fn walks_next_hop_table_forward() {
        let mut g = line();
        g.floyd_warshall(true);
        assert_eq!(g.get_path(0, 3), vec![0, 1, 2, 3]);
        assert_eq!(g.get_path(1, 3), vec![1, 2, 3]);
    }

    #[test]
    fn falls_back_to_predecessor_row() {
        let mut g = line();
        g.dijkstra(1).unwrap();
        assert_eq!(g.get_path(1, 3), vec![1, 2, 3]);
        // source 0 was never analyzed
        assert_eq!(g.get_path(0, 3), Vec::<usize>::new());
    }

    #[test]
    fn unreachable_pair_yields_empty_path() {
        let mut g = line();
        g.dijkstra(3).unwrap();
        assert_eq!(g.get_path(3, 0), Vec::<usize>::new());
    }

    #[test]
    fn out_of_range_endpoints_yield_empty_path() {
        let g = line();
        assert_eq!(g.get_path(0, 11), Vec::<usize>::new());
        assert_eq!(g.get_path(11, 11), Vec::<usize>::new());
    }
}
