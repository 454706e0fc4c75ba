//! Conversion between adjacency representations, edge mirroring and
//! degree counting
//!
//! Whichever representation is present drives the other; matrix cells hold
//! edge multiplicities, so parallel edges survive a round trip.

use super::{Graph, VertexId};

impl Graph {
    /// Build the adjacency matrix from the adjacency list.
    ///
    /// With no list present an existing matrix is left alone; with neither
    /// representation present the result is an all-zero matrix.
    pub fn to_matrix(&mut self) {
        let vertex_count = self.vertex_count();
        match self.adjacency_list() {
            Some(list) => {
                let mut matrix = vec![vec![0u32; vertex_count]; vertex_count];
                for (from, neighbors) in list.iter().enumerate() {
                    for &to in neighbors {
                        matrix[from][to] += 1;
                    }
                }
                self.set_adjacency_matrix(Some(matrix));
            }
            None => {
                if self.adjacency_matrix().is_none() {
                    self.set_adjacency_matrix(Some(vec![vec![0u32; vertex_count]; vertex_count]));
                }
            }
        }
    }

    /// Build the adjacency list from the adjacency matrix, expanding each
    /// cell of multiplicity `k` into `k` list entries.
    pub fn to_list(&mut self) {
        let vertex_count = self.vertex_count();
        match self.adjacency_matrix() {
            Some(matrix) => {
                let mut list: Vec<Vec<VertexId>> = vec![Vec::new(); vertex_count];
                for (from, row) in matrix.iter().enumerate() {
                    for (to, &multiplicity) in row.iter().enumerate() {
                        for _ in 0..multiplicity {
                            list[from].push(to);
                        }
                    }
                }
                self.set_adjacency_list(Some(list));
            }
            None => {
                if self.adjacency_list().is_none() {
                    self.set_adjacency_list(Some(vec![Vec::new(); vertex_count]));
                }
            }
        }
    }

    pub(crate) fn ensure_list(&mut self) {
        if self.adjacency_list().is_none() {
            self.to_list();
        }
    }

    pub(crate) fn ensure_matrix(&mut self) {
        if self.adjacency_matrix().is_none() {
            self.to_matrix();
        }
    }

    /// Make all edges bidirectional.
    ///
    /// Each matrix cell pair becomes the max of both directions; edge
    /// weights take the existing weight where only one direction is set,
    /// or the max where both are. The adjacency list is rebuilt from the
    /// mirrored matrix. Must run before any directed analysis of an
    /// undirected graph.
    pub fn mirror_edges(&mut self) {
        self.ensure_matrix();
        let vertex_count = self.vertex_count();
        if let Some(matrix) = self.adjacency_matrix_mut() {
            for i in 0..vertex_count {
                for j in 0..i {
                    let multiplicity = matrix[i][j].max(matrix[j][i]);
                    matrix[i][j] = multiplicity;
                    matrix[j][i] = multiplicity;
                }
            }
        }
        if let Some(weights) = self.edge_weights_mut() {
            let pairs: Vec<(VertexId, VertexId)> = weights.keys().copied().collect();
            for (from, to) in pairs {
                let forward = weights.get(&(from, to)).copied();
                let backward = weights.get(&(to, from)).copied();
                let mirrored = match (forward, backward) {
                    (Some(a), Some(b)) => a.max(b),
                    (Some(a), None) | (None, Some(a)) => a,
                    (None, None) => continue,
                };
                weights.insert((from, to), mirrored);
                weights.insert((to, from), mirrored);
            }
        }
        // the list is stale now; rebuild it from the mirrored matrix
        self.set_adjacency_list(None);
        self.to_list();
    }

    /// Count edges, halving the total for undirected graphs (each edge is
    /// stored in both directions).
    pub fn count_edges(&mut self) -> usize {
        let mut count = if let Some(list) = self.adjacency_list() {
            list.iter().map(Vec::len).sum()
        } else if let Some(matrix) = self.adjacency_matrix() {
            matrix
                .iter()
                .flatten()
                .map(|&multiplicity| multiplicity as usize)
                .sum()
        } else {
            0
        };
        if !self.is_directed() {
            count /= 2;
        }
        self.set_edge_count(count);
        count
    }

    /// Count in and out degrees in one pass over the adjacency list.
    /// Defined only when a list representation exists; no-op otherwise.
    pub fn count_degrees(&mut self) {
        let vertex_count = self.vertex_count();
        let Some(list) = self.adjacency_list() else {
            return;
        };
        let mut in_degree = vec![0usize; vertex_count];
        let mut out_degree = vec![0usize; vertex_count];
        for (from, neighbors) in list.iter().enumerate() {
            out_degree[from] += neighbors.len();
            for &to in neighbors {
                in_degree[to] += 1;
            }
        }
        self.set_degrees(in_degree, out_degree);
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::Graph;

    #[test]
    fn list_to_matrix_counts_parallel_edges() {
        let mut g = Graph::from_list(3, true, vec![vec![1, 1, 2], vec![2], vec![]]).unwrap();
        g.to_matrix();
        let m = g.adjacency_matrix().unwrap();
        assert_eq!(m[0], vec![0, 2, 1]);
        assert_eq!(m[1], vec![0, 0, 1]);
        assert_eq!(m[2], vec![0, 0, 0]);
    }

    #[test]
    fn matrix_to_list_expands_multiplicity() {
        let mut g =
            Graph::from_matrix(2, true, vec![vec![0, 3], vec![1, 0]]).unwrap();
        g.to_list();
        let list = g.adjacency_list().unwrap();
        assert_eq!(list[0], vec![1, 1, 1]);
        assert_eq!(list[1], vec![0]);
    }

    #[test]
    fn round_trip_preserves_neighbor_multiset() {
        let original = vec![vec![2, 1, 1], vec![0], vec![0, 2]];
        let mut g = Graph::from_list(3, true, original.clone()).unwrap();
        g.to_matrix();
        g.set_adjacency_list(None);
        g.to_list();
        let restored = g.adjacency_list().unwrap();
        for (row, original_row) in restored.iter().zip(&original) {
            let mut a = row.clone();
            let mut b = original_row.clone();
            a.sort_unstable();
            b.sort_unstable();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn both_representations_absent_yields_empty() {
        let mut g = Graph::from_list(4, true, vec![Vec::new(); 4]).unwrap();
        g.set_adjacency_list(None);
        g.to_matrix();
        assert_eq!(g.adjacency_matrix().unwrap(), vec![vec![0; 4]; 4]);
        g.to_list();
        assert_eq!(g.adjacency_list().unwrap(), vec![Vec::<usize>::new(); 4]);
    }

    #[test]
    fn mirror_edges_symmetrizes_matrix_and_weights() {
        let mut g = Graph::from_list(3, false, vec![vec![1], vec![2], vec![]])
            .unwrap()
            .with_edge_weights([((0, 1), 5), ((1, 2), 7)].into())
            .unwrap();
        g.mirror_edges();
        let m = g.adjacency_matrix().unwrap();
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(m[i][j], m[j][i]);
            }
        }
        assert_eq!(g.edge_weight(1, 0), Some(5));
        assert_eq!(g.edge_weight(2, 1), Some(7));
    }

    #[test]
    fn mirror_edges_takes_max_where_both_directions_set() {
        let mut g = Graph::from_list(2, false, vec![vec![1], vec![0]])
            .unwrap()
            .with_edge_weights([((0, 1), 3), ((1, 0), 9)].into())
            .unwrap();
        g.mirror_edges();
        assert_eq!(g.edge_weight(0, 1), Some(9));
        assert_eq!(g.edge_weight(1, 0), Some(9));
    }

    #[test]
    fn count_edges_halves_undirected_total() {
        let mut g = Graph::from_list(3, false, vec![vec![1], vec![0, 2], vec![1]]).unwrap();
        assert_eq!(g.count_edges(), 2);

        let mut g = Graph::from_list(3, true, vec![vec![1], vec![0, 2], vec![1]]).unwrap();
        assert_eq!(g.count_edges(), 4);
    }

    #[test]
    fn count_degrees_tallies_both_directions() {
        let mut g = Graph::from_list(3, true, vec![vec![1, 2], vec![2], vec![]]).unwrap();
        g.count_degrees();
        assert_eq!(g.out_degree().unwrap(), vec![2, 1, 0]);
        assert_eq!(g.in_degree().unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn count_degrees_without_list_is_noop() {
        let mut g = Graph::from_matrix(2, true, vec![vec![0, 1], vec![0, 0]]).unwrap();
        g.count_degrees();
        assert!(g.in_degree().is_none());
        assert!(g.out_degree().is_none());
    }
}
