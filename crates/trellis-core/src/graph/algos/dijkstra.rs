//! Dijkstra single-source shortest paths
//!
//! <https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm>

use crate::error::Result;
use crate::graph::{Graph, MinPriorityQueue, VertexId, INFINITY};

impl Graph {
    /// Compute shortest distances from `source` to every vertex, recording
    /// predecessors for path reconstruction.
    ///
    /// Requires non-negative weights: if any weight is negative (checked on
    /// demand when the inspection has not run yet) the call is a no-op and
    /// returns `Ok(false)`, as it does for an out-of-range source. Returns
    /// `Ok(true)` once the source row has been computed. O(e + v log v)
    /// with the mutable priority queue.
    ///
    /// # Errors
    /// Propagates priority-queue contract violations, which indicate a bug
    /// in the relaxation logic rather than bad input.
    #[tracing::instrument(skip(self), fields(vertices = self.vertex_count()))]
    pub fn dijkstra(&mut self, source: VertexId) -> Result<bool> {
        if source >= self.vertex_count() {
            return Ok(false);
        }
        if self.has_negative_weight().is_none() {
            self.check_negative_weight();
        }
        if self.has_negative_weight() == Some(true) {
            return Ok(false);
        }
        self.ensure_list();

        let vertex_count = self.vertex_count();
        let mut distances = vec![INFINITY; vertex_count];
        let mut predecessors: Vec<Option<VertexId>> = vec![None; vertex_count];
        distances[source] = 0;

        let mut queue = MinPriorityQueue::new();
        queue.insert(source, 0)?;

        let adjacency = self.adjacency();
        while !queue.is_empty() {
            let current = queue.extract_min()?;
            for &neighbor in &adjacency[current] {
                let alternative = distances[current] + self.edge_cost(current, neighbor);
                if alternative < distances[neighbor] {
                    distances[neighbor] = alternative;
                    predecessors[neighbor] = Some(current);
                    if queue.contains(neighbor) {
                        queue.change_priority(neighbor, alternative)?;
                    } else {
                        queue.insert(neighbor, alternative)?;
                    }
                }
            }
        }

        self.add_source_weight(source, &mut distances);
        self.insert_distance_row(source, distances);
        self.insert_prev_row(source, predecessors);
        Ok(true)
    }
}
