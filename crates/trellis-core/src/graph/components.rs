//! Connected-component labeling for undirected graphs

use crate::graph::{Graph, VertexId};

impl Graph {
    /// Label every vertex with a component id and count the components.
    ///
    /// Only meaningful for undirected graphs; a no-op for directed ones.
    /// Labeling recurses per component (O(component size) depth), which is
    /// fine for the graph sizes this engine targets; the public traversals
    /// stay iterative.
    #[tracing::instrument(skip(self), fields(vertices = self.vertex_count()))]
    pub fn calculate_components(&mut self) {
        if self.is_directed() {
            return;
        }
        self.ensure_list();

        let vertex_count = self.vertex_count();
        let mut labels: Vec<Option<usize>> = vec![None; vertex_count];
        let mut parent = self
            .take_parent_tree()
            .unwrap_or_else(|| vec![None; vertex_count]);
        let mut count = 0;

        let adjacency = self.adjacency();
        for vertex in 0..vertex_count {
            if labels[vertex].is_none() {
                label_component(adjacency, &mut labels, &mut parent, vertex, count);
                count += 1;
            }
        }

        self.set_parent_tree(parent);
        self.set_components(labels, count);
    }
}

/// Depth-first labeling of the component containing `from`.
fn label_component(
    adjacency: &[Vec<VertexId>],
    labels: &mut [Option<usize>],
    parent: &mut [Option<VertexId>],
    from: VertexId,
    component: usize,
) {
    labels[from] = Some(component);
    for &neighbor in &adjacency[from] {
        if labels[neighbor] != Some(component) {
            parent[neighbor] = Some(from);
            label_component(adjacency, labels, parent, neighbor, component);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::Graph;

    #[test]
    fn two_triangles_make_two_components() {
        let mut g = Graph::from_list(
            6,
            false,
            vec![
                vec![1, 2],
                vec![0, 2],
                vec![0, 1],
                vec![4, 5],
                vec![3, 5],
                vec![3, 4],
            ],
        )
        .unwrap();
        g.calculate_components();
        assert_eq!(g.component_count(), Some(2));
        assert_eq!(g.component_id(0), g.component_id(1));
        assert_eq!(g.component_id(1), g.component_id(2));
        assert_ne!(g.component_id(0), g.component_id(3));
        assert_eq!(g.component_id(3), g.component_id(5));
    }

    #[test]
    fn isolated_vertices_each_form_a_component() {
        let mut g = Graph::from_list(3, false, vec![vec![], vec![], vec![]]).unwrap();
        g.calculate_components();
        assert_eq!(g.component_count(), Some(3));
        assert_eq!(g.component_id(2), Some(2));
    }

    #[test]
    fn directed_graph_is_skipped() {
        let mut g = Graph::from_list(2, true, vec![vec![1], vec![]]).unwrap();
        g.calculate_components();
        assert_eq!(g.component_count(), None);
        assert_eq!(g.component_id(0), None);
    }
}
