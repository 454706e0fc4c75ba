//! Breadth-first and depth-first traversal
//!
//! Both traversals take a visitor closure called once per visited vertex;
//! returning `true` stops the search early. Each call overwrites the
//! single parent tree owned by the graph. An out-of-range source returns
//! `false` and leaves existing state untouched.

use std::collections::VecDeque;

use crate::graph::{Graph, VertexId};

impl Graph {
    /// Breadth-first search from `source` in level order.
    ///
    /// Returns `true` if the visitor requested termination, `false` once
    /// the component is exhausted.
    #[tracing::instrument(skip(self, visit), fields(vertices = self.vertex_count()))]
    pub fn bfs<F>(&mut self, source: VertexId, mut visit: F) -> bool
    where
        F: FnMut(VertexId) -> bool,
    {
        if source >= self.vertex_count() {
            return false;
        }
        self.ensure_list();

        let vertex_count = self.vertex_count();
        let mut visited = vec![false; vertex_count];
        let mut parent: Vec<Option<VertexId>> = vec![None; vertex_count];
        let mut queue = VecDeque::new();
        visited[source] = true;
        queue.push_back(source);

        let adjacency = self.adjacency();
        let mut stopped = false;
        while let Some(current) = queue.pop_front() {
            if visit(current) {
                stopped = true;
                break;
            }
            for &neighbor in &adjacency[current] {
                if !visited[neighbor] {
                    visited[neighbor] = true;
                    parent[neighbor] = Some(current);
                    queue.push_back(neighbor);
                }
            }
        }

        self.set_parent_tree(parent);
        stopped
    }

    /// Iterative depth-first search from `source`.
    ///
    /// Same visitor contract as [`bfs`](Graph::bfs), in depth order. A
    /// vertex is marked visited only when popped, so duplicates may
    /// transiently occupy the stack.
    #[tracing::instrument(skip(self, visit), fields(vertices = self.vertex_count()))]
    pub fn dfs<F>(&mut self, source: VertexId, mut visit: F) -> bool
    where
        F: FnMut(VertexId) -> bool,
    {
        if source >= self.vertex_count() {
            return false;
        }
        self.ensure_list();

        let vertex_count = self.vertex_count();
        let mut visited = vec![false; vertex_count];
        let mut parent: Vec<Option<VertexId>> = vec![None; vertex_count];
        let mut stack = vec![source];

        let adjacency = self.adjacency();
        let mut stopped = false;
        while let Some(current) = stack.pop() {
            if visited[current] {
                continue;
            }
            if visit(current) {
                stopped = true;
                break;
            }
            visited[current] = true;
            for &neighbor in &adjacency[current] {
                parent[neighbor] = Some(current);
                stack.push(neighbor);
            }
        }

        self.set_parent_tree(parent);
        stopped
    }
}
