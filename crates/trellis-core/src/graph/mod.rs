//! Graph data model and analysis operations
//!
//! A [`Graph`] is built once from structural data (vertex count, direction
//! flag, one adjacency representation, optional weights) and then analyzed
//! in place: conversion, degree counting, shortest paths, traversals and
//! component labeling all populate derived tables owned by the graph.
//!
//! - `convert`: adjacency list/matrix conversion, mirroring, edge and
//!   degree counting
//! - `weights`: negative-weight scan and the shared edge-cost rule
//! - `queue`: min-priority queue with mutable priorities
//! - `algos`: Floyd-Warshall, Dijkstra, Bellman-Ford and A*
//! - `traversal`: breadth-first and depth-first search
//! - `components`: connected-component labeling
//! - `path`: shortest-path reconstruction
//! - `analysis`: the full pipeline

pub mod algos;
pub mod analysis;
pub mod components;
pub mod convert;
pub mod path;
pub mod queue;
pub mod traversal;
pub mod weights;

pub use analysis::AnalysisSummary;
pub use queue::MinPriorityQueue;

use std::collections::HashMap;

use crate::error::{Result, TrellisError};

/// Index of a vertex, in `[0, vertex_count)`
pub type VertexId = usize;

/// Sentinel distance for unreachable vertices.
///
/// A quarter of `i64::MAX`, so the sum of two sentinels (a relaxation
/// through an unreached vertex) cannot overflow.
pub const INFINITY: i64 = i64::MAX >> 2;

/// A single graph plus every derived table the analysis produces.
///
/// Structural fields are fixed at construction; derived fields start empty
/// and are filled by the operations in the submodules (or all at once by
/// [`Graph::analyze`](analysis)). Per-source distance and predecessor rows
/// are keyed by source vertex and overwritten when an algorithm is re-run
/// for the same source.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    description: String,
    vertex_count: usize,
    is_directed: bool,
    adjacency_list: Option<Vec<Vec<VertexId>>>,
    adjacency_matrix: Option<Vec<Vec<u32>>>,
    vertex_weights: Option<HashMap<VertexId, i64>>,
    edge_weights: Option<HashMap<(VertexId, VertexId), i64>>,
    heuristic: Option<Vec<i64>>,
    start: VertexId,
    target: VertexId,

    // derived
    edge_count: Option<usize>,
    in_degree: Option<Vec<usize>>,
    out_degree: Option<Vec<usize>>,
    has_negative_weight: Option<bool>,
    has_negative_cycle: Option<bool>,
    distance: HashMap<VertexId, Vec<i64>>,
    path_next: Option<Vec<Vec<Option<VertexId>>>>,
    path_prev: HashMap<VertexId, Vec<Option<VertexId>>>,
    parent: Option<Vec<Option<VertexId>>>,
    component_id: Option<Vec<Option<usize>>>,
    component_count: Option<usize>,
}

impl Graph {
    /// Create a graph from an adjacency list.
    ///
    /// `adjacency[i]` lists the neighbors of vertex `i`; duplicates
    /// represent parallel edges. The list must have exactly `vertex_count`
    /// rows and every neighbor must be in range.
    pub fn from_list(
        vertex_count: usize,
        is_directed: bool,
        adjacency: Vec<Vec<VertexId>>,
    ) -> Result<Self> {
        if adjacency.len() != vertex_count {
            return Err(TrellisError::length_mismatch(
                "adjacency list rows",
                vertex_count,
                adjacency.len(),
            ));
        }
        for neighbors in &adjacency {
            for &to in neighbors {
                if to >= vertex_count {
                    return Err(TrellisError::vertex_out_of_range(to, vertex_count));
                }
            }
        }
        Ok(Graph {
            vertex_count,
            is_directed,
            adjacency_list: Some(adjacency),
            ..Graph::default()
        })
    }

    /// Create a graph from a dense adjacency matrix of edge multiplicities.
    pub fn from_matrix(
        vertex_count: usize,
        is_directed: bool,
        matrix: Vec<Vec<u32>>,
    ) -> Result<Self> {
        if matrix.len() != vertex_count {
            return Err(TrellisError::length_mismatch(
                "adjacency matrix rows",
                vertex_count,
                matrix.len(),
            ));
        }
        for (i, row) in matrix.iter().enumerate() {
            if row.len() != vertex_count {
                return Err(TrellisError::length_mismatch(
                    &format!("adjacency matrix row {}", i),
                    vertex_count,
                    row.len(),
                ));
            }
        }
        Ok(Graph {
            vertex_count,
            is_directed,
            adjacency_matrix: Some(matrix),
            ..Graph::default()
        })
    }

    /// Attach a human-readable description, shown in reports.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Attach per-vertex visiting costs. Vertices absent from the map cost 0.
    pub fn with_vertex_weights(mut self, weights: HashMap<VertexId, i64>) -> Result<Self> {
        if let Some(&index) = weights.keys().find(|&&v| v >= self.vertex_count) {
            return Err(TrellisError::vertex_out_of_range(index, self.vertex_count));
        }
        self.vertex_weights = Some(weights);
        Ok(self)
    }

    /// Attach per-edge traversal costs keyed by `(from, to)`.
    pub fn with_edge_weights(mut self, weights: HashMap<(VertexId, VertexId), i64>) -> Result<Self> {
        if let Some(&(from, to)) = weights
            .keys()
            .find(|&&(from, to)| from >= self.vertex_count || to >= self.vertex_count)
        {
            let index = if from >= self.vertex_count { from } else { to };
            return Err(TrellisError::vertex_out_of_range(index, self.vertex_count));
        }
        self.edge_weights = Some(weights);
        Ok(self)
    }

    /// Attach per-vertex heuristic estimates of the remaining distance to
    /// the designated target, used only by A*.
    pub fn with_heuristic(mut self, heuristic: Vec<i64>) -> Result<Self> {
        if heuristic.len() != self.vertex_count {
            return Err(TrellisError::length_mismatch(
                "heuristic scores",
                self.vertex_count,
                heuristic.len(),
            ));
        }
        self.heuristic = Some(heuristic);
        Ok(self)
    }

    /// Designate the start and target vertices used by A*.
    ///
    /// Out-of-range endpoints are permitted here; `a_star` reports them by
    /// returning `false`.
    pub fn set_endpoints(&mut self, start: VertexId, target: VertexId) {
        self.start = start;
        self.target = target;
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn is_directed(&self) -> bool {
        self.is_directed
    }

    pub fn start(&self) -> VertexId {
        self.start
    }

    pub fn target(&self) -> VertexId {
        self.target
    }

    pub fn adjacency_list(&self) -> Option<&[Vec<VertexId>]> {
        self.adjacency_list.as_deref()
    }

    pub fn adjacency_matrix(&self) -> Option<&[Vec<u32>]> {
        self.adjacency_matrix.as_deref()
    }

    /// Visiting cost of `vertex`, if one was supplied.
    pub fn vertex_weight(&self, vertex: VertexId) -> Option<i64> {
        self.vertex_weights
            .as_ref()
            .and_then(|weights| weights.get(&vertex))
            .copied()
    }

    pub fn has_vertex_weights(&self) -> bool {
        self.vertex_weights.is_some()
    }

    /// Traversal cost of the directed edge `from -> to`, if one was supplied.
    pub fn edge_weight(&self, from: VertexId, to: VertexId) -> Option<i64> {
        self.edge_weights
            .as_ref()
            .and_then(|weights| weights.get(&(from, to)))
            .copied()
    }

    pub fn has_edge_weights(&self) -> bool {
        self.edge_weights.is_some()
    }

    pub fn heuristic(&self) -> Option<&[i64]> {
        self.heuristic.as_deref()
    }

    pub fn edge_count(&self) -> Option<usize> {
        self.edge_count
    }

    pub fn in_degree(&self) -> Option<&[usize]> {
        self.in_degree.as_deref()
    }

    pub fn out_degree(&self) -> Option<&[usize]> {
        self.out_degree.as_deref()
    }

    pub fn has_negative_weight(&self) -> Option<bool> {
        self.has_negative_weight
    }

    pub fn has_negative_cycle(&self) -> Option<bool> {
        self.has_negative_cycle
    }

    /// Shortest distance from `source` to `target`, if that source row has
    /// been computed. [`INFINITY`] marks an unreachable target.
    pub fn distance(&self, source: VertexId, target: VertexId) -> Option<i64> {
        self.distance
            .get(&source)
            .and_then(|row| row.get(target))
            .copied()
    }

    /// Full distance row for `source`, if computed.
    pub fn distance_row(&self, source: VertexId) -> Option<&[i64]> {
        self.distance.get(&source).map(Vec::as_slice)
    }

    /// Sources for which a distance row exists, in ascending order.
    pub fn analyzed_sources(&self) -> Vec<VertexId> {
        let mut sources: Vec<VertexId> = self.distance.keys().copied().collect();
        sources.sort_unstable();
        sources
    }

    /// Next hop on the shortest path `source -> target` (Floyd-Warshall).
    pub fn path_next(&self, source: VertexId, target: VertexId) -> Option<VertexId> {
        self.path_next
            .as_ref()
            .and_then(|table| table.get(source))
            .and_then(|row| row.get(target))
            .copied()
            .flatten()
    }

    pub fn has_path_next(&self) -> bool {
        self.path_next.is_some()
    }

    /// Predecessor of `target` on the shortest path from `source`
    /// (Dijkstra, Bellman-Ford, A*).
    pub fn path_prev(&self, source: VertexId, target: VertexId) -> Option<VertexId> {
        self.path_prev
            .get(&source)
            .and_then(|row| row.get(target))
            .copied()
            .flatten()
    }

    pub fn has_path_prev(&self, source: VertexId) -> bool {
        self.path_prev.contains_key(&source)
    }

    /// Parent of `vertex` in the tree left by the last traversal call.
    pub fn parent(&self, vertex: VertexId) -> Option<VertexId> {
        self.parent
            .as_ref()
            .and_then(|tree| tree.get(vertex))
            .copied()
            .flatten()
    }

    /// Component label of `vertex`; valid only for undirected graphs after
    /// component labeling has run.
    pub fn component_id(&self, vertex: VertexId) -> Option<usize> {
        self.component_id
            .as_ref()
            .and_then(|labels| labels.get(vertex))
            .copied()
            .flatten()
    }

    pub fn component_count(&self) -> Option<usize> {
        self.component_count
    }

    /// Adjacency rows for internal iteration; empty until a list
    /// representation exists.
    pub(crate) fn adjacency(&self) -> &[Vec<VertexId>] {
        self.adjacency_list.as_deref().unwrap_or(&[])
    }

    pub(crate) fn set_adjacency_list(&mut self, list: Option<Vec<Vec<VertexId>>>) {
        self.adjacency_list = list;
    }

    pub(crate) fn set_adjacency_matrix(&mut self, matrix: Option<Vec<Vec<u32>>>) {
        self.adjacency_matrix = matrix;
    }

    pub(crate) fn adjacency_matrix_mut(&mut self) -> Option<&mut Vec<Vec<u32>>> {
        self.adjacency_matrix.as_mut()
    }

    pub(crate) fn edge_weights_mut(&mut self) -> Option<&mut HashMap<(VertexId, VertexId), i64>> {
        self.edge_weights.as_mut()
    }

    pub(crate) fn vertex_weights_map(&self) -> Option<&HashMap<VertexId, i64>> {
        self.vertex_weights.as_ref()
    }

    pub(crate) fn edge_weights_map(&self) -> Option<&HashMap<(VertexId, VertexId), i64>> {
        self.edge_weights.as_ref()
    }

    pub(crate) fn set_edge_count(&mut self, count: usize) {
        self.edge_count = Some(count);
    }

    pub(crate) fn set_degrees(&mut self, in_degree: Vec<usize>, out_degree: Vec<usize>) {
        self.in_degree = Some(in_degree);
        self.out_degree = Some(out_degree);
    }

    pub(crate) fn set_has_negative_weight(&mut self, negative: bool) {
        self.has_negative_weight = Some(negative);
    }

    pub(crate) fn set_has_negative_cycle(&mut self, cycle: bool) {
        self.has_negative_cycle = Some(cycle);
    }

    pub(crate) fn insert_distance_row(&mut self, source: VertexId, row: Vec<i64>) {
        self.distance.insert(source, row);
    }

    pub(crate) fn insert_prev_row(&mut self, source: VertexId, row: Vec<Option<VertexId>>) {
        self.path_prev.insert(source, row);
    }

    pub(crate) fn set_path_next_table(&mut self, table: Vec<Vec<Option<VertexId>>>) {
        self.path_next = Some(table);
    }

    pub(crate) fn path_next_table(&self) -> Option<&Vec<Vec<Option<VertexId>>>> {
        self.path_next.as_ref()
    }

    pub(crate) fn prev_row(&self, source: VertexId) -> Option<&Vec<Option<VertexId>>> {
        self.path_prev.get(&source)
    }

    pub(crate) fn set_parent_tree(&mut self, tree: Vec<Option<VertexId>>) {
        self.parent = Some(tree);
    }

    pub(crate) fn take_parent_tree(&mut self) -> Option<Vec<Option<VertexId>>> {
        self.parent.take()
    }

    pub(crate) fn set_components(&mut self, labels: Vec<Option<usize>>, count: usize) {
        self.component_id = Some(labels);
        self.component_count = Some(count);
    }
}
