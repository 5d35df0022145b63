//! Shared helper functions for spanning tree property tests.

use crate::{DisjointSetUnion, Edge};

/// Counts the connected components induced by `edges` over `vertex_count`
/// vertices. Self-loops never merge anything.
pub(super) fn count_components(vertex_count: usize, edges: &[Edge]) -> usize {
    let mut components = DisjointSetUnion::new(vertex_count);
    for edge in edges {
        let _merged = components.union(edge.source(), edge.target());
    }
    components.component_count()
}

/// Returns `true` when `edges` contain no cycle (self-loops count as cycles).
pub(super) fn is_acyclic(vertex_count: usize, edges: &[Edge]) -> bool {
    let mut components = DisjointSetUnion::new(vertex_count);
    edges
        .iter()
        .all(|edge| components.union(edge.source(), edge.target()) == Ok(true))
}

/// Sums edge weights as `f64`.
pub(super) fn total_weight_f64(edges: &[Edge]) -> f64 {
    edges.iter().map(|edge| f64::from(edge.weight())).sum()
}
