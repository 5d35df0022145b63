//! Exhaustive spanning-forest oracle for small graphs.
//!
//! Enumerates every subset of the input edges, keeps those that are acyclic
//! and span each connected component, and reports the lightest. This is
//! exponential in the edge count, so it is only used on graphs with at most
//! [`MAX_ORACLE_EDGES`] edges.

use crate::Edge;

use super::helpers::{count_components, is_acyclic, total_weight_f64};

/// Largest edge list the oracle will enumerate.
pub(super) const MAX_ORACLE_EDGES: usize = 12;

/// Result of the exhaustive oracle.
#[derive(Clone, Debug, PartialEq)]
pub(super) struct OracleForest {
    /// Minimum total weight over all spanning forests.
    pub total_weight: f64,
    /// Number of edges in any spanning forest (`V - C`).
    pub edge_count: usize,
    /// Number of connected components of the input.
    pub component_count: usize,
}

/// Finds the minimum spanning forest weight by brute force.
///
/// Returns `None` when the edge list exceeds [`MAX_ORACLE_EDGES`].
pub(super) fn exhaustive_minimum_forest(vertex_count: usize, edges: &[Edge]) -> Option<OracleForest> {
    if edges.len() > MAX_ORACLE_EDGES {
        return None;
    }

    let component_count = count_components(vertex_count, edges);
    let edge_count = vertex_count.saturating_sub(component_count);

    let mut best: Option<f64> = None;
    let mut subset = Vec::with_capacity(edge_count);
    for mask in 0_u32..(1 << edges.len()) {
        if mask.count_ones() as usize != edge_count {
            continue;
        }
        subset.clear();
        subset.extend(
            edges
                .iter()
                .enumerate()
                .filter(|(index, _)| mask & (1 << index) != 0)
                .map(|(_, edge)| *edge),
        );
        if !is_acyclic(vertex_count, &subset) {
            continue;
        }
        let weight = total_weight_f64(&subset);
        if best.is_none_or(|current| weight < current) {
            best = Some(weight);
        }
    }

    Some(OracleForest {
        total_weight: best.unwrap_or(0.0),
        edge_count,
        component_count,
    })
}
