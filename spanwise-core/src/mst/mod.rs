//! Minimum spanning tree (MST) construction.
//!
//! Two independent strategies share the [`WeightedGraph`] input and the
//! [`MstResult`] output:
//!
//! - [`KruskalBuilder`] sorts every edge by weight and grows a forest with a
//!   [`DisjointSetUnion`](crate::DisjointSetUnion), skipping edges that would
//!   close a cycle.
//! - [`PrimBuilder`] grows a tree outwards from a start vertex using a
//!   binary-heap frontier with lazy deletion of stale entries.
//!
//! Both strategies break weight ties by edge insertion order, so a fixed
//! input always produces the same selection. On a disconnected graph
//! Kruskal's builder returns a minimum spanning forest, while Prim's builder
//! spans only the start vertex's component unless [`PrimMode::Forest`] is
//! requested.

mod kruskal;
mod prim;

#[cfg(feature = "parallel")]
mod batch;

use crate::{
    error::Result,
    graph::{Edge, VertexIndex, WeightedGraph},
};

#[cfg(feature = "parallel")]
pub use self::batch::build_many;
pub use self::{
    kruskal::KruskalBuilder,
    prim::{PrimBuilder, PrimMode},
};

/// A spanning tree construction strategy.
///
/// Implementations must not retain state between calls: building twice from
/// the same graph yields the same result.
pub trait MstBuilder {
    /// Short identifier for the strategy, used in diagnostics.
    fn strategy_name(&self) -> &'static str;

    /// Builds a minimum spanning tree (or forest) for `graph`.
    ///
    /// # Errors
    /// Returns [`GraphError::EmptyGraph`](crate::GraphError::EmptyGraph) when
    /// `graph` has no vertices, plus any strategy-specific validation error.
    fn build(&self, graph: &WeightedGraph) -> Result<MstResult>;
}

/// The output of a spanning tree computation.
///
/// When [`MstResult::is_connected`] is `true` the edges form a single
/// minimum spanning tree over every vertex.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MstResult {
    edges: Vec<Edge>,
    total_weight: f64,
    is_connected: bool,
    vertex_count: usize,
    tree_count: usize,
}

impl MstResult {
    /// Totals `edges` and derives connectivity against `vertex_count`.
    ///
    /// Weights are summed as `f64`; every `f32` weight of ordinary magnitude
    /// is then represented exactly, so the total does not depend on the
    /// order edges were selected in.
    pub(crate) fn from_selection(vertex_count: usize, edges: Vec<Edge>, tree_count: usize) -> Self {
        let total_weight = edges.iter().map(|edge| f64::from(edge.weight())).sum();
        let is_connected = vertex_count > 0 && edges.len() == vertex_count - 1;
        Self {
            edges,
            total_weight,
            is_connected,
            vertex_count,
            tree_count,
        }
    }

    /// Returns the selected edges in selection order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Consumes the result and returns the selected edges.
    #[must_use]
    pub fn into_edges(self) -> Vec<Edge> {
        self.edges
    }

    /// Returns the sum of the selected edge weights.
    #[must_use]
    #[rustfmt::skip]
    pub fn total_weight(&self) -> f64 { self.total_weight }

    /// Returns `true` when exactly `vertex_count - 1` edges were selected,
    /// meaning the result is a single tree spanning the whole graph.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_connected(&self) -> bool { self.is_connected }

    /// Returns the vertex count of the input graph.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns how many trees the result contains.
    ///
    /// For a full forest this is the number of connected components of the
    /// input graph. Single-component Prim runs always report one tree.
    #[must_use]
    #[rustfmt::skip]
    pub fn tree_count(&self) -> usize { self.tree_count }
}

/// Computes a minimum spanning tree or forest with Kruskal's algorithm.
///
/// # Errors
/// Returns [`GraphError::EmptyGraph`](crate::GraphError::EmptyGraph) when the
/// graph has no vertices.
///
/// # Examples
/// ```
/// use spanwise_core::{WeightedGraph, build_mst_kruskal};
///
/// let graph = WeightedGraph::from_triples(
///     4,
///     [(0, 1, 10.0), (0, 2, 6.0), (0, 3, 5.0), (1, 3, 15.0), (2, 3, 4.0)],
/// )?;
/// let mst = build_mst_kruskal(&graph)?;
/// assert_eq!(mst.total_weight(), 19.0);
/// assert!(mst.is_connected());
/// # Ok::<(), spanwise_core::GraphError>(())
/// ```
pub fn build_mst_kruskal(graph: &WeightedGraph) -> Result<MstResult> {
    KruskalBuilder::new().build(graph)
}

/// Computes the minimum spanning tree of `start`'s component with Prim's
/// algorithm.
///
/// # Errors
/// Returns [`GraphError::EmptyGraph`](crate::GraphError::EmptyGraph) when the
/// graph has no vertices and
/// [`GraphError::OutOfRange`](crate::GraphError::OutOfRange) when `start` is
/// not a vertex of the graph.
///
/// # Examples
/// ```
/// use spanwise_core::{WeightedGraph, build_mst_prim};
///
/// let graph = WeightedGraph::from_triples(3, [(0, 1, 2.0), (1, 2, 3.0), (0, 2, 9.0)])?;
/// let mst = build_mst_prim(&graph, 2)?;
/// assert_eq!(mst.total_weight(), 5.0);
/// # Ok::<(), spanwise_core::GraphError>(())
/// ```
pub fn build_mst_prim(graph: &WeightedGraph, start: VertexIndex) -> Result<MstResult> {
    PrimBuilder::new().with_start(start).build(graph)
}
