//! Kruskal's edge-centric spanning tree builder.

use tracing::{debug, instrument};

use crate::{
    error::{GraphError, Result},
    graph::{Edge, WeightedGraph},
    union_find::DisjointSetUnion,
};

use super::{MstBuilder, MstResult};

/// Builds minimum spanning forests by scanning edges in ascending weight.
///
/// Edges of equal weight are visited in insertion order. An edge whose
/// endpoints already share a component (including every self-loop) is
/// skipped.
///
/// # Examples
/// ```
/// use spanwise_core::{KruskalBuilder, WeightedGraph};
///
/// let graph = WeightedGraph::from_triples(5, [(0, 1, 1.0), (1, 2, 2.0), (3, 4, 1.0)])?;
/// let forest = KruskalBuilder::new().build(&graph)?;
/// assert_eq!(forest.edges().len(), 3);
/// assert_eq!(forest.tree_count(), 2);
/// assert!(!forest.is_connected());
/// # Ok::<(), spanwise_core::GraphError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KruskalBuilder {
    early_exit: bool,
}

impl Default for KruskalBuilder {
    fn default() -> Self {
        Self { early_exit: true }
    }
}

impl KruskalBuilder {
    /// Creates a builder that stops scanning once a spanning tree is found.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Controls whether the scan stops as soon as `vertex_count - 1` edges
    /// have been selected. The selection is identical either way.
    #[must_use]
    pub fn with_early_exit(mut self, early_exit: bool) -> Self {
        self.early_exit = early_exit;
        self
    }

    /// Returns whether the scan may stop early.
    #[must_use]
    #[rustfmt::skip]
    pub fn early_exit(&self) -> bool { self.early_exit }

    /// Computes the minimum spanning forest of `graph`.
    ///
    /// # Errors
    /// Returns [`GraphError::EmptyGraph`] when `graph` has no vertices.
    #[instrument(
        name = "mst.kruskal",
        err,
        skip(self, graph),
        fields(vertices = graph.vertex_count(), edges = graph.edge_count()),
    )]
    pub fn build(&self, graph: &WeightedGraph) -> Result<MstResult> {
        if graph.is_empty() {
            return Err(GraphError::EmptyGraph);
        }

        let vertex_count = graph.vertex_count();
        let tree_size = vertex_count - 1;
        let mut components = DisjointSetUnion::new(vertex_count);
        let mut selected = Vec::with_capacity(tree_size);

        for edge in edges_by_weight(graph.edges()) {
            if !components.union(edge.source(), edge.target())? {
                continue;
            }
            selected.push(*edge);
            if self.early_exit && selected.len() == tree_size {
                debug!(selected = selected.len(), "spanning tree complete, ending scan");
                break;
            }
        }

        Ok(MstResult::from_selection(
            vertex_count,
            selected,
            components.component_count(),
        ))
    }
}

impl MstBuilder for KruskalBuilder {
    fn strategy_name(&self) -> &'static str {
        "kruskal"
    }

    fn build(&self, graph: &WeightedGraph) -> Result<MstResult> {
        Self::build(self, graph)
    }
}

/// Orders edges by ascending weight. The sort is stable, so equal weights
/// keep their insertion order.
fn edges_by_weight(edges: &[Edge]) -> Vec<&Edge> {
    let mut sorted: Vec<&Edge> = edges.iter().collect();
    sorted.sort_by(|left, right| left.weight().total_cmp(&right.weight()));
    sorted
}
