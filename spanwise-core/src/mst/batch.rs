//! Parallel execution of independent spanning tree computations.

use rayon::prelude::*;
use tracing::instrument;

use crate::{error::Result, graph::WeightedGraph};

use super::{MstBuilder, MstResult};

/// Builds one spanning tree per graph on the Rayon thread pool.
///
/// Each computation owns its own disjoint-set or frontier; only the graphs
/// and the builder configuration are shared. Results are returned in the
/// same order as `graphs`, and a failure for one graph does not affect the
/// others.
///
/// # Examples
/// ```
/// use spanwise_core::{KruskalBuilder, WeightedGraph, build_many};
///
/// let graphs = vec![
///     WeightedGraph::from_triples(2, [(0, 1, 3.0)])?,
///     WeightedGraph::from_triples(0, [])?,
/// ];
/// let results = build_many(&graphs, &KruskalBuilder::new());
/// assert_eq!(results.len(), 2);
/// assert!(results[0].is_ok());
/// assert!(results[1].is_err());
/// # Ok::<(), spanwise_core::GraphError>(())
/// ```
#[cfg_attr(docsrs, doc(cfg(feature = "parallel")))]
#[instrument(
    name = "mst.batch",
    skip_all,
    fields(graphs = graphs.len(), strategy = builder.strategy_name()),
)]
pub fn build_many<B>(graphs: &[WeightedGraph], builder: &B) -> Vec<Result<MstResult>>
where
    B: MstBuilder + Sync,
{
    graphs.par_iter().map(|graph| builder.build(graph)).collect()
}
