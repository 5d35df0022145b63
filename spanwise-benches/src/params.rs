//! Benchmark parameter types.

use std::fmt;

/// Parameters for a spanning tree benchmark run, rendered into the
/// Criterion benchmark id.
#[derive(Clone, Debug)]
pub struct MstBenchParams {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Number of edges in the graph.
    pub edge_count: usize,
}

impl fmt::Display for MstBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "V={},E={}", self.vertex_count, self.edge_count)
    }
}
