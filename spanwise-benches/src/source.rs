//! Seeded synthetic graphs for benchmarking.
//!
//! Every generated graph is connected: a random spanning tree is laid down
//! first and the remaining edges join random vertex pairs. The edge list is
//! shuffled afterwards so the tree edges are not clustered at the front of
//! the insertion order.

use rand::{Rng, SeedableRng, rngs::SmallRng, seq::SliceRandom};
use spanwise_core::{Edge, WeightedGraph};
use thiserror::Error;

use crate::error::BenchSetupError;

/// Upper bound of the continuous weight range.
const MAX_CONTINUOUS_WEIGHT: f32 = 1_000.0;

/// How edge weights are drawn.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WeightProfile {
    /// Uniform over `[0, 1000)`, so ties are rare.
    Continuous,
    /// Integers `1..=levels`, so most edges tie with many others.
    Tied {
        /// Number of distinct weights.
        levels: u8,
    },
}

/// Configuration for a synthetic benchmark graph.
#[derive(Clone, Copy, Debug)]
pub struct SyntheticGraphConfig {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Edges generated per vertex, including the spanning tree edge.
    pub edges_per_vertex: usize,
    /// Weight distribution.
    pub weights: WeightProfile,
    /// Seed for the random number generator.
    pub seed: u64,
}

/// Errors raised for invalid synthetic graph parameters.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum SyntheticError {
    /// The graph must have at least one vertex.
    #[error("vertex_count must be positive")]
    ZeroVertices,
    /// At least one edge per vertex is needed to keep the graph connected.
    #[error("edges_per_vertex must be positive")]
    ZeroDensity,
    /// A tied profile needs at least one weight level.
    #[error("tied weight profile needs at least one level")]
    ZeroLevels,
    /// The requested edge count does not fit in `usize`.
    #[error("{vertex_count} vertices with {edges_per_vertex} edges each overflows")]
    EdgeCountOverflow {
        /// Requested vertex count.
        vertex_count: usize,
        /// Requested density.
        edges_per_vertex: usize,
    },
}

/// Generates the graph described by `config`.
///
/// # Errors
/// Returns [`BenchSetupError::Synthetic`] for invalid parameters.
///
/// # Examples
/// ```
/// use spanwise_benches::source::{SyntheticGraphConfig, WeightProfile, generate_graph};
///
/// let graph = generate_graph(&SyntheticGraphConfig {
///     vertex_count: 64,
///     edges_per_vertex: 4,
///     weights: WeightProfile::Continuous,
///     seed: 7,
/// })?;
/// assert_eq!(graph.vertex_count(), 64);
/// assert_eq!(graph.edge_count(), 256);
/// # Ok::<(), spanwise_benches::error::BenchSetupError>(())
/// ```
pub fn generate_graph(config: &SyntheticGraphConfig) -> Result<WeightedGraph, BenchSetupError> {
    let edge_count = validate(config)?;
    let vertex_count = config.vertex_count;
    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut edges = Vec::with_capacity(edge_count);

    for vertex in 1..vertex_count {
        let parent = rng.gen_range(0..vertex);
        let weight = draw_weight(config.weights, &mut rng);
        edges.push(Edge::new(parent, vertex, weight));
    }

    if vertex_count > 1 {
        while edges.len() < edge_count {
            let source = rng.gen_range(0..vertex_count);
            let mut target = rng.gen_range(0..vertex_count - 1);
            if target >= source {
                target += 1;
            }
            let weight = draw_weight(config.weights, &mut rng);
            edges.push(Edge::new(source, target, weight));
        }
    }

    edges.shuffle(&mut rng);
    Ok(WeightedGraph::new(vertex_count, edges)?)
}

fn validate(config: &SyntheticGraphConfig) -> Result<usize, SyntheticError> {
    if config.vertex_count == 0 {
        return Err(SyntheticError::ZeroVertices);
    }
    if config.edges_per_vertex == 0 {
        return Err(SyntheticError::ZeroDensity);
    }
    if config.weights == (WeightProfile::Tied { levels: 0 }) {
        return Err(SyntheticError::ZeroLevels);
    }
    config
        .vertex_count
        .checked_mul(config.edges_per_vertex)
        .ok_or(SyntheticError::EdgeCountOverflow {
            vertex_count: config.vertex_count,
            edges_per_vertex: config.edges_per_vertex,
        })
}

fn draw_weight(profile: WeightProfile, rng: &mut SmallRng) -> f32 {
    match profile {
        WeightProfile::Continuous => rng.gen_range(0.0..MAX_CONTINUOUS_WEIGHT),
        WeightProfile::Tied { levels } => f32::from(rng.gen_range(1..=levels)),
    }
}
