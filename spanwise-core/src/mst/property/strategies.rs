//! Strategy builders for spanning tree property-based tests.
//!
//! Provides graph generators that produce varied weight distributions and
//! topologies. Larger graphs are generated from a seeded [`SmallRng`] so
//! that rstest cases can pin a specific input; small graphs for the
//! exhaustive oracle are generated directly by proptest so that shrinking
//! produces minimal counterexamples.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::Edge;

use super::oracle::MAX_ORACLE_EDGES;
use super::types::{MstFixture, WeightDistribution};

/// Minimum vertex count for most generated graphs.
const MIN_VERTICES: usize = 8;
/// Maximum vertex count for most generated graphs.
const MAX_VERTICES: usize = 64;
/// Maximum vertex count for dense graphs (kept smaller to avoid quadratic
/// edge explosion).
const DENSE_MAX_VERTICES: usize = 32;
/// Largest graph handed to the exhaustive oracle.
const ORACLE_MAX_VERTICES: usize = 6;

/// Generates fixtures covering every weight distribution.
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates small multigraphs suitable for exhaustive enumeration.
///
/// Weights come from a tiny integer pool so that ties are common, and
/// endpoints are unconstrained so self-loops and parallel edges appear.
pub(super) fn small_graph_strategy() -> impl Strategy<Value = MstFixture> {
    (1..=ORACLE_MAX_VERTICES).prop_flat_map(|vertex_count| {
        let edge = (0..vertex_count, 0..vertex_count, 1_u8..=5)
            .prop_map(|(source, target, weight)| Edge::new(source, target, f32::from(weight)));
        prop::collection::vec(edge, 0..=MAX_ORACLE_EDGES).prop_map(move |edges| MstFixture {
            vertex_count,
            edges,
            distribution: WeightDistribution::Multigraph,
        })
    })
}

/// Generates a fixture for a specific weight distribution.
pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> MstFixture {
    match distribution {
        WeightDistribution::Unique => generate_unique_weights(rng),
        WeightDistribution::ManyIdentical => generate_identical_weights(rng),
        WeightDistribution::Sparse => generate_sparse(rng),
        WeightDistribution::Dense => generate_dense(rng),
        WeightDistribution::Disconnected => generate_disconnected(rng),
        WeightDistribution::Multigraph => generate_multigraph(rng),
    }
}

/// Accumulates edges for a fixture under construction.
#[derive(Default)]
struct EdgeBuilder {
    edges: Vec<Edge>,
}

impl EdgeBuilder {
    fn push(&mut self, source: usize, target: usize, weight: f32) {
        self.edges.push(Edge::new(source, target, weight));
    }

    /// Adds each pair within `offset..offset + size` with probability
    /// `edge_probability`, drawing weights from `weight`.
    fn random_pairs(
        &mut self,
        rng: &mut SmallRng,
        offset: usize,
        size: usize,
        edge_probability: f64,
        mut weight: impl FnMut(&mut SmallRng) -> f32,
    ) {
        for i in 0..size {
            for j in (i + 1)..size {
                if rng.gen_bool(edge_probability) {
                    let w = weight(rng);
                    self.push(offset + i, offset + j, w);
                }
            }
        }
    }

    fn finish(self, vertex_count: usize, distribution: WeightDistribution) -> MstFixture {
        MstFixture {
            vertex_count,
            edges: self.edges,
            distribution,
        }
    }
}

fn continuous_weight(rng: &mut SmallRng) -> f32 {
    rng.gen_range(0.1_f32..100.0)
}

// ── Unique weights ──────────────────────────────────────────────────────

fn generate_unique_weights(rng: &mut SmallRng) -> MstFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let probability = rng.gen_range(0.2..=0.6);
    let mut builder = EdgeBuilder::default();
    builder.random_pairs(rng, 0, vertex_count, probability, continuous_weight);
    builder.finish(vertex_count, WeightDistribution::Unique)
}

// ── Many identical weights ──────────────────────────────────────────────

fn generate_identical_weights(rng: &mut SmallRng) -> MstFixture {
    let pool: Vec<f32> = (0..rng.gen_range(1..=3))
        .map(|_| f32::from(rng.gen_range(1_u8..=10)))
        .collect();
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let probability = rng.gen_range(0.3..=0.7);
    let mut builder = EdgeBuilder::default();
    builder.random_pairs(rng, 0, vertex_count, probability, |r| {
        pool[r.gen_range(0..pool.len())]
    });
    builder.finish(vertex_count, WeightDistribution::ManyIdentical)
}

// ── Sparse ──────────────────────────────────────────────────────────────

/// Builds a random spanning path (guaranteeing connectivity) and adds a
/// handful of extra edges.
fn generate_sparse(rng: &mut SmallRng) -> MstFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut order: Vec<usize> = (0..vertex_count).collect();
    shuffle(&mut order, rng);

    let mut builder = EdgeBuilder::default();
    for pair in order.windows(2) {
        let w = continuous_weight(rng);
        builder.push(pair[0], pair[1], w);
    }
    for _ in 0..rng.gen_range(vertex_count / 2..=vertex_count) {
        let source = rng.gen_range(0..vertex_count);
        let target = rng.gen_range(0..vertex_count);
        if source != target {
            let w = continuous_weight(rng);
            builder.push(source, target, w);
        }
    }
    builder.finish(vertex_count, WeightDistribution::Sparse)
}

// ── Dense ───────────────────────────────────────────────────────────────

fn generate_dense(rng: &mut SmallRng) -> MstFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=DENSE_MAX_VERTICES);
    let probability = rng.gen_range(0.7..=0.95);
    let mut builder = EdgeBuilder::default();
    builder.random_pairs(rng, 0, vertex_count, probability, continuous_weight);
    builder.finish(vertex_count, WeightDistribution::Dense)
}

// ── Disconnected ────────────────────────────────────────────────────────

/// Generates 2-5 components with random internal structure and no
/// cross-component edges. Isolated vertices are allowed.
fn generate_disconnected(rng: &mut SmallRng) -> MstFixture {
    let sizes: Vec<usize> = (0..rng.gen_range(2..=5))
        .map(|_| rng.gen_range(1..=12))
        .collect();
    let vertex_count: usize = sizes.iter().sum();
    let mut builder = EdgeBuilder::default();
    let mut offset = 0;
    for size in sizes {
        let probability = rng.gen_range(0.3..=0.8);
        builder.random_pairs(rng, offset, size, probability, continuous_weight);
        offset += size;
    }
    builder.finish(vertex_count, WeightDistribution::Disconnected)
}

// ── Multigraph ──────────────────────────────────────────────────────────

/// Random endpoints with replacement, so self-loops and parallel edges
/// (often with conflicting weights) are common.
fn generate_multigraph(rng: &mut SmallRng) -> MstFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut builder = EdgeBuilder::default();
    for _ in 0..rng.gen_range(vertex_count..=vertex_count * 3) {
        let source = rng.gen_range(0..vertex_count);
        let target = rng.gen_range(0..vertex_count);
        let w = f32::from(rng.gen_range(0_u8..=20));
        builder.push(source, target, w);
    }
    builder.finish(vertex_count, WeightDistribution::Multigraph)
}

/// Fisher-Yates shuffle using the provided RNG.
fn shuffle(slice: &mut [usize], rng: &mut SmallRng) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_range(0..=i);
        slice.swap(i, j);
    }
}
