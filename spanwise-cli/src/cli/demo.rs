//! Built-in demonstration graphs.

use clap::ValueEnum;
use spanwise_core::{GraphError, KruskalBuilder, MstBuilder, PrimBuilder, WeightedGraph};

/// Four vertices with both diagonals; the tree weighs 19.
const SQUARE: [(usize, usize, f32); 5] = [
    (0, 1, 10.0),
    (0, 2, 6.0),
    (0, 3, 5.0),
    (1, 3, 15.0),
    (2, 3, 4.0),
];

/// Five vertices grown from vertex 0; the tree weighs 16.
const PENTAGON: [(usize, usize, f32); 7] = [
    (0, 1, 2.0),
    (0, 3, 6.0),
    (1, 2, 3.0),
    (1, 3, 8.0),
    (1, 4, 5.0),
    (2, 4, 7.0),
    (3, 4, 9.0),
];

/// Demonstration graphs paired with the strategy they showcase.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum DemoGraph {
    /// Kruskal's algorithm on a four-vertex square with diagonals.
    Kruskal,
    /// Prim's algorithm from vertex 0 on a five-vertex graph.
    Prim,
}

impl DemoGraph {
    /// Builds the demonstration graph.
    ///
    /// # Errors
    /// Never fails for the built-in edge lists; the signature mirrors
    /// [`WeightedGraph::from_triples`].
    pub fn graph(self) -> Result<WeightedGraph, GraphError> {
        match self {
            Self::Kruskal => WeightedGraph::from_triples(4, SQUARE),
            Self::Prim => WeightedGraph::from_triples(5, PENTAGON),
        }
    }

    /// Returns the builder this demonstration runs.
    #[must_use]
    pub fn builder(self) -> Box<dyn MstBuilder> {
        match self {
            Self::Kruskal => Box::new(KruskalBuilder::new()),
            Self::Prim => Box::new(PrimBuilder::new().with_start(0)),
        }
    }
}
