//! Prim's vertex-centric spanning tree builder.
//!
//! The frontier is a binary heap of candidate `(weight, vertex)` entries.
//! Entries are never removed when a cheaper route to their vertex appears;
//! instead they linger until popped and are discarded if their vertex has
//! already joined the tree (lazy deletion).

use std::{cmp::Ordering, collections::BinaryHeap};

use tracing::{instrument, trace};

use crate::{
    error::{GraphError, Result},
    graph::{Edge, VertexIndex, WeightedGraph},
};

use super::{MstBuilder, MstResult};

/// Selects how much of the graph Prim's builder spans.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PrimMode {
    /// Span only the connected component containing the start vertex.
    #[default]
    SingleComponent,
    /// After the start component, reseed from every unvisited vertex in
    /// ascending index order to produce a full minimum spanning forest.
    Forest,
}

/// Builds minimum spanning trees by growing outwards from a start vertex.
///
/// # Examples
/// ```
/// use spanwise_core::{PrimBuilder, PrimMode, WeightedGraph};
///
/// let graph = WeightedGraph::from_triples(5, [(0, 1, 1.0), (1, 2, 2.0), (3, 4, 1.0)])?;
///
/// let tree = PrimBuilder::new().with_start(3).build(&graph)?;
/// assert_eq!(tree.edges().len(), 1);
///
/// let forest = PrimBuilder::new().with_mode(PrimMode::Forest).build(&graph)?;
/// assert_eq!(forest.edges().len(), 3);
/// # Ok::<(), spanwise_core::GraphError>(())
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PrimBuilder {
    start: VertexIndex,
    mode: PrimMode,
}

impl PrimBuilder {
    /// Creates a single-component builder starting at vertex `0`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the start vertex.
    #[must_use]
    pub fn with_start(mut self, start: VertexIndex) -> Self {
        self.start = start;
        self
    }

    /// Overrides the spanning mode.
    #[must_use]
    pub fn with_mode(mut self, mode: PrimMode) -> Self {
        self.mode = mode;
        self
    }

    /// Returns the configured start vertex.
    #[must_use]
    #[rustfmt::skip]
    pub fn start(&self) -> VertexIndex { self.start }

    /// Returns the configured spanning mode.
    #[must_use]
    #[rustfmt::skip]
    pub fn mode(&self) -> PrimMode { self.mode }

    /// Computes the minimum spanning tree (or forest) of `graph`.
    ///
    /// # Errors
    /// Returns [`GraphError::EmptyGraph`] when `graph` has no vertices and
    /// [`GraphError::OutOfRange`] when the start vertex is not in the graph.
    #[instrument(
        name = "mst.prim",
        err,
        skip(self, graph),
        fields(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            start = self.start,
            mode = ?self.mode,
        ),
    )]
    pub fn build(&self, graph: &WeightedGraph) -> Result<MstResult> {
        if graph.is_empty() {
            return Err(GraphError::EmptyGraph);
        }
        let vertex_count = graph.vertex_count();
        if self.start >= vertex_count {
            return Err(GraphError::OutOfRange {
                index: self.start,
                vertex_count,
            });
        }

        let mut growth = TreeGrowth::new(graph);
        growth.grow_from(self.start);
        let mut trees = 1;

        if self.mode == PrimMode::Forest {
            for vertex in 0..vertex_count {
                if growth.is_visited(vertex) {
                    continue;
                }
                trace!(vertex, "reseeding frontier for an unreached component");
                growth.grow_from(vertex);
                trees += 1;
            }
        }

        trace!(stale = growth.stale, "discarded stale frontier entries");
        Ok(MstResult::from_selection(vertex_count, growth.selected, trees))
    }
}

impl MstBuilder for PrimBuilder {
    fn strategy_name(&self) -> &'static str {
        match self.mode {
            PrimMode::SingleComponent => "prim",
            PrimMode::Forest => "prim-forest",
        }
    }

    fn build(&self, graph: &WeightedGraph) -> Result<MstResult> {
        Self::build(self, graph)
    }
}

/// Mutable state of one Prim invocation.
struct TreeGrowth<'g> {
    graph: &'g WeightedGraph,
    visited: Vec<bool>,
    frontier: Frontier,
    selected: Vec<Edge>,
    stale: usize,
}

impl<'g> TreeGrowth<'g> {
    fn new(graph: &'g WeightedGraph) -> Self {
        Self {
            graph,
            visited: vec![false; graph.vertex_count()],
            frontier: Frontier::default(),
            selected: Vec::with_capacity(graph.vertex_count().saturating_sub(1)),
            stale: 0,
        }
    }

    fn is_visited(&self, vertex: VertexIndex) -> bool {
        self.visited.get(vertex).copied().unwrap_or(false)
    }

    /// Grows a tree from `seed` until the frontier is exhausted.
    fn grow_from(&mut self, seed: VertexIndex) {
        let graph = self.graph;
        self.frontier.push(seed, 0.0, None);

        while let Some(entry) = self.frontier.pop() {
            let Some(visited) = self.visited.get_mut(entry.vertex) else {
                continue;
            };
            if *visited {
                self.stale += 1;
                continue;
            }
            *visited = true;

            if let Some(edge) = entry.via.and_then(|index| graph.edge(index)) {
                self.selected.push(*edge);
            }

            for &index in graph.incident_edges(entry.vertex) {
                let Some(edge) = graph.edge(index) else {
                    continue;
                };
                let neighbour = edge.opposite(entry.vertex);
                if !self.is_visited(neighbour) {
                    self.frontier.push(neighbour, edge.weight(), Some(index));
                }
            }
        }
    }
}

/// Candidate vertex waiting on the frontier.
#[derive(Clone, Copy, Debug)]
struct FrontierEntry {
    weight: f32,
    sequence: u64,
    vertex: VertexIndex,
    /// Index of the graph edge that reaches `vertex`; `None` for seeds.
    via: Option<usize>,
}

impl Ord for FrontierEntry {
    // Reversed so that `BinaryHeap`, a max-heap, pops the lightest entry and,
    // among equal weights, the earliest pushed.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .total_cmp(&self.weight)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

/// Min-priority frontier keyed by `(weight, insertion sequence)`.
#[derive(Debug, Default)]
struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    next_sequence: u64,
}

impl Frontier {
    fn push(&mut self, vertex: VertexIndex, weight: f32, via: Option<usize>) {
        self.heap.push(FrontierEntry {
            weight,
            sequence: self.next_sequence,
            vertex,
            via,
        });
        self.next_sequence += 1;
    }

    fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop()
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.heap.len()
    }
}
