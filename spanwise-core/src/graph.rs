//! Weighted undirected graph consumed by the spanning tree builders.
//!
//! A [`WeightedGraph`] owns a vertex count and an ordered edge list. Edge
//! order is preserved exactly as supplied because both builders break weight
//! ties by insertion order. The graph is validated once at construction and
//! never mutated afterwards, so it can be shared freely between concurrent
//! builder invocations.

use crate::error::{GraphError, Result};

/// Dense vertex identifier in `0..vertex_count`.
pub type VertexIndex = usize;

/// A single undirected weighted edge.
///
/// The endpoints have no canonical direction: `(u, v)` and `(v, u)` describe
/// the same connection.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    source: VertexIndex,
    target: VertexIndex,
    weight: f32,
}

impl Edge {
    /// Creates an edge between `source` and `target`.
    ///
    /// # Examples
    /// ```
    /// use spanwise_core::Edge;
    ///
    /// let edge = Edge::new(0, 3, 5.0);
    /// assert_eq!(edge.endpoints(), (0, 3));
    /// assert_eq!(edge.weight(), 5.0);
    /// ```
    #[must_use]
    pub const fn new(source: VertexIndex, target: VertexIndex, weight: f32) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the first endpoint as supplied.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> VertexIndex { self.source }

    /// Returns the second endpoint as supplied.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> VertexIndex { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> f32 { self.weight }

    /// Returns both endpoints as a tuple.
    #[must_use]
    pub const fn endpoints(&self) -> (VertexIndex, VertexIndex) {
        (self.source, self.target)
    }

    /// Returns `true` when both endpoints are the same vertex.
    #[must_use]
    pub const fn is_self_loop(&self) -> bool {
        self.source == self.target
    }

    /// Returns the endpoint opposite `vertex`.
    ///
    /// For a self-loop this returns `vertex` itself. Callers must only pass
    /// one of the edge's endpoints.
    #[must_use]
    pub(crate) const fn opposite(&self, vertex: VertexIndex) -> VertexIndex {
        if self.source == vertex {
            self.target
        } else {
            self.source
        }
    }
}

impl From<(VertexIndex, VertexIndex, f32)> for Edge {
    fn from((source, target, weight): (VertexIndex, VertexIndex, f32)) -> Self {
        Self::new(source, target, weight)
    }
}

/// Immutable weighted undirected graph over dense vertex indices.
///
/// # Examples
/// ```
/// use spanwise_core::{Edge, WeightedGraph};
///
/// let graph = WeightedGraph::new(3, vec![Edge::new(0, 1, 1.0), Edge::new(1, 2, 2.0)])
///     .expect("edges are in range");
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct WeightedGraph {
    vertex_count: usize,
    edges: Vec<Edge>,
    incidence: Vec<Vec<usize>>,
}

impl WeightedGraph {
    /// Validates `edges` against `vertex_count` and builds the graph.
    ///
    /// A graph without vertices can be constructed; the builders reject it
    /// with [`GraphError::EmptyGraph`].
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidEdge`] when an endpoint is not below
    /// `vertex_count`, and [`GraphError::NonFiniteWeight`] when a weight is
    /// NaN or infinite.
    pub fn new(vertex_count: usize, edges: Vec<Edge>) -> Result<Self> {
        for (position, edge) in edges.iter().enumerate() {
            validate_edge(position, edge, vertex_count)?;
        }

        let mut incidence = vec![Vec::new(); vertex_count];
        for (position, edge) in edges.iter().enumerate() {
            if edge.is_self_loop() {
                continue;
            }
            incidence[edge.source].push(position);
            incidence[edge.target].push(position);
        }

        Ok(Self {
            vertex_count,
            edges,
            incidence,
        })
    }

    /// Builds a graph from `(source, target, weight)` triples.
    ///
    /// # Errors
    /// Fails under the same conditions as [`WeightedGraph::new`].
    ///
    /// # Examples
    /// ```
    /// use spanwise_core::WeightedGraph;
    ///
    /// let graph = WeightedGraph::from_triples(2, [(0, 1, 4.0)])?;
    /// assert_eq!(graph.edges()[0].weight(), 4.0);
    /// # Ok::<(), spanwise_core::GraphError>(())
    /// ```
    pub fn from_triples<I>(vertex_count: usize, triples: I) -> Result<Self>
    where
        I: IntoIterator<Item = (VertexIndex, VertexIndex, f32)>,
    {
        Self::new(vertex_count, triples.into_iter().map(Edge::from).collect())
    }

    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the number of edges, including self-loops and parallel edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn edge_count(&self) -> usize { self.edges.len() }

    /// Returns the edges in insertion order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the edge at `index`, if present.
    #[must_use]
    pub fn edge(&self, index: usize) -> Option<&Edge> {
        self.edges.get(index)
    }

    /// Returns `true` when the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }

    /// Indices of the non-self-loop edges touching `vertex`, in insertion
    /// order. Out-of-range vertices have no incident edges.
    pub(crate) fn incident_edges(&self, vertex: VertexIndex) -> &[usize] {
        self.incidence
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

fn validate_edge(position: usize, edge: &Edge, vertex_count: usize) -> Result<()> {
    for vertex in [edge.source, edge.target] {
        if vertex >= vertex_count {
            return Err(GraphError::InvalidEdge {
                edge: position,
                vertex,
                vertex_count,
            });
        }
    }

    if !edge.weight.is_finite() {
        return Err(GraphError::NonFiniteWeight {
            edge: position,
            left: edge.source,
            right: edge.target,
        });
    }

    Ok(())
}
