//! Spanwise core library.
//!
//! Builds minimum spanning trees and forests over weighted undirected graphs
//! using either Kruskal's algorithm (global edge sort plus a disjoint-set
//! union) or Prim's algorithm (frontier expansion over a binary heap).
//!
//! Both strategies accept the same immutable [`WeightedGraph`] and return an
//! [`MstResult`]. Weight ties are broken by edge insertion order, so results
//! are deterministic for a fixed input.
//!
//! # Features
//!
//! - `parallel` (default): enables [`build_many`], which computes
//!   independent spanning trees on the Rayon thread pool.
//! - `serde`: derives `Serialize` and `Deserialize` for [`Edge`] and
//!   [`MstResult`].
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod graph;
mod mst;
mod union_find;

#[cfg(test)]
mod test_utils;

#[cfg(feature = "parallel")]
pub use crate::mst::build_many;
pub use crate::{
    error::{GraphError, GraphErrorCode, Result},
    graph::{Edge, VertexIndex, WeightedGraph},
    mst::{
        KruskalBuilder, MstBuilder, MstResult, PrimBuilder, PrimMode, build_mst_kruskal,
        build_mst_prim,
    },
    union_find::DisjointSetUnion,
};
