//! Error types for the spanwise core library.
//!
//! Defines the error enum exposed by graph construction, the disjoint-set
//! structure, and both spanning tree builders, plus a convenient result
//! alias.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Errors returned while building graphs or spanning trees.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GraphError {
    /// An edge referenced a vertex that is not present in the graph.
    #[error("edge {edge} references vertex {vertex}, but vertex_count is {vertex_count}")]
    InvalidEdge {
        /// Position of the offending edge in the input list.
        edge: usize,
        /// The out-of-range endpoint.
        vertex: usize,
        /// The number of vertices in the graph.
        vertex_count: usize,
    },
    /// An edge carried a NaN or infinite weight.
    #[error("edge {edge} ({left}, {right}) has non-finite weight")]
    NonFiniteWeight {
        /// Position of the offending edge in the input list.
        edge: usize,
        /// First endpoint as provided.
        left: usize,
        /// Second endpoint as provided.
        right: usize,
    },
    /// A vertex index passed to a disjoint-set operation or used as a start
    /// vertex was outside `0..vertex_count`.
    #[error("vertex index {index} is out of range for {vertex_count} vertices")]
    OutOfRange {
        /// The rejected index.
        index: usize,
        /// The number of vertices tracked.
        vertex_count: usize,
    },
    /// A builder was invoked on a graph without vertices.
    #[error("cannot compute a spanning tree for an empty graph")]
    EmptyGraph,
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// An edge referenced a vertex that is not present in the graph.
        InvalidEdge => InvalidEdge { .. } => "GRAPH_INVALID_EDGE",
        /// An edge carried a NaN or infinite weight.
        NonFiniteWeight => NonFiniteWeight { .. } => "GRAPH_NON_FINITE_WEIGHT",
        /// A vertex index was outside the tracked range.
        OutOfRange => OutOfRange { .. } => "GRAPH_OUT_OF_RANGE",
        /// A builder was invoked on a graph without vertices.
        EmptyGraph => EmptyGraph => "GRAPH_EMPTY",
    }
}

/// Convenient result alias for spanwise operations.
pub type Result<T> = std::result::Result<T, GraphError>;
