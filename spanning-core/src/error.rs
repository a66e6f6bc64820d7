//! Error types for the spanning core library.
//!
//! Graph construction is the only fallible step; once a [`crate::Graph`]
//! exists the MST builder always succeeds.

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

/// Error raised when a [`crate::Graph`] cannot be constructed.
///
/// Validation is fail-fast: the first offending input is reported and no
/// partial graph is produced.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GraphError {
    /// The vertex count was negative or cannot be addressed on this platform.
    #[error("vertex count must be non-negative (got {got})")]
    InvalidVertexCount {
        /// The rejected vertex count.
        got: i64,
    },
    /// The edge list contained no edges.
    #[error("edge list must not be empty")]
    EmptyEdgeList,
    /// An edge referenced a vertex outside `[0, vertex_count)`.
    #[error("edge {edge} references vertex {vertex}, but vertex_count is {vertex_count}")]
    VertexOutOfRange {
        /// Position of the offending edge in the input list.
        edge: usize,
        /// The out-of-range vertex id.
        vertex: usize,
        /// The number of vertices in the graph.
        vertex_count: usize,
    },
    /// An edge carried a NaN or infinite weight.
    #[error("edge {edge} ({source_vertex}, {destination}) has non-finite weight {weight}")]
    NonFiniteWeight {
        /// Position of the offending edge in the input list.
        edge: usize,
        /// The source endpoint as supplied.
        source_vertex: usize,
        /// The destination endpoint as supplied.
        destination: usize,
        /// The rejected weight.
        weight: f64,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// The vertex count was negative.
        InvalidVertexCount => InvalidVertexCount { .. } => "GRAPH_INVALID_VERTEX_COUNT",
        /// The edge list contained no edges.
        EmptyEdgeList => EmptyEdgeList => "GRAPH_EMPTY_EDGE_LIST",
        /// An edge referenced a vertex outside the graph.
        VertexOutOfRange => VertexOutOfRange { .. } => "GRAPH_VERTEX_OUT_OF_RANGE",
        /// An edge carried a NaN or infinite weight.
        NonFiniteWeight => NonFiniteWeight { .. } => "GRAPH_NON_FINITE_WEIGHT",
    }
}
