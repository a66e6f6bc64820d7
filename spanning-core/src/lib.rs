//! Spanning core library.
//!
//! Builds minimum spanning trees (or forests, for disconnected input) with
//! Borůvka's round-based contraction over a rank-balanced, path-compressing
//! [`DisjointSetForest`].
//!
//! # Examples
//! ```
//! use spanning_core::{Edge, Graph, build_mst};
//!
//! let graph = Graph::new(
//!     4,
//!     vec![
//!         Edge::new(0, 1, 10.0),
//!         Edge::new(0, 2, 6.0),
//!         Edge::new(0, 3, 5.0),
//!         Edge::new(1, 3, 15.0),
//!         Edge::new(2, 3, 4.0),
//!     ],
//! )?;
//! let forest = build_mst(&graph);
//! assert!(forest.is_tree());
//! assert_eq!(forest.edges().len(), 3);
//! assert_eq!(forest.total_weight(), 19.0);
//! # Ok::<(), spanning_core::GraphError>(())
//! ```
//!
//! # Metrics
//!
//! When the `metrics` feature is enabled [`build_mst`] emits:
//!
//! - `mst_builds_total` (counter)
//! - `mst_rounds_total` (counter)
//! - `mst_edges_accepted_total` (counter)
//!
//! These metric names are stable for downstream crates.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod graph;
mod mst;


pub use crate::{
    error::{GraphError, GraphErrorCode},
    graph::{Edge, Graph},
    mst::{DisjointSetForest, MinimumSpanningForest, build_mst, total_weight},
};
