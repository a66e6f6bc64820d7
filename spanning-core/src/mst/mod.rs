//! Minimum spanning tree (MST) construction.
//!
//! This module provides Borůvka's algorithm over a [`DisjointSetForest`].
//! Each round scans every edge once to find the cheapest edge leaving each
//! component, then merges components along those edges. Every productive
//! round at least halves the number of components, so a connected graph needs
//! `O(log V)` rounds. When a round finds no edge leaving any component the
//! remaining components are mutually unreachable and the builder returns a
//! minimum spanning forest.

mod union_find;

use tracing::{debug, instrument};

use crate::graph::{Edge, Graph};

pub use self::union_find::DisjointSetForest;

/// The output of a minimum spanning forest computation.
///
/// When the input graph is connected, the forest is a minimum spanning tree.
#[derive(Clone, Debug, PartialEq)]
pub struct MinimumSpanningForest {
    edges: Vec<Edge>,
    component_count: usize,
    rounds: usize,
}

impl MinimumSpanningForest {
    /// Returns the accepted edges in the order they were accepted.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Consumes the forest and returns its edges.
    #[must_use]
    pub fn into_edges(self) -> Vec<Edge> {
        self.edges
    }

    /// Returns the number of connected components in the resulting forest.
    #[must_use]
    #[rustfmt::skip]
    pub const fn component_count(&self) -> usize { self.component_count }

    /// Returns the number of Borůvka rounds that merged at least one pair of
    /// components.
    #[must_use]
    #[rustfmt::skip]
    pub const fn rounds(&self) -> usize { self.rounds }

    /// Returns `true` when the forest spans a single connected component.
    #[must_use]
    pub const fn is_tree(&self) -> bool {
        self.component_count == 1
    }

    /// Returns the summed weight of the accepted edges.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        total_weight(&self.edges)
    }
}

/// Sums the weights of `edges`.
///
/// # Examples
/// ```
/// use spanning_core::{Edge, total_weight};
///
/// let edges = [Edge::new(0, 1, 1.5), Edge::new(1, 2, 2.5)];
/// assert_eq!(total_weight(&edges), 4.0);
/// assert_eq!(total_weight(&[]), 0.0);
/// ```
#[must_use]
pub fn total_weight(edges: &[Edge]) -> f64 {
    edges.iter().map(Edge::weight).sum()
}

/// Computes a minimum spanning forest using Borůvka's algorithm.
///
/// Edges are scanned in the graph's input order; among equal-weight
/// candidates for a component the first one scanned wins, so the result is
/// deterministic for a given edge order. The returned edges have exactly
/// `vertex_count - component_count` entries and are listed in acceptance
/// order.
///
/// # Examples
/// ```
/// use spanning_core::{Edge, Graph, build_mst};
///
/// let graph = Graph::new(4, vec![Edge::new(0, 1, 1.0), Edge::new(2, 3, 1.0)])?;
/// let forest = build_mst(&graph);
/// assert!(!forest.is_tree());
/// assert_eq!(forest.component_count(), 2);
/// assert_eq!(forest.total_weight(), 2.0);
/// # Ok::<(), spanning_core::GraphError>(())
/// ```
#[instrument(
    name = "mst.build",
    skip(graph),
    fields(vertex_count = graph.vertex_count(), edge_count = graph.edge_count()),
)]
pub fn build_mst(graph: &Graph) -> MinimumSpanningForest {
    let vertex_count = graph.vertex_count();
    let target = vertex_count.saturating_sub(1);
    let mut state = BoruvkaState::new(vertex_count, target);
    let mut cheapest: Vec<Option<usize>> = vec![None; vertex_count];

    while state.accepted.len() < target {
        cheapest.fill(None);
        let candidates = compute_cheapest_edges(graph, &mut state.forest, &mut cheapest);
        if candidates == 0 {
            debug!(
                components = state.forest.component_count(),
                "no edge leaves any component; graph is disconnected"
            );
            break;
        }

        let merged = state.merge(graph.edges(), &cheapest);
        state.rounds += 1;
        debug!(
            round = state.rounds,
            candidates,
            merged,
            components = state.forest.component_count(),
            "boruvka round complete"
        );
        debug_assert!(merged > 0, "a round with candidates must merge");
    }

    let forest = state.finish();
    record_build(&forest);
    debug!(
        edges = forest.edges.len(),
        components = forest.component_count,
        rounds = forest.rounds,
        is_tree = forest.is_tree(),
        "mst build completed"
    );
    forest
}

/// Forest and accepted edges carried across rounds.
struct BoruvkaState {
    forest: DisjointSetForest,
    accepted: Vec<Edge>,
    rounds: usize,
}

impl BoruvkaState {
    fn new(vertex_count: usize, target: usize) -> Self {
        Self {
            forest: DisjointSetForest::new(vertex_count),
            accepted: Vec::with_capacity(target),
            rounds: 0,
        }
    }

    /// Accepts each component's cheapest edge in root-index order, skipping
    /// edges whose endpoints were joined earlier in the same pass.
    fn merge(&mut self, edges: &[Edge], cheapest: &[Option<usize>]) -> usize {
        let mut merged = 0;
        for edge in cheapest.iter().flatten().map(|&index| edges[index]) {
            let left = self.forest.find(edge.source());
            let right = self.forest.find(edge.destination());
            if left != right {
                self.accepted.push(edge);
                self.forest.union(left, right);
                merged += 1;
            }
        }
        merged
    }

    fn finish(self) -> MinimumSpanningForest {
        MinimumSpanningForest {
            component_count: self.forest.component_count(),
            edges: self.accepted,
            rounds: self.rounds,
        }
    }
}

/// Fills `cheapest[root]` with the index of the lightest edge leaving each
/// component and returns how many slots were filled.
fn compute_cheapest_edges(
    graph: &Graph,
    forest: &mut DisjointSetForest,
    cheapest: &mut [Option<usize>],
) -> usize {
    let edges = graph.edges();
    let mut filled = 0;
    for (index, edge) in edges.iter().enumerate() {
        let left = forest.find(edge.source());
        let right = forest.find(edge.destination());
        if left == right {
            continue;
        }
        for root in [left, right] {
            let slot = &mut cheapest[root];
            match *slot {
                None => {
                    *slot = Some(index);
                    filled += 1;
                }
                Some(current) if edge.weight() < edges[current].weight() => {
                    *slot = Some(index);
                }
                Some(_) => {}
            }
        }
    }
    filled
}

#[cfg(feature = "metrics")]
fn record_build(forest: &MinimumSpanningForest) {
    metrics::counter!("mst_builds_total").increment(1);
    metrics::counter!("mst_rounds_total").increment(forest.rounds as u64);
    metrics::counter!("mst_edges_accepted_total").increment(forest.edges.len() as u64);
}

#[cfg(not(feature = "metrics"))]
fn record_build(_forest: &MinimumSpanningForest) {}
