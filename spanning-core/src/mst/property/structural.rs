//! Property 2: Structural invariant verification.
//!
//! For any forest produced by the builder, verifies:
//!
//! - **Acyclicity**: replaying accepted edges in order never joins two
//!   vertices that are already connected.
//! - **Edge count**: `V - C` edges for `C` components.
//! - **Provenance**: every accepted edge is one of the input edges.
//! - **Connectivity**: connected input produces a tree; the component count
//!   matches the input's.
//! - **No self-loops**.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{Edge, MinimumSpanningForest, build_mst};

use super::helpers::{count_components, find_root};
use super::types::MstFixture;

/// Runs the structural invariant property for the given fixture.
pub(super) fn run_structural_invariants_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = fixture.graph().map_err(TestCaseError::fail)?;
    let forest = build_mst(&graph);
    let edges = forest.edges();

    validate_no_self_loops(edges)?;
    validate_provenance(&fixture.edges, edges)?;
    validate_acyclicity(fixture.vertex_count, edges)?;
    validate_edge_count(fixture.vertex_count, edges.len(), forest.component_count())?;
    validate_connectivity(fixture, &forest)?;
    Ok(())
}

/// Applies `predicate` to each edge, failing on the first message produced.
fn validate_edges<F>(edges: &[Edge], mut predicate: F) -> TestCaseResult
where
    F: FnMut(usize, &Edge) -> Option<String>,
{
    for (i, edge) in edges.iter().enumerate() {
        if let Some(msg) = predicate(i, edge) {
            return Err(TestCaseError::fail(msg));
        }
    }
    Ok(())
}

fn validate_no_self_loops(edges: &[Edge]) -> TestCaseResult {
    validate_edges(edges, |i, edge| {
        edge.is_self_loop()
            .then(|| format!("edge {i}: self-loop on vertex {}", edge.source()))
    })
}

fn validate_provenance(input: &[Edge], edges: &[Edge]) -> TestCaseResult {
    validate_edges(edges, |i, edge| {
        (!input.contains(edge)).then(|| format!("edge {i}: {edge:?} is not an input edge"))
    })
}

fn validate_acyclicity(vertex_count: usize, edges: &[Edge]) -> TestCaseResult {
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    for (i, edge) in edges.iter().enumerate() {
        let left = find_root(&mut parent, edge.source());
        let right = find_root(&mut parent, edge.destination());
        if left == right {
            return Err(TestCaseError::fail(format!(
                "edge {i}: ({}, {}) creates a cycle",
                edge.source(),
                edge.destination(),
            )));
        }
        parent[right] = left;
    }
    Ok(())
}

fn validate_edge_count(
    vertex_count: usize,
    actual: usize,
    component_count: usize,
) -> TestCaseResult {
    let expected = vertex_count.saturating_sub(component_count);
    if actual != expected {
        return Err(TestCaseError::fail(format!(
            "edge count {actual}, expected n - c = {expected} (n={vertex_count}, c={component_count})",
        )));
    }
    Ok(())
}

fn validate_connectivity(fixture: &MstFixture, forest: &MinimumSpanningForest) -> TestCaseResult {
    let input_components = count_components(fixture.vertex_count, &fixture.edges);
    if input_components != forest.component_count() {
        return Err(TestCaseError::fail(format!(
            "input has {input_components} components but output has {} ({})",
            forest.component_count(),
            fixture.describe(),
        )));
    }
    if input_components == 1 && !forest.is_tree() {
        return Err(TestCaseError::fail(format!(
            "input is connected but output is not a tree ({})",
            fixture.describe(),
        )));
    }
    Ok(())
}
