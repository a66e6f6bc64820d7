//! Weighted undirected graph input for the MST builder.
//!
//! A [`Graph`] is validated once at construction and is immutable afterwards.
//! Edge order is preserved exactly as supplied because Borůvka's cheapest-edge
//! selection breaks weight ties by scan order.

use tracing::warn;

use crate::error::GraphError;

/// An undirected weighted edge between two vertex ids.
///
/// # Examples
/// ```
/// use spanning_core::Edge;
///
/// let edge = Edge::new(2, 3, 4.0);
/// assert_eq!(edge.source(), 2);
/// assert_eq!(edge.destination(), 3);
/// assert_eq!(edge.weight(), 4.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    source: usize,
    destination: usize,
    weight: f64,
}

impl Edge {
    /// Creates an edge. Endpoints are validated when the edge is placed in a
    /// [`Graph`].
    #[must_use]
    pub const fn new(source: usize, destination: usize, weight: f64) -> Self {
        Self {
            source,
            destination,
            weight,
        }
    }

    /// Returns the source endpoint as supplied.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the destination endpoint as supplied.
    #[must_use]
    #[rustfmt::skip]
    pub const fn destination(&self) -> usize { self.destination }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> f64 { self.weight }

    /// Returns `true` when both endpoints are the same vertex.
    #[must_use]
    pub const fn is_self_loop(&self) -> bool {
        self.source == self.destination
    }
}

impl From<(usize, usize, f64)> for Edge {
    fn from((source, destination, weight): (usize, usize, f64)) -> Self {
        Self::new(source, destination, weight)
    }
}

/// A validated, immutable weighted graph.
///
/// Every edge endpoint lies in `[0, vertex_count)` and every weight is finite.
/// Self-loops are accepted; they never cross a component boundary and so are
/// never selected.
#[derive(Clone, Debug, PartialEq)]
pub struct Graph {
    vertex_count: usize,
    edges: Vec<Edge>,
}

impl Graph {
    /// Validates the input and builds a graph.
    ///
    /// The vertex count is accepted as a signed value so that callers reading
    /// untrusted input can hand it over unchanged and receive a typed
    /// rejection.
    ///
    /// # Errors
    ///
    /// Returns an error when:
    /// - `vertex_count` is negative
    /// - `edges` is empty
    /// - an edge references a vertex `>= vertex_count`
    /// - an edge weight is non-finite
    ///
    /// # Examples
    /// ```
    /// use spanning_core::{Edge, Graph, GraphError};
    ///
    /// let err = Graph::new(3, vec![Edge::new(0, 5, 1.0)]).unwrap_err();
    /// assert!(matches!(err, GraphError::VertexOutOfRange { vertex: 5, .. }));
    ///
    /// let graph = Graph::new(2, vec![Edge::new(0, 1, 1.0)])?;
    /// assert_eq!(graph.vertex_count(), 2);
    /// # Ok::<(), GraphError>(())
    /// ```
    pub fn new(vertex_count: i64, edges: Vec<Edge>) -> Result<Self, GraphError> {
        let result = Self::validate(vertex_count, edges);
        if let Err(err) = &result {
            warn!(code = %err.code(), error = %err, "rejected graph input");
        }
        result
    }

    fn validate(vertex_count: i64, edges: Vec<Edge>) -> Result<Self, GraphError> {
        let vertex_count = usize::try_from(vertex_count)
            .map_err(|_| GraphError::InvalidVertexCount { got: vertex_count })?;
        if edges.is_empty() {
            return Err(GraphError::EmptyEdgeList);
        }
        for (index, edge) in edges.iter().enumerate() {
            validate_edge(index, edge, vertex_count)?;
        }
        Ok(Self {
            vertex_count,
            edges,
        })
    }

    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the edges in input order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

fn validate_edge(index: usize, edge: &Edge, vertex_count: usize) -> Result<(), GraphError> {
    for vertex in [edge.source, edge.destination] {
        if vertex >= vertex_count {
            return Err(GraphError::VertexOutOfRange {
                edge: index,
                vertex,
                vertex_count,
            });
        }
    }
    if !edge.weight.is_finite() {
        return Err(GraphError::NonFiniteWeight {
            edge: index,
            source_vertex: edge.source,
            destination: edge.destination,
            weight: edge.weight,
        });
    }
    Ok(())
}
