//! Synthetic graph generator for benchmarking.
//!
//! [`SyntheticGraph`] produces seeded, connected, weighted graphs. A random
//! spanning tree guarantees connectivity; extra random edges then bring the
//! edge count up to the requested average degree. Weights are whole numbers
//! in `1..=1000`, so ties are common and the tie-break path is exercised.

use rand::{Rng, SeedableRng, rngs::SmallRng};
use spanning_core::{Edge, Graph, GraphError};

const MAX_WEIGHT: u32 = 1_000;

/// Errors that may occur during synthetic graph generation.
#[derive(Clone, Debug, thiserror::Error, PartialEq)]
pub enum SyntheticError {
    /// Fewer than two vertices were requested.
    #[error("vertex count must be at least 2 (got {0})")]
    TooFewVertices(usize),
    /// The requested average degree was zero.
    #[error("average degree must be greater than zero")]
    ZeroDegree,
    /// The vertex count does not fit the graph constructor's signed input.
    #[error("vertex count {0} exceeds the supported range")]
    VertexCountOverflow(usize),
    /// The generated edges were rejected by graph validation.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Configuration for a seeded random connected graph.
///
/// # Examples
///
/// ```
/// use spanning_benches::source::SyntheticGraph;
///
/// let config = SyntheticGraph { vertex_count: 64, average_degree: 6, seed: 42 };
/// let graph = config.generate().expect("valid config");
/// assert_eq!(graph.vertex_count(), 64);
/// assert_eq!(graph.edge_count(), 192);
/// ```
#[derive(Clone, Debug)]
pub struct SyntheticGraph {
    /// Number of vertices to generate.
    pub vertex_count: usize,
    /// Target average vertex degree; never fewer than `vertex_count - 1`
    /// edges are produced.
    pub average_degree: usize,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

impl SyntheticGraph {
    /// Number of edges [`Self::generate`] will produce.
    #[must_use]
    pub const fn target_edge_count(&self) -> usize {
        let by_degree = self.vertex_count.saturating_mul(self.average_degree) >> 1;
        let tree = self.vertex_count.saturating_sub(1);
        if by_degree > tree { by_degree } else { tree }
    }

    /// Generates the graph eagerly.
    ///
    /// # Errors
    ///
    /// Returns [`SyntheticError::TooFewVertices`] below two vertices,
    /// [`SyntheticError::ZeroDegree`] for a zero degree, or
    /// [`SyntheticError::VertexCountOverflow`] if the count cannot be passed
    /// to [`Graph::new`].
    pub fn generate(&self) -> Result<Graph, SyntheticError> {
        if self.vertex_count < 2 {
            return Err(SyntheticError::TooFewVertices(self.vertex_count));
        }
        if self.average_degree == 0 {
            return Err(SyntheticError::ZeroDegree);
        }
        let signed_count = i64::try_from(self.vertex_count)
            .map_err(|_| SyntheticError::VertexCountOverflow(self.vertex_count))?;

        let target = self.target_edge_count();
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut edges = Vec::with_capacity(target);

        for vertex in 1..self.vertex_count {
            let parent = rng.gen_range(0..vertex);
            edges.push(random_edge(&mut rng, parent, vertex));
        }
        while edges.len() < target {
            let source = rng.gen_range(0..self.vertex_count);
            let destination = rng.gen_range(0..self.vertex_count);
            if source != destination {
                edges.push(random_edge(&mut rng, source, destination));
            }
        }

        Ok(Graph::new(signed_count, edges)?)
    }
}

fn random_edge(rng: &mut SmallRng, source: usize, destination: usize) -> Edge {
    Edge::new(
        source,
        destination,
        f64::from(rng.gen_range(1..=MAX_WEIGHT)),
    )
}
