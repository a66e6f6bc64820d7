//! Benchmark parameter labels.

use std::fmt;

/// Parameters for one MST benchmark input.
#[derive(Clone, Debug)]
pub struct MstBenchParams {
    /// Number of vertices in the generated graph.
    pub vertex_count: usize,
    /// Target average vertex degree.
    pub average_degree: usize,
}

impl fmt::Display for MstBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},deg={}", self.vertex_count, self.average_degree)
    }
}
