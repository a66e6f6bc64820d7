//! Benchmark support crate for spanning.
//!
//! Provides seeded synthetic graphs and parameter labels used by the Criterion
//! benchmarks of the Borůvka MST builder.

pub mod error;
pub mod params;
pub mod source;
