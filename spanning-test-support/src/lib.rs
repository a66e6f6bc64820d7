//! Shared test utilities used across spanning crates.

pub mod ci;
pub mod tracing;
