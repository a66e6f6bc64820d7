//! Support library for the `spanning` binary.
//!
//! Exposes argument parsing, edge-list reading and rendering so tests and
//! doctests can drive the `mst` command without spawning a subprocess.

pub mod cli;
pub mod logging;
