//! Benchmark support crate for spanwise.
//!
//! Provides seeded synthetic graphs and parameter types used by the
//! Criterion benchmarks comparing Kruskal's and Prim's builders.

pub mod error;
pub mod params;
pub mod source;
