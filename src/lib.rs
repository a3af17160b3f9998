//! Nested-Loop Latency Benchmark
//!
//! Times two CPU-bound nested-loop variants across a doubling input-size
//! sequence (1, 2, 4, … ≤ 500), fits a quadratic to each timing series, and
//! plots both curves in a native window. Also demonstrates an in-place stable
//! merge sort on a small fixed array.
//!
//! Run: `cargo run --release`
//! Run tests: `cargo test`
//! Run benchmarks: `cargo bench`

pub mod chart;
pub mod fit;
pub mod report;
pub mod sort;
pub mod timing;
