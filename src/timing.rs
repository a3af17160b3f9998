//! Timing harness: measures real elapsed time of two nested-loop variants.
//!
//! Both functions run an exact n×n double loop bracketed by a monotonic
//! clock. The accumulators pass through `black_box` before the end timestamp
//! so release builds measure the loop as written instead of a constant. The
//! measured values are wall-clock and inherently noisy — that noise is the
//! point of the comparison.

use std::hint::black_box;
use std::time::Instant;

/// Largest input size the doubling sequence may reach.
pub const MAX_N: u32 = 500;

/// The n sequence and the two parallel timing series, index-aligned.
#[derive(Debug, Clone)]
pub struct Measurements {
    pub n_values: Vec<u32>,
    pub original_ns: Vec<u64>,
    pub modified_ns: Vec<u64>,
}

/// Input sizes starting at 1 and doubling while `n <= max_n`.
///
/// `max_n = 500` yields `[1, 2, 4, 8, 16, 32, 64, 128, 256]`.
pub fn size_sequence(max_n: u32) -> Vec<u32> {
    let mut sizes = Vec::new();
    let mut n = 1;
    while n <= max_n {
        sizes.push(n);
        n *= 2;
    }
    sizes
}

/// Elapsed nanoseconds for the single-accumulator variant.
pub fn measure_original(n: u32) -> u64 {
    let start = Instant::now();
    let mut x: u64 = 1;
    for _i in 1..=n {
        for _j in 1..=n {
            x += 1;
        }
    }
    black_box(x);
    start.elapsed().as_nanos() as u64
}

/// Elapsed nanoseconds for the two-accumulator variant (slightly more work
/// per inner iteration: one increment plus one reassignment from the loop
/// indices).
pub fn measure_modified(n: u32) -> u64 {
    let start = Instant::now();
    let mut x: u64 = 1;
    let mut y: u64 = 1;
    for i in 1..=n {
        for j in 1..=n {
            x += 1;
            y = (i + j) as u64;
        }
    }
    black_box((x, y));
    start.elapsed().as_nanos() as u64
}

/// Run both variants for every size in the doubling sequence, printing each
/// measurement pair as it completes.
pub fn collect(max_n: u32) -> Measurements {
    let n_values = size_sequence(max_n);
    let mut original_ns = Vec::with_capacity(n_values.len());
    let mut modified_ns = Vec::with_capacity(n_values.len());

    for &n in &n_values {
        let time_original = measure_original(n);
        let time_modified = measure_modified(n);
        println!(
            "n = {} -> Original: {} ns, Modified: {} ns",
            n, time_original, time_modified
        );
        original_ns.push(time_original);
        modified_ns.push(time_modified);
    }

    log::info!(
        "Collected {} measurement pairs (max n = {})",
        n_values.len(),
        max_n
    );

    Measurements {
        n_values,
        original_ns,
        modified_ns,
    }
}
