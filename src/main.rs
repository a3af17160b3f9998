//! Runner binary: sorts the demo array, measures both loop variants across
//! the doubling size sequence, fits a quadratic to each series, prints the
//! report, and opens the chart window.
//!
//! Usage:
//!   cargo run --release
//!   RUST_LOG=info cargo run --release   # with harness logging

use anyhow::Result;
use loop_bench::chart::ChartData;
use loop_bench::{chart, fit, report, sort, timing};

fn main() -> Result<()> {
    env_logger::init();

    // Merge sort demonstration on the fixed test array.
    let mut test_array = [5, 2, 4, 7, 1, 3, 2, 6];
    println!("Original Array: {:?}", test_array);
    sort::sort(&mut test_array);
    println!("Sorted Array: {:?}", test_array);

    println!("\nMeasuring nested-loop variants up to n = {}...", timing::MAX_N);
    let measurements = timing::collect(timing::MAX_N);

    let xs: Vec<f64> = measurements.n_values.iter().map(|&n| n as f64).collect();
    let ys_original: Vec<f64> = measurements.original_ns.iter().map(|&t| t as f64).collect();
    let ys_modified: Vec<f64> = measurements.modified_ns.iter().map(|&t| t as f64).collect();

    let fit_original = fit::fit_quadratic(&xs, &ys_original)?;
    let fit_modified = fit::fit_quadratic(&xs, &ys_modified)?;

    report::print_report(&measurements, fit_original, fit_modified);

    let data = ChartData {
        n_values: measurements.n_values,
        original_ns: measurements.original_ns,
        modified_ns: measurements.modified_ns,
    };
    chart::show_chart(data)
}
