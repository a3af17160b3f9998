//! Report module: prints the measurement table and fitted-polynomial summary.

use crate::timing::Measurements;

/// Human-readable scientific-notation rendering of `a·n² + b·n + c`.
pub fn format_polynomial(coefficients: [f64; 3]) -> String {
    let [a, b, c] = coefficients;
    format!("{:.3e} * n² + {:.3e} * n + {:.3e}", a, b, c)
}

/// Print a formatted comparison of the two timing series and their fits.
///
/// The formatting is for human eyes only; nothing downstream parses it.
pub fn print_report(
    measurements: &Measurements,
    fit_original: [f64; 3],
    fit_modified: [f64; 3],
) {
    println!("\n{}", "=".repeat(72));
    println!("  Nested-Loop Benchmark Report");
    println!("{}", "=".repeat(72));

    println!(
        "\n  {:>6} {:>16} {:>16} {:>8}",
        "n", "Original (ns)", "Modified (ns)", "Ratio"
    );
    println!("  {}", "-".repeat(50));
    for (i, &n) in measurements.n_values.iter().enumerate() {
        let original = measurements.original_ns[i];
        let modified = measurements.modified_ns[i];
        let ratio = if original > 0 {
            modified as f64 / original as f64
        } else {
            0.0
        };
        println!(
            "  {:>6} {:>16} {:>16} {:>7.2}x",
            n, original, modified, ratio
        );
    }

    println!(
        "\n  Fitted Polynomial (Original): {}",
        format_polynomial(fit_original)
    );
    println!(
        "  Fitted Polynomial (Modified): {}",
        format_polynomial(fit_modified)
    );
    println!();
}
