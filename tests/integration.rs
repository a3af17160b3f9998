//! Integration tests: verify the full measure → fit → chart pipeline and the
//! cross-module properties the runner relies on.

use loop_bench::chart::{ChartData, ChartLayout, CANVAS_HEIGHT, CANVAS_WIDTH, PADDING};
use loop_bench::{fit, sort, timing};

// ── Merge sort ──────────────────────────────────────────────────────

#[test]
fn demo_array_sorts_to_golden_output() {
    let mut values = [5, 2, 4, 7, 1, 3, 2, 6];
    sort::sort(&mut values);
    assert_eq!(values, [1, 2, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn sort_agrees_with_std_on_random_data() {
    let mut seed: i64 = 7;
    let input: Vec<i64> = (0..200)
        .map(|_| {
            seed = seed.wrapping_mul(1103515245).wrapping_add(12345) % 2147483648;
            seed % 50
        })
        .collect();

    let mut ours = input.clone();
    sort::sort(&mut ours);

    let mut expected = input;
    expected.sort();
    assert_eq!(ours, expected);
}

// ── Timing harness ──────────────────────────────────────────────────

#[test]
fn size_sequence_matches_frozen_golden() {
    assert_eq!(timing::size_sequence(500), [1, 2, 4, 8, 16, 32, 64, 128, 256]);
}

#[test]
fn measurements_are_index_aligned() {
    let m = timing::collect(16);
    assert_eq!(m.n_values, [1, 2, 4, 8, 16]);
    assert_eq!(m.original_ns.len(), 5);
    assert_eq!(m.modified_ns.len(), 5);
}

#[test]
fn measured_time_grows_with_n_statistically() {
    const TRIALS: usize = 5;
    let small: u64 = (0..TRIALS).map(|_| timing::measure_modified(1)).sum();
    let large: u64 = (0..TRIALS).map(|_| timing::measure_modified(256)).sum();
    assert!(
        large > small,
        "expected n=256 total ({} ns) to exceed n=1 total ({} ns)",
        large,
        small
    );
}

// ── Measure → fit pipeline ──────────────────────────────────────────

#[test]
fn collected_series_are_fittable() {
    let m = timing::collect(500);
    let xs: Vec<f64> = m.n_values.iter().map(|&n| n as f64).collect();
    let ys: Vec<f64> = m.original_ns.iter().map(|&t| t as f64).collect();

    let [a, b, c] = fit::fit_quadratic(&xs, &ys).expect("fit real measurements");
    assert!(a.is_finite() && b.is_finite() && c.is_finite());
}

#[test]
fn fit_recovers_known_quadratic() {
    let xs = [0.0, 1.0, 2.0, 3.0, 4.0];
    let ys: Vec<f64> = xs.iter().map(|&x| 2.0 * x * x + 3.0 * x + 1.0).collect();

    let [a, b, c] = fit::fit_quadratic(&xs, &ys).unwrap();
    assert!((a - 2.0).abs() < 1e-6);
    assert!((b - 3.0).abs() < 1e-6);
    assert!((c - 1.0).abs() < 1e-6);
}

#[test]
fn fit_rejects_underdetermined_input() {
    assert!(fit::fit_quadratic(&[1.0, 2.0], &[3.0, 6.0]).is_err());
    assert!(fit::fit_quadratic(&[5.0, 5.0, 5.0], &[1.0, 2.0, 3.0]).is_err());
}

// ── Measure → chart pipeline ────────────────────────────────────────

#[test]
fn collected_series_make_valid_chart_data() {
    let m = timing::collect(500);
    let data = ChartData {
        n_values: m.n_values,
        original_ns: m.original_ns,
        modified_ns: m.modified_ns,
    };
    data.validate().expect("real measurements must chart");
    assert!(data.max_time() > 0);
}

#[test]
fn two_point_mapping_hits_canvas_edges() {
    let layout = ChartLayout::new(CANVAS_WIDTH, CANVAS_HEIGHT, PADDING);

    assert_eq!(layout.x_for_index(0, 2), PADDING);
    assert_eq!(layout.x_for_index(1, 2), CANVAS_WIDTH - PADDING);

    let max_time = 1_000;
    assert_eq!(layout.y_for_value(0, max_time), CANVAS_HEIGHT - PADDING);
    assert_eq!(layout.y_for_value(max_time, max_time), PADDING);
}

#[test]
fn chart_rejects_degenerate_data() {
    let single = ChartData {
        n_values: vec![1],
        original_ns: vec![5],
        modified_ns: vec![9],
    };
    assert!(single.validate().is_err());

    let flat = ChartData {
        n_values: vec![1, 2],
        original_ns: vec![0, 0],
        modified_ns: vec![0, 0],
    };
    assert!(flat.validate().is_err());
}
