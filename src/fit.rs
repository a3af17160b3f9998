//! Unweighted least-squares fit of a degree-2 polynomial.
//!
//! Small enough not to justify a numerics crate: build the 3×3 normal
//! equations over the basis (x², x, 1) and solve them directly.

use anyhow::{bail, ensure, Result};

/// Pivots smaller than this are treated as singular.
const SINGULAR_EPS: f64 = 1e-12;

/// Fit `a·x² + b·x + c` to the given points, returning `[a, b, c]`.
///
/// Fails on degenerate input: mismatched lengths, fewer than 3 points, fewer
/// than 3 distinct x values, or a singular design matrix. Never returns
/// NaN or garbage coefficients.
pub fn fit_quadratic(xs: &[f64], ys: &[f64]) -> Result<[f64; 3]> {
    ensure!(
        xs.len() == ys.len(),
        "mismatched series lengths: {} x values vs {} y values",
        xs.len(),
        ys.len()
    );
    ensure!(
        xs.len() >= 3,
        "quadratic fit needs at least 3 points, got {}",
        xs.len()
    );

    let mut distinct: Vec<f64> = Vec::new();
    for &x in xs {
        if !distinct.iter().any(|&d| d == x) {
            distinct.push(x);
        }
    }
    ensure!(
        distinct.len() >= 3,
        "quadratic fit needs at least 3 distinct x values, got {}",
        distinct.len()
    );

    // Sums of x^k for k = 0..=4 and of y·x^k for k = 0..=2.
    let mut sx = [0.0f64; 5];
    let mut sy = [0.0f64; 3];
    for (&x, &y) in xs.iter().zip(ys) {
        let mut xp = 1.0;
        for s in sx.iter_mut() {
            *s += xp;
            xp *= x;
        }
        let mut xp = 1.0;
        for s in sy.iter_mut() {
            *s += y * xp;
            xp *= x;
        }
    }

    // Normal equations, rows ordered so the solution comes out as [a, b, c].
    let mut m = [
        [sx[4], sx[3], sx[2], sy[2]],
        [sx[3], sx[2], sx[1], sy[1]],
        [sx[2], sx[1], sx[0], sy[0]],
    ];

    solve_3x3(&mut m)
}

/// Gaussian elimination with partial pivoting on a 3×4 augmented matrix.
fn solve_3x3(m: &mut [[f64; 4]; 3]) -> Result<[f64; 3]> {
    for col in 0..3 {
        let pivot_row = (col..3)
            .max_by(|&a, &b| m[a][col].abs().partial_cmp(&m[b][col].abs()).unwrap())
            .unwrap();
        if m[pivot_row][col].abs() < SINGULAR_EPS {
            bail!("design matrix is singular; quadratic fit is undefined");
        }
        m.swap(col, pivot_row);

        for row in (col + 1)..3 {
            let factor = m[row][col] / m[col][col];
            for k in col..4 {
                m[row][k] -= factor * m[col][k];
            }
        }
    }

    let mut solution = [0.0f64; 3];
    for row in (0..3).rev() {
        let mut acc = m[row][3];
        for k in (row + 1)..3 {
            acc -= m[row][k] * solution[k];
        }
        solution[row] = acc / m[row][row];
    }

    if solution.iter().any(|v| !v.is_finite()) {
        bail!("quadratic fit produced non-finite coefficients");
    }

    Ok(solution)
}
