//! Ordinary least squares line fit.
//!
//! ```text
//! minimize Σ (y_i - (slope·x_i + intercept))^2
//! ```
//!
//! Solved in closed form from the centered sums. When every `x` is equal the
//! slope is unidentified; we return a flat line through `mean(y)` instead of
//! failing, which is also what a single point produces.

use nalgebra::DVector;

/// A fitted line `y = slope·x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LineFit {
    pub fn eval(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Fit a line through `(xs[i], ys[i])`.
///
/// Returns `None` for empty or mismatched inputs.
pub fn fit_line(xs: &[f64], ys: &[f64]) -> Option<LineFit> {
    if xs.is_empty() || xs.len() != ys.len() {
        return None;
    }

    let x = DVector::from_column_slice(xs);
    let y = DVector::from_column_slice(ys);
    let x_bar = x.mean();
    let y_bar = y.mean();

    if xs.iter().all(|&v| v == xs[0]) {
        return Some(LineFit {
            slope: 0.0,
            intercept: y_bar,
        });
    }

    let dx = x.add_scalar(-x_bar);
    let dy = y.add_scalar(-y_bar);
    let slope = dx.dot(&dy) / dx.dot(&dx);

    Some(LineFit {
        slope,
        intercept: y_bar - slope * x_bar,
    })
}
