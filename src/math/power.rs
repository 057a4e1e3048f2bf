//! Power-law regression `carry ≈ a · speed^b`, fitted as a line in log-log space.

use crate::math::ols::fit_line;

/// A fitted power law `y = coefficient · x^exponent`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerLaw {
    pub coefficient: f64,
    pub exponent: f64,
}

impl PowerLaw {
    pub fn eval(&self, x: f64) -> f64 {
        self.coefficient * x.powf(self.exponent)
    }
}

/// Fit `y ≈ a · x^b` by least squares on `(ln x, ln y)`.
///
/// Needs at least two pairs, all strictly positive and finite; otherwise `None`.
pub fn fit_power_law(xs: &[f64], ys: &[f64]) -> Option<PowerLaw> {
    if xs.len() < 2 || xs.len() != ys.len() {
        return None;
    }
    let usable = |v: &f64| v.is_finite() && *v > 0.0;
    if !xs.iter().all(usable) || !ys.iter().all(usable) {
        return None;
    }

    let ln_x: Vec<f64> = xs.iter().map(|v| v.ln()).collect();
    let ln_y: Vec<f64> = ys.iter().map(|v| v.ln()).collect();
    let line = fit_line(&ln_x, &ln_y)?;

    Some(PowerLaw {
        coefficient: line.intercept.exp(),
        exponent: line.slope,
    })
}
