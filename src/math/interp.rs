//! Piecewise-linear interpolation with linear extrapolation at both tails.
//!
//! No clamping and no smoothing: outside the known range the nearest segment
//! is simply extended.

/// Evaluate the piecewise-linear curve through `points` at `x`.
///
/// `points` must be sorted ascending by `x`. Needs at least two points.
/// An exact `x` match returns that point's `y` unchanged.
pub fn interpolate_linear(x: f64, points: &[(f64, f64)]) -> Option<f64> {
    if points.len() < 2 {
        return None;
    }
    if let Some(&(_, y)) = points.iter().find(|(px, _)| *px == x) {
        return Some(y);
    }

    let first = points[0];
    let last = points[points.len() - 1];
    let (lo, hi) = if x < first.0 {
        (first, points[1])
    } else if x > last.0 {
        (points[points.len() - 2], last)
    } else {
        let window = points.windows(2).find(|w| w[0].0 < x && x < w[1].0)?;
        (window[0], window[1])
    };

    Some(lerp(x, lo, hi))
}

/// Whether `x` lies outside the `x` range of `points`.
pub fn is_extrapolated(x: f64, points: &[(f64, f64)]) -> bool {
    match (points.first(), points.last()) {
        (Some(first), Some(last)) => x < first.0 || x > last.0,
        _ => false,
    }
}

fn lerp(x: f64, (x0, y0): (f64, f64), (x1, y1): (f64, f64)) -> f64 {
    if x1 == x0 {
        return y0;
    }
    let t = (x - x0) / (x1 - x0);
    y0 + t * (y1 - y0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PTS: [(f64, f64); 3] = [(46.0, 110.0), (50.0, 100.0), (56.0, 85.0)];

    #[test]
    fn exact_points_are_returned_verbatim() {
        for (x, y) in PTS {
            assert_eq!(interpolate_linear(x, &PTS), Some(y));
        }
    }

    #[test]
    fn interior_uses_bracketing_pair() {
        let y = interpolate_linear(53.0, &PTS).unwrap();
        assert!((y - 92.5).abs() < 1e-12);
    }

    #[test]
    fn tails_extrapolate_from_end_segments() {
        // Below: slope of first segment is -2.5 yd/deg.
        assert!((interpolate_linear(44.0, &PTS).unwrap() - 115.0).abs() < 1e-12);
        // Above: slope of last segment is -2.5 yd/deg.
        assert!((interpolate_linear(60.0, &PTS).unwrap() - 75.0).abs() < 1e-12);
        assert!(is_extrapolated(44.0, &PTS));
        assert!(!is_extrapolated(50.0, &PTS));
    }

    #[test]
    fn needs_two_points() {
        assert!(interpolate_linear(50.0, &[(50.0, 1.0)]).is_none());
        assert!(interpolate_linear(50.0, &[]).is_none());
    }

    #[test]
    fn coincident_points_do_not_divide_by_zero() {
        let pts = [(50.0, 100.0), (50.0, 98.0)];
        assert_eq!(interpolate_linear(40.0, &pts), Some(100.0));
    }
}
