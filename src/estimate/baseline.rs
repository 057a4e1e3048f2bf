//! Baseline estimation: a club's speed and carry at the reference effort level.
//!
//! Resolution order (first match wins):
//!
//! 1. the label is an anchor: use it verbatim
//! 2. a family rule derives club speed from specific anchors
//! 3. carry follows from speed: loft interpolation for wedges, the global
//!    power-law carry model for everything else
//!
//! Missing anchors never fail; they yield `None` ("no model").

use tracing::debug;

use crate::domain::{AnchorSet, Baseline, Club, ClubFamily, Resolution, WedgePoint};
use crate::math::{PowerLaw, fit_line, fit_power_law, interpolate_linear, is_extrapolated};

/// Anchor label the hybrid rule steps from.
pub const HYBRID_ANCHOR: &str = "Hybrid";
/// Anchor label blended with `Hybrid` for utilities.
pub const LONG_IRON_ANCHOR: &str = "3i";
pub const DRIVER_ANCHOR: &str = "Driver";
/// Anchor label the fairway-wood rule steps from.
pub const WOOD_ANCHOR: &str = "3W";

/// Speed lost per hybrid number away from the `Hybrid` anchor (treated as 3H).
const HYBRID_STEP_MPH: f64 = 1.5;
const HYBRID_REFERENCE: f64 = 3.0;
/// Speed lost per utility number above 2U.
const UTILITY_STEP_MPH: f64 = 1.2;
const UTILITY_REFERENCE: f64 = 2.0;
/// Speed lost per wood number away from 3W.
const WOOD_STEP_MPH: f64 = 2.0;
const WOOD_REFERENCE: f64 = 3.0;

/// A baseline together with the rule that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolved {
    pub baseline: Baseline,
    pub resolution: Resolution,
}

/// Estimate the baseline `(club speed, carry)` for a label.
pub fn estimate_baseline(label: &str, anchors: &AnchorSet) -> Option<Baseline> {
    resolve_baseline(&Club::parse(label), anchors).map(|r| r.baseline)
}

/// Estimate the baseline for a parsed club, reporting which rule applied.
pub fn resolve_baseline(club: &Club, anchors: &AnchorSet) -> Option<Resolved> {
    if let Some(anchor) = anchors.get(&club.label) {
        return Some(Resolved {
            baseline: Baseline {
                club_speed_mph: anchor.club_speed_mph,
                carry_yd: anchor.carry_yd,
            },
            resolution: Resolution::ExactAnchor,
        });
    }

    let (speed, resolution) = match club.family {
        ClubFamily::Hybrid(n) => {
            let base = anchors.speed(HYBRID_ANCHOR)?;
            (base - (f64::from(n) - HYBRID_REFERENCE) * HYBRID_STEP_MPH, Resolution::HybridOffset)
        }
        ClubFamily::Utility(n) => {
            let blend = (anchors.speed(HYBRID_ANCHOR)? + anchors.speed(LONG_IRON_ANCHOR)?) / 2.0;
            (blend - (f64::from(n) - UTILITY_REFERENCE) * UTILITY_STEP_MPH, Resolution::UtilityBlend)
        }
        ClubFamily::Iron(n) => (iron_speed(n, anchors)?, Resolution::IronFit),
        ClubFamily::MiniDriver => {
            let blend = (anchors.speed(DRIVER_ANCHOR)? + anchors.speed(WOOD_ANCHOR)?) / 2.0;
            (blend, Resolution::MiniDriverBlend)
        }
        ClubFamily::Wood(n) => {
            let base = anchors.speed(WOOD_ANCHOR)?;
            (base - (f64::from(n) - WOOD_REFERENCE) * WOOD_STEP_MPH, Resolution::WoodOffset)
        }
        ClubFamily::Wedge { loft } => return resolve_wedge(loft?, anchors),
        // Driver only resolves through its own anchor (handled above).
        ClubFamily::Driver | ClubFamily::Putter | ClubFamily::Unknown => return None,
    };

    let club_speed_mph = positive(speed)?;
    let carry_yd = positive(carry_model(anchors)?.eval(club_speed_mph))?;
    debug!(label = %club.label, speed = club_speed_mph, carry = carry_yd, rule = resolution.display_name(), "resolved baseline");

    Some(Resolved {
        baseline: Baseline {
            club_speed_mph,
            carry_yd,
        },
        resolution,
    })
}

/// Global carry-vs-speed model over every non-putter anchor.
pub fn carry_model(anchors: &AnchorSet) -> Option<PowerLaw> {
    let (speeds, carries): (Vec<f64>, Vec<f64>) = anchors.carry_points().into_iter().unzip();
    fit_power_law(&speeds, &carries)
}

/// Least-squares speed-vs-iron-number line, evaluated at `n`.
///
/// A single iron anchor gives a flat line at its speed.
fn iron_speed(n: u8, anchors: &AnchorSet) -> Option<f64> {
    let (numbers, speeds): (Vec<f64>, Vec<f64>) = anchors.iron_speeds().into_iter().unzip();
    fit_line(&numbers, &speeds).map(|line| line.eval(f64::from(n)))
}

/// Wedge speed and carry, each interpolated independently over loft.
fn resolve_wedge(loft: u8, anchors: &AnchorSet) -> Option<Resolved> {
    let points = anchors.wedge_points();
    let loft = f64::from(loft);

    let speeds = loft_series(&points, |p| p.club_speed_mph);
    let carries = loft_series(&points, |p| p.carry_yd);
    let club_speed_mph = positive(interpolate_linear(loft, &speeds)?)?;
    let carry_yd = positive(interpolate_linear(loft, &carries)?)?;
    let extrapolated = is_extrapolated(loft, &speeds);
    debug!(loft, speed = club_speed_mph, carry = carry_yd, extrapolated, "resolved wedge baseline");

    Some(Resolved {
        baseline: Baseline {
            club_speed_mph,
            carry_yd,
        },
        resolution: Resolution::WedgeLoft { extrapolated },
    })
}

fn loft_series(points: &[WedgePoint], value: impl Fn(&WedgePoint) -> f64) -> Vec<(f64, f64)> {
    points.iter().map(|p| (p.loft, value(p))).collect()
}

/// Extrapolation can run past zero; treat that as no model.
fn positive(v: f64) -> Option<f64> {
    (v.is_finite() && v > 0.0).then_some(v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Anchor, Category};

    fn bag() -> AnchorSet {
        AnchorSet::new(vec![
            Anchor::new("Driver", 110.0, 280.0),
            Anchor::new("3W", 104.0, 245.0),
            Anchor::new("Hybrid", 98.0, 215.0).with_category(Category::Hybrid),
            Anchor::new("3i", 96.0, 200.0),
            Anchor::new("9i", 75.0, 135.0),
            Anchor::new("PW (46°)", 90.0, 110.0),
            Anchor::new("SW (56°)", 80.0, 85.0),
        ])
        .unwrap()
    }

    fn speed(label: &str, anchors: &AnchorSet) -> f64 {
        estimate_baseline(label, anchors).unwrap().club_speed_mph
    }

    #[test]
    fn exact_anchor_is_returned_unchanged() {
        let anchors = bag();
        let b = estimate_baseline("3W", &anchors).unwrap();
        assert_eq!(b, Baseline { club_speed_mph: 104.0, carry_yd: 245.0 });
        let r = resolve_baseline(&Club::parse("Driver"), &anchors).unwrap();
        assert_eq!(r.resolution, Resolution::ExactAnchor);
    }

    #[test]
    fn family_speed_rules() {
        let anchors = bag();
        assert!((speed("5H", &anchors) - 95.0).abs() < 1e-12);
        assert!((speed("2H", &anchors) - 99.5).abs() < 1e-12);
        assert!((speed("4U", &anchors) - (97.0 - 2.4)).abs() < 1e-12);
        assert!((speed("Mini Driver", &anchors) - 107.0).abs() < 1e-12);
        assert!((speed("5W", &anchors) - 100.0).abs() < 1e-12);
        assert!((speed("6i", &anchors) - 85.5).abs() < 1e-12);
    }

    #[test]
    fn derived_carry_comes_from_power_law() {
        let anchors = bag();
        let law = carry_model(&anchors).unwrap();
        let b = estimate_baseline("5W", &anchors).unwrap();
        assert!((b.carry_yd - law.eval(100.0)).abs() < 1e-9);
        // Faster clubs carry further under the fitted model.
        assert!(estimate_baseline("5H", &anchors).unwrap().carry_yd < b.carry_yd);
    }

    #[test]
    fn missing_required_anchor_is_no_model() {
        let anchors = AnchorSet::new(vec![Anchor::new("Driver", 110.0, 280.0), Anchor::new("7i", 82.0, 155.0)])
            .unwrap();
        assert!(estimate_baseline("3H", &anchors).is_none());
        assert!(estimate_baseline("2U", &anchors).is_none());
        assert!(estimate_baseline("Mini Driver", &anchors).is_none());
        assert!(estimate_baseline("5W", &anchors).is_none());
        assert!(estimate_baseline("GW (50°)", &anchors).is_none());
    }

    #[test]
    fn driver_putter_and_unknown_without_anchor() {
        let anchors = AnchorSet::new(vec![Anchor::new("7i", 82.0, 155.0), Anchor::new("9i", 75.0, 135.0)]).unwrap();
        assert!(estimate_baseline("Driver", &anchors).is_none());
        assert!(estimate_baseline("Putter", &anchors).is_none());
        assert!(estimate_baseline("Banana", &anchors).is_none());
        assert!(estimate_baseline("Wedge", &anchors).is_none());
    }

    #[test]
    fn single_iron_anchor_gives_flat_speed() {
        let anchors = AnchorSet::new(vec![Anchor::new("Driver", 110.0, 280.0), Anchor::new("7i", 82.0, 155.0)])
            .unwrap();
        assert_eq!(speed("4i", &anchors), 82.0);
        assert_eq!(speed("9i", &anchors), 82.0);
    }

    #[test]
    fn wedge_interpolation_and_extrapolation() {
        let anchors = bag();
        let mid = resolve_baseline(&Club::parse("GW (50°)"), &anchors).unwrap();
        assert!((mid.baseline.club_speed_mph - 86.0).abs() < 1e-9);
        assert!((mid.baseline.carry_yd - 100.0).abs() < 1e-9);
        assert_eq!(mid.resolution, Resolution::WedgeLoft { extrapolated: false });

        let low = resolve_baseline(&Club::parse("Wedge (40°)"), &anchors).unwrap();
        assert!((low.baseline.club_speed_mph - 96.0).abs() < 1e-9);
        assert!((low.baseline.carry_yd - 125.0).abs() < 1e-9);
        assert_eq!(low.resolution, Resolution::WedgeLoft { extrapolated: true });
    }

    #[test]
    fn extrapolating_past_zero_is_no_model() {
        let anchors = AnchorSet::new(vec![
            Anchor::new("PW (46°)", 90.0, 110.0),
            Anchor::new("LW (48°)", 60.0, 60.0),
        ])
        .unwrap();
        // Both lines fall steeply with loft and cross zero well before 60°.
        assert!(estimate_baseline("Wedge (60°)", &anchors).is_none());
    }
}
