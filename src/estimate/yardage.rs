//! Today's carry and total for a club.
//!
//! Absence is carried by `Option`: a club without a baseline has neither a
//! carry nor a total.

use crate::domain::{Baseline, CardConfig, Category, Club};
use crate::estimate::baseline::resolve_baseline;
use crate::models::{responsiveness_exponent, rollout_for_category, rollout_for_club, scaled_carry};

/// Speed-scaled yardage for one club.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Yardage {
    /// Responsiveness exponent `g`.
    pub responsiveness: f64,
    pub rollout_yd: f64,
    /// Includes the manual offset.
    pub carry_yd: f64,
    pub total_yd: f64,
}

/// Estimate today's yardage for `label` at driver speed `chs_today`.
pub fn estimate_yardage(label: &str, config: &CardConfig, chs_today: f64, manual_offset: f64) -> Option<Yardage> {
    let club = Club::parse(label);
    let resolved = resolve_baseline(&club, &config.anchors)?;
    Some(yardage_from_baseline(&club, resolved.baseline, config, chs_today, manual_offset))
}

/// Scale an already-resolved baseline to today and add rollout.
pub fn yardage_from_baseline(
    club: &Club,
    baseline: Baseline,
    config: &CardConfig,
    chs_today: f64,
    manual_offset: f64,
) -> Yardage {
    let g = responsiveness_exponent(baseline.club_speed_mph, config.driver_chs_mph, config.shape_p);
    let carry_yd = scaled_carry(baseline.carry_yd, chs_today, config.driver_chs_mph, g) + manual_offset;
    let rollout_yd = match club.category() {
        Category::Unknown => rollout_for_category(effective_category(club, config), &config.rollout),
        _ => rollout_for_club(club, &config.rollout),
    };

    Yardage {
        responsiveness: g,
        rollout_yd,
        carry_yd,
        total_yd: carry_yd + rollout_yd,
    }
}

/// The label's category, or the anchor's configured category when the label
/// itself does not classify (e.g. an anchor simply named `Hybrid`).
pub fn effective_category(club: &Club, config: &CardConfig) -> Category {
    match club.category() {
        Category::Unknown => config
            .anchors
            .get(&club.label)
            .map(|a| a.category)
            .unwrap_or(Category::Unknown),
        category => category,
    }
}
