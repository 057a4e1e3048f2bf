//! Rollout lookup: yards the ball runs after landing.

use crate::domain::{Category, Club, ClubFamily, RolloutTable};

/// Rollout for a label.
pub fn rollout_for(label: &str, table: &RolloutTable) -> f64 {
    rollout_for_club(&Club::parse(label), table)
}

/// Rollout for a parsed club. Irons split at 4 and 7.
pub fn rollout_for_club(club: &Club, table: &RolloutTable) -> f64 {
    match club.family {
        ClubFamily::Driver => table.driver,
        ClubFamily::MiniDriver | ClubFamily::Wood(_) => table.woods,
        ClubFamily::Hybrid(_) => table.hybrid,
        ClubFamily::Utility(_) => table.utility,
        ClubFamily::Iron(n) if n <= 4 => table.long_irons,
        ClubFamily::Iron(n) if n <= 7 => table.mid_irons,
        ClubFamily::Iron(_) => table.short_irons,
        ClubFamily::Wedge { .. } => table.wedges,
        ClubFamily::Putter | ClubFamily::Unknown => 0.0,
    }
}

/// Rollout by category alone, for anchors whose label carries no family
/// (e.g. an anchor named `Hybrid`). Irons without a number count as mid irons.
pub fn rollout_for_category(category: Category, table: &RolloutTable) -> f64 {
    match category {
        Category::Wood => table.woods,
        Category::Hybrid => table.hybrid,
        Category::Utility => table.utility,
        Category::Iron => table.mid_irons,
        Category::Wedge => table.wedges,
        Category::Putter | Category::Unknown => 0.0,
    }
}
