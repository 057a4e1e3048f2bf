//! The full list of labels the classifier understands, for `yardage catalog`
//! and the debug bundle.

use std::collections::HashSet;
use std::ops::RangeInclusive;

/// Loft range used for the generic `Wedge (NN°)` entries.
pub const DEFAULT_WEDGE_LOFTS: RangeInclusive<u8> = 40..=64;

/// Every club label, grouped by family and in bag order, without duplicates.
pub fn build_full_catalog(wedge_lofts: RangeInclusive<u8>) -> Vec<String> {
    let mut clubs: Vec<String> = vec!["Driver".into(), "Mini Driver".into()];
    clubs.extend([2, 3, 4, 5, 7, 9, 11].iter().map(|n| format!("{n}W")));
    clubs.extend((1..=7).map(|n| format!("{n}H")));
    clubs.extend((1..=5).map(|n| format!("{n}U")));
    clubs.extend((1..=9).map(|n| format!("{n}i")));
    // Named wedges without a loft; the card file supplies lofted labels.
    clubs.extend(["PW", "GW", "SW", "LW"].iter().map(|s| s.to_string()));
    clubs.extend(wedge_lofts.map(|d| format!("Wedge ({d}°)")));
    clubs.push("Putter".into());

    let mut seen = HashSet::new();
    clubs.retain(|c| seen.insert(c.clone()));
    clubs
}
