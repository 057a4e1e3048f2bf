//! Shared domain types.
//!
//! These types are kept plain and serializable so they can be:
//!
//! - used in-memory by the estimation pipeline
//! - exported to JSON/CSV
//! - reloaded later with `yardage show`

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::anchors::AnchorSet;
use crate::domain::club::Category;
use crate::error::AppError;

/// Baseline club speed and carry for one club at the reference effort level.
///
/// Speed and carry are always produced together; a club with no model has no
/// `Baseline` at all.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Baseline {
    pub club_speed_mph: f64,
    pub carry_yd: f64,
}

/// Which estimation rule produced a baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    /// The label is itself an anchor.
    ExactAnchor,
    /// `Hybrid` anchor, stepped by hybrid number.
    HybridOffset,
    /// Midpoint of `Hybrid` and `3i`, stepped by utility number.
    UtilityBlend,
    /// Least-squares line through the `3i`..`9i` anchors.
    IronFit,
    /// Midpoint of `Driver` and `3W`.
    MiniDriverBlend,
    /// `3W` anchor, stepped by wood number.
    WoodOffset,
    /// Loft interpolation over the wedge anchors.
    WedgeLoft { extrapolated: bool },
}

impl Resolution {
    pub fn display_name(self) -> &'static str {
        match self {
            Resolution::ExactAnchor => "anchor",
            Resolution::HybridOffset => "hybrid offset",
            Resolution::UtilityBlend => "utility blend",
            Resolution::IronFit => "iron fit",
            Resolution::MiniDriverBlend => "mini driver blend",
            Resolution::WoodOffset => "wood offset",
            Resolution::WedgeLoft { extrapolated: false } => "wedge loft interp",
            Resolution::WedgeLoft { extrapolated: true } => "wedge loft extrap",
        }
    }
}

/// Roll-after-landing yards by category (irons split by number).
///
/// Keys match the card file (`Driver`, `Woods`, `LongIrons`, ...). Missing keys
/// keep their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RolloutTable {
    #[serde(rename = "Driver")]
    pub driver: f64,
    #[serde(rename = "Woods")]
    pub woods: f64,
    #[serde(rename = "Hybrid")]
    pub hybrid: f64,
    #[serde(rename = "Utility")]
    pub utility: f64,
    /// Irons 1-4.
    #[serde(rename = "LongIrons")]
    pub long_irons: f64,
    /// Irons 5-7.
    #[serde(rename = "MidIrons")]
    pub mid_irons: f64,
    /// Irons 8-9.
    #[serde(rename = "ShortIrons")]
    pub short_irons: f64,
    #[serde(rename = "Wedges")]
    pub wedges: f64,
}

impl Default for RolloutTable {
    fn default() -> Self {
        Self {
            driver: 15.0,
            woods: 10.0,
            hybrid: 6.0,
            utility: 5.0,
            long_irons: 5.0,
            mid_irons: 4.0,
            short_irons: 3.0,
            wedges: 1.0,
        }
    }
}

/// Choke-down settings for wedges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChokeDown {
    pub subtract_yd_default: f64,
    pub min_yd: f64,
    pub max_yd: f64,
}

impl Default for ChokeDown {
    fn default() -> Self {
        Self {
            subtract_yd_default: 4.0,
            min_yd: 3.0,
            max_yd: 5.0,
        }
    }
}

impl ChokeDown {
    /// Resolve a requested subtraction (or the default) against the allowed range.
    pub fn resolve(&self, requested: Option<f64>) -> Result<f64, AppError> {
        let yd = requested.unwrap_or(self.subtract_yd_default);
        if !yd.is_finite() || yd < self.min_yd || yd > self.max_yd {
            return Err(AppError::input(format!(
                "Choke-down must be within {:.0}..={:.0} yd (got {yd}).",
                self.min_yd, self.max_yd
            )));
        }
        Ok(yd)
    }
}

/// Wedge partial-swing settings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WedgePartials {
    /// Column order, e.g. `["50%", "75%"]`.
    pub scheme: Vec<String>,
    /// Explicit carries: wedge label -> scheme key -> yards.
    pub carry_yd: BTreeMap<String, BTreeMap<String, f64>>,
    /// Fallback fraction of full carry per scheme key.
    pub percent_of_full: BTreeMap<String, f64>,
}

impl WedgePartials {
    pub fn is_empty(&self) -> bool {
        self.scheme.is_empty() || (self.carry_yd.is_empty() && self.percent_of_full.is_empty())
    }
}

/// The validated card configuration. Built once, then passed by reference.
#[derive(Debug, Clone)]
pub struct CardConfig {
    /// Reference driver clubhead speed (mph) the anchors were measured at.
    pub driver_chs_mph: f64,
    /// Responsiveness shape exponent `p`.
    pub shape_p: f64,
    pub anchors: AnchorSet,
    pub rollout: RolloutTable,
    pub choke_down: ChokeDown,
    pub partials: WedgePartials,
    pub default_bag: Vec<String>,
    /// Display label -> label whose baseline it borrows.
    pub aliases: BTreeMap<String, String>,
}

impl CardConfig {
    /// Minimal config around an anchor set, with default rollout and no extras.
    pub fn new(driver_chs_mph: f64, shape_p: f64, anchors: AnchorSet) -> Self {
        Self {
            driver_chs_mph,
            shape_p,
            anchors,
            rollout: RolloutTable::default(),
            choke_down: ChokeDown::default(),
            partials: WedgePartials::default(),
            default_bag: Vec::new(),
            aliases: BTreeMap::new(),
        }
    }

    /// Label whose baseline should be used for `label`.
    pub fn baseline_label<'a>(&'a self, label: &'a str) -> &'a str {
        self.aliases.get(label).map(String::as_str).unwrap_or(label)
    }
}

/// Today's inputs for one card computation.
#[derive(Debug, Clone, PartialEq)]
pub struct CardRequest {
    /// Today's driver clubhead speed (mph).
    pub chs_today: f64,
    /// Added to every carry (yards, may be negative).
    pub manual_offset: f64,
    /// Resolved choke-down subtraction, when enabled.
    pub choke_down_yd: Option<f64>,
    pub clubs: Vec<String>,
}

/// One row of the yardage table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YardageRow {
    pub label: String,
    /// Label the baseline was resolved for (differs when aliased).
    pub baseline_label: String,
    pub category: Category,
    pub baseline: Option<Baseline>,
    pub resolution: Option<Resolution>,
    /// Responsiveness exponent `g`.
    pub responsiveness: Option<f64>,
    pub rollout_yd: Option<f64>,
    pub carry_yd: Option<f64>,
    pub total_yd: Option<f64>,
    pub note: String,
}

/// One wedge row of the partials table; `carries` follows the scheme order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartialRow {
    pub wedge: String,
    pub carries: Vec<Option<f64>>,
}

/// A saved yardage card (JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardFile {
    pub tool: String,
    pub generated_at: DateTime<Utc>,
    pub driver_chs_baseline: f64,
    pub chs_today: f64,
    pub shape_p: f64,
    pub manual_offset: f64,
    pub choke_down_yd: Option<f64>,
    pub rows: Vec<YardageRow>,
    pub partial_scheme: Vec<String>,
    pub partials: Vec<PartialRow>,
}
