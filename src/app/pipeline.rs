//! Shared "card pipeline" logic used by every front-end command.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! labels -> alias resolution -> baseline -> today's scaling -> rollout -> rows
//!
//! The commands can then focus on presentation (tables, exports, bundles).

use rayon::prelude::*;
use tracing::warn;

use crate::domain::{CardConfig, CardRequest, Category, Club, PartialRow, Resolution, YardageRow};
use crate::error::AppError;
use crate::estimate::{effective_category, estimate_yardage, resolve_baseline, yardage_from_baseline};

/// All computed outputs of a single card run.
#[derive(Debug, Clone)]
pub struct CardOutput {
    pub request: CardRequest,
    pub rows: Vec<YardageRow>,
    pub partials: Vec<PartialRow>,
}

/// Compute the yardage table and wedge partials for a request.
pub fn run_card(config: &CardConfig, request: &CardRequest) -> Result<CardOutput, AppError> {
    if request.clubs.is_empty() {
        return Err(AppError::new(
            3,
            "No clubs to show. Add ui.default_bag to the card file or pass --clubs.",
        ));
    }
    if !(request.chs_today.is_finite() && request.chs_today > 0.0) {
        return Err(AppError::input(format!(
            "Today's driver speed must be > 0 mph (got {}).",
            request.chs_today
        )));
    }
    if !request.manual_offset.is_finite() {
        return Err(AppError::input("Manual offset must be a finite number of yards."));
    }

    // Rows are independent; order follows the request.
    let rows: Vec<YardageRow> = request
        .clubs
        .par_iter()
        .map(|label| yardage_row(config, request, label))
        .collect();

    let partials = partial_rows(config, request, &rows);

    Ok(CardOutput {
        request: request.clone(),
        rows,
        partials,
    })
}

/// Compute one table row. Never fails: clubs without a model get empty values.
pub fn yardage_row(config: &CardConfig, request: &CardRequest, label: &str) -> YardageRow {
    let baseline_label = config.baseline_label(label);
    let club = Club::parse(baseline_label);
    let category = effective_category(&club, config);
    let resolved = resolve_baseline(&club, &config.anchors);

    let mut notes = Vec::new();
    if baseline_label != label {
        notes.push(format!("Uses baseline: {baseline_label}"));
    }

    let Some(resolved) = resolved else {
        if baseline_label != label {
            warn!(label, target = baseline_label, "alias target has no baseline");
        }
        notes.push(no_model_reason(&club, category).to_string());
        return YardageRow {
            label: label.to_string(),
            baseline_label: baseline_label.to_string(),
            category,
            baseline: None,
            resolution: None,
            responsiveness: None,
            rollout_yd: None,
            carry_yd: None,
            total_yd: None,
            note: notes.join("; "),
        };
    };

    if let Resolution::WedgeLoft { extrapolated: true } = resolved.resolution {
        warn!(label, "wedge loft is outside the anchored range; extrapolating");
        notes.push("Extrapolated beyond wedge anchors".to_string());
    }

    let mut yardage = yardage_from_baseline(
        &club,
        resolved.baseline,
        config,
        request.chs_today,
        request.manual_offset,
    );
    if let (Some(choke), Category::Wedge) = (request.choke_down_yd, category) {
        yardage.carry_yd -= choke;
        yardage.total_yd -= choke;
        notes.push(format!("Choke-down -{choke:.0}"));
    }

    YardageRow {
        label: label.to_string(),
        baseline_label: baseline_label.to_string(),
        category,
        baseline: Some(resolved.baseline),
        resolution: Some(resolved.resolution),
        responsiveness: Some(yardage.responsiveness),
        rollout_yd: Some(yardage.rollout_yd),
        carry_yd: Some(yardage.carry_yd),
        total_yd: Some(yardage.total_yd),
        note: notes.join("; "),
    }
}

/// Wedge partial-swing carries, one row per wedge.
///
/// Wedges with explicit partials come first (card-file order), then any
/// bag wedges that only have percent-of-full settings. Explicit partials do
/// not scale with speed; percent partials scale with today's full carry.
pub fn partial_rows(config: &CardConfig, request: &CardRequest, rows: &[YardageRow]) -> Vec<PartialRow> {
    let partials = &config.partials;
    if partials.is_empty() {
        return Vec::new();
    }

    let mut wedges: Vec<&str> = partials.carry_yd.keys().map(String::as_str).collect();
    if !partials.percent_of_full.is_empty() {
        for row in rows {
            let modelled = row.carry_yd.is_some();
            if row.category == Category::Wedge && modelled && !wedges.contains(&row.label.as_str()) {
                wedges.push(&row.label);
            }
        }
    }

    wedges
        .into_iter()
        .map(|wedge| {
            let explicit = partials.carry_yd.get(wedge);
            // Full carry without offset or choke-down; those are applied once below.
            let full = estimate_yardage(config.baseline_label(wedge), config, request.chs_today, 0.0)
                .map(|y| y.carry_yd);

            let carries = partials
                .scheme
                .iter()
                .map(|key| {
                    let base = explicit
                        .and_then(|splits| splits.get(key).copied())
                        .or_else(|| Some(partials.percent_of_full.get(key)? * full?))?;
                    Some(base + request.manual_offset - request.choke_down_yd.unwrap_or(0.0))
                })
                .collect();

            PartialRow {
                wedge: wedge.to_string(),
                carries,
            }
        })
        .collect()
}

fn no_model_reason(club: &Club, category: Category) -> &'static str {
    match category {
        Category::Putter => "No model for putter",
        Category::Unknown => "Unrecognized club label",
        Category::Wedge if club.loft().is_none() => "Wedge label needs a loft, e.g. 'GW (50°)'",
        _ => "No baseline set",
    }
}
