//! Debug bundle writer for reviewing how every catalog club is estimated.
//!
//! The bundle is a markdown file listing the anchors, the fitted carry and iron
//! models, and one row per catalog label with the rule used and any heuristic
//! flags worth a human look:
//!
//! - `extrap`: wedge loft outside the anchored range
//! - `g>1`: club baseline speed above the driver baseline
//! - `carry↑`: carry longer than the previous club of the same category

use std::fmt::Write as _;
use std::fs::{create_dir_all, write};
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::info;

use crate::domain::{CardConfig, Category, Club, DEFAULT_WEDGE_LOFTS, Resolution, build_full_catalog};
use crate::error::AppError;
use crate::estimate::{carry_model, effective_category, resolve_baseline, yardage_from_baseline};
use crate::math::fit_line;

/// One catalog row of the bundle.
#[derive(Debug, Clone, PartialEq)]
pub struct DebugRow {
    pub label: String,
    pub category: Category,
    pub resolution: Option<Resolution>,
    pub club_speed0: Option<f64>,
    pub carry0: Option<f64>,
    pub responsiveness: Option<f64>,
    pub carry_today: Option<f64>,
    pub total_today: Option<f64>,
    pub flags: Vec<&'static str>,
}

/// Evaluate every catalog label at `chs_today` and attach heuristic flags.
pub fn debug_rows(config: &CardConfig, chs_today: f64) -> Vec<DebugRow> {
    let mut rows = Vec::new();
    let mut last_carry: Option<(Category, f64)> = None;

    for label in build_full_catalog(DEFAULT_WEDGE_LOFTS) {
        let club = Club::parse(&label);
        let category = effective_category(&club, config);
        let resolved = resolve_baseline(&club, &config.anchors);
        let yardage = resolved.map(|r| yardage_from_baseline(&club, r.baseline, config, chs_today, 0.0));

        let mut flags = Vec::new();
        if let Some(r) = resolved {
            if r.resolution == (Resolution::WedgeLoft { extrapolated: true }) {
                flags.push("extrap");
            }
            if r.baseline.club_speed_mph > config.driver_chs_mph {
                flags.push("g>1");
            }
            match last_carry {
                Some((prev_cat, prev)) if prev_cat == category && r.baseline.carry_yd > prev + 1e-9 => {
                    flags.push("carry↑");
                }
                _ => {}
            }
            last_carry = Some((category, r.baseline.carry_yd));
        }

        rows.push(DebugRow {
            label,
            category,
            resolution: resolved.map(|r| r.resolution),
            club_speed0: resolved.map(|r| r.baseline.club_speed_mph),
            carry0: resolved.map(|r| r.baseline.carry_yd),
            responsiveness: yardage.map(|y| y.responsiveness),
            carry_today: yardage.map(|y| y.carry_yd),
            total_today: yardage.map(|y| y.total_yd),
            flags,
        });
    }

    rows
}

/// Write `yardage_debug_<timestamp>.md` under `dir` and return its path.
pub fn write_debug_bundle(config: &CardConfig, chs_today: f64, dir: &Path) -> Result<PathBuf, AppError> {
    if !(chs_today.is_finite() && chs_today > 0.0) {
        return Err(AppError::input(format!(
            "Driver speed must be > 0 mph (got {chs_today})."
        )));
    }
    create_dir_all(dir).map_err(|e| AppError::internal(format!("Failed to create debug dir: {e}")))?;

    let ts = Local::now().format("%Y%m%d_%H%M%S");
    let path = dir.join(format!("yardage_debug_{ts}.md"));

    let text = render_bundle(config, chs_today)
        .map_err(|e| AppError::internal(format!("Failed to render debug bundle: {e}")))?;
    write(&path, text).map_err(|e| AppError::internal(format!("Failed to write debug file: {e}")))?;

    info!(path = %path.display(), "wrote debug bundle");
    Ok(path)
}

fn render_bundle(config: &CardConfig, chs_today: f64) -> Result<String, std::fmt::Error> {
    let mut out = String::new();

    writeln!(out, "# yardage debug bundle")?;
    writeln!(out, "- generated: {}", Local::now().to_rfc3339())?;
    writeln!(out, "- driver_chs_baseline: {:.1} mph", config.driver_chs_mph)?;
    writeln!(out, "- chs_today: {chs_today:.1} mph")?;
    writeln!(out, "- shape_p: {:.3}", config.shape_p)?;

    writeln!(out, "\n## Anchors")?;
    writeln!(out, "| label | category | loft | speed_mph | carry_yd |")?;
    writeln!(out, "| - | - | - | - | - |")?;
    for a in config.anchors.iter() {
        writeln!(
            out,
            "| {} | {} | {} | {:.1} | {:.1} |",
            a.label,
            a.category,
            a.wedge_loft().map(|l| l.to_string()).unwrap_or_else(|| "-".to_string()),
            a.club_speed_mph,
            a.carry_yd
        )?;
    }

    writeln!(out, "\n## Models")?;
    match carry_model(&config.anchors) {
        Some(law) => writeln!(
            out,
            "- carry ≈ {:.6} · speed^{:.4} (non-putter anchors)",
            law.coefficient, law.exponent
        )?,
        None => writeln!(out, "- carry model: unavailable (fewer than 2 anchors)")?,
    }
    let (numbers, speeds): (Vec<f64>, Vec<f64>) = config.anchors.iron_speeds().into_iter().unzip();
    match fit_line(&numbers, &speeds) {
        Some(line) => writeln!(
            out,
            "- iron speed = {:.4} · n + {:.4} ({} anchors)",
            line.slope,
            line.intercept,
            numbers.len()
        )?,
        None => writeln!(out, "- iron fit: unavailable (no 3i-9i anchors)")?,
    }
    writeln!(out, "- wedge anchors with loft: {}", config.anchors.wedge_points().len())?;

    writeln!(out, "\n## Catalog")?;
    writeln!(out, "| club | category | rule | speed0 | carry0 | g | carry | total | flags |")?;
    writeln!(out, "| - | - | - | - | - | - | - | - | - |")?;
    for row in debug_rows(config, chs_today) {
        writeln!(
            out,
            "| {} | {} | {} | {} | {} | {} | {} | {} | {} |",
            row.label,
            row.category,
            row.resolution.map(|r| r.display_name()).unwrap_or("-"),
            fmt_opt(row.club_speed0, 1),
            fmt_opt(row.carry0, 1),
            fmt_opt(row.responsiveness, 3),
            fmt_opt(row.carry_today, 1),
            fmt_opt(row.total_today, 1),
            row.flags.join(" ")
        )?;
    }

    Ok(out)
}

fn fmt_opt(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{v:.decimals$}"),
        _ => "-".to_string(),
    }
}
