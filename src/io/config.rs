//! Card file loading and validation.
//!
//! The card file is YAML so golfers can edit it by hand. This module turns it
//! into a validated [`CardConfig`]:
//!
//! - **Strict numbers**: speeds, `p`, rollout and partial values must be finite
//!   and in range (clear errors, exit code 2)
//! - **Placeholder rows**: baseline rows with no speed or carry yet are skipped
//!   with a warning, not treated as errors
//! - **No estimation here**: this module only reads and checks inputs

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

use crate::domain::{Anchor, AnchorSet, CardConfig, Category, ChokeDown, RolloutTable, WedgePartials, parse_loft};
use crate::error::AppError;

/// Environment variable naming the card file (also read from `.env`).
pub const CONFIG_ENV: &str = "YARDAGE_CONFIG";
/// Card file used when neither `--config` nor the environment names one.
pub const DEFAULT_CONFIG_PATH: &str = "data/config.yaml";

#[derive(Debug, Deserialize)]
struct RawCard {
    baseline: RawBaseline,
    model: RawModel,
    #[serde(default)]
    rollout_defaults_yd: RolloutTable,
    #[serde(default)]
    wedges: RawWedges,
    #[serde(default)]
    ui: RawUi,
}

#[derive(Debug, Deserialize)]
struct RawBaseline {
    driver_chs_mph: f64,
    #[serde(default)]
    clubs: Vec<RawAnchor>,
}

#[derive(Debug, Deserialize)]
struct RawAnchor {
    label: String,
    #[serde(default)]
    club_speed_mph: Option<f64>,
    #[serde(default)]
    carry_yd: Option<f64>,
    #[serde(default)]
    category: Option<Category>,
    #[serde(default)]
    loft_deg: Option<u8>,
}

#[derive(Debug, Deserialize)]
struct RawModel {
    exponent_shape_p: f64,
}

#[derive(Debug, Default, Deserialize)]
struct RawWedges {
    #[serde(default)]
    choke_down: RawChokeDown,
    #[serde(default)]
    partials: RawPartials,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct RawChokeDown {
    subtract_yd_default: f64,
    allowed_range_yd: [f64; 2],
}

impl Default for RawChokeDown {
    fn default() -> Self {
        let cd = ChokeDown::default();
        Self {
            subtract_yd_default: cd.subtract_yd_default,
            allowed_range_yd: [cd.min_yd, cd.max_yd],
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawPartials {
    scheme: Vec<String>,
    carry_yd: BTreeMap<String, BTreeMap<String, Option<f64>>>,
    percent_of_full: BTreeMap<String, f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawUi {
    default_bag: Vec<String>,
    baseline_aliases: BTreeMap<String, String>,
}

/// Pick the card file: explicit path, then `$YARDAGE_CONFIG` (or `.env`), then the default.
pub fn resolve_config_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    dotenvy::dotenv().ok();
    std::env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

/// Read and validate a card file.
pub fn load_card_config(path: &Path) -> Result<CardConfig, AppError> {
    let yaml = fs::read_to_string(path)
        .map_err(|e| AppError::input(format!("Failed to read card file '{}': {e}", path.display())))?;
    let config = parse_card_config(&yaml)
        .map_err(|e| AppError::input(format!("{}: {}", path.display(), e.message())))?;
    info!(
        path = %path.display(),
        anchors = config.anchors.len(),
        driver_chs = config.driver_chs_mph,
        p = config.shape_p,
        "loaded card"
    );
    Ok(config)
}

/// Parse and validate card YAML.
pub fn parse_card_config(yaml: &str) -> Result<CardConfig, AppError> {
    let raw: RawCard = serde_yaml::from_str(yaml).map_err(|e| AppError::input(format!("Invalid card YAML: {e}")))?;

    let driver_chs_mph = raw.baseline.driver_chs_mph;
    if !(driver_chs_mph.is_finite() && driver_chs_mph > 0.0) {
        return Err(AppError::input(format!(
            "baseline.driver_chs_mph must be > 0 (got {driver_chs_mph})."
        )));
    }
    let shape_p = raw.model.exponent_shape_p;
    if !(shape_p.is_finite() && shape_p > 0.0) {
        return Err(AppError::input(format!("model.exponent_shape_p must be > 0 (got {shape_p}).")));
    }

    let anchors = AnchorSet::new(anchors_from_rows(raw.baseline.clubs))?;
    let rollout = validate_rollout(raw.rollout_defaults_yd)?;
    let choke_down = validate_choke_down(&raw.wedges.choke_down)?;
    let partials = validate_partials(raw.wedges.partials)?;

    Ok(CardConfig {
        driver_chs_mph,
        shape_p,
        anchors,
        rollout,
        choke_down,
        partials,
        default_bag: raw.ui.default_bag,
        aliases: raw.ui.baseline_aliases,
    })
}

fn anchors_from_rows(rows: Vec<RawAnchor>) -> Vec<Anchor> {
    let mut anchors = Vec::with_capacity(rows.len());
    for row in rows {
        let (Some(speed), Some(carry)) = (row.club_speed_mph, row.carry_yd) else {
            warn!(label = %row.label, "baseline row incomplete (needs club_speed_mph and carry_yd); skipped");
            continue;
        };
        let category = row.category.unwrap_or_else(|| Category::of(&row.label));
        anchors.push(Anchor {
            loft_deg: row.loft_deg.or_else(|| parse_loft(&row.label)),
            label: row.label,
            club_speed_mph: speed,
            carry_yd: carry,
            category,
        });
    }
    anchors
}

fn validate_rollout(table: RolloutTable) -> Result<RolloutTable, AppError> {
    let entries = [
        ("Driver", table.driver),
        ("Woods", table.woods),
        ("Hybrid", table.hybrid),
        ("Utility", table.utility),
        ("LongIrons", table.long_irons),
        ("MidIrons", table.mid_irons),
        ("ShortIrons", table.short_irons),
        ("Wedges", table.wedges),
    ];
    for (key, yd) in entries {
        if !(yd.is_finite() && yd >= 0.0) {
            return Err(AppError::input(format!("rollout_defaults_yd.{key} must be >= 0 (got {yd}).")));
        }
    }
    Ok(table)
}

fn validate_choke_down(raw: &RawChokeDown) -> Result<ChokeDown, AppError> {
    let [min_yd, max_yd] = raw.allowed_range_yd;
    let ok = [min_yd, max_yd, raw.subtract_yd_default]
        .iter()
        .all(|v| v.is_finite() && *v >= 0.0);
    if !ok || min_yd > max_yd {
        return Err(AppError::input(format!(
            "wedges.choke_down.allowed_range_yd is invalid: [{min_yd}, {max_yd}]."
        )));
    }
    if raw.subtract_yd_default < min_yd || raw.subtract_yd_default > max_yd {
        return Err(AppError::input(format!(
            "wedges.choke_down.subtract_yd_default ({}) is outside [{min_yd}, {max_yd}].",
            raw.subtract_yd_default
        )));
    }
    Ok(ChokeDown {
        subtract_yd_default: raw.subtract_yd_default,
        min_yd,
        max_yd,
    })
}

fn validate_partials(raw: RawPartials) -> Result<WedgePartials, AppError> {
    for (key, pct) in &raw.percent_of_full {
        if !(pct.is_finite() && *pct > 0.0 && *pct <= 1.0) {
            return Err(AppError::input(format!(
                "wedges.partials.percent_of_full.{key} must be in (0, 1] (got {pct})."
            )));
        }
    }

    let mut carry_yd = BTreeMap::new();
    for (wedge, splits) in raw.carry_yd {
        let mut known = BTreeMap::new();
        for (key, value) in splits {
            let Some(yd) = value else { continue };
            if !(yd.is_finite() && yd > 0.0) {
                return Err(AppError::input(format!(
                    "wedges.partials.carry_yd['{wedge}']['{key}'] must be > 0 (got {yd})."
                )));
            }
            known.insert(key, yd);
        }
        carry_yd.insert(wedge, known);
    }

    Ok(WedgePartials {
        scheme: raw.scheme,
        carry_yd,
        percent_of_full: raw.percent_of_full,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD: &str = r#"
baseline:
  driver_chs_mph: 110
  clubs:
    - { label: Driver, club_speed_mph: 110, carry_yd: 280, category: wood }
    - { label: Hybrid, club_speed_mph: 98, carry_yd: 215, category: hybrid }
    - { label: "PW (46°)", club_speed_mph: 90, carry_yd: 110 }
    - { label: 4i }
model:
  exponent_shape_p: 0.6
rollout_defaults_yd:
  Driver: 18
wedges:
  choke_down: { subtract_yd_default: 4, allowed_range_yd: [3, 5] }
  partials:
    scheme: ["50%", "75%"]
    carry_yd:
      "PW (46°)": { "50%": 55, "75%": ~ }
ui:
  default_bag: [Driver, Hybrid, "PW (46°)"]
  baseline_aliases: { Rescue: Hybrid }
"#;

    #[test]
    fn parses_full_card() {
        let cfg = parse_card_config(CARD).unwrap();
        assert_eq!(cfg.driver_chs_mph, 110.0);
        assert_eq!(cfg.shape_p, 0.6);
        assert_eq!(cfg.anchors.len(), 3);
        assert_eq!(cfg.anchors.get("Hybrid").unwrap().category, Category::Hybrid);
        assert_eq!(cfg.anchors.get("PW (46°)").unwrap().category, Category::Wedge);
        assert_eq!(cfg.anchors.get("PW (46°)").unwrap().loft_deg, Some(46));
        assert_eq!(cfg.rollout.driver, 18.0);
        assert_eq!(cfg.rollout.woods, 10.0);
        assert_eq!(cfg.default_bag.len(), 3);
        assert_eq!(cfg.baseline_label("Rescue"), "Hybrid");

        let pw = &cfg.partials.carry_yd["PW (46°)"];
        assert_eq!(pw.get("50%"), Some(&55.0));
        assert_eq!(pw.get("75%"), None);
    }

    #[test]
    fn incomplete_rows_are_skipped() {
        let cfg = parse_card_config(CARD).unwrap();
        assert!(cfg.anchors.get("4i").is_none());
    }

    #[test]
    fn minimal_card_uses_defaults() {
        let cfg = parse_card_config("baseline: { driver_chs_mph: 100 }\nmodel: { exponent_shape_p: 1.0 }\n").unwrap();
        assert!(cfg.anchors.is_empty());
        assert_eq!(cfg.rollout, RolloutTable::default());
        assert_eq!(cfg.choke_down, ChokeDown::default());
        assert!(cfg.partials.is_empty());
    }

    #[test]
    fn rejects_bad_numbers() {
        let bad_p = "baseline: { driver_chs_mph: 100 }\nmodel: { exponent_shape_p: 0 }\n";
        assert_eq!(parse_card_config(bad_p).unwrap_err().exit_code(), 2);

        let bad_chs = "baseline: { driver_chs_mph: -5 }\nmodel: { exponent_shape_p: 0.6 }\n";
        assert!(parse_card_config(bad_chs).is_err());

        let bad_anchor = "baseline:\n  driver_chs_mph: 100\n  clubs: [{ label: 7i, club_speed_mph: 80, carry_yd: 0 }]\nmodel: { exponent_shape_p: 0.6 }\n";
        assert!(parse_card_config(bad_anchor).is_err());

        let bad_choke = "baseline: { driver_chs_mph: 100 }\nmodel: { exponent_shape_p: 0.6 }\nwedges:\n  choke_down: { subtract_yd_default: 8, allowed_range_yd: [3, 5] }\n";
        assert!(parse_card_config(bad_choke).is_err());

        let bad_pct = "baseline: { driver_chs_mph: 100 }\nmodel: { exponent_shape_p: 0.6 }\nwedges:\n  partials: { scheme: [half], percent_of_full: { half: 1.5 } }\n";
        assert!(parse_card_config(bad_pct).is_err());
    }

    #[test]
    fn rejects_missing_sections() {
        let err = parse_card_config("baseline: { driver_chs_mph: 100 }\n").unwrap_err();
        assert!(err.message().contains("Invalid card YAML"));
    }

    #[test]
    fn explicit_path_wins() {
        let p = resolve_config_path(Some(Path::new("my/card.yaml")));
        assert_eq!(p, PathBuf::from("my/card.yaml"));
    }
}
