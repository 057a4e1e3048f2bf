//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the estimation code stays clean and testable
//! - output changes are localized (the table layout is covered by tests below)

use crate::domain::{CardConfig, CardFile, CardRequest, PartialRow, YardageRow};

/// Placeholder for clubs without an estimate.
pub const MISSING: &str = "—";

/// Whole yards, or the placeholder.
pub fn format_num(v: Option<f64>) -> String {
    match v {
        Some(x) if x.is_finite() => format!("{x:.0}"),
        _ => MISSING.to_string(),
    }
}

/// Header block: today's speed against the baseline plus active adjustments.
pub fn format_summary(config: &CardConfig, request: &CardRequest) -> String {
    let mut out = String::new();

    out.push_str("=== Yardage Card ===\n");
    out.push_str(&format!(
        "Driver CHS: {:.1} mph today | baseline {:.1} mph ({:+.1}%)\n",
        request.chs_today,
        config.driver_chs_mph,
        (request.chs_today / config.driver_chs_mph - 1.0) * 100.0,
    ));
    out.push_str(&format!(
        "Model: p={:.2} | anchors={}\n",
        config.shape_p,
        config.anchors.len()
    ));
    if request.manual_offset != 0.0 {
        out.push_str(&format!("Manual offset: {:+.0} yd\n", request.manual_offset));
    }
    if let Some(choke) = request.choke_down_yd {
        out.push_str(&format!("Choke-down: -{choke:.0} yd (wedges)\n"));
    }
    out.push('\n');

    out
}

/// Header block for a saved card.
pub fn format_card_header(card: &CardFile) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "=== Yardage Card ({}) ===\n",
        card.generated_at.format("%Y-%m-%d %H:%M UTC")
    ));
    out.push_str(&format!(
        "Driver CHS: {:.1} mph | baseline {:.1} mph | p={:.2}\n",
        card.chs_today, card.driver_chs_baseline, card.shape_p
    ));
    if card.manual_offset != 0.0 {
        out.push_str(&format!("Manual offset: {:+.0} yd\n", card.manual_offset));
    }
    if let Some(choke) = card.choke_down_yd {
        out.push_str(&format!("Choke-down: -{choke:.0} yd (wedges)\n"));
    }
    out.push('\n');

    out
}

/// The main yardage table. `show_total` adds the Total column.
pub fn format_table(rows: &[YardageRow], show_total: bool) -> String {
    let mut out = String::new();

    let header = if show_total {
        format!("{:<14} {:>6} {:>6}  {}", "Club", "Carry", "Total", "Notes")
    } else {
        format!("{:<14} {:>6}  {}", "Club", "Carry", "Notes")
    };
    out.push_str(header.trim_end());
    out.push('\n');

    let rule = if show_total {
        format!("{:-<14} {:-<6} {:-<6}  {:-<5}", "", "", "", "")
    } else {
        format!("{:-<14} {:-<6}  {:-<5}", "", "", "")
    };
    out.push_str(&rule);
    out.push('\n');

    for r in rows {
        let line = if show_total {
            format!(
                "{:<14} {:>6} {:>6}  {}",
                truncate(&r.label, 14),
                format_num(r.carry_yd),
                format_num(r.total_yd),
                r.note
            )
        } else {
            format!("{:<14} {:>6}  {}", truncate(&r.label, 14), format_num(r.carry_yd), r.note)
        };
        out.push_str(line.trim_end());
        out.push('\n');
    }

    if rows.iter().any(|r| r.carry_yd.is_none()) {
        out.push_str(&format!(
            "\nSome clubs have no estimate (shown as {MISSING}). Add anchors to the card file.\n"
        ));
    }

    out
}

/// Wedge partials table (carry only).
pub fn format_partials(scheme: &[String], partials: &[PartialRow]) -> String {
    let mut out = String::new();
    if scheme.is_empty() || partials.is_empty() {
        return out;
    }

    out.push_str("Wedge partials (carry):\n");
    let mut header = format!("{:<14}", "Wedge");
    for key in scheme {
        header.push_str(&format!(" {:>6}", truncate(key, 6)));
    }
    out.push_str(&header);
    out.push('\n');

    for row in partials {
        let mut line = format!("{:<14}", truncate(&row.wedge, 14));
        for v in &row.carries {
            line.push_str(&format!(" {:>6}", format_num(*v)));
        }
        out.push_str(&line);
        out.push('\n');
    }

    out
}

/// Detailed breakdown of one club for `yardage club`.
pub fn format_club_detail(row: &YardageRow) -> String {
    let mut out = String::new();

    out.push_str(&format!("Club: {}\n", row.label));
    if row.baseline_label != row.label {
        out.push_str(&format!("Baseline label: {}\n", row.baseline_label));
    }
    out.push_str(&format!("Category: {}\n", row.category));

    match (row.baseline, row.resolution) {
        (Some(b), Some(res)) => {
            out.push_str(&format!("Rule: {}\n", res.display_name()));
            out.push_str(&format!(
                "Baseline: {:.1} mph / {:.1} yd carry\n",
                b.club_speed_mph, b.carry_yd
            ));
            out.push_str(&format!("Responsiveness g: {}\n", fmt_opt(row.responsiveness, 3)));
            out.push_str(&format!(
                "Today: carry {} yd | rollout {} yd | total {} yd\n",
                fmt_opt(row.carry_yd, 1),
                fmt_opt(row.rollout_yd, 1),
                fmt_opt(row.total_yd, 1)
            ));
        }
        _ => out.push_str("Baseline: no model\n"),
    }
    if !row.note.is_empty() {
        out.push_str(&format!("Notes: {}\n", row.note));
    }

    out
}

fn fmt_opt(v: Option<f64>, decimals: usize) -> String {
    match v {
        Some(x) if x.is_finite() => format!("{x:.decimals$}"),
        _ => MISSING.to_string(),
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    for (i, ch) in s.chars().enumerate() {
        if i + 1 >= max {
            break;
        }
        out.push(ch);
    }
    out.push('.');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Baseline, Category, Resolution};

    fn row(label: &str, carry: Option<f64>, total: Option<f64>, note: &str) -> YardageRow {
        YardageRow {
            label: label.to_string(),
            baseline_label: label.to_string(),
            category: Category::of(label),
            baseline: carry.map(|c| Baseline { club_speed_mph: 90.0, carry_yd: c }),
            resolution: carry.map(|_| Resolution::ExactAnchor),
            responsiveness: carry.map(|_| 0.9),
            rollout_yd: total.zip(carry).map(|(t, c)| t - c),
            carry_yd: carry,
            total_yd: total,
            note: note.to_string(),
        }
    }

    #[test]
    fn format_num_rounds_and_placeholders() {
        assert_eq!(format_num(Some(292.727)), "293");
        assert_eq!(format_num(None), MISSING);
        assert_eq!(format_num(Some(f64::NAN)), MISSING);
    }

    #[test]
    fn table_with_totals() {
        let rows = vec![
            row("Driver", Some(292.7), Some(307.7), ""),
            row("3H", None, None, "No baseline set"),
        ];
        let table = format_table(&rows, true);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "Club            Carry  Total  Notes");
        assert_eq!(lines[2], "Driver            293    308");
        assert_eq!(lines[3], "3H                  —      —  No baseline set");
        assert!(table.contains("no estimate"));
    }

    #[test]
    fn table_carry_only_omits_total() {
        let table = format_table(&[row("7i", Some(155.0), Some(159.0), "")], false);
        assert!(!table.contains("Total"));
        assert!(table.lines().nth(2).unwrap().ends_with("155"));
    }

    #[test]
    fn partials_table_layout() {
        let scheme = vec!["50%".to_string(), "75%".to_string()];
        let partials = vec![PartialRow {
            wedge: "PW (46°)".to_string(),
            carries: vec![Some(55.0), None],
        }];
        let out = format_partials(&scheme, &partials);
        assert!(out.starts_with("Wedge partials"));
        assert!(out.contains("PW (46°)"));
        assert!(out.lines().last().unwrap().ends_with("55      —"));
    }

    #[test]
    fn truncate_marks_cut_labels() {
        assert_eq!(truncate("Wedge (58°) custom", 8), "Wedge (.");
        assert_eq!(truncate("7i", 8), "7i");
    }
}
