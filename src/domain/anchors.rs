//! Anchor measurements and the immutable anchor collection.
//!
//! Anchors are the golfer's launch-monitor numbers (club speed + carry) for a
//! handful of reference clubs. They are validated once, when the collection is
//! built, so the estimators downstream can assume positive, finite values.

use std::collections::HashMap;

use crate::domain::club::{Category, ClubFamily, parse_loft};
use crate::error::AppError;

/// A single reference measurement.
#[derive(Debug, Clone, PartialEq)]
pub struct Anchor {
    pub label: String,
    pub club_speed_mph: f64,
    pub carry_yd: f64,
    pub category: Category,
    /// Only meaningful for wedges.
    pub loft_deg: Option<u8>,
}

impl Anchor {
    /// Build an anchor whose category and loft are derived from the label.
    pub fn new(label: impl Into<String>, club_speed_mph: f64, carry_yd: f64) -> Self {
        let label = label.into();
        let category = Category::of(&label);
        let loft_deg = parse_loft(&label);
        Self {
            label,
            club_speed_mph,
            carry_yd,
            category,
            loft_deg,
        }
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn with_loft(mut self, loft_deg: u8) -> Self {
        self.loft_deg = Some(loft_deg);
        self
    }

    /// Loft used for wedge interpolation: explicit loft first, then the label.
    pub fn wedge_loft(&self) -> Option<u8> {
        if self.category != Category::Wedge {
            return None;
        }
        self.loft_deg.or_else(|| parse_loft(&self.label))
    }

    fn validate(&self) -> Result<(), AppError> {
        if self.label.trim().is_empty() {
            return Err(AppError::input("Anchor label must not be empty."));
        }
        if !(self.club_speed_mph.is_finite() && self.club_speed_mph > 0.0) {
            return Err(AppError::input(format!(
                "Anchor '{}': club_speed_mph must be > 0 (got {}).",
                self.label, self.club_speed_mph
            )));
        }
        if !(self.carry_yd.is_finite() && self.carry_yd > 0.0) {
            return Err(AppError::input(format!(
                "Anchor '{}': carry_yd must be > 0 (got {}).",
                self.label, self.carry_yd
            )));
        }
        Ok(())
    }
}

/// One wedge anchor, as used by loft interpolation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WedgePoint {
    pub loft: f64,
    pub club_speed_mph: f64,
    pub carry_yd: f64,
}

/// Immutable, label-keyed anchor collection.
///
/// Iteration follows the order anchors were supplied in.
#[derive(Debug, Clone, Default)]
pub struct AnchorSet {
    anchors: Vec<Anchor>,
    index: HashMap<String, usize>,
}

impl AnchorSet {
    /// Validate and index anchors. Labels must be unique.
    pub fn new(anchors: Vec<Anchor>) -> Result<Self, AppError> {
        let mut index = HashMap::with_capacity(anchors.len());
        for (i, anchor) in anchors.iter().enumerate() {
            anchor.validate()?;
            if index.insert(anchor.label.clone(), i).is_some() {
                return Err(AppError::input(format!("Duplicate anchor label '{}'.", anchor.label)));
            }
        }
        Ok(Self { anchors, index })
    }

    pub fn get(&self, label: &str) -> Option<&Anchor> {
        self.index.get(label).map(|&i| &self.anchors[i])
    }

    pub fn speed(&self, label: &str) -> Option<f64> {
        self.get(label).map(|a| a.club_speed_mph)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Anchor> {
        self.anchors.iter()
    }

    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    /// Wedge anchors with a known loft, sorted ascending by loft.
    pub fn wedge_points(&self) -> Vec<WedgePoint> {
        let mut points: Vec<WedgePoint> = self
            .anchors
            .iter()
            .filter_map(|a| {
                a.wedge_loft().map(|loft| WedgePoint {
                    loft: f64::from(loft),
                    club_speed_mph: a.club_speed_mph,
                    carry_yd: a.carry_yd,
                })
            })
            .collect();
        points.sort_by(|a, b| a.loft.total_cmp(&b.loft));
        points
    }

    /// `(iron number, speed)` for anchors labelled `3i` through `9i`.
    pub fn iron_speeds(&self) -> Vec<(f64, f64)> {
        self.anchors
            .iter()
            .filter_map(|a| match ClubFamily::parse(&a.label) {
                ClubFamily::Iron(n) if (3..=9).contains(&n) => Some((f64::from(n), a.club_speed_mph)),
                _ => None,
            })
            .collect()
    }

    /// `(speed, carry)` pairs that feed the global carry model.
    pub fn carry_points(&self) -> Vec<(f64, f64)> {
        self.anchors
            .iter()
            .filter(|a| a.category != Category::Putter)
            .map(|a| (a.club_speed_mph, a.carry_yd))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_duplicate_labels() {
        let err = AnchorSet::new(vec![Anchor::new("7i", 80.0, 150.0), Anchor::new("7i", 81.0, 151.0)])
            .unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.message().contains("Duplicate"));
    }

    #[test]
    fn rejects_non_positive_values() {
        assert!(AnchorSet::new(vec![Anchor::new("7i", 0.0, 150.0)]).is_err());
        assert!(AnchorSet::new(vec![Anchor::new("7i", 80.0, -1.0)]).is_err());
        assert!(AnchorSet::new(vec![Anchor::new("7i", f64::NAN, 150.0)]).is_err());
    }

    #[test]
    fn wedge_points_sorted_by_loft() {
        let set = AnchorSet::new(vec![
            Anchor::new("SW (56°)", 80.0, 85.0),
            Anchor::new("PW (46°)", 90.0, 110.0),
            Anchor::new("7i", 85.0, 155.0),
            Anchor::new("Gap", 86.0, 100.0).with_category(Category::Wedge).with_loft(50),
        ])
        .unwrap();

        let lofts: Vec<f64> = set.wedge_points().iter().map(|p| p.loft).collect();
        assert_eq!(lofts, vec![46.0, 50.0, 56.0]);
    }

    #[test]
    fn wedge_without_loft_is_left_out() {
        let set = AnchorSet::new(vec![
            Anchor::new("Wedge", 80.0, 85.0),
            Anchor::new("PW (46°)", 90.0, 110.0),
        ])
        .unwrap();
        assert_eq!(set.wedge_points().len(), 1);
    }

    #[test]
    fn iron_speeds_only_three_through_nine() {
        let set = AnchorSet::new(vec![
            Anchor::new("2i", 99.0, 200.0),
            Anchor::new("3i", 96.0, 195.0),
            Anchor::new("9i", 75.0, 130.0),
        ])
        .unwrap();
        assert_eq!(set.iron_speeds(), vec![(3.0, 96.0), (9.0, 75.0)]);
    }

    #[test]
    fn carry_points_skip_putter() {
        let set = AnchorSet::new(vec![Anchor::new("Putter", 10.0, 5.0), Anchor::new("7i", 80.0, 150.0)]).unwrap();
        assert_eq!(set.carry_points(), vec![(80.0, 150.0)]);
    }
}
