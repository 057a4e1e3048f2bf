//! Club label classification.
//!
//! Labels are free-form strings typed by the golfer (`"7i"`, `"PW (46°)"`, `"3H"`).
//! Each label is parsed once into a [`Club`]; downstream code matches on
//! [`ClubFamily`] rather than re-inspecting the string.
//!
//! Recognized patterns:
//!
//! | family  | label                                              |
//! |---------|----------------------------------------------------|
//! | wood    | `Driver`, `Mini Driver`, `<1-2 digits>W`           |
//! | hybrid  | `1H`..`7H`                                         |
//! | utility | `1U`..`5U`                                         |
//! | iron    | `1i`..`9i`                                         |
//! | wedge   | `PW|GW|SW|LW|Wedge` + optional space + `(NN°)`, or any `Wedge...` |
//! | putter  | `Putter`                                           |
//!
//! Anything else is [`Category::Unknown`]. Classification never fails.

use serde::{Deserialize, Serialize};

/// Wedge names accepted in front of a `(NN°)` loft suffix.
const WEDGE_NAMES: [&str; 5] = ["PW", "GW", "SW", "LW", "Wedge"];

/// Coarse club category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Wood,
    Hybrid,
    Utility,
    Iron,
    Wedge,
    Putter,
    Unknown,
}

impl Category {
    /// Classify a label.
    pub fn of(label: &str) -> Self {
        ClubFamily::parse(label).category()
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Category::Wood => "wood",
            Category::Hybrid => "hybrid",
            Category::Utility => "utility",
            Category::Iron => "iron",
            Category::Wedge => "wedge",
            Category::Putter => "putter",
            Category::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Classify a label into its [`Category`].
pub fn category_of(label: &str) -> Category {
    Category::of(label)
}

/// Structured form of a club label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClubFamily {
    Driver,
    MiniDriver,
    Wood(u8),
    Hybrid(u8),
    Utility(u8),
    Iron(u8),
    /// `loft` is absent for `Wedge...` labels without a `(NN°)` suffix.
    Wedge { loft: Option<u8> },
    Putter,
    Unknown,
}

impl ClubFamily {
    pub fn parse(label: &str) -> Self {
        match label {
            "Driver" => return ClubFamily::Driver,
            "Mini Driver" => return ClubFamily::MiniDriver,
            _ => {}
        }
        if let Some(n) = numbered(label, 'W', 2) {
            return ClubFamily::Wood(n);
        }
        if let Some(n) = numbered(label, 'H', 1).filter(|n| (1..=7).contains(n)) {
            return ClubFamily::Hybrid(n);
        }
        if let Some(n) = numbered(label, 'U', 1).filter(|n| (1..=5).contains(n)) {
            return ClubFamily::Utility(n);
        }
        if let Some(n) = numbered(label, 'i', 1).filter(|n| (1..=9).contains(n)) {
            return ClubFamily::Iron(n);
        }
        if let Some(loft) = parse_loft(label) {
            return ClubFamily::Wedge { loft: Some(loft) };
        }
        if label.starts_with("Wedge") {
            return ClubFamily::Wedge { loft: None };
        }
        if label == "Putter" {
            return ClubFamily::Putter;
        }
        ClubFamily::Unknown
    }

    pub fn category(self) -> Category {
        match self {
            ClubFamily::Driver | ClubFamily::MiniDriver | ClubFamily::Wood(_) => Category::Wood,
            ClubFamily::Hybrid(_) => Category::Hybrid,
            ClubFamily::Utility(_) => Category::Utility,
            ClubFamily::Iron(_) => Category::Iron,
            ClubFamily::Wedge { .. } => Category::Wedge,
            ClubFamily::Putter => Category::Putter,
            ClubFamily::Unknown => Category::Unknown,
        }
    }
}

/// A parsed club label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Club {
    pub label: String,
    pub family: ClubFamily,
}

impl Club {
    pub fn parse(label: &str) -> Self {
        Self {
            label: label.to_string(),
            family: ClubFamily::parse(label),
        }
    }

    pub fn category(&self) -> Category {
        self.family.category()
    }

    /// Wedge loft in degrees, if the label carries one.
    pub fn loft(&self) -> Option<u8> {
        match self.family {
            ClubFamily::Wedge { loft } => loft,
            _ => None,
        }
    }
}

/// Extract the loft from a wedge label such as `"SW (56°)"` or `"Wedge(50°)"`.
///
/// Returns `None` for anything that is not a named wedge with a two-digit loft.
pub fn parse_loft(label: &str) -> Option<u8> {
    let name = WEDGE_NAMES.iter().find(|name| label.starts_with(**name))?;
    let rest = label[name.len()..].trim_start();
    let digits = rest.strip_prefix('(')?.strip_suffix("°)")?;
    if digits.len() != 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Parse `<digits><suffix>` with 1..=`max_digits` ASCII digits.
fn numbered(label: &str, suffix: char, max_digits: usize) -> Option<u8> {
    let digits = label.strip_suffix(suffix)?;
    if digits.is_empty() || digits.len() > max_digits || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
