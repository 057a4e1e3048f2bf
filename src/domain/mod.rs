//! Domain types used throughout the crate.
//!
//! This module defines:
//!
//! - club labels and their classification (`Club`, `ClubFamily`, `Category`)
//! - anchor measurements (`Anchor`, `AnchorSet`)
//! - card configuration and outputs (`CardConfig`, `YardageRow`, `CardFile`)

pub mod anchors;
pub mod catalog;
pub mod club;
pub mod types;

pub use anchors::*;
pub use catalog::*;
pub use club::*;
pub use types::*;
