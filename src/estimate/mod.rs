//! The estimation core.
//!
//! - `baseline`: a club's speed and carry at the reference effort level,
//!   derived from the anchors
//! - `yardage`: that baseline scaled to today's driver speed, plus rollout

pub mod baseline;
pub mod yardage;

pub use baseline::*;
pub use yardage::*;
