//! Scaling models applied on top of a club's baseline.
//!
//! Both are small pure functions so the pipeline can call them per club in
//! any order.

pub mod responsiveness;
pub mod rollout;

pub use responsiveness::*;
pub use rollout::*;
