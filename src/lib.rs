//! `yardage-card` library crate.
//!
//! The binary (`yardage`) is a thin wrapper around this library so that:
//!
//! - estimation logic is testable without spawning processes
//! - the card pipeline can be reused by other front-ends
//! - code stays easy to navigate as the model grows

pub mod app;
pub mod cli;
pub mod debug;
pub mod domain;
pub mod error;
pub mod estimate;
pub mod io;
pub mod math;
pub mod models;
pub mod report;
