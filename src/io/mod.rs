//! Input/output helpers.
//!
//! - card file (YAML) loading + validation (`config`)
//! - table export to CSV (`export`)
//! - card JSON read/write (`card`)

pub mod card;
pub mod config;
pub mod export;

pub use card::*;
pub use config::*;
pub use export::*;
