//! Reporting utilities: formatted terminal output for cards and clubs.

pub mod format;

pub use format::*;
