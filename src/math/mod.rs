//! Numeric primitives: least squares, power-law regression, interpolation.
//!
//! Everything here is a pure function of its inputs.

pub mod interp;
pub mod ols;
pub mod power;

pub use interp::*;
pub use ols::*;
pub use power::*;
