//! Responsiveness model: how strongly a club's carry follows driver speed.
//!
//! ```text
//! g     = (club_speed0 / driver_speed0)^p
//! carry = carry0 · (chs_today / chs0)^g
//! ```
//!
//! Clubs swung nearly as fast as the driver get `g ≈ 1` (carry scales almost
//! linearly with speed); slow clubs such as wedges get `g < 1`. The shape
//! exponent `p` controls how quickly `g` falls away with club speed.
//!
//! Inputs must be positive; the card loader guarantees that for anchors and
//! configured speeds.

/// Per-club sensitivity exponent `g`.
pub fn responsiveness_exponent(club_speed0: f64, driver_speed0: f64, p: f64) -> f64 {
    debug_assert!(club_speed0 > 0.0 && driver_speed0 > 0.0, "speeds must be positive");
    (club_speed0 / driver_speed0).powf(p)
}

/// Scale a baseline carry from the baseline driver speed to today's.
pub fn scaled_carry(carry0: f64, chs_today: f64, chs0: f64, g: f64) -> f64 {
    debug_assert!(chs_today > 0.0 && chs0 > 0.0, "speeds must be positive");
    carry0 * (chs_today / chs0).powf(g)
}
