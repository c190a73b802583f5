//! Gravity calculation for the probe.
//!
//! Computes the net Newtonian acceleration from both primaries using the
//! ephemeris as the source of truth for their positions.

use bevy::math::DVec2;

use crate::ephemeris::{Ephemeris, GravitySources};
use crate::error::SimError;

/// Acceleration toward a single point mass, in "r over r-cubed" vector form.
///
/// `r` points from the body to the probe, so `-GM / |r|³ * r` points back at the body.
/// Undefined (non-finite) when the probe sits exactly on `center`.
#[inline]
pub fn point_mass_acceleration(pos: DVec2, center: DVec2, gm: f64) -> DVec2 {
    let r = pos - center;
    let r_squared = r.length_squared();
    -r * (gm / (r_squared * r_squared.sqrt()))
}

/// Compute gravitational acceleration at a given position and time.
///
/// # Arguments
/// * `pos` - Probe position in meters from the barycenter
/// * `time` - Elapsed simulation time in seconds
/// * `ephemeris` - Positions and GM values of the primaries
///
/// # Returns
/// Acceleration vector in m/s². May be non-finite at a body's center;
/// use [`checked_acceleration`] when that must be an error.
#[inline]
pub fn compute_acceleration(pos: DVec2, time: f64, ephemeris: &Ephemeris) -> DVec2 {
    compute_acceleration_from_sources(pos, &ephemeris.gravity_sources(time))
}

/// Compute gravitational acceleration from pre-fetched gravity sources.
#[inline]
pub fn compute_acceleration_from_sources(pos: DVec2, sources: &GravitySources) -> DVec2 {
    sources
        .iter()
        .map(|&(body_pos, gm)| point_mass_acceleration(pos, body_pos, gm))
        .sum()
}

/// Like [`compute_acceleration`], but non-finite results become
/// [`SimError::NumericalDivergence`].
pub fn checked_acceleration(
    pos: DVec2,
    time: f64,
    ephemeris: &Ephemeris,
) -> Result<DVec2, SimError> {
    let acc = compute_acceleration(pos, time, ephemeris);
    if acc.is_finite() {
        Ok(acc)
    } else {
        Err(SimError::NumericalDivergence { time })
    }
}
