//! Test utilities for trajectory simulation tests.
//!
//! Provides fixtures for test orbits and system configurations, and assertions
//! for verifying physical invariants like energy and angular momentum conservation.

use bevy::math::DVec2;

use crate::config::{EARTH_MASS, EARTH_RADIUS};
use crate::types::G;

/// Gravitational parameter of a lone Earth at the origin (m³/s²).
pub const GM_EARTH: f64 = G * EARTH_MASS;

/// Fixtures for creating test states and systems.
pub mod fixtures {
    use super::*;
    use crate::config::{Body, OrbitMode, SystemConfig};
    use crate::types::ProbeState;

    /// Circular orbit 400 km above a lone Earth at the origin.
    ///
    /// Returns the start state (on +x, moving +y) and the orbital period.
    pub fn low_earth_circular_orbit() -> (ProbeState, f64) {
        circular_orbit(EARTH_RADIUS + 400.0e3)
    }

    /// Circular orbit of radius `r` about a lone Earth at the origin.
    pub fn circular_orbit(r: f64) -> (ProbeState, f64) {
        // v = sqrt(GM/r), T = 2π sqrt(r³/GM)
        let v = (GM_EARTH / r).sqrt();
        let period = std::f64::consts::TAU * (r.powi(3) / GM_EARTH).sqrt();
        (ProbeState::new(DVec2::new(r, 0.0), DVec2::new(0.0, v)), period)
    }

    /// Acceleration from a lone Earth at the origin.
    pub fn earth_only_acc(pos: DVec2, _t: f64) -> DVec2 {
        -GM_EARTH * pos / pos.length().powi(3)
    }

    /// Stationary Earth-Moon system whose gravity is negligible.
    ///
    /// Geometry and radii match the real system, but both masses are 1 kg, so a
    /// probe flies in a straight line for all practical purposes.
    pub fn weightless_earth_moon() -> SystemConfig {
        let mut system = SystemConfig::earth_moon().with_mode(OrbitMode::Stationary);
        system.primary = Body::new("Earth", 1.0, EARTH_RADIUS);
        system.secondary = Body::new("Moon", 1.0, system.secondary.radius);
        system
    }
}

/// Assertions for verifying physical invariants.
pub mod assertions {
    use super::*;

    /// Specific orbital energy about a lone Earth at the origin.
    ///
    /// E = v²/2 - GM/r
    pub fn earth_orbital_energy(pos: DVec2, vel: DVec2) -> f64 {
        0.5 * vel.length_squared() - GM_EARTH / pos.length()
    }

    /// Specific angular momentum (2D scalar), L = r × v.
    pub fn angular_momentum(pos: DVec2, vel: DVec2) -> f64 {
        pos.perp_dot(vel)
    }

    /// Assert that energy is conserved within tolerance.
    ///
    /// # Panics
    /// Panics if relative energy drift exceeds tolerance.
    pub fn assert_energy_conserved(initial_energy: f64, final_energy: f64, tolerance: f64) {
        let drift = relative_drift(initial_energy, final_energy);
        assert!(
            drift <= tolerance,
            "Energy not conserved: initial={initial_energy:.6e}, final={final_energy:.6e}, drift={drift:.6e}, tolerance={tolerance:.6e}"
        );
    }

    /// Assert that angular momentum is conserved within tolerance.
    ///
    /// # Panics
    /// Panics if relative angular momentum drift exceeds tolerance.
    pub fn assert_angular_momentum_conserved(initial_l: f64, final_l: f64, tolerance: f64) {
        let drift = relative_drift(initial_l, final_l);
        assert!(
            drift <= tolerance,
            "Angular momentum not conserved: initial={initial_l:.6e}, final={final_l:.6e}, drift={drift:.6e}, tolerance={tolerance:.6e}"
        );
    }

    fn relative_drift(initial: f64, last: f64) -> f64 {
        if initial.abs() > 1e-10 {
            ((last - initial) / initial).abs()
        } else {
            (last - initial).abs()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_circular_orbit_has_correct_velocity() {
        let (state, _) = fixtures::low_earth_circular_orbit();
        let expected_v = (GM_EARTH / (EARTH_RADIUS + 400.0e3)).sqrt();
        assert_relative_eq!(state.vel.length(), expected_v, epsilon = 1e-9);
    }

    #[test]
    fn test_low_earth_orbit_period() {
        // About 92.5 minutes at 400 km.
        let (_, period) = fixtures::low_earth_circular_orbit();
        assert!((5500.0..5600.0).contains(&period), "period = {period}");
    }

    #[test]
    fn test_circular_orbit_is_bound() {
        let (state, _) = fixtures::low_earth_circular_orbit();
        assert!(assertions::earth_orbital_energy(state.pos, state.vel) < 0.0);
    }

    #[test]
    fn test_acceleration_points_inward() {
        let (state, _) = fixtures::low_earth_circular_orbit();
        let acc = fixtures::earth_only_acc(state.pos, 0.0);
        assert!(acc.x < 0.0);
        // Centripetal: |a| = v²/r
        assert_relative_eq!(
            acc.length(),
            state.vel.length_squared() / state.pos.length(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_angular_momentum_perpendicular() {
        let (state, _) = fixtures::low_earth_circular_orbit();
        let l = assertions::angular_momentum(state.pos, state.vel);
        assert_relative_eq!(l, state.pos.length() * state.vel.length(), max_relative = 1e-12);
    }

    #[test]
    fn test_weightless_system_validates() {
        assert!(fixtures::weightless_earth_moon().validate().is_ok());
    }
}
