//! Common test utilities for integration tests.

#![allow(dead_code)]

use bevy::math::DVec2;
use translunar::config::{Body, EARTH_MASS, EARTH_RADIUS, OrbitMode, SystemConfig};
use translunar::ephemeris::Ephemeris;
use translunar::types::G;

/// Gravitational parameter of Earth.
pub const GM_EARTH: f64 = G * EARTH_MASS;

/// Earth-Moon system whose Moon weighs 1 kg.
///
/// With stationary primaries Earth sits at the barycenter to within 1e-16 m, so
/// this reduces the model to a single fixed primary at the origin.
pub fn lone_earth() -> SystemConfig {
    let mut system = SystemConfig::earth_moon().with_mode(OrbitMode::Stationary);
    system.secondary = Body::new("Moon", 1.0, system.secondary.radius);
    system
}

/// Stationary Earth-Moon geometry with 1 kg bodies: probes fly straight lines.
pub fn weightless_earth_moon() -> SystemConfig {
    let mut system = SystemConfig::earth_moon().with_mode(OrbitMode::Stationary);
    system.primary = Body::new("Earth", 1.0, EARTH_RADIUS);
    system.secondary = Body::new("Moon", 1.0, system.secondary.radius);
    system
}

/// Circular orbit of radius `r` about the origin: (position, velocity, period).
pub fn circular_orbit(r: f64) -> (DVec2, DVec2, f64) {
    let v = (GM_EARTH / r).sqrt();
    let period = std::f64::consts::TAU * (r.powi(3) / GM_EARTH).sqrt();
    (DVec2::new(r, 0.0), DVec2::new(0.0, v), period)
}

/// Position of the Moon in `system` at time zero.
pub fn moon_at_start(system: &SystemConfig) -> DVec2 {
    Ephemeris::new(system)
        .expect("test system should be valid")
        .secondary_position(0.0)
}
