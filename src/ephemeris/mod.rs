//! Ephemeris for the two primaries.
//!
//! Both primaries move on circular orbits about their common barycenter with a
//! shared angular velocity. The secondary sits at phase `θ(t) = ωt` and the primary
//! at the antiphase `θ(t) + π`, so the two are always diametrically opposite.
//!
//! In [`OrbitMode::Stationary`] the phase is pinned at zero: both bodies stay at their
//! t = 0 positions. Everything downstream uses the same interface either way.
//!
//! Coordinate frame:
//! - 2D, barycenter at origin, secondary on the +x axis at t = 0.

#[cfg(test)]
mod proptest_ephemeris;

use std::f64::consts::TAU;

use bevy::math::DVec2;

use crate::config::{OrbitMode, SystemConfig};
use crate::error::SimError;
use crate::types::BodyId;

/// Number of gravity sources in the model (the two primaries).
pub const GRAVITY_SOURCE_COUNT: usize = 2;

/// A gravity source: position and GM (standard gravitational parameter).
/// GM = G * mass, in m³/s².
pub type GravitySource = (DVec2, f64);

/// Fixed-size array of gravity sources, primary first.
pub type GravitySources = [GravitySource; GRAVITY_SOURCE_COUNT];

/// Barycentric geometry derived once from the two masses and their separation.
///
/// Invariants: `primary_offset * m_primary == secondary_offset * m_secondary` and
/// `primary_offset + secondary_offset == separation`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitalGeometry {
    /// Primary's distance from the barycenter (m).
    pub primary_offset: f64,
    /// Secondary's distance from the barycenter (m).
    pub secondary_offset: f64,
    /// Shared angular velocity `2π / period` (rad/s).
    pub angular_velocity: f64,
}

impl OrbitalGeometry {
    pub fn from_config(config: &SystemConfig) -> Self {
        let total_mass = config.primary.mass + config.secondary.mass;
        let primary_offset = config.separation * config.secondary.mass / total_mass;
        Self {
            primary_offset,
            secondary_offset: config.separation - primary_offset,
            angular_velocity: TAU / config.orbital_period,
        }
    }

    /// Orbital radius of a primary about the barycenter.
    pub fn offset(&self, id: BodyId) -> f64 {
        match id {
            BodyId::Primary => self.primary_offset,
            BodyId::Secondary => self.secondary_offset,
        }
    }
}

/// Time-parameterized positions of both primaries.
///
/// Immutable once built; safe to share across concurrent runs.
#[derive(Clone, Debug, PartialEq)]
pub struct Ephemeris {
    geometry: OrbitalGeometry,
    mode: OrbitMode,
    /// GM per body, primary first.
    gm: [f64; GRAVITY_SOURCE_COUNT],
    /// Physical radius per body, primary first.
    radius: [f64; GRAVITY_SOURCE_COUNT],
}

impl Ephemeris {
    /// Build from a validated system configuration.
    pub fn new(config: &SystemConfig) -> Result<Self, SimError> {
        config.validate()?;
        Ok(Self {
            geometry: OrbitalGeometry::from_config(config),
            mode: config.mode,
            gm: [
                config.g * config.primary.mass,
                config.g * config.secondary.mass,
            ],
            radius: [config.primary.radius, config.secondary.radius],
        })
    }

    pub fn geometry(&self) -> &OrbitalGeometry {
        &self.geometry
    }

    pub fn mode(&self) -> OrbitMode {
        self.mode
    }

    /// Angular velocity actually in effect (zero when stationary).
    pub fn angular_velocity(&self) -> f64 {
        match self.mode {
            OrbitMode::Moving => self.geometry.angular_velocity,
            OrbitMode::Stationary => 0.0,
        }
    }

    /// Secondary's phase angle at time `t` (rad).
    pub fn phase(&self, t: f64) -> f64 {
        self.angular_velocity() * t
    }

    /// Standard gravitational parameter of a primary (m³/s²).
    pub fn gm(&self, id: BodyId) -> f64 {
        self.gm[index(id)]
    }

    /// Physical radius of a primary (m).
    pub fn radius(&self, id: BodyId) -> f64 {
        self.radius[index(id)]
    }

    /// Position of a primary relative to the barycenter at time `t`.
    pub fn position(&self, id: BodyId, t: f64) -> DVec2 {
        let (sin, cos) = self.phase(t).sin_cos();
        let direction = DVec2::new(cos, sin);
        match id {
            BodyId::Secondary => direction * self.geometry.secondary_offset,
            // Antiphase: θ + π flips the unit vector.
            BodyId::Primary => -direction * self.geometry.primary_offset,
        }
    }

    /// Velocity of a primary at time `t` (`ω × r`).
    pub fn velocity(&self, id: BodyId, t: f64) -> DVec2 {
        self.position(id, t).perp() * self.angular_velocity()
    }

    pub fn primary_position(&self, t: f64) -> DVec2 {
        self.position(BodyId::Primary, t)
    }

    pub fn secondary_position(&self, t: f64) -> DVec2 {
        self.position(BodyId::Secondary, t)
    }

    /// Positions and GM values of both primaries at time `t`, primary first.
    pub fn gravity_sources(&self, t: f64) -> GravitySources {
        let (sin, cos) = self.phase(t).sin_cos();
        let direction = DVec2::new(cos, sin);
        [
            (-direction * self.geometry.primary_offset, self.gm[0]),
            (direction * self.geometry.secondary_offset, self.gm[1]),
        ]
    }
}

fn index(id: BodyId) -> usize {
    match id {
        BodyId::Primary => 0,
        BodyId::Secondary => 1,
    }
}
