//! Core physics types and constants for the restricted three-body simulation.

use std::fmt;

use bevy::math::DVec2;

/// Physical constants (SI units)

/// Gravitational constant (m³·kg⁻¹·s⁻²)
pub const G: f64 = 6.67430e-11;

/// Seconds per day
pub const SECONDS_PER_DAY: f64 = 86400.0;

/// Kilometers to meters
pub const KM_TO_METERS: f64 = 1000.0;

/// Meters to kilometers
pub const METERS_TO_KM: f64 = 1.0 / KM_TO_METERS;

/// Identifies one of the two massive primaries.
///
/// `Primary` is the large body (e.g. Earth), `Secondary` the smaller target body
/// (e.g. Moon) whose closest approach is tracked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BodyId {
    Primary,
    Secondary,
}

impl BodyId {
    /// Both primaries, in collision-check priority order.
    pub const ALL: [BodyId; 2] = [BodyId::Primary, BodyId::Secondary];
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BodyId::Primary => write!(f, "primary"),
            BodyId::Secondary => write!(f, "secondary"),
        }
    }
}

/// Kinematic state of the massless probe.
/// Uses f64 (DVec2) for accuracy over Earth-Moon distances.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ProbeState {
    /// Position in meters from the barycenter
    pub pos: DVec2,
    /// Velocity in meters per second
    pub vel: DVec2,
}

impl ProbeState {
    /// Create a new probe state
    pub fn new(pos: DVec2, vel: DVec2) -> Self {
        Self { pos, vel }
    }

    /// Position in km
    pub fn pos_km(&self) -> DVec2 {
        self.pos * METERS_TO_KM
    }

    /// Velocity in km/s
    pub fn vel_km_per_s(&self) -> DVec2 {
        self.vel * METERS_TO_KM
    }

    /// True when every component is finite.
    pub fn is_finite(&self) -> bool {
        self.pos.is_finite() && self.vel.is_finite()
    }

    /// Pack into the flat `[x, y, vx, vy]` layout used by ODE solvers.
    pub fn to_array(&self) -> [f64; 4] {
        [self.pos.x, self.pos.y, self.vel.x, self.vel.y]
    }

    /// Unpack from a flat `[x, y, vx, vy]` slice.
    ///
    /// Returns `None` if the slice has fewer than four elements.
    pub fn from_slice(y: &[f64]) -> Option<Self> {
        match y {
            [x, y, vx, vy, ..] => Some(Self {
                pos: DVec2::new(*x, *y),
                vel: DVec2::new(*vx, *vy),
            }),
            _ => None,
        }
    }
}

/// Convert polar `(r, theta)` to a Cartesian vector.
///
/// Handy for launch velocities given as speed and heading.
pub fn polar_to_cartesian(r: f64, theta: f64) -> DVec2 {
    DVec2::new(r * theta.cos(), r * theta.sin())
}
