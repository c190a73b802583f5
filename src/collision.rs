//! Collision detection and nearest-approach tracking.
//!
//! After every accepted step the probe's position is compared against both
//! primaries at the same instant:
//! 1. inside the primary's radius: collision with the primary
//! 2. else inside the secondary's radius: collision with the secondary
//! 3. else the running closest approach to the secondary is updated
//!
//! Only the secondary (the target body) has its closest approach tracked.

use bevy::math::DVec2;

use crate::ephemeris::Ephemeris;
use crate::types::{BodyId, ProbeState, METERS_TO_KM, SECONDS_PER_DAY};

/// A detected impact.
#[derive(Clone, Debug, PartialEq)]
pub struct CollisionEvent {
    /// The primary that was hit.
    pub body_hit: BodyId,
    /// Position of the probe at the detecting sample (m from barycenter).
    pub impact_position: DVec2,
    /// Probe velocity relative to the struck body (m/s).
    pub impact_velocity: DVec2,
    /// Simulation time of the detecting sample (s).
    pub time: f64,
}

impl CollisionEvent {
    /// Get the impact velocity magnitude in km/s.
    pub fn impact_speed_km_s(&self) -> f64 {
        self.impact_velocity.length() * METERS_TO_KM
    }

    /// Get the simulation time of impact in days.
    pub fn time_days(&self) -> f64 {
        self.time / SECONDS_PER_DAY
    }
}

/// Closest observed approach to the secondary.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NearestApproach {
    /// Center-to-probe distance (m).
    pub distance: f64,
    /// Probe position at that sample (m from barycenter).
    pub point: DVec2,
    /// Sample time (s).
    pub time: f64,
}

/// Which primary, if any, contains `pos` at time `t`.
///
/// The primary is checked before the secondary.
pub fn check_collision(pos: DVec2, t: f64, ephemeris: &Ephemeris) -> Option<BodyId> {
    BodyId::ALL
        .into_iter()
        .find(|&id| (pos - ephemeris.position(id, t)).length() < ephemeris.radius(id))
}

/// Per-run event detector.
///
/// Holds the nearest-approach record for one run; build a fresh one per run.
/// The record is seeded from the launch state so it is always defined.
#[derive(Debug)]
pub struct EventDetector<'a> {
    ephemeris: &'a Ephemeris,
    nearest: NearestApproach,
}

impl<'a> EventDetector<'a> {
    pub fn new(ephemeris: &'a Ephemeris, launch: &ProbeState, t0: f64) -> Self {
        Self {
            ephemeris,
            nearest: NearestApproach {
                distance: (launch.pos - ephemeris.secondary_position(t0)).length(),
                point: launch.pos,
                time: t0,
            },
        }
    }

    /// Test one accepted sample. Returns the collision if one occurred.
    pub fn observe(&mut self, state: &ProbeState, time: f64) -> Option<CollisionEvent> {
        if let Some(body_hit) = check_collision(state.pos, time, self.ephemeris) {
            return Some(CollisionEvent {
                body_hit,
                impact_position: state.pos,
                impact_velocity: state.vel - self.ephemeris.velocity(body_hit, time),
                time,
            });
        }

        let distance = (state.pos - self.ephemeris.secondary_position(time)).length();
        if distance < self.nearest.distance {
            self.nearest = NearestApproach {
                distance,
                point: state.pos,
                time,
            };
        }
        None
    }

    /// Closest approach to the secondary seen so far.
    pub fn nearest(&self) -> NearestApproach {
        self.nearest
    }
}
