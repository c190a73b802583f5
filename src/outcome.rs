//! Terminal classification of a simulation run.
//!
//! Every run that does not fail yields exactly one outcome:
//! - Collision: the probe entered a primary's radius
//! - Completed: the step budget ran out; carries the closest approach to the secondary

use std::fmt;

use bevy::math::DVec2;

use crate::collision::{CollisionEvent, NearestApproach};
use crate::types::{BodyId, METERS_TO_KM, SECONDS_PER_DAY};

/// Outcome of a simulated trajectory.
#[derive(Clone, Debug, PartialEq)]
pub enum TrajectoryOutcome {
    /// Probe hit a primary.
    Collision {
        /// Body that was hit.
        body_hit: BodyId,
        /// Time of the detecting sample (seconds).
        time: f64,
        /// Probe position at the detecting sample (meters). Not part of the trajectory.
        position: DVec2,
        /// Speed relative to the struck body (m/s).
        impact_speed: f64,
    },

    /// Budget exhausted without a collision.
    Completed {
        /// Closest center-to-probe distance to the secondary (meters).
        nearest_distance: f64,
        /// Probe position at the closest approach (meters).
        nearest_point: DVec2,
        /// Time of the closest approach (seconds).
        nearest_time: f64,
        /// Time of the last sample (seconds).
        end_time: f64,
    },
}

impl TrajectoryOutcome {
    pub fn collision(event: &CollisionEvent) -> Self {
        Self::Collision {
            body_hit: event.body_hit,
            time: event.time,
            position: event.impact_position,
            impact_speed: event.impact_velocity.length(),
        }
    }

    pub fn completed(nearest: NearestApproach, end_time: f64) -> Self {
        Self::Completed {
            nearest_distance: nearest.distance,
            nearest_point: nearest.point,
            nearest_time: nearest.time,
            end_time,
        }
    }

    pub fn is_collision(&self) -> bool {
        matches!(self, Self::Collision { .. })
    }

    /// Body that was hit, if the run ended in a collision.
    pub fn body_hit(&self) -> Option<BodyId> {
        match self {
            Self::Collision { body_hit, .. } => Some(*body_hit),
            Self::Completed { .. } => None,
        }
    }

    /// Time at which the run ended (seconds).
    pub fn end_time(&self) -> f64 {
        match self {
            Self::Collision { time, .. } => *time,
            Self::Completed { end_time, .. } => *end_time,
        }
    }

    /// End time in days.
    pub fn time_days(&self) -> f64 {
        self.end_time() / SECONDS_PER_DAY
    }

    /// Closest approach to the secondary in km, for completed runs.
    pub fn nearest_distance_km(&self) -> Option<f64> {
        match self {
            Self::Completed {
                nearest_distance, ..
            } => Some(nearest_distance * METERS_TO_KM),
            Self::Collision { .. } => None,
        }
    }
}

impl fmt::Display for TrajectoryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Collision {
                body_hit,
                time,
                impact_speed,
                ..
            } => write!(
                f,
                "collision with {} at t = {:.0} s ({:.2} days), {:.2} km/s",
                body_hit,
                time,
                time / SECONDS_PER_DAY,
                impact_speed * METERS_TO_KM
            ),
            Self::Completed {
                nearest_distance,
                nearest_time,
                end_time,
                ..
            } => write!(
                f,
                "completed at t = {:.0} s; nearest approach {:.0} km at {:.2} days",
                end_time,
                nearest_distance * METERS_TO_KM,
                nearest_time / SECONDS_PER_DAY
            ),
        }
    }
}
