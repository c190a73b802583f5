//! Recorded probe path.
//!
//! Positions are stored in barycenter coordinates (meters) alongside their sample
//! times. The store is append-only during a run and read-only afterwards.

use bevy::math::DVec2;

use crate::types::{METERS_TO_KM, SECONDS_PER_DAY};

/// A single sample on the recorded path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrajectoryPoint {
    /// Position in meters from the barycenter.
    pub pos: DVec2,
    /// Simulation time in seconds.
    pub time: f64,
}

impl TrajectoryPoint {
    pub fn pos_km(&self) -> DVec2 {
        self.pos * METERS_TO_KM
    }

    pub fn time_days(&self) -> f64 {
        self.time / SECONDS_PER_DAY
    }
}

/// Ordered sequence of probe positions and sample times.
///
/// Times are non-decreasing. The launch sample comes first; a colliding sample is
/// never recorded.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Trajectory {
    points: Vec<TrajectoryPoint>,
}

impl Trajectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, pos: DVec2, time: f64) {
        debug_assert!(self.points.last().is_none_or(|last| last.time <= time));
        self.points.push(TrajectoryPoint { pos, time });
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[TrajectoryPoint] {
        &self.points
    }

    pub fn first(&self) -> Option<&TrajectoryPoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&TrajectoryPoint> {
        self.points.last()
    }

    /// Positions in recorded order. Restartable: every call yields the full sequence.
    pub fn positions(&self) -> impl Iterator<Item = DVec2> + '_ {
        self.points.iter().map(|p| p.pos)
    }

    /// Sample times in recorded order.
    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.time)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TrajectoryPoint> {
        self.points.iter()
    }

    /// Total path length (m), summed over consecutive samples.
    pub fn path_length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|w| (w[1].pos - w[0].pos).length())
            .sum()
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a TrajectoryPoint;
    type IntoIter = std::slice::Iter<'a, TrajectoryPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
