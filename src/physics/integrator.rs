//! Numerical integrators for the probe trajectory.
//!
//! Two interchangeable strategies implement [`Integrator`]:
//! - [`TaylorStepper`]: fixed-step second-order Taylor expansion (this module)
//! - [`AdaptiveRk45`](super::AdaptiveRk45): embedded RK4(5) with error control
//!
//! Both are driven the same way: given an acceleration function and a grid of
//! output times, they return the probe state at every grid time after the first.
//! An integrator that cannot finish the grid still returns the states it reached.

use bevy::math::DVec2;

use crate::error::SimError;
use crate::types::ProbeState;

/// Running totals kept by an integrator across calls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IntegratorStats {
    /// Output samples produced.
    pub samples: u64,
    /// Acceleration evaluations.
    pub evaluations: u64,
    /// Internal steps accepted (equals `samples` for fixed-step methods).
    pub accepted_steps: u64,
    /// Internal steps rejected by error control.
    pub rejected_steps: u64,
}

/// States produced by one integrator call.
///
/// `states` holds every sample completed before the integrator stopped, in grid
/// order. When it stopped early, `failure` says why and `states` is the valid prefix.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Propagation {
    pub states: Vec<ProbeState>,
    pub failure: Option<SimError>,
}

impl Propagation {
    pub fn complete(states: Vec<ProbeState>) -> Self {
        Self {
            states,
            failure: None,
        }
    }

    pub fn truncated(states: Vec<ProbeState>, failure: SimError) -> Self {
        Self {
            states,
            failure: Some(failure),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.failure.is_none()
    }

    /// All states, or the failure if the integrator stopped early.
    pub fn into_result(self) -> Result<Vec<ProbeState>, SimError> {
        match self.failure {
            Some(err) => Err(err),
            None => Ok(self.states),
        }
    }
}

/// A strategy that advances the probe across a grid of output times.
pub trait Integrator {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Advance `start` (valid at `times[0]`) through every later time in `times`.
    ///
    /// The acceleration function takes (position, absolute time) and returns
    /// acceleration. Produces one state per entry of `times[1..]`, or a shorter
    /// prefix plus the failure that stopped it.
    fn advance<F>(&mut self, acceleration: F, start: ProbeState, times: &[f64]) -> Propagation
    where
        F: Fn(DVec2, f64) -> DVec2;

    /// Like [`advance`](Self::advance), discarding the prefix on failure.
    fn propagate<F>(
        &mut self,
        acceleration: F,
        start: ProbeState,
        times: &[f64],
    ) -> Result<Vec<ProbeState>, SimError>
    where
        F: Fn(DVec2, f64) -> DVec2,
    {
        self.advance(acceleration, start, times).into_result()
    }

    /// Totals accumulated over every call so far.
    fn stats(&self) -> IntegratorStats;
}

/// State derivative `(velocity, acceleration)` shared by both integrators.
#[inline]
pub fn derivative<F>(time: f64, state: &ProbeState, acceleration: &F) -> (DVec2, DVec2)
where
    F: Fn(DVec2, f64) -> DVec2,
{
    (state.vel, acceleration(state.pos, time))
}

/// One Taylor-expansion step with a pre-computed acceleration.
///
/// `x' = x + v·dt + a·dt²/2`, `v' = v + a·dt`. Local truncation error is O(dt³).
#[inline]
pub fn taylor_step(state: ProbeState, acc: DVec2, dt: f64) -> ProbeState {
    ProbeState {
        pos: state.pos + state.vel * dt + acc * (0.5 * dt * dt),
        vel: state.vel + acc * dt,
    }
}

/// Fixed-step second-order Taylor integrator.
///
/// Acceleration is evaluated once per step, at the pre-step position and time.
/// Each pair of consecutive grid times is one step, so the grid spacing is the step size.
#[derive(Clone, Debug, Default)]
pub struct TaylorStepper {
    stats: IntegratorStats,
}

impl TaylorStepper {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Integrator for TaylorStepper {
    fn name(&self) -> &'static str {
        "taylor"
    }

    fn advance<F>(&mut self, acceleration: F, start: ProbeState, times: &[f64]) -> Propagation
    where
        F: Fn(DVec2, f64) -> DVec2,
    {
        let mut out = Vec::with_capacity(times.len().saturating_sub(1));
        let mut state = start;

        for window in times.windows(2) {
            let (t0, t1) = (window[0], window[1]);

            let (_, acc) = derivative(t0, &state, &acceleration);
            self.stats.evaluations += 1;
            if !acc.is_finite() {
                return Propagation::truncated(out, SimError::NumericalDivergence { time: t0 });
            }

            state = taylor_step(state, acc, t1 - t0);
            if !state.is_finite() {
                return Propagation::truncated(out, SimError::NumericalDivergence { time: t1 });
            }

            self.stats.samples += 1;
            self.stats.accepted_steps += 1;
            out.push(state);
        }

        Propagation::complete(out)
    }

    fn stats(&self) -> IntegratorStats {
        self.stats
    }
}

// =============================================================================
// Tests
// =============================================================================
