//! Adaptive-step integration through the `ivp` solver.
//!
//! The solver picks its own internal steps to satisfy `rtol`/`atol` and reports the
//! state only at the requested output times. Anything that happens between two
//! output samples (such as a fast pass through a body) is invisible to callers.

use bevy::log::debug;
use bevy::math::DVec2;
use ivp::prelude::*;

use super::integrator::{Integrator, IntegratorStats, Propagation, derivative};
use crate::config::AdaptiveConfig;
use crate::error::SimError;
use crate::types::ProbeState;

/// First-order system `[x, y, vx, vy]' = [vx, vy, ax, ay]`.
struct ProbeDynamics<F> {
    acceleration: F,
}

impl<F> ODE for ProbeDynamics<F>
where
    F: Fn(DVec2, f64) -> DVec2,
{
    fn ode(&self, t: f64, y: &[f64], dydt: &mut [f64]) {
        let state = ProbeState::new(DVec2::new(y[0], y[1]), DVec2::new(y[2], y[3]));
        let (vel, acc) = derivative(t, &state, &self.acceleration);
        dydt.copy_from_slice(&[vel.x, vel.y, acc.x, acc.y]);
    }
}

/// Embedded Runge-Kutta 4(5) integrator sampled on an output grid.
#[derive(Clone, Debug, Default)]
pub struct AdaptiveRk45 {
    config: AdaptiveConfig,
    stats: IntegratorStats,
}

impl AdaptiveRk45 {
    pub fn new(config: AdaptiveConfig) -> Self {
        Self {
            config,
            stats: IntegratorStats::default(),
        }
    }

    pub fn config(&self) -> &AdaptiveConfig {
        &self.config
    }
}

impl Integrator for AdaptiveRk45 {
    fn name(&self) -> &'static str {
        "rk45"
    }

    fn advance<F>(&mut self, acceleration: F, start: ProbeState, times: &[f64]) -> Propagation
    where
        F: Fn(DVec2, f64) -> DVec2,
    {
        let (t0, t_end) = match times {
            [first, .., last] => (*first, *last),
            _ => return Propagation::default(),
        };

        let dynamics = ProbeDynamics { acceleration };
        let options = Options::builder()
            .method(Method::DOPRI5)
            .rtol(self.config.rtol)
            .atol(self.config.atol)
            .t_eval(times.to_vec())
            .build();

        let sol = match solve_ivp(&dynamics, t0, t_end, &start.to_array(), options) {
            Ok(sol) => sol,
            Err(err) => {
                return Propagation::truncated(
                    Vec::new(),
                    SimError::SolverFailure(format!("{err:?}")),
                );
            }
        };

        debug!(
            "rk45 segment [{:.0}, {:.0}] s: nfev={} accepted={} rejected={} status={:?}",
            t0, t_end, sol.nfev, sol.naccpt, sol.nrejct, sol.status
        );
        self.stats.evaluations += sol.nfev as u64;
        self.stats.accepted_steps += sol.naccpt as u64;
        self.stats.rejected_steps += sol.nrejct as u64;

        let expected = times.len() - 1;
        let mut out = Vec::with_capacity(expected);
        let mut failure = None;
        for (t, y) in sol.iter() {
            // The start state is already known to the caller.
            if t <= t0 {
                continue;
            }
            match ProbeState::from_slice(y) {
                Some(state) if state.is_finite() => out.push(state),
                Some(_) => {
                    failure = Some(SimError::NumericalDivergence { time: t });
                    break;
                }
                None => {
                    failure = Some(SimError::SolverFailure(format!(
                        "solution at t = {t} has {} components",
                        y.len()
                    )));
                    break;
                }
            }
        }

        // The solver can stop short of `t_end` (step size underflow near a body).
        if failure.is_none() && out.len() != expected {
            failure = Some(SimError::SolverFailure(format!(
                "expected {expected} samples on [{t0}, {t_end}], got {} ({:?})",
                out.len(),
                sol.status
            )));
        }

        self.stats.samples += out.len() as u64;
        match failure {
            Some(err) => Propagation::truncated(out, err),
            None => Propagation::complete(out),
        }
    }

    fn stats(&self) -> IntegratorStats {
        self.stats
    }
}
