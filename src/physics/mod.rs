//! Physics for the probe: the force model and the two integration strategies.
//!
//! The force model is a pure function of probe position and time. Integrators only
//! ever see it as an acceleration closure, so they are agnostic to whether the
//! primaries move or stand still.

mod adaptive;
mod gravity;
mod integrator;

#[cfg(test)]
mod proptest_physics;

pub use adaptive::AdaptiveRk45;
pub use gravity::{
    checked_acceleration, compute_acceleration, compute_acceleration_from_sources,
    point_mass_acceleration,
};
pub use integrator::{
    Integrator, IntegratorStats, Propagation, TaylorStepper, derivative, taylor_step,
};
