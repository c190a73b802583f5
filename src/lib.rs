//! Translunar - Restricted Three-Body Trajectory Simulator
//!
//! A library crate for propagating a massless probe under the gravity of two
//! primaries (Earth and Moon) on circular orbits about their barycenter,
//! detecting impacts and reporting the closest approach to the target body.
//!
//! The single entry point for most callers is [`simulate`]; [`simulation::run`]
//! accepts an arbitrary body system and integrator choice.

pub mod collision;
pub mod config;
pub mod ephemeris;
pub mod error;
pub mod outcome;
pub mod physics;
pub mod scenarios;
pub mod simulation;
pub mod trajectory;
pub mod types;

pub use error::SimError;
pub use outcome::TrajectoryOutcome;
pub use simulation::{SimulationPlugin, SimulationReport, simulate};

#[cfg(test)]
pub mod test_utils;
