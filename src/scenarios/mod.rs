//! Named launch scenarios in the Earth-Moon system.
//!
//! Each preset bundles a launch state with the integrator, step budget and orbit
//! mode it was designed for:
//! - Direct transfer from a 400 km parking altitude (adaptive)
//! - Translunar injection from low Earth orbit (adaptive)
//! - Polar launch with moving primaries (fixed-step)
//! - Surface launch with stationary primaries (fixed-step)

pub mod presets;

use bevy::log::info;
use bevy::math::DVec2;
use bevy::prelude::*;

use crate::config::{IntegratorKind, MissionConfig, OrbitMode, StepBudget, SystemConfig};
use crate::error::SimError;
use crate::simulation::{SimulationReport, run};
use crate::types::polar_to_cartesian;

pub use presets::SCENARIOS;

/// Scenario loaded when none is chosen.
pub const DEFAULT_SCENARIO: &str = "direct_transfer";

/// Launch velocity, either as components or as speed plus heading.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LaunchVelocity {
    /// Velocity components (m/s).
    Cartesian(DVec2),
    /// Speed (m/s) and heading (radians from +x, counter-clockwise).
    Polar { speed: f64, heading: f64 },
}

impl LaunchVelocity {
    pub fn to_cartesian(self) -> DVec2 {
        match self {
            Self::Cartesian(v) => v,
            Self::Polar { speed, heading } => polar_to_cartesian(speed, heading),
        }
    }
}

/// A predefined launch configuration.
#[derive(Clone, Copy, Debug)]
pub struct Scenario {
    /// Unique identifier for the scenario.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Brief description of the scenario.
    pub description: &'static str,
    /// Launch position (m from barycenter).
    pub position: DVec2,
    pub velocity: LaunchVelocity,
    /// Whether the primaries orbit during the run.
    pub mode: OrbitMode,
    pub budget: StepBudget,
    /// Step size or output spacing (s).
    pub step_size: f64,
    pub integrator: IntegratorKind,
}

impl Scenario {
    /// The Earth-Moon system in this scenario's orbit mode.
    pub fn system(&self) -> SystemConfig {
        SystemConfig::earth_moon().with_mode(self.mode)
    }

    pub fn mission(&self) -> MissionConfig {
        MissionConfig {
            position: self.position,
            velocity: self.velocity.to_cartesian(),
            budget: self.budget,
            step_size: self.step_size,
            integrator: self.integrator,
        }
    }

    /// Simulate this scenario once.
    pub fn run(&self) -> Result<SimulationReport, SimError> {
        info!("Running scenario '{}'", self.name);
        run(&self.system(), &self.mission())
    }

    /// Insert this scenario's configs into an app, replacing any present.
    pub fn insert_into(&self, app: &mut App) {
        app.insert_resource(self.system())
            .insert_resource(self.mission());
    }
}

/// Get a scenario by ID.
pub fn get_scenario(id: &str) -> Option<&'static Scenario> {
    SCENARIOS.iter().find(|s| s.id == id)
}
