//! Configuration for simulation runs.
//!
//! Physical constants live in [`SystemConfig`], which is passed explicitly into every
//! component so several body systems can be simulated side by side. Per-run settings
//! (launch state, step budget, integrator choice) live in [`MissionConfig`].
//!
//! Both derive [`Resource`] so they can be inserted into a Bevy `App`.

use bevy::math::DVec2;
use bevy::prelude::Resource;

use crate::error::{SimError, require_positive};
use crate::types::{BodyId, G, SECONDS_PER_DAY};

/// Earth mass (kg)
pub const EARTH_MASS: f64 = 5.972e24;
/// Earth mean radius (m)
pub const EARTH_RADIUS: f64 = 6.371e6;
/// Moon mass (kg)
pub const MOON_MASS: f64 = 7.348e22;
/// Moon mean radius (m)
pub const MOON_RADIUS: f64 = 1.737e6;
/// Mean Earth-Moon distance (m)
pub const EARTH_MOON_DISTANCE: f64 = 3.844e8;
/// Sidereal month (s)
pub const MOON_PERIOD: f64 = 27.32 * SECONDS_PER_DAY;

/// Immutable descriptor of a massive primary.
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    /// Display name, e.g. "Earth".
    pub name: String,
    /// Mass in kilograms.
    pub mass: f64,
    /// Physical radius in meters. Entering this radius is a collision.
    pub radius: f64,
}

impl Body {
    pub fn new(name: impl Into<String>, mass: f64, radius: f64) -> Self {
        Self {
            name: name.into(),
            mass,
            radius,
        }
    }

    pub fn earth() -> Self {
        Self::new("Earth", EARTH_MASS, EARTH_RADIUS)
    }

    pub fn moon() -> Self {
        Self::new("Moon", MOON_MASS, MOON_RADIUS)
    }
}

/// Whether the primaries circle the barycenter or stay frozen at their t = 0 positions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OrbitMode {
    #[default]
    Moving,
    Stationary,
}

/// Physical description of the two-primary system.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct SystemConfig {
    /// Gravitational constant (m³·kg⁻¹·s⁻²).
    pub g: f64,
    /// The large primary (e.g. Earth).
    pub primary: Body,
    /// The smaller target primary (e.g. Moon).
    pub secondary: Body,
    /// Fixed distance between the primaries' centers (m).
    pub separation: f64,
    /// Period of the primaries' mutual circular orbit (s).
    pub orbital_period: f64,
    /// Moving or stationary primaries.
    pub mode: OrbitMode,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self::earth_moon()
    }
}

impl SystemConfig {
    /// The Earth-Moon system with moving primaries.
    pub fn earth_moon() -> Self {
        Self {
            g: G,
            primary: Body::earth(),
            secondary: Body::moon(),
            separation: EARTH_MOON_DISTANCE,
            orbital_period: MOON_PERIOD,
            mode: OrbitMode::Moving,
        }
    }

    /// Same system with the given orbit mode.
    pub fn with_mode(mut self, mode: OrbitMode) -> Self {
        self.mode = mode;
        self
    }

    /// Look up a primary's descriptor.
    pub fn body(&self, id: BodyId) -> &Body {
        match id {
            BodyId::Primary => &self.primary,
            BodyId::Secondary => &self.secondary,
        }
    }

    /// Check every physical constant before a run starts.
    pub fn validate(&self) -> Result<(), SimError> {
        require_positive("g", self.g)?;
        require_positive("primary.mass", self.primary.mass)?;
        require_positive("primary.radius", self.primary.radius)?;
        require_positive("secondary.mass", self.secondary.mass)?;
        require_positive("secondary.radius", self.secondary.radius)?;
        require_positive("separation", self.separation)?;
        require_positive("orbital_period", self.orbital_period)?;
        Ok(())
    }
}

/// How long a run lasts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StepBudget {
    /// Total simulated seconds; a final partial step ends the run exactly on it.
    Duration(f64),
    /// Exact number of steps.
    Steps(usize),
}

/// Tolerances for the adaptive Runge-Kutta 4(5) solver.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AdaptiveConfig {
    /// Relative error tolerance. Default: 1e-8.
    pub rtol: f64,
    /// Absolute error tolerance. Default: 1e-8.
    pub atol: f64,
    /// Output samples handed to the solver per call. Default: 64.
    pub segment_len: usize,
}

impl Default for AdaptiveConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl AdaptiveConfig {
    pub const DEFAULT: Self = Self {
        rtol: 1e-8,
        atol: 1e-8,
        segment_len: 64,
    };

    pub fn validate(&self) -> Result<(), SimError> {
        require_positive("adaptive.rtol", self.rtol)?;
        require_positive("adaptive.atol", self.atol)?;
        if self.segment_len == 0 {
            return Err(SimError::invalid(
                "adaptive.segment_len",
                0.0,
                "must hold at least one sample",
            ));
        }
        Ok(())
    }
}

/// Which integration strategy advances the probe.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum IntegratorKind {
    /// Fixed-step second-order Taylor expansion.
    Taylor,
    /// Adaptive embedded RK45 sampled on the output grid.
    Adaptive(AdaptiveConfig),
}

impl Default for IntegratorKind {
    fn default() -> Self {
        Self::Adaptive(AdaptiveConfig::default())
    }
}

impl IntegratorKind {
    pub fn name(&self) -> &'static str {
        match self {
            IntegratorKind::Taylor => "taylor",
            IntegratorKind::Adaptive(_) => "rk45",
        }
    }
}

/// Everything needed to launch one run, apart from the body system.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct MissionConfig {
    /// Launch position (m from barycenter).
    pub position: DVec2,
    /// Launch velocity (m/s).
    pub velocity: DVec2,
    /// Run length.
    pub budget: StepBudget,
    /// Fixed step size for Taylor; output spacing for the adaptive solver (s).
    pub step_size: f64,
    pub integrator: IntegratorKind,
}

impl Default for MissionConfig {
    /// Direct transfer burn from a 400 km parking altitude below Earth, over 5 days.
    fn default() -> Self {
        Self {
            position: DVec2::new(0.0, -(EARTH_RADIUS + 400e3)),
            velocity: DVec2::new(9.8e3, 0.0),
            budget: StepBudget::Duration(5.0 * SECONDS_PER_DAY),
            step_size: 100.0,
            integrator: IntegratorKind::default(),
        }
    }
}

impl MissionConfig {
    pub fn validate(&self) -> Result<(), SimError> {
        require_positive("step_size", self.step_size)?;
        match self.budget {
            StepBudget::Duration(total) => require_positive("total_duration", total)?,
            StepBudget::Steps(0) => {
                return Err(SimError::invalid("steps", 0.0, "must take at least one step"));
            }
            StepBudget::Steps(_) => {}
        }
        if !self.position.is_finite() {
            return Err(SimError::invalid(
                "initial_position",
                self.position.length(),
                "must be finite",
            ));
        }
        if !self.velocity.is_finite() {
            return Err(SimError::invalid(
                "initial_velocity",
                self.velocity.length(),
                "must be finite",
            ));
        }
        if let IntegratorKind::Adaptive(adaptive) = &self.integrator {
            adaptive.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_earth_moon_defaults_are_valid() {
        assert!(SystemConfig::default().validate().is_ok());
        assert!(MissionConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_body_values() {
        let mut config = SystemConfig::earth_moon();
        config.secondary.radius = 0.0;
        assert!(matches!(
            config.validate(),
            Err(SimError::InvalidConfiguration {
                parameter: "secondary.radius",
                ..
            })
        ));

        let mut config = SystemConfig::earth_moon();
        config.primary.mass = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_mission_values() {
        let mission = MissionConfig {
            step_size: 0.0,
            ..Default::default()
        };
        assert!(mission.validate().is_err());

        let mission = MissionConfig {
            budget: StepBudget::Duration(0.0),
            ..Default::default()
        };
        assert!(mission.validate().is_err());

        let mission = MissionConfig {
            budget: StepBudget::Steps(0),
            ..Default::default()
        };
        assert!(mission.validate().is_err());

        let mission = MissionConfig {
            integrator: IntegratorKind::Adaptive(AdaptiveConfig {
                segment_len: 0,
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(mission.validate().is_err());
    }

    #[test]
    fn test_body_lookup() {
        let config = SystemConfig::earth_moon();
        assert_eq!(config.body(BodyId::Primary).name, "Earth");
        assert_eq!(config.body(BodyId::Secondary).name, "Moon");
    }
}
