//! Preset scenario definitions.
//!
//! Four launches toward the Moon, all starting near Earth.

use bevy::math::DVec2;

use crate::config::{
    AdaptiveConfig, EARTH_MASS, EARTH_MOON_DISTANCE, EARTH_RADIUS, IntegratorKind, MOON_MASS,
    OrbitMode, StepBudget,
};
use crate::types::SECONDS_PER_DAY;

use super::{LaunchVelocity, Scenario};

/// 400 km parking altitude, measured from Earth's center.
const PARKING_RADIUS: f64 = EARTH_RADIUS + 400.0e3;

/// Earth's distance from the barycenter; with the Moon at phase zero Earth sits on -x.
const EARTH_OFFSET: f64 = EARTH_MOON_DISTANCE * MOON_MASS / (EARTH_MASS + MOON_MASS);

/// All available preset scenarios.
pub static SCENARIOS: &[Scenario] = &[
    DIRECT_TRANSFER,
    LEO_INJECTION,
    MOVING_POLAR_LAUNCH,
    STATIONARY_SURFACE_LAUNCH,
];

/// Scenario 1: Direct Transfer (default)
///
/// Burn of 9.8 km/s tangential to a 400 km parking altitude, on the far side of
/// Earth from the Moon. Close to escape speed, so the probe climbs toward the
/// Moon's orbit over about three days.
pub static DIRECT_TRANSFER: Scenario = Scenario {
    id: "direct_transfer",
    name: "Direct Transfer",
    description: "9.8 km/s burn from 400 km altitude, 5 days, adaptive RK45.",
    position: DVec2::new(0.0, -PARKING_RADIUS),
    velocity: LaunchVelocity::Cartesian(DVec2::new(9.8e3, 0.0)),
    mode: OrbitMode::Moving,
    budget: StepBudget::Duration(5.0 * SECONDS_PER_DAY),
    step_size: 100.0,
    integrator: IntegratorKind::Adaptive(AdaptiveConfig::DEFAULT),
};

/// Scenario 2: Translunar Injection from LEO
///
/// Starts on the Earth-Moon line at parking altitude with a mostly radial
/// 7.9 km/s plus 2.5 km/s tangential kick.
pub static LEO_INJECTION: Scenario = Scenario {
    id: "leo_injection",
    name: "LEO Translunar Injection",
    description: "Injection from low Earth orbit toward the Moon, 5 days, adaptive RK45.",
    position: DVec2::new(PARKING_RADIUS, 0.0),
    velocity: LaunchVelocity::Cartesian(DVec2::new(7.9e3, 2.5e3)),
    mode: OrbitMode::Moving,
    budget: StepBudget::Duration(5.0 * SECONDS_PER_DAY),
    step_size: 100.0,
    integrator: IntegratorKind::Adaptive(AdaptiveConfig::DEFAULT),
};

/// Scenario 3: Polar Launch, Moving Primaries
///
/// 8.3 km/s at a heading of 3π/16, integrated with the fixed-step method for
/// 5000 steps of 100 s while the Moon moves along its orbit.
pub static MOVING_POLAR_LAUNCH: Scenario = Scenario {
    id: "moving_polar_launch",
    name: "Polar Launch (moving primaries)",
    description: "8.3 km/s at 3π/16 rad, 5000 × 100 s Taylor steps.",
    position: DVec2::new(PARKING_RADIUS, 0.0),
    velocity: LaunchVelocity::Polar {
        speed: 8.3e3,
        heading: 3.0 * std::f64::consts::PI / 16.0,
    },
    mode: OrbitMode::Moving,
    budget: StepBudget::Steps(5000),
    step_size: 100.0,
    integrator: IntegratorKind::Taylor,
};

/// Scenario 4: Surface Launch, Stationary Primaries
///
/// Launch from 1 m above Earth's surface with roughly 11.3 km/s at 45°, the
/// primaries frozen in place. Coasts out to the Moon and strikes it after about
/// three and a quarter days.
pub static STATIONARY_SURFACE_LAUNCH: Scenario = Scenario {
    id: "stationary_surface_launch",
    name: "Surface Launch (stationary primaries)",
    description: "Near-escape launch with frozen Earth and Moon, 3000 × 100 s Taylor steps.",
    position: DVec2::new(-EARTH_OFFSET, EARTH_RADIUS + 1.0),
    velocity: LaunchVelocity::Cartesian(DVec2::new(7.998e3, 7.997e3)),
    mode: OrbitMode::Stationary,
    budget: StepBudget::Steps(3000),
    step_size: 100.0,
    integrator: IntegratorKind::Taylor,
};
