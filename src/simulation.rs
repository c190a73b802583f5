//! Simulation driver.
//!
//! A run walks the probe across an output grid `t_i = i * dt`, handing the chosen
//! integrator one segment of the grid at a time and running every new sample
//! through the [`EventDetector`]. The run ends at the first collision or when the
//! grid is exhausted. If the integrator stops early, the samples it did produce
//! are still checked before the failure is reported.
//!
//! Each run owns its state, detector and trajectory. Configurations are only read,
//! so independent runs may execute on different threads.

use bevy::log::{info, warn};
use bevy::math::DVec2;
use bevy::prelude::*;

use crate::collision::EventDetector;
use crate::config::{IntegratorKind, MissionConfig, StepBudget, SystemConfig};
use crate::ephemeris::Ephemeris;
use crate::error::{SimError, require_positive};
use crate::outcome::TrajectoryOutcome;
use crate::physics::{
    AdaptiveRk45, Integrator, IntegratorStats, TaylorStepper, checked_acceleration,
    compute_acceleration,
};
use crate::trajectory::Trajectory;
use crate::types::{BodyId, ProbeState, SECONDS_PER_DAY};

/// Grid samples handed to the fixed-step integrator per call.
const TAYLOR_SEGMENT_LEN: usize = 256;

/// Upper bound on trajectory storage reserved up front.
const MAX_PREALLOCATED_SAMPLES: usize = 1 << 20;

/// Output grid of a run.
///
/// Samples sit at multiples of the step size. Under a duration budget the last
/// step is shortened when needed so the grid ends exactly on the duration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepSchedule {
    step_size: f64,
    steps: usize,
    end: f64,
}

impl StepSchedule {
    /// Build the grid for a budget.
    pub fn new(budget: StepBudget, step_size: f64) -> Result<Self, SimError> {
        require_positive("step_size", step_size)?;
        let (steps, end) = match budget {
            StepBudget::Steps(0) => {
                return Err(SimError::invalid("steps", 0.0, "must take at least one step"));
            }
            StepBudget::Steps(n) => (n, n as f64 * step_size),
            StepBudget::Duration(total) => {
                require_positive("total_duration", total)?;
                // Absorb rounding noise like 432000 / 100 = 4320.000000001.
                let exact = total / step_size;
                if exact >= usize::MAX as f64 {
                    return Err(SimError::invalid(
                        "total_duration",
                        total,
                        "needs more steps than can be counted",
                    ));
                }
                (((exact - 1e-9).ceil() as usize).max(1), total)
            }
        };
        Ok(Self {
            step_size,
            steps,
            end,
        })
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    /// Time of grid sample `i`, never past the end of the grid.
    #[inline]
    pub fn time(&self, i: usize) -> f64 {
        (i as f64 * self.step_size).min(self.end)
    }

    pub fn end_time(&self) -> f64 {
        self.end
    }

    /// All grid times, launch included.
    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        (0..=self.steps).map(|i| self.time(i))
    }
}

/// Everything a finished run produced.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationReport {
    pub outcome: TrajectoryOutcome,
    /// Recorded positions, launch first; never includes a colliding sample.
    pub trajectory: Trajectory,
    /// Integrator that produced the run.
    pub integrator: &'static str,
    pub stats: IntegratorStats,
}

impl SimulationReport {
    /// Sample times of the recorded trajectory.
    pub fn time_samples(&self) -> impl Iterator<Item = f64> + '_ {
        self.trajectory.times()
    }
}

/// Run one mission against a body system.
///
/// Fails before stepping on invalid configuration. A numerical failure aborts the
/// run without an outcome, unless a sample produced before it already collided.
pub fn run(system: &SystemConfig, mission: &MissionConfig) -> Result<SimulationReport, SimError> {
    mission.validate()?;
    let ephemeris = Ephemeris::new(system)?;
    let schedule = StepSchedule::new(mission.budget, mission.step_size)?;

    info!(
        "Launching probe: {} steps of {} s ({:.2} days) with {}, {:?} primaries",
        schedule.steps(),
        schedule.step_size(),
        schedule.end_time() / SECONDS_PER_DAY,
        mission.integrator.name(),
        system.mode
    );

    let start = ProbeState::new(mission.position, mission.velocity);
    let result = match mission.integrator {
        IntegratorKind::Taylor => drive(
            &ephemeris,
            start,
            &schedule,
            TaylorStepper::new(),
            TAYLOR_SEGMENT_LEN,
        ),
        IntegratorKind::Adaptive(config) => drive(
            &ephemeris,
            start,
            &schedule,
            AdaptiveRk45::new(config),
            config.segment_len,
        ),
    };

    match &result {
        Ok(report) => match &report.outcome {
            TrajectoryOutcome::Collision { body_hit, .. } => info!(
                "Probe hit {}: {}",
                system.body(*body_hit).name,
                report.outcome
            ),
            TrajectoryOutcome::Completed { .. } => info!(
                "Probe {} from {}",
                report.outcome,
                system.body(BodyId::Secondary).name
            ),
        },
        Err(err) => warn!("Simulation aborted: {}", err),
    }

    result
}

fn drive<I: Integrator>(
    ephemeris: &Ephemeris,
    start: ProbeState,
    schedule: &StepSchedule,
    mut integrator: I,
    segment_len: usize,
) -> Result<SimulationReport, SimError> {
    let t0 = schedule.time(0);
    checked_acceleration(start.pos, t0, ephemeris)?;

    let mut trajectory =
        Trajectory::with_capacity(schedule.steps().min(MAX_PREALLOCATED_SAMPLES) + 1);
    let mut detector = EventDetector::new(ephemeris, &start, t0);

    let finish = |outcome: TrajectoryOutcome, trajectory: Trajectory, integrator: &I| {
        SimulationReport {
            outcome,
            trajectory,
            integrator: integrator.name(),
            stats: integrator.stats(),
        }
    };

    if let Some(event) = detector.observe(&start, t0) {
        return Ok(finish(TrajectoryOutcome::collision(&event), trajectory, &integrator));
    }
    trajectory.push(start.pos, t0);

    let acceleration = |pos: DVec2, t: f64| compute_acceleration(pos, t, ephemeris);
    let mut state = start;
    let mut index = 0;

    while index < schedule.steps() {
        let end = (index + segment_len.max(1)).min(schedule.steps());
        let times: Vec<f64> = (index..=end).map(|i| schedule.time(i)).collect();

        let propagation = integrator.advance(acceleration, state, &times);
        for (sample, &t) in propagation.states.iter().zip(&times[1..]) {
            if let Some(event) = detector.observe(sample, t) {
                return Ok(finish(TrajectoryOutcome::collision(&event), trajectory, &integrator));
            }
            trajectory.push(sample.pos, t);
        }
        if let Some(err) = propagation.failure {
            return Err(err);
        }

        state = propagation.states.last().copied().ok_or_else(|| {
            let until = schedule.time(end);
            SimError::SolverFailure(format!("no samples returned up to t = {until}"))
        })?;
        index = end;
    }

    let outcome = TrajectoryOutcome::completed(detector.nearest(), schedule.end_time());
    Ok(finish(outcome, trajectory, &integrator))
}

/// Simulate a launch in the Earth-Moon system with moving primaries.
///
/// Uses the adaptive solver with its default tolerances; `step_size_seconds` is
/// the output spacing. For other systems or integrators use [`run`].
pub fn simulate(
    initial_position: DVec2,
    initial_velocity: DVec2,
    total_duration_seconds: f64,
    step_size_seconds: f64,
) -> Result<SimulationReport, SimError> {
    let mission = MissionConfig {
        position: initial_position,
        velocity: initial_velocity,
        budget: StepBudget::Duration(total_duration_seconds),
        step_size: step_size_seconds,
        integrator: IntegratorKind::default(),
    };
    run(&SystemConfig::earth_moon(), &mission)
}

// =============================================================================
// Bevy integration
// =============================================================================

/// Result of the mission run at startup.
#[derive(Resource, Debug)]
pub struct MissionReport(pub Result<SimulationReport, SimError>);

/// Runs the configured [`MissionConfig`] against the [`SystemConfig`] once at startup
/// and inserts a [`MissionReport`].
///
/// Both configs fall back to their defaults unless inserted beforehand.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SystemConfig>()
            .init_resource::<MissionConfig>()
            .add_systems(Startup, run_mission);
    }
}

fn run_mission(mut commands: Commands, system: Res<SystemConfig>, mission: Res<MissionConfig>) {
    commands.insert_resource(MissionReport(run(&system, &mission)));
}
