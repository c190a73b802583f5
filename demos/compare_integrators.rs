//! Compare the fixed-step Taylor integrator with adaptive RK45.
//!
//! Both integrate the direct-transfer launch on the same output grid. The Taylor
//! run is repeated with shrinking steps to show its drift toward the RK45 result.
//!
//! Run with: cargo run --example compare_integrators

use translunar::SimError;
use translunar::config::{IntegratorKind, MissionConfig, StepBudget, SystemConfig};
use translunar::simulation::run;
use translunar::types::{METERS_TO_KM, SECONDS_PER_DAY};

fn main() -> Result<(), SimError> {
    let system = SystemConfig::earth_moon();
    let duration = 2.0 * SECONDS_PER_DAY;

    println!("=== Integrator Comparison (direct transfer, 2 days) ===\n");

    let reference = run(
        &system,
        &MissionConfig {
            budget: StepBudget::Duration(duration),
            step_size: 100.0,
            ..MissionConfig::default()
        },
    )?;
    let reference_end = reference
        .trajectory
        .last()
        .map(|p| p.pos)
        .unwrap_or_default();
    println!(
        "rk45   dt = 100 s: {} evaluations, {} rejected steps",
        reference.stats.evaluations, reference.stats.rejected_steps
    );
    println!("       {}\n", reference.outcome);

    for step_size in [100.0, 50.0, 25.0, 12.5] {
        let report = run(
            &system,
            &MissionConfig {
                budget: StepBudget::Duration(duration),
                step_size,
                integrator: IntegratorKind::Taylor,
                ..MissionConfig::default()
            },
        )?;
        let end = report.trajectory.last().map(|p| p.pos).unwrap_or_default();
        println!(
            "taylor dt = {:>5} s: {:>6} evaluations, end point off by {:>10.1} km",
            step_size,
            report.stats.evaluations,
            (end - reference_end).length() * METERS_TO_KM
        );
    }

    Ok(())
}
