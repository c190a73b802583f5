//! Run every preset scenario and print its outcome.
//!
//! Run with: cargo run --example run_scenarios

use translunar::TrajectoryOutcome;
use translunar::scenarios::SCENARIOS;
use translunar::types::METERS_TO_KM;

fn main() {
    println!("=== Preset Scenarios ===\n");

    for scenario in SCENARIOS {
        println!("{} [{}]", scenario.name, scenario.id);
        println!("  {}", scenario.description);

        let report = match scenario.run() {
            Ok(report) => report,
            Err(err) => {
                println!("  FAILED: {err}\n");
                continue;
            }
        };

        match &report.outcome {
            TrajectoryOutcome::Collision { position, .. } => {
                println!("  {}", report.outcome);
                println!(
                    "  Impact point: ({:.0}, {:.0}) km",
                    position.x * METERS_TO_KM,
                    position.y * METERS_TO_KM
                );
            }
            TrajectoryOutcome::Completed { nearest_point, .. } => {
                println!("  {}", report.outcome);
                println!(
                    "  Nearest point: ({:.0}, {:.0}) km",
                    nearest_point.x * METERS_TO_KM,
                    nearest_point.y * METERS_TO_KM
                );
            }
        }
        println!(
            "  {} samples, {:.0} km flown, {} ({} evaluations)\n",
            report.trajectory.len(),
            report.trajectory.path_length() * METERS_TO_KM,
            report.integrator,
            report.stats.evaluations
        );
    }
}
