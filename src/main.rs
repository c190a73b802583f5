//! Translunar - Restricted Three-Body Trajectory Simulator
//!
//! Headless application that runs the default launch scenario once and logs the
//! outcome.

use bevy::app::TaskPoolPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;

use translunar::scenarios::{DEFAULT_SCENARIO, get_scenario};
use translunar::simulation::{MissionReport, SimulationPlugin};

fn main() {
    let mut app = App::new();
    app.add_plugins((TaskPoolPlugin::default(), LogPlugin::default()));

    // Insert resources before plugins that depend on them
    match get_scenario(DEFAULT_SCENARIO) {
        Some(scenario) => {
            info!("Scenario: {} ({})", scenario.name, scenario.description);
            scenario.insert_into(&mut app);
        }
        None => warn!("Unknown scenario '{}', using default mission", DEFAULT_SCENARIO),
    }
    app.add_plugins(SimulationPlugin);

    app.finish();
    app.cleanup();
    app.update();

    match app.world().get_resource::<MissionReport>() {
        Some(MissionReport(Ok(report))) => {
            info!(
                "{} samples recorded by {} ({} evaluations)",
                report.trajectory.len(),
                report.integrator,
                report.stats.evaluations
            );
        }
        Some(MissionReport(Err(err))) => {
            error!("Mission failed: {}", err);
            std::process::exit(1);
        }
        None => {
            error!("Mission did not run");
            std::process::exit(1);
        }
    }
}
