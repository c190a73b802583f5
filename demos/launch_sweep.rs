//! Sweep the direct-transfer burn speed and report what each launch reaches.
//!
//! Launches run in parallel; each run owns its own state and trajectory.
//!
//! Run with: cargo run --release --example launch_sweep

use bevy::math::DVec2;
use rayon::prelude::*;
use translunar::config::{MissionConfig, SystemConfig};
use translunar::simulation::run;
use translunar::types::KM_TO_METERS;

fn main() {
    let system = SystemConfig::earth_moon();
    // 9.70 to 9.80 km/s; lunar impacts sit near 9.744.
    let speeds: Vec<f64> = (0..=40)
        .map(|i| (9.70 + 0.0025 * i as f64) * KM_TO_METERS)
        .collect();

    println!("=== Direct Transfer Speed Sweep (5 days, adaptive RK45) ===\n");

    let results: Vec<_> = speeds
        .par_iter()
        .map(|&speed| {
            let mission = MissionConfig {
                velocity: DVec2::new(speed, 0.0),
                ..MissionConfig::default()
            };
            (speed, run(&system, &mission))
        })
        .collect();

    for (speed, result) in results {
        match result {
            Ok(report) => println!("{:>8.4} km/s  {}", speed / KM_TO_METERS, report.outcome),
            Err(err) => println!("{:>8.4} km/s  failed: {err}", speed / KM_TO_METERS),
        }
    }
}
