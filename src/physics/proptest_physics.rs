//! Property-based tests for the force model and Taylor stepper using proptest.

use bevy::math::DVec2;
use proptest::prelude::*;

use super::{Integrator, TaylorStepper, compute_acceleration, point_mass_acceleration};
use crate::config::SystemConfig;
use crate::ephemeris::Ephemeris;
use crate::types::{BodyId, ProbeState};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Point-mass pull always points at the body and follows the inverse-square law.
    #[test]
    fn prop_inverse_square(
        angle in 0.0f64..std::f64::consts::TAU,
        distance in 1e6f64..1e9,
        gm in 1e10f64..1e15,
    ) {
        let offset = DVec2::from_angle(angle) * distance;
        let center = DVec2::new(-4.67e6, 0.0);
        let acc = point_mass_acceleration(center + offset, center, gm);

        let expected = gm / (distance * distance);
        prop_assert!((acc.length() - expected).abs() <= 1e-9 * expected);
        // Anti-parallel to the offset.
        prop_assert!(acc.dot(offset) < 0.0);
        prop_assert!(acc.perp_dot(offset).abs() <= 1e-9 * acc.length() * distance);
    }

    /// Outside both bodies the net acceleration is always finite.
    #[test]
    fn prop_finite_outside_bodies(
        x in -5e8f64..5e8,
        y in -5e8f64..5e8,
        t in 0.0f64..1e7,
    ) {
        let ephemeris = Ephemeris::new(&SystemConfig::earth_moon()).unwrap();
        let pos = DVec2::new(x, y);
        let outside = BodyId::ALL
            .iter()
            .all(|&id| (pos - ephemeris.position(id, t)).length() > ephemeris.radius(id));
        prop_assume!(outside);

        prop_assert!(compute_acceleration(pos, t, &ephemeris).is_finite());
    }

    /// Same inputs, same trajectory: the stepper carries no hidden state between runs.
    #[test]
    fn prop_taylor_is_deterministic(
        vx in -1e4f64..1e4,
        vy in -1e4f64..1e4,
    ) {
        let ephemeris = Ephemeris::new(&SystemConfig::earth_moon()).unwrap();
        let start = ProbeState::new(DVec2::new(1e8, 1e8), DVec2::new(vx, vy));
        let times: Vec<f64> = (0..50).map(|i| i as f64 * 60.0).collect();
        let acc = |pos, t| compute_acceleration(pos, t, &ephemeris);

        let first = TaylorStepper::new().propagate(acc, start, &times).unwrap();
        let second = TaylorStepper::new().propagate(acc, start, &times).unwrap();
        prop_assert_eq!(first, second);
    }
}
