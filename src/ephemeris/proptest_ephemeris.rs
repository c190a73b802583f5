//! Property-based tests for the ephemeris using proptest.
//!
//! These check the physical invariants of the circular two-body layout across a
//! range of body systems and times.

use proptest::prelude::*;

use super::Ephemeris;
use crate::config::{Body, OrbitMode, SystemConfig};
use crate::types::{BodyId, G, SECONDS_PER_DAY};

fn system(mass_ratio: f64, separation: f64, period_days: f64, mode: OrbitMode) -> SystemConfig {
    let primary_mass = 1e24;
    SystemConfig {
        g: G,
        primary: Body::new("A", primary_mass, 1e6),
        secondary: Body::new("B", primary_mass * mass_ratio, 1e5),
        separation,
        orbital_period: period_days * SECONDS_PER_DAY,
        mode,
    }
}

fn any_mode() -> impl Strategy<Value = OrbitMode> {
    prop_oneof![Just(OrbitMode::Moving), Just(OrbitMode::Stationary)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Mass-weighted positions always sum to zero about the barycenter.
    #[test]
    fn prop_barycenter_balance(
        mass_ratio in 1e-3f64..1.0,
        separation in 1e7f64..1e9,
        period_days in 1.0f64..100.0,
        t in 0.0f64..1e8,
        mode in any_mode(),
    ) {
        let config = system(mass_ratio, separation, period_days, mode);
        let ephemeris = Ephemeris::new(&config).unwrap();

        let weighted = ephemeris.primary_position(t) * config.primary.mass
            + ephemeris.secondary_position(t) * config.secondary.mass;
        let scale = separation * config.primary.mass;

        prop_assert!(
            weighted.length() <= 1e-12 * scale,
            "barycenter drift {:e} at t={}",
            weighted.length(),
            t
        );
    }

    /// The primaries are collinear with the barycenter and on opposite sides.
    #[test]
    fn prop_antiphase(
        mass_ratio in 1e-3f64..1.0,
        separation in 1e7f64..1e9,
        period_days in 1.0f64..100.0,
        t in 0.0f64..1e8,
    ) {
        let config = system(mass_ratio, separation, period_days, OrbitMode::Moving);
        let ephemeris = Ephemeris::new(&config).unwrap();

        let a = ephemeris.primary_position(t);
        let b = ephemeris.secondary_position(t);

        // Cross product zero => collinear through the origin; dot negative => opposite sides.
        let cross = a.perp_dot(b);
        prop_assert!(cross.abs() <= 1e-9 * a.length() * b.length());
        prop_assert!(a.dot(b) < 0.0);

        // Separation is preserved at every instant.
        let distance = (a - b).length();
        prop_assert!((distance - separation).abs() <= 1e-9 * separation);
    }

    /// Repeated queries at the same time give bit-identical answers.
    #[test]
    fn prop_position_is_idempotent(t in -1e9f64..1e9, mode in any_mode()) {
        let ephemeris = Ephemeris::new(&system(0.0123, 3.844e8, 27.32, mode)).unwrap();

        for id in BodyId::ALL {
            prop_assert_eq!(ephemeris.position(id, t), ephemeris.position(id, t));
            prop_assert_eq!(ephemeris.velocity(id, t), ephemeris.velocity(id, t));
        }
    }

    /// Orbital radii never change over time.
    #[test]
    fn prop_constant_orbital_radius(t in 0.0f64..1e8) {
        let ephemeris = Ephemeris::new(&SystemConfig::earth_moon()).unwrap();
        let geometry = *ephemeris.geometry();

        for id in BodyId::ALL {
            let r = ephemeris.position(id, t).length();
            prop_assert!((r - geometry.offset(id)).abs() <= 1e-9 * geometry.offset(id));
        }
    }
}
