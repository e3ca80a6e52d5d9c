use trajsim::{AtwoodMotion, AtwoodParams, CylinderMotion, CylinderParams, TimeGrid, Trajectory, TrajectoryError};
use proptest::prelude::*;

fn atwood_params() -> impl Strategy<Value = AtwoodParams> {
    (
        0.1f64..100.0,
        0.1f64..100.0,
        0.5f64..30.0,
        -1000.0f64..0.0,
        -1000.0f64..0.0,
    )
        .prop_map(|(mass_right, mass_left, gravity, y_right_initial, y_left_initial)| AtwoodParams {
            mass_right,
            mass_left,
            gravity,
            y_right_initial,
            y_left_initial,
            initial_velocity: 0.0,
        })
}

fn cylinder_params() -> impl Strategy<Value = CylinderParams> {
    (
        0.01f64..10.0,
        0.01f64..50.0,
        0.01f64..50.0,
        -20.0f64..20.0,
        -5.0f64..5.0,
        -10.0f64..10.0,
        -10.0f64..10.0,
    )
        .prop_map(
            |(radius, axial_constant, mass, angular_momentum, amplitude, phase, initial_angle)| CylinderParams {
                radius,
                axial_constant,
                mass,
                angular_momentum,
                amplitude,
                phase,
                initial_angle,
            },
        )
}

fn time_grid() -> impl Strategy<Value = TimeGrid> {
    (0.0f64..5.0, 0.1f64..20.0, 0.01f64..0.5)
        .prop_map(|(start, length, step)| TimeGrid::new(start, start + length, step))
}

// =============================================================================
// Atwood machine properties
// =============================================================================

proptest! {
    #[test]
    fn atwood_heavier_right_falls(
        params in atwood_params(),
        extra in 0.5f64..50.0,
        grid in time_grid(),
    ) {
        let params = AtwoodParams { mass_right: params.mass_left + extra, ..params };
        let samples = AtwoodMotion::new(params).unwrap().compute(&grid);

        for pair in samples.windows(2) {
            prop_assert!(pair[1].y_right < pair[0].y_right);
            prop_assert!(pair[1].y_left > pair[0].y_left);
        }
    }

    #[test]
    fn atwood_string_length_constant(params in atwood_params(), grid in time_grid()) {
        let motion = AtwoodMotion::new(params).unwrap();
        let l0 = -params.y_right_initial - params.y_left_initial;

        for s in motion.compute(&grid) {
            let l = -s.y_right - s.y_left;
            prop_assert!(
                (l - l0).abs() <= 1e-9 * (1.0 + l0.abs()),
                "string length drifted: {} -> {} at t={}", l0, l, s.t
            );
        }
    }

    #[test]
    fn atwood_acceleration_bounded_by_gravity(params in atwood_params()) {
        let motion = AtwoodMotion::new(params).unwrap();
        prop_assert!(motion.acceleration().abs() < params.gravity);
    }

    #[test]
    fn atwood_output_matches_grid(params in atwood_params(), grid in time_grid()) {
        let motion = AtwoodMotion::new(params).unwrap();
        let samples = motion.compute(&grid);
        prop_assert_eq!(samples.len(), grid.len());
        for (s, t) in samples.iter().zip(grid.times()) {
            prop_assert_eq!(s.t, t);
            prop_assert!(s.t < grid.stop);
        }
    }

    #[test]
    fn atwood_non_positive_mass_rejected(params in atwood_params(), bad in -10.0f64..=0.0) {
        let params = AtwoodParams { mass_right: bad, ..params };
        let is_invalid = matches!(
            AtwoodMotion::new(params),
            Err(TrajectoryError::InvalidParameter { name: "mass_right", .. })
        );
        prop_assert!(is_invalid);
    }
}

// =============================================================================
// Cylinder properties
// =============================================================================

proptest! {
    #[test]
    fn cylinder_stays_on_surface(params in cylinder_params(), grid in time_grid()) {
        let motion = CylinderMotion::new(params).unwrap();
        let r2 = params.radius * params.radius;

        for s in motion.compute(&grid) {
            let d2 = s.x() * s.x() + s.y() * s.y();
            prop_assert!((d2 - r2).abs() <= 1e-12 * (1.0 + r2), "r^2={} expected {}", d2, r2);
        }
    }

    #[test]
    fn cylinder_height_bounded_by_amplitude(params in cylinder_params(), grid in time_grid()) {
        let motion = CylinderMotion::new(params).unwrap();
        for s in motion.compute(&grid) {
            prop_assert!(s.z().abs() <= params.amplitude.abs() * (1.0 + 1e-15));
        }
    }

    #[test]
    fn cylinder_height_periodic(params in cylinder_params(), t in 0.0f64..50.0) {
        let motion = CylinderMotion::new(params).unwrap();
        let period = motion.axial_period();
        let z0 = motion.height_at(t);
        let z1 = motion.height_at(t + period);
        // cos argument grows with w_z t, allow for its rounding
        let tol = 1e-9 * (1.0 + params.amplitude.abs()) * (1.0 + motion.omega_z() * (t + period));
        prop_assert!((z0 - z1).abs() <= tol, "z({})={} but z(t+T)={}", t, z0, z1);
    }

    #[test]
    fn cylinder_angle_advances_uniformly(params in cylinder_params(), t in 0.0f64..50.0, dt in 0.01f64..5.0) {
        let motion = CylinderMotion::new(params).unwrap();
        let dphi = motion.angle_at(t + dt) - motion.angle_at(t);
        let expected = motion.phi_dot() * dt;
        prop_assert!((dphi - expected).abs() <= 1e-9 * (1.0 + expected.abs() + motion.angle_at(t).abs()));
    }

    #[test]
    fn cylinder_parallel_matches_sequential(params in cylinder_params(), grid in time_grid()) {
        let motion = CylinderMotion::new(params).unwrap();
        prop_assert_eq!(motion.compute(&grid), motion.compute_par(&grid));
    }

    #[test]
    fn cylinder_non_positive_radius_rejected(params in cylinder_params(), bad in -10.0f64..=0.0) {
        let params = CylinderParams { radius: bad, ..params };
        let is_invalid = matches!(
            CylinderMotion::new(params),
            Err(TrajectoryError::InvalidParameter { name: "radius", .. })
        );
        prop_assert!(is_invalid);
    }
}

// =============================================================================
// Grid properties
// =============================================================================

proptest! {
    #[test]
    fn reversed_grid_is_empty(start in 0.0f64..10.0, back in 0.0f64..10.0, step in -1.0f64..1.0) {
        let grid = TimeGrid::new(start, start - back, step);
        prop_assert!(grid.is_empty());
        prop_assert_eq!(grid.times().count(), 0);
    }
}
