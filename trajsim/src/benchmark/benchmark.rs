use std::time::Instant;

use crate::simulation::atwood::AtwoodMotion;
use crate::simulation::cylinder::CylinderMotion;
use crate::simulation::error::Result;
use crate::simulation::grid::TimeGrid;
use crate::simulation::params::{AtwoodParams, CylinderParams};
use crate::simulation::trajectory::Trajectory;

/// Reference Atwood machine used for timing
fn make_atwood() -> Result<AtwoodMotion> {
    AtwoodMotion::new(AtwoodParams {
        mass_right: 15.0,
        mass_left: 3.0,
        gravity: 9.81,
        y_right_initial: -500.0,
        y_left_initial: -400.0,
        initial_velocity: 0.0,
    })
}

/// Reference cylinder used for timing
fn make_cylinder() -> Result<CylinderMotion> {
    CylinderMotion::new(CylinderParams {
        radius: 0.5,
        axial_constant: 1.0,
        mass: 1.0,
        angular_momentum: 1.0,
        amplitude: 1.0,
        phase: 0.0,
        initial_angle: 10.0,
    })
}

/// Milliseconds for sequential and parallel evaluation of `motion` over `grid`
fn time_both<M: Trajectory + Sync>(motion: &M, grid: &TimeGrid, repeats: usize) -> (f64, f64) {
    // Warm up the rayon pool
    let _ = motion.compute_par(grid);

    let t0 = Instant::now();
    for _ in 0..repeats {
        let _ = motion.compute(grid);
    }
    let seq_ms = t0.elapsed().as_secs_f64() * 1000.0 / repeats as f64;

    let t1 = Instant::now();
    for _ in 0..repeats {
        let _ = motion.compute_par(grid);
    }
    let par_ms = t1.elapsed().as_secs_f64() * 1000.0 / repeats as f64;

    (seq_ms, par_ms)
}

/// Sequential vs rayon evaluation over growing grids
/// Paste output directly into a spreadsheet to graph
pub fn bench_trajectories() -> Result<()> {
    let atwood = make_atwood()?;
    let cylinder = make_cylinder()?;

    println!("samples,atwood_seq_ms,atwood_par_ms,cylinder_seq_ms,cylinder_par_ms");

    let step = 1.0e-3;
    for n in [1_000usize, 10_000, 100_000, 1_000_000, 4_000_000] {
        // Small grids: average over a few runs to smooth noise
        let repeats = if n <= 100_000 { 10 } else { 2 };
        let grid = TimeGrid::from_zero(n as f64 * step, step);

        let (a_seq, a_par) = time_both(&atwood, &grid, repeats);
        let (c_seq, c_par) = time_both(&cylinder, &grid, repeats);

        println!("{},{:.4},{:.4},{:.4},{:.4}", grid.len(), a_seq, a_par, c_seq, c_par);
    }

    Ok(())
}
