use std::time::Instant;

use crate::error::Result;
use crate::simulation::engine::SimulationStep;
use crate::simulation::params::SimulationParameters;
use crate::simulation::states::{Ensemble, NVec2};

/// Deterministic spread of `n` particles over the unit cell, no rand needed
fn lattice_ensemble(n: usize, cell_size: f64) -> Result<Ensemble> {
    let positions = (0..n)
        .map(|i| {
            let i_f = i as f64;
            NVec2::new(
                (0.5 + 0.5 * (i_f * 0.37).sin()) * cell_size,
                (0.5 + 0.5 * (i_f * 0.13).cos()) * cell_size,
            )
        })
        .collect();
    Ensemble::new(positions, vec![NVec2::zeros(); n])
}

/// Wall-clock cost of a single step, open vs periodic
/// The periodic step evaluates 9x the pairs of the open one
pub fn bench_step() -> Result<()> {
    // Different ensemble sizes to test
    let ns = [50, 100, 200, 400, 800];
    let cell_size = 1.2;

    let open = SimulationStep::new(SimulationParameters::new(5.0e-5, 0.5, 0.995, false, cell_size)?);
    let periodic = SimulationStep::new(SimulationParameters::new(5.0e-5, 0.5, 0.995, true, cell_size)?);

    for n in ns {
        let ensemble = lattice_ensemble(n, cell_size)?;

        // Warm up
        open.advance(&ensemble, 0.995)?;
        periodic.advance(&ensemble, 0.995)?;

        // Time open boundary
        let t0 = Instant::now();
        open.advance(&ensemble, 0.995)?;
        let dt_open = t0.elapsed().as_secs_f64();

        // Time periodic boundary
        let t1 = Instant::now();
        periodic.advance(&ensemble, 0.995)?;
        let dt_periodic = t1.elapsed().as_secs_f64();

        println!("N = {n:5}, open = {:8.6} s, periodic = {:8.6} s", dt_open, dt_periodic);
    }

    Ok(())
}

/// Average step cost over a short run for one ensemble size
pub fn bench_run(n: usize, steps: usize, periodic: bool) -> Result<f64> {
    let cell_size = 1.2;
    let stepper = SimulationStep::new(SimulationParameters::new(5.0e-5, 0.5, 0.995, periodic, cell_size)?);
    let mut ensemble = lattice_ensemble(n, cell_size)?;

    let t0 = Instant::now();
    for _ in 0..steps {
        ensemble = stepper.advance(&ensemble, 0.995)?;
    }
    let per_step = t0.elapsed().as_secs_f64() / steps.max(1) as f64;

    println!("N = {n:5}, periodic = {periodic}, {steps} steps, {:8.6} s/step", per_step);
    Ok(per_step)
}
