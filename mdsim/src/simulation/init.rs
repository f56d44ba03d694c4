//! Initial conditions
//!
//! The step function does not care where the first state comes from; these are
//! the two providers the scenario loader knows about.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::configuration::config::ParticleConfig;
use crate::error::{Result, SimError};
use crate::simulation::states::{Ensemble, NVec2};

/// Random ensemble, reproducible from `seed`
/// - positions uniform in `[0, cell_size)^2`
/// - velocity components uniform in `[0, max_speed)`
pub fn random_ensemble(count: usize, cell_size: f64, max_speed: f64, seed: u64) -> Result<Ensemble> {
    if !(cell_size.is_finite() && cell_size > 0.0) {
        return Err(SimError::invalid("cell_size", format!("random placement needs a cell > 0, got {cell_size}")));
    }
    if !(max_speed.is_finite() && max_speed >= 0.0) {
        return Err(SimError::invalid("max_speed", format!("must be finite and >= 0, got {max_speed}")));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut positions = Vec::with_capacity(count);
    let mut velocities = Vec::with_capacity(count);

    for _ in 0..count {
        positions.push(NVec2::new(rng.gen::<f64>() * cell_size, rng.gen::<f64>() * cell_size));
        velocities.push(NVec2::new(rng.gen::<f64>() * max_speed, rng.gen::<f64>() * max_speed));
    }

    Ensemble::new(positions, velocities)
}

/// Ensemble listed particle by particle in the scenario file
pub fn explicit_ensemble(particles: &[ParticleConfig]) -> Result<Ensemble> {
    let positions: Vec<Vec<f64>> = particles.iter().map(|p| p.x.clone()).collect();
    let velocities: Vec<Vec<f64>> = particles.iter().map(|p| p.v.clone()).collect();
    Ensemble::from_components(&positions, &velocities)
}
