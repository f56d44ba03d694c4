//! One simulation step as a pure function
//!
//! `SimulationStep` is built once from validated parameters and then maps
//! `(positions, velocities, cooling)` to the successor state:
//! boundary images -> pair geometry -> force law -> integrator.

use log::trace;

use crate::error::Result;
use crate::simulation::boundary::BoundaryModel;
use crate::simulation::forces::{PairForce, ShortRangeForce};
use crate::simulation::geometry::compute_pair_displacements;
use crate::simulation::integrator::{cooled_euler, velocity_changes};
use crate::simulation::params::SimulationParameters;
use crate::simulation::states::{check_lengths, Ensemble, NVec2};

pub struct SimulationStep {
    params: SimulationParameters,
    boundary: BoundaryModel,
    force: Box<dyn PairForce + Send + Sync>,
}

impl SimulationStep {
    /// Step using the short-range force configured in `params`
    pub fn new(params: SimulationParameters) -> Self {
        let force = ShortRangeForce::new(params.attraction(), params.repulsion());
        Self::with_force(params, force)
    }

    /// Step using an arbitrary pair force
    pub fn with_force<F>(params: SimulationParameters, force: F) -> Self
    where
        F: PairForce + Send + Sync + 'static,
    {
        let boundary = params.boundary();
        Self {
            params,
            boundary,
            force: Box::new(force),
        }
    }

    pub fn params(&self) -> &SimulationParameters {
        &self.params
    }

    pub fn boundary(&self) -> &BoundaryModel {
        &self.boundary
    }

    /// Compute the next `(positions, velocities)`
    /// Fails only if the two input sequences differ in length
    pub fn step(&self, positions: &[NVec2], velocities: &[NVec2], cooling: f64) -> Result<(Vec<NVec2>, Vec<NVec2>)> {
        check_lengths(positions, velocities)?;

        let candidates = self.boundary.interaction_set(positions);
        let pairs = compute_pair_displacements(positions, &candidates, self.params.r_min());
        trace!(
            "step: {} particles x {} candidates ({} images each)",
            pairs.rows(),
            pairs.columns(),
            self.boundary.images_per_particle()
        );

        let dt_over_m = self.params.dt() / self.params.mass();
        let dv = velocity_changes(&pairs, self.force.as_ref(), dt_over_m);

        Ok(cooled_euler(positions, velocities, &dv, cooling, &self.params, &self.boundary))
    }

    /// [`SimulationStep::step`] on a whole ensemble
    pub fn advance(&self, ensemble: &Ensemble, cooling: f64) -> Result<Ensemble> {
        let (positions, velocities) = self.step(&ensemble.positions, &ensemble.velocities, cooling)?;
        Ok(Ensemble {
            positions,
            velocities,
        })
    }
}
