//! Fixed-step integrator for the particle ensemble
//!
//! One force evaluation per step, velocity first then position
//! (semi-implicit Euler), with a multiplicative cooling factor on the new
//! velocity and boundary wrapping on the new position.

use rayon::prelude::*;

use super::boundary::BoundaryModel;
use super::forces::PairForce;
use super::geometry::PairTable;
use super::params::SimulationParameters;
use super::states::NVec2;

/// Net velocity change per particle: `dv[i] = sum_j (dt/m) F(i, j)`
///
/// Each row is reduced sequentially in candidate order, so the result does not
/// depend on how rayon splits the particle axis.
pub fn velocity_changes<F>(pairs: &PairTable, force: &F, dt_over_m: f64) -> Vec<NVec2>
where
    F: PairForce + Sync + ?Sized,
{
    (0..pairs.rows())
        .into_par_iter()
        .map(|i| {
            let (d_row, r_row) = pairs.row(i);
            d_row
                .iter()
                .zip(r_row)
                .fold(NVec2::zeros(), |acc, (d, &r)| acc + force.vector(d, r) * dt_over_m)
        })
        .collect()
}

/// Advance every particle by one step given its velocity change
///
/// For each particle `i`:
/// v'[i] = (v[i] + dv[i]) * cooling
/// x'[i] = wrap(x[i] + v'[i] * dt)
///
/// Inputs are left untouched; both outputs are freshly allocated.
pub fn cooled_euler(
    positions: &[NVec2],
    velocities: &[NVec2],
    dv: &[NVec2],
    cooling: f64,
    params: &SimulationParameters,
    boundary: &BoundaryModel,
) -> (Vec<NVec2>, Vec<NVec2>) {
    let dt = params.dt();

    let velocities_new: Vec<NVec2> = velocities
        .par_iter()
        .zip(dv.par_iter())
        .map(|(v, dv)| (v + dv) * cooling)
        .collect();

    let positions_new: Vec<NVec2> = positions
        .par_iter()
        .zip(velocities_new.par_iter())
        .map(|(x, v)| boundary.wrap(x + v * dt))
        .collect();

    (positions_new, velocities_new)
}
