//! Dense pair geometry between the particles and their interaction set
//!
//! For `N` particles and `M` candidates (`M = N` open, `M = 9N` periodic) the
//! [`PairTable`] stores, row-major by particle:
//! - `displacement[i, j] = position[i] - candidate[j]`
//! - `distance[i, j] = max(|displacement[i, j]|, r_min)`
//!
//! No pruning: every row holds all `M` candidates, including the particle's
//! own copy at distance 0 (floored to `r_min`).

use rayon::prelude::*;

use crate::simulation::states::NVec2;

/// Smallest pair distance the force law is ever evaluated at
pub const MIN_DISTANCE: f64 = 0.02;

#[derive(Debug, Clone)]
pub struct PairTable {
    n: usize,                  // particles (rows)
    m: usize,                  // candidates (columns)
    displacement: Vec<NVec2>,  // n * m, row-major
    distance: Vec<f64>,        // n * m, floored
}

impl PairTable {
    pub fn rows(&self) -> usize {
        self.n
    }

    pub fn columns(&self) -> usize {
        self.m
    }

    pub fn displacement(&self, i: usize, j: usize) -> NVec2 {
        self.displacement[i * self.m + j]
    }

    pub fn distance(&self, i: usize, j: usize) -> f64 {
        self.distance[i * self.m + j]
    }

    /// Displacements and distances of particle `i` against every candidate
    pub fn row(&self, i: usize) -> (&[NVec2], &[f64]) {
        let range = i * self.m..(i + 1) * self.m;
        (&self.displacement[range.clone()], &self.distance[range])
    }
}

/// Compute displacement and floored distance for every (particle, candidate) pair
/// Rows are filled in parallel; entries within a step have no dependencies
pub fn compute_pair_displacements(positions: &[NVec2], candidates: &[NVec2], r_min: f64) -> PairTable {
    let n = positions.len();
    let m = candidates.len();
    let mut displacement = vec![NVec2::zeros(); n * m];
    let mut distance = vec![0.0; n * m];

    if m > 0 {
        displacement
            .par_chunks_mut(m)
            .zip(distance.par_chunks_mut(m))
            .zip(positions.par_iter())
            .for_each(|((d_row, r_row), p)| {
                for ((d, r), c) in d_row.iter_mut().zip(r_row.iter_mut()).zip(candidates) {
                    *d = p - c;
                    *r = d.norm().max(r_min);
                }
            });
    }

    PairTable {
        n,
        m,
        displacement,
        distance,
    }
}
