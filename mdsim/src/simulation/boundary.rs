//! Boundary topology of the simulation cell
//!
//! Two modes:
//! - `Open`: no walls, no images; a particle only sees the other particles.
//! - `Periodic`: a square cell of side `L` that wraps on itself. For force
//!   evaluation every particle is replicated into the 3x3 block of neighbouring
//!   cells, so each pair is seen through all of its nearby images without an
//!   explicit minimum-image search.

use crate::simulation::states::NVec2;

/// Cell-replica offsets in units of `L`, outer index on x
const IMAGE_OFFSETS: [(f64, f64); 9] = [
    (-1.0, -1.0),
    (-1.0, 0.0),
    (-1.0, 1.0),
    (0.0, -1.0),
    (0.0, 0.0),
    (0.0, 1.0),
    (1.0, -1.0),
    (1.0, 0.0),
    (1.0, 1.0),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundaryModel {
    Open,
    Periodic { cell_size: f64 },
}

impl BoundaryModel {
    /// Number of candidate positions generated per particle
    pub fn images_per_particle(&self) -> usize {
        match self {
            BoundaryModel::Open => 1,
            BoundaryModel::Periodic { .. } => IMAGE_OFFSETS.len(),
        }
    }

    /// Candidate set that every particle interacts with
    ///
    /// Open mode returns the positions unchanged. Periodic mode returns all
    /// positions shifted by each offset `(i L, j L)`, `i, j in {-1, 0, 1}`,
    /// laid out offset-major: `out[k * N + p]` is particle `p` under offset `k`.
    /// The result has `9 N` entries and includes each particle's own
    /// zero-offset copy.
    pub fn interaction_set(&self, positions: &[NVec2]) -> Vec<NVec2> {
        match *self {
            BoundaryModel::Open => positions.to_vec(),
            BoundaryModel::Periodic { cell_size } => IMAGE_OFFSETS
                .iter()
                .flat_map(|&(i, j)| {
                    let shift = NVec2::new(i * cell_size, j * cell_size);
                    positions.iter().map(move |p| p + shift)
                })
                .collect(),
        }
    }

    /// Map a position back into the primary cell (identity when open)
    pub fn wrap(&self, position: NVec2) -> NVec2 {
        match *self {
            BoundaryModel::Open => position,
            BoundaryModel::Periodic { cell_size } => NVec2::new(
                wrap_coordinate(position.x, cell_size),
                wrap_coordinate(position.y, cell_size),
            ),
        }
    }
}

/// Floored modulo into `[0, l)`
///
/// `rem_euclid` can round up to exactly `l` for tiny negative inputs
/// (`-1e-18 mod 1.0`), which is the same point on the torus as 0.
fn wrap_coordinate(x: f64, l: f64) -> f64 {
    let r = x.rem_euclid(l);
    if r >= l {
        0.0
    } else {
        r
    }
}
