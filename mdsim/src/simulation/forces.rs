//! Pair force laws
//!
//! A [`PairForce`] maps a floored pair distance to a scalar force magnitude
//! (positive = repulsive, pushes particle `i` away from candidate `j`) and,
//! together with the un-normalized displacement, to a force vector.

use crate::simulation::states::NVec2;

pub const DEFAULT_ATTRACTION: f64 = 30.0;
pub const DEFAULT_REPULSION: f64 = 10.0;

/// Trait for radial pair forces evaluated over a [`PairTable`](crate::simulation::geometry::PairTable)
pub trait PairForce {
    /// Scalar force at distance `r` (already floored, so `r > 0`)
    fn magnitude(&self, r: f64) -> f64;

    /// Force vector on `i` from `j` given `d = p_i - c_j` and `r = |d|`
    /// `d` is not normalized, hence the extra division by `r`
    fn vector(&self, d: &NVec2, r: f64) -> NVec2 {
        d * (self.magnitude(r) / r)
    }
}

/// Short-range attraction plus steeper repulsion: `F(r) = -A/r^2 + B/r^3`
///
/// Attraction wins at long range and repulsion at short range; they balance
/// at `r* = B / A`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShortRangeForce {
    pub attraction: f64, // A
    pub repulsion: f64,  // B
}

impl ShortRangeForce {
    pub fn new(attraction: f64, repulsion: f64) -> Self {
        Self {
            attraction,
            repulsion,
        }
    }

    /// Distance where the force changes sign, if attraction is present
    pub fn crossover_radius(&self) -> Option<f64> {
        if self.attraction == 0.0 {
            None
        } else {
            Some(self.repulsion / self.attraction)
        }
    }
}

impl Default for ShortRangeForce {
    fn default() -> Self {
        Self::new(DEFAULT_ATTRACTION, DEFAULT_REPULSION)
    }
}

impl PairForce for ShortRangeForce {
    fn magnitude(&self, r: f64) -> f64 {
        let r2 = r * r;
        -self.attraction / r2 + self.repulsion / (r2 * r)
    }
}
