//! Core state types for the particle simulation.
//!
//! An [`Ensemble`] is the whole particle state at one instant: `positions[i]`
//! and `velocities[i]` belong to particle `i`. The step function never edits an
//! ensemble in place; it builds the successor and the caller swaps it in.

use nalgebra::Vector2;

use crate::error::{Result, SimError};

pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone, PartialEq)]
pub struct Ensemble {
    pub positions: Vec<NVec2>,  // particle positions
    pub velocities: Vec<NVec2>, // particle velocities
}

impl Ensemble {
    /// Pair up positions and velocities, rejecting sequences of different length
    pub fn new(positions: Vec<NVec2>, velocities: Vec<NVec2>) -> Result<Self> {
        check_lengths(&positions, &velocities)?;
        Ok(Self {
            positions,
            velocities,
        })
    }

    /// Build from untyped component lists (as read from YAML)
    /// Every entry must have exactly two components
    pub fn from_components(positions: &[Vec<f64>], velocities: &[Vec<f64>]) -> Result<Self> {
        let positions = to_vectors("position", positions)?;
        let velocities = to_vectors("velocity", velocities)?;
        Self::new(positions, velocities)
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Total kinetic energy `sum(m |v|^2 / 2)` for equal-mass particles
    pub fn kinetic_energy(&self, mass: f64) -> f64 {
        0.5 * mass * self.velocities.iter().map(|v| v.norm_squared()).sum::<f64>()
    }

    /// True when every coordinate of every position and velocity is finite
    pub fn is_finite(&self) -> bool {
        self.positions
            .iter()
            .chain(self.velocities.iter())
            .all(|p| p.x.is_finite() && p.y.is_finite())
    }
}

pub(crate) fn check_lengths(positions: &[NVec2], velocities: &[NVec2]) -> Result<()> {
    if positions.len() != velocities.len() {
        return Err(SimError::ShapeMismatch(format!(
            "{} positions but {} velocities",
            positions.len(),
            velocities.len()
        )));
    }
    Ok(())
}

fn to_vectors(what: &str, raw: &[Vec<f64>]) -> Result<Vec<NVec2>> {
    raw.iter()
        .enumerate()
        .map(|(i, c)| match c.as_slice() {
            [x, y] => Ok(NVec2::new(*x, *y)),
            _ => Err(SimError::ShapeMismatch(format!(
                "{what} {i} has {} components, expected 2",
                c.len()
            ))),
        })
        .collect()
}
