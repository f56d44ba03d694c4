//! Numerical and physical parameters for the simulation
//!
//! `SimulationParameters` is fixed for the whole run:
//! - time step and particle mass (`dt`, `m`),
//! - default per-step cooling factor,
//! - boundary mode and cell size,
//! - force constants and the minimum-distance floor
//!
//! Values are validated once in [`SimulationParameters::new`]; after that the
//! struct is only ever read.

use crate::error::{Result, SimError};
use crate::simulation::boundary::BoundaryModel;
use crate::simulation::forces::{DEFAULT_ATTRACTION, DEFAULT_REPULSION};
use crate::simulation::geometry::MIN_DISTANCE;

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationParameters {
    dt: f64,         // time step
    m: f64,          // particle mass
    cooling: f64,    // velocity multiplier applied every step
    periodic: bool,  // wrap the cell on itself
    cell_size: f64,  // side of the square cell (periodic only)
    attraction: f64, // A in -A/r^2
    repulsion: f64,  // B in B/r^3
    r_min: f64,      // pair distance floor
}

impl SimulationParameters {
    /// Validate and build a parameter set with the reference force constants
    pub fn new(dt: f64, m: f64, cooling: f64, periodic: bool, cell_size: f64) -> Result<Self> {
        Self::with_force(
            dt,
            m,
            cooling,
            periodic,
            cell_size,
            DEFAULT_ATTRACTION,
            DEFAULT_REPULSION,
            MIN_DISTANCE,
        )
    }

    #[allow(clippy::too_many_arguments)]
    pub fn with_force(
        dt: f64,
        m: f64,
        cooling: f64,
        periodic: bool,
        cell_size: f64,
        attraction: f64,
        repulsion: f64,
        r_min: f64,
    ) -> Result<Self> {
        positive("dt", dt)?;
        positive("m", m)?;
        if periodic {
            positive("cell_size", cell_size)?;
        }
        positive("r_min", r_min)?;
        if !cooling.is_finite() || cooling < 0.0 {
            return Err(SimError::invalid("cooling", format!("must be finite and >= 0, got {cooling}")));
        }
        if !attraction.is_finite() || !repulsion.is_finite() {
            return Err(SimError::invalid("force", "attraction and repulsion must be finite"));
        }

        Ok(Self {
            dt,
            m,
            cooling,
            periodic,
            cell_size,
            attraction,
            repulsion,
            r_min,
        })
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    pub fn mass(&self) -> f64 {
        self.m
    }

    pub fn cooling(&self) -> f64 {
        self.cooling
    }

    pub fn periodic(&self) -> bool {
        self.periodic
    }

    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    pub fn attraction(&self) -> f64 {
        self.attraction
    }

    pub fn repulsion(&self) -> f64 {
        self.repulsion
    }

    pub fn r_min(&self) -> f64 {
        self.r_min
    }

    /// Boundary policy implied by `periodic` / `cell_size`
    pub fn boundary(&self) -> BoundaryModel {
        if self.periodic {
            BoundaryModel::Periodic {
                cell_size: self.cell_size,
            }
        } else {
            BoundaryModel::Open
        }
    }
}

fn positive(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SimError::invalid(name, format!("must be finite and > 0, got {value}")))
    }
}
