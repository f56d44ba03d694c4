//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – outer loop options (step count, logging, viewer)
//! - [`ParametersConfig`] – time step, mass, cooling and boundary
//! - [`ForceConfig`]      – force constants and distance floor (optional)
//! - [`InitialConfig`]    – random or explicit initial particle state
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example periodic scenario matching these types:
//!
//! ```yaml
//! engine:
//!   steps: 1000             # number of outer-loop steps
//!   log_every: 100          # progress line every N steps
//!   headless: false         # true -> no viewer window
//!
//! parameters:
//!   dt: 5.0e-5              # time step
//!   m: 0.5                  # particle mass
//!   cooling: 0.995          # velocity multiplier per step
//!   periodic: true
//!   cell_size: 1.2
//!
//! force:
//!   attraction: 30.0        # A in -A/r^2
//!   repulsion: 10.0         # B in B/r^3
//!   r_min: 0.02             # distance floor
//!
//! initial:
//!   random:
//!     count: 100
//!     max_speed: 10.0
//!     seed: 42
//! ```
//!
//! Instead of `random`, `initial` may list `particles` explicitly:
//!
//! ```yaml
//! initial:
//!   particles:
//!     - x: [0.2, 0.5]
//!       v: [0.0, 1.0]
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;
use crate::simulation::forces::{DEFAULT_ATTRACTION, DEFAULT_REPULSION};
use crate::simulation::geometry::MIN_DISTANCE;

/// Outer loop configuration
#[derive(Deserialize, Debug, Clone)]
pub struct EngineConfig {
    pub steps: usize, // number of steps the driver runs
    #[serde(default = "default_log_every")]
    pub log_every: usize, // info-level progress cadence, 0 disables
    #[serde(default)]
    pub headless: bool, // skip the viewer even when it is compiled in
}

fn default_log_every() -> usize {
    100
}

/// Numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub dt: f64,        // time step
    pub m: f64,         // particle mass
    pub cooling: f64,   // <1 cools, >1 heats
    pub periodic: bool, // wrap the cell on itself
    pub cell_size: Option<f64>, // side of the square cell, required when periodic
}

/// Force law constants
#[derive(Deserialize, Debug, Clone)]
pub struct ForceConfig {
    #[serde(default = "default_attraction")]
    pub attraction: f64,
    #[serde(default = "default_repulsion")]
    pub repulsion: f64,
    #[serde(default = "default_r_min")]
    pub r_min: f64,
}

fn default_attraction() -> f64 {
    DEFAULT_ATTRACTION
}

fn default_repulsion() -> f64 {
    DEFAULT_REPULSION
}

fn default_r_min() -> f64 {
    MIN_DISTANCE
}

impl Default for ForceConfig {
    fn default() -> Self {
        Self {
            attraction: DEFAULT_ATTRACTION,
            repulsion: DEFAULT_REPULSION,
            r_min: MIN_DISTANCE,
        }
    }
}

/// Seeded random placement inside the cell
#[derive(Deserialize, Debug, Clone)]
pub struct RandomInitConfig {
    pub count: usize,   // number of particles
    pub max_speed: f64, // velocity components drawn from [0, max_speed)
    #[serde(default)]
    pub seed: u64,
}

/// Configuration for a single particle's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct ParticleConfig {
    pub x: Vec<f64>, // initial position
    pub v: Vec<f64>, // initial velocity
}

/// Exactly one of `random` / `particles` must be present
#[derive(Deserialize, Debug, Clone)]
pub struct InitialConfig {
    pub random: Option<RandomInitConfig>,
    pub particles: Option<Vec<ParticleConfig>>,
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub engine: EngineConfig,         // outer loop settings
    pub parameters: ParametersConfig, // dt, mass, cooling, boundary
    #[serde(default)]
    pub force: ForceConfig,           // force constants
    pub initial: InitialConfig,       // initial particle state
}

impl ScenarioConfig {
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Ok(serde_yaml::from_reader(reader)?)
    }
}
