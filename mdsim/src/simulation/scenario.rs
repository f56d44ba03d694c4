//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime
//! [`Scenario`] containing:
//! - validated parameters (`SimulationParameters`)
//! - the initial ensemble
//! - outer loop settings (step count, log cadence, viewer on/off)
//!
//! A scenario is turned into a running [`Simulation`] with
//! [`Scenario::into_simulation`].

use log::info;

use crate::configuration::config::ScenarioConfig;
use crate::error::{Result, SimError};
use crate::simulation::driver::Simulation;
use crate::simulation::engine::SimulationStep;
use crate::simulation::init::{explicit_ensemble, random_ensemble};
use crate::simulation::params::SimulationParameters;
use crate::simulation::states::Ensemble;

/// Placement square for random particles when the boundary is open
const OPEN_PLACEMENT_CELL: f64 = 1.0;

#[derive(Debug, Clone)]
pub struct Scenario {
    pub parameters: SimulationParameters,
    pub initial: Ensemble,
    pub steps: usize,
    pub log_every: usize,
    pub headless: bool,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        // Parameters (runtime) from ParametersConfig + ForceConfig
        let p_cfg = cfg.parameters;
        let f_cfg = cfg.force;
        let cell_size = match (p_cfg.periodic, p_cfg.cell_size) {
            (_, Some(l)) => l,
            (false, None) => OPEN_PLACEMENT_CELL,
            (true, None) => {
                return Err(SimError::invalid("cell_size", "a periodic scenario must set `cell_size`"))
            }
        };
        let parameters = SimulationParameters::with_force(
            p_cfg.dt,
            p_cfg.m,
            p_cfg.cooling,
            p_cfg.periodic,
            cell_size,
            f_cfg.attraction,
            f_cfg.repulsion,
            f_cfg.r_min,
        )?;

        // Initial state: exactly one provider
        let initial = match (cfg.initial.random, cfg.initial.particles) {
            (Some(r), None) => random_ensemble(r.count, cell_size, r.max_speed, r.seed)?,
            (None, Some(particles)) => explicit_ensemble(&particles)?,
            _ => {
                return Err(SimError::invalid(
                    "initial",
                    "exactly one of `random` or `particles` must be given",
                ))
            }
        };

        info!(
            "scenario: {} particles, dt = {}, m = {}, cooling = {}, {}",
            initial.len(),
            parameters.dt(),
            parameters.mass(),
            parameters.cooling(),
            if parameters.periodic() {
                format!("periodic cell {}", parameters.cell_size())
            } else {
                "open boundary".to_string()
            }
        );

        Ok(Self {
            parameters,
            initial,
            steps: cfg.engine.steps,
            log_every: cfg.engine.log_every,
            headless: cfg.engine.headless,
        })
    }

    pub fn into_simulation(self) -> Simulation {
        Simulation::new(SimulationStep::new(self.parameters), self.initial).with_log_every(self.log_every)
    }
}
