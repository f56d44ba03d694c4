//! Outer step loop
//!
//! [`Simulation`] threads each step's output into the next call. The core step
//! stays pure; this is where the state lives, where divergence is detected and
//! where a caller can stop between steps.

use std::ops::ControlFlow;

use log::{debug, info, warn};

use crate::error::{Result, SimError};
use crate::simulation::engine::SimulationStep;
use crate::simulation::states::Ensemble;

pub struct Simulation {
    stepper: SimulationStep,
    ensemble: Ensemble,
    step: usize,       // steps completed so far
    cooling: f64,      // cooling factor fed to every step
    log_every: usize,  // info-level progress cadence, 0 = never
}

impl Simulation {
    pub fn new(stepper: SimulationStep, ensemble: Ensemble) -> Self {
        let cooling = stepper.params().cooling();
        Self {
            stepper,
            ensemble,
            step: 0,
            cooling,
            log_every: 0,
        }
    }

    pub fn with_log_every(mut self, log_every: usize) -> Self {
        self.log_every = log_every;
        self
    }

    pub fn ensemble(&self) -> &Ensemble {
        &self.ensemble
    }

    pub fn steps_done(&self) -> usize {
        self.step
    }

    pub fn stepper(&self) -> &SimulationStep {
        &self.stepper
    }

    /// Run one step and replace the ensemble with its output
    /// Returns `NumericalDivergence` (and keeps the last finite state) if the
    /// new state contains NaN or infinity
    pub fn advance(&mut self) -> Result<&Ensemble> {
        let next = self.stepper.advance(&self.ensemble, self.cooling)?;
        let step = self.step + 1;

        if !next.is_finite() {
            warn!("step {step}: non-finite particle state, dt = {} may be too large", self.stepper.params().dt());
            return Err(SimError::NumericalDivergence { step });
        }

        self.ensemble = next;
        self.step = step;

        let ke = self.ensemble.kinetic_energy(self.stepper.params().mass());
        debug!("step {step}: kinetic energy {ke:.6e}");
        if self.log_every > 0 && step % self.log_every == 0 {
            info!("step {step}: {} particles, kinetic energy {ke:.6e}", self.ensemble.len());
        }

        Ok(&self.ensemble)
    }

    /// Advance up to `steps` times, handing each new state to `observer`
    /// The observer may stop the run early with `ControlFlow::Break`
    pub fn run<F>(&mut self, steps: usize, mut observer: F) -> Result<usize>
    where
        F: FnMut(usize, &Ensemble) -> ControlFlow<()>,
    {
        for _ in 0..steps {
            self.advance()?;
            if observer(self.step, &self.ensemble).is_break() {
                info!("run stopped by observer after step {}", self.step);
                break;
            }
        }
        Ok(self.step)
    }
}
