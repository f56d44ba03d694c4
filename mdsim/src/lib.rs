pub mod error;
pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use error::{Result, SimError};

pub use simulation::states::{Ensemble, NVec2};
pub use simulation::params::SimulationParameters;
pub use simulation::boundary::BoundaryModel;
pub use simulation::geometry::{compute_pair_displacements, PairTable, MIN_DISTANCE};
pub use simulation::forces::{PairForce, ShortRangeForce, DEFAULT_ATTRACTION, DEFAULT_REPULSION};
pub use simulation::integrator::{cooled_euler, velocity_changes};
pub use simulation::engine::SimulationStep;
pub use simulation::init::{random_ensemble, explicit_ensemble};
pub use simulation::driver::Simulation;
pub use simulation::scenario::Scenario;

pub use configuration::config::{EngineConfig, ParametersConfig, ForceConfig, InitialConfig, RandomInitConfig, ParticleConfig, ScenarioConfig};

#[cfg(feature = "viewer")]
pub use visualization::mdsim_vis2d::run_2d;

pub use benchmark::benchmark::{bench_step, bench_run};
