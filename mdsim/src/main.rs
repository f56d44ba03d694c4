use mdsim::{Scenario, ScenarioConfig};
use mdsim::{bench_run, bench_step};

use clap::Parser;
use anyhow::{Context, Result};
use log::info;

use std::ops::ControlFlow;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file, looked up in `scenarios/` when not found as given
    #[arg(short, default_value = "default.yaml")]
    file_name: String,

    /// Override the scenario's step count
    #[arg(long)]
    steps: Option<usize>,

    /// Run without the viewer window
    #[arg(long)]
    headless: bool,

    /// Time single steps for a range of N and exit
    #[arg(long)]
    bench: bool,

    /// With --bench, also time runs of this many steps per N
    #[arg(long)]
    bench_steps: Option<usize>,
}

fn scenario_path(file_name: &str) -> PathBuf {
    let given = PathBuf::from(file_name);
    if given.exists() {
        return given;
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
}

// load here to keep main clean
fn load_scenario(args: &Args) -> Result<Scenario> {
    let path = scenario_path(&args.file_name);
    let cfg = ScenarioConfig::from_path(&path)
        .with_context(|| format!("failed to load scenario {}", path.display()))?;
    let mut scenario = Scenario::build_scenario(cfg)?;

    if let Some(steps) = args.steps {
        scenario.steps = steps;
    }
    scenario.headless |= args.headless;

    Ok(scenario)
}

fn run_headless(scenario: Scenario) -> Result<()> {
    let steps = scenario.steps;
    let mass = scenario.parameters.mass();
    let mut simulation = scenario.into_simulation();

    let done = simulation.run(steps, |_, _| ControlFlow::Continue(()))?;
    info!(
        "finished {done} steps, kinetic energy {:.6e}",
        simulation.ensemble().kinetic_energy(mass)
    );
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if args.bench {
        bench_step()?;
        if let Some(steps) = args.bench_steps {
            for n in [100, 200, 400] {
                bench_run(n, steps, false)?;
                bench_run(n, steps, true)?;
            }
        }
        return Ok(());
    }

    let scenario = load_scenario(&args)?;

    #[cfg(feature = "viewer")]
    if !scenario.headless {
        mdsim::run_2d(scenario);
        return Ok(());
    }

    run_headless(scenario)
}
