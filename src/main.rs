use cosmosim::{perturb, Scenario, ScenarioConfig};

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "solar_system.yaml")]
    file_name: String,

    /// Override the scenario's step count
    #[arg(long)]
    steps: Option<u32>,

    /// Override the scenario's step size (seconds)
    #[arg(long)]
    dt: Option<f64>,

    /// Override the scenario's seed
    #[arg(long)]
    seed: Option<u64>,
}

// load here to keep main clean
fn load_scenario_from_yaml(args: &Args) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(&args.file_name);
    let text = fs::read_to_string(&config_path)
        .with_context(|| format!("failed to read scenario {}", config_path.display()))?;
    let mut cfg = ScenarioConfig::from_yaml(&text)
        .with_context(|| format!("failed to parse scenario {}", config_path.display()))?;

    if let Some(steps) = args.steps {
        cfg.run.steps = steps;
    }
    if let Some(dt) = args.dt {
        cfg.run.dt = dt;
    }
    if args.seed.is_some() {
        cfg.run.seed = args.seed;
    }

    Ok(cfg)
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let cfg = load_scenario_from_yaml(&args)?;
    let mut scenario = Scenario::build(cfg).context("invalid scenario")?;

    // Without a fixed seed every run is different
    let seed = scenario.seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!("random seed: {seed}");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    if let Some(magnitude) = scenario.perturbation {
        info!("perturbing initial conditions by up to {magnitude:e}");
        perturb(&mut scenario.universe, magnitude, &mut rng)?;
    }

    let params = scenario.parameters;
    let report = scenario.universe.run_with(&params, &mut rng);

    for ss in scenario.universe.star_systems() {
        for b in ss.bodies() {
            debug!("{} / {}: x = ({:e}, {:e}) m, v = ({:e}, {:e}) m/s", ss.name, b.name, b.x.x, b.x.y, b.v.x, b.v.y);
        }
    }
    info!(
        "{} steps, {} integrations, {}/{} quantum events",
        report.steps,
        report.integrations,
        report.events.len(),
        report.quantum_attempts
    );

    Ok(())
}
