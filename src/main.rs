use planetsim::{bench_interactions, bench_steps};
use planetsim::{Scenario, ScenarioConfig};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario YAML under the scenarios/ directory; the built-in
    /// Sun+Earth preset when omitted
    #[arg(short)]
    file_name: Option<String>,

    /// Run the timing harness instead of a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("opening scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    if args.bench {
        bench_interactions()?;
        bench_steps()?;
        return Ok(());
    }

    let scenario = match &args.file_name {
        Some(name) => Scenario::from_config(load_scenario_from_yaml(name)?)?,
        None => Scenario::sun_earth()?,
    };

    let Scenario { engine, mut system } = scenario;
    engine.run(&mut system)?;

    info!("final state at t = {}", system.t);
    for (i, body) in system.bodies.iter().enumerate() {
        let marker = if system.selected == Some(i) { " *" } else { "" };
        println!(
            "body {i}{marker}: x = ({:.6}, {:.6}, {:.6}), v = ({:.6}, {:.6}, {:.6}), size = {:.1}",
            body.x.x,
            body.x.y,
            body.x.z,
            body.v.x,
            body.v.y,
            body.v.z,
            body.display_size()
        );
    }

    Ok(())
}
