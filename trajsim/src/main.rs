use trajsim::{ScenarioConfig, Scenario};
use trajsim::{print_table, bench_trajectories};
#[cfg(feature = "vis")]
use trajsim::{run_2d, run_3d};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Closed-form trajectories of an Atwood machine and a particle on a cylinder")]
struct Args {
    /// Scenario file, looked up under scenarios/ when not found as given
    #[arg(short, long, default_value = "atwood.yaml")]
    file_name: String,

    /// Print the sample table instead of opening the viewer
    #[arg(long)]
    headless: bool,

    /// Time sequential vs parallel evaluation and exit
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let given = PathBuf::from(file_name);
    let config_path = if given.exists() {
        given
    } else {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
    };

    let file = File::open(&config_path)
        .with_context(|| format!("failed to open scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("failed to parse scenario {}", config_path.display()))?;

    Ok(scenario_cfg)
}

fn print_scenario(scenario: &Scenario) {
    match scenario {
        Scenario::Atwood(s) => print_table(&s.samples),
        Scenario::Cylinder(s) => print_table(&s.samples),
    }
}

#[cfg(feature = "vis")]
fn play(scenario: Scenario, headless: bool) {
    if headless {
        print_scenario(&scenario);
        return;
    }
    match scenario {
        Scenario::Atwood(s) => run_2d(s),
        Scenario::Cylinder(s) => run_3d(s),
    }
}

#[cfg(not(feature = "vis"))]
fn play(scenario: Scenario, headless: bool) {
    if !headless {
        warn!("built without the `vis` feature, printing the trajectory instead");
    }
    print_scenario(&scenario);
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if args.bench {
        bench_trajectories()?;
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let scenario = Scenario::build_scenario(scenario_cfg)
        .with_context(|| format!("invalid scenario {}", args.file_name))?;

    if scenario.is_empty() {
        warn!("time grid is empty, nothing to play");
    }
    info!(system = scenario.name(), frames = scenario.len(), "playing scenario");

    play(scenario, args.headless);

    Ok(())
}
