use orrery::{bench_tick, Scenario, ScenarioConfig};

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Click to launch planets around a fixed Sun")]
struct Args {
    /// Scenario file, as a path or a name under `scenarios/`
    #[arg(short, default_value = "default.yaml")]
    file_name: String,

    /// Run without a window
    #[arg(long)]
    headless: bool,

    /// Frames to simulate in headless mode
    #[arg(long, default_value_t = 600)]
    frames: u64,

    /// Wall-clock seconds per headless frame
    #[arg(long, default_value_t = 1.0 / 60.0)]
    frame_dt: f64,

    /// Time the tick loop for growing planet counts and exit
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let direct = PathBuf::from(file_name);
    let config_path = if direct.is_file() {
        direct
    } else {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
    };

    let scenario_cfg = ScenarioConfig::from_path(&config_path)
        .with_context(|| format!("failed to load scenario {}", config_path.display()))?;
    info!("loaded scenario {}", config_path.display());

    Ok(scenario_cfg)
}

fn run_headless(mut scenario: Scenario, frames: u64, frame_dt: f64) {
    let mut spawned = 0;
    let mut removed = 0;
    for _ in 0..frames {
        match scenario.engine.tick(frame_dt) {
            Ok(report) => {
                spawned += report.spawned.len();
                removed += report.removed.len();
            }
            Err(e) => warn!("frame skipped: {e}"),
        }
    }

    info!(
        "headless run done: {} frames, {} spawned, {} fell into the sun, {} still orbiting",
        scenario.engine.frame(),
        spawned,
        removed,
        scenario.engine.planet_count()
    );
    for planet in &scenario.engine.world().planets {
        info!(
            "planet {} at ({:.1}, {:.1}), speed {:.4}, trail {}",
            planet.id.0,
            planet.position.x,
            planet.position.y,
            planet.velocity.norm(),
            planet.trail.len()
        );
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if args.bench {
        bench_tick();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let scenario = Scenario::build_scenario(scenario_cfg)?;

    if args.headless {
        run_headless(scenario, args.frames, args.frame_dt);
        return Ok(());
    }

    run_viewer(scenario)
}

#[cfg(feature = "viewer")]
fn run_viewer(scenario: Scenario) -> Result<()> {
    orrery::run_2d(scenario);
    Ok(())
}

#[cfg(not(feature = "viewer"))]
fn run_viewer(_scenario: Scenario) -> Result<()> {
    anyhow::bail!("built without the `viewer` feature, use --headless")
}
