//! Build a ready-to-run simulation from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle:
//! - numerical parameters (`Parameters`), validated
//! - the engine (`Engine`) with its Sun placed and the configured spawns
//!   queued for the first tick
//! - the window size the viewer should open with
//!
//! The viewer inserts it as a Bevy `Resource`; the headless driver and the
//! benchmark use it directly.

use log::{info, warn};

use crate::configuration::config::ScenarioConfig;
use crate::error::ConfigError;
use crate::simulation::engine::{Engine, SpawnRequest};
use crate::simulation::params::Parameters;
use crate::simulation::vector::NVec2;

#[cfg_attr(feature = "viewer", derive(bevy::prelude::Resource))]
pub struct Scenario {
    pub width: u32,
    pub height: u32,
    pub engine: Engine,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, ConfigError> {
        let parameters = Parameters::from_config(&cfg)?;

        let [sx, sy] = cfg.world.sun_position();
        let sun = NVec2::new(sx, sy);
        if !sun.x.is_finite() {
            return Err(ConfigError::Invalid { field: "world.sun", value: sx, reason: "must be finite" });
        }
        if !sun.y.is_finite() {
            return Err(ConfigError::Invalid { field: "world.sun", value: sy, reason: "must be finite" });
        }

        let mut engine = Engine::new(parameters, sun);

        // Initial spawns: same validation as interactive ones
        for [x, y] in cfg.spawns {
            if let Err(e) = engine.request_spawn(SpawnRequest::at(x, y)) {
                warn!("dropping configured spawn ({x}, {y}): {e}");
            }
        }

        info!(
            "scenario ready: {}x{} window, sun at ({:.1}, {:.1}), {} queued spawns",
            cfg.world.width,
            cfg.world.height,
            sx,
            sy,
            engine.pending_spawns()
        );

        Ok(Self {
            width: cfg.world.width,
            height: cfg.world.height,
            engine,
        })
    }
}
