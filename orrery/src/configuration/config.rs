//! Configuration types for loading orrery scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`ConstantsConfig`]  – gravity constant, unit scale, radii and orbit tuning
//! - [`IntegratorConfig`] – time scaling and rigid-body step settings
//! - [`TrailConfig`]      – trail history length
//! - [`WorldConfig`]      – window size, Sun placement, planet cap, color seed
//! - [`ScenarioConfig`]   – top-level wrapper, plus planets spawned up front
//!
//! Every section is optional; missing keys fall back to the reference values.
//!
//! # YAML format
//!
//! ```yaml
//! constants:
//!   G: 0.0001                # custom gravitational constant
//!   scale: 100.0             # render units per physics unit
//!   sun_radius: 50.0
//!   planet_radius: 10.0
//!   orbit_speed_factor: 15.0
//!
//! integrator:
//!   time_scale: 4.0          # simulated seconds per wall-clock second
//!   velocity_iterations: 8
//!   position_iterations: 3
//!   max_translation: 2.0     # physics units a body may move in one step
//!   density: 1.0
//!   friction: 0.0
//!   restitution: 1.0
//!
//! trail:
//!   capacity: 70
//!
//! world:
//!   width: 800
//!   height: 600
//!   sun: [400.0, 300.0]      # defaults to the window center
//!   max_planets: 500
//!   seed: 42
//!
//! spawns:
//!   - [500.0, 300.0]
//! ```
//!
//! [`crate::simulation::params::Parameters`] is built from this and is what
//! the runtime actually reads.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// Physical constants and the unit scale
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ConstantsConfig {
    #[serde(rename = "G")]
    pub g: f64, // custom gravitational constant
    pub scale: f64, // render units per physics unit
    pub sun_radius: f64, // render units, doubles as the Sun's mass proxy
    pub planet_radius: f64, // render units, doubles as the planet's mass proxy
    pub orbit_speed_factor: f64, // empirical multiplier on the circular-orbit speed
}

impl Default for ConstantsConfig {
    fn default() -> Self {
        Self {
            g: 0.0001,
            scale: 100.0,
            sun_radius: 50.0,
            planet_radius: 10.0,
            orbit_speed_factor: 15.0,
        }
    }
}

/// Step settings handed to the physics backend
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct IntegratorConfig {
    pub time_scale: f64, // multiplier on the wall-clock frame duration
    pub velocity_iterations: u32,
    pub position_iterations: u32,
    pub max_translation: f64, // per-step translation clamp, physics units
    pub density: f64,
    pub friction: f64,
    pub restitution: f64,
}

impl Default for IntegratorConfig {
    fn default() -> Self {
        Self {
            time_scale: 4.0,
            velocity_iterations: 8,
            position_iterations: 3,
            max_translation: 2.0,
            density: 1.0,
            friction: 0.0,
            restitution: 1.0,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct TrailConfig {
    pub capacity: usize,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self { capacity: 70 }
    }
}

/// Window and world layout
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct WorldConfig {
    pub width: u32,
    pub height: u32,
    pub sun: Option<[f64; 2]>, // Sun position in render units, window center if absent
    pub max_planets: Option<usize>, // unbounded if absent
    pub seed: Option<u64>, // deterministic planet colors if present
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            sun: None,
            max_planets: None,
            seed: None,
        }
    }
}

impl WorldConfig {
    /// Sun position in render units
    pub fn sun_position(&self) -> [f64; 2] {
        self.sun
            .unwrap_or([self.width as f64 / 2.0, self.height as f64 / 2.0])
    }
}

/// Top-level scenario configuration loaded from YAML
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ScenarioConfig {
    pub constants: ConstantsConfig,
    pub integrator: IntegratorConfig,
    pub trail: TrailConfig,
    pub world: WorldConfig,
    pub spawns: Vec<[f64; 2]>, // render positions spawned before the first frame
}

impl ScenarioConfig {
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Ok(serde_yaml::from_reader(reader)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_reference_values() {
        let cfg = ScenarioConfig::from_yaml_str("{}").unwrap();
        assert_eq!(cfg.constants.g, 0.0001);
        assert_eq!(cfg.constants.scale, 100.0);
        assert_eq!(cfg.integrator.velocity_iterations, 8);
        assert_eq!(cfg.integrator.position_iterations, 3);
        assert_eq!(cfg.trail.capacity, 70);
        assert_eq!(cfg.world.sun_position(), [400.0, 300.0]);
        assert!(cfg.spawns.is_empty());
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let yaml = "
constants:
  G: 0.5
integrator:
  time_scale: 1.0
world:
  sun: [10.0, 20.0]
  seed: 7
spawns:
  - [1.0, 2.0]
  - [3.0, 4.0]
";
        let cfg = ScenarioConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(cfg.constants.g, 0.5);
        assert_eq!(cfg.constants.sun_radius, 50.0);
        assert_eq!(cfg.integrator.time_scale, 1.0);
        assert_eq!(cfg.integrator.density, 1.0);
        assert_eq!(cfg.world.sun_position(), [10.0, 20.0]);
        assert_eq!(cfg.world.seed, Some(7));
        assert_eq!(cfg.spawns, vec![[1.0, 2.0], [3.0, 4.0]]);
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        let err = ScenarioConfig::from_yaml_str("constants: [1, 2").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }
}
