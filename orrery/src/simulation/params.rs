//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds the validated runtime constants:
//! - gravity constant, unit scale and body radii,
//! - the empirical orbit-speed factor and the simulation time scale,
//! - rigid-body step settings (iterations, translation clamp, materials),
//! - trail capacity, planet cap and color seed
//!
//! It is built once from a [`ScenarioConfig`] and never mutated afterwards.

use crate::configuration::config::ScenarioConfig;
use crate::error::ConfigError;
use crate::simulation::vector::NVec2;

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub g: f64, // gravitational constant
    pub scale: f64, // render units per physics unit
    pub sun_radius: f64, // render units
    pub planet_radius: f64, // render units
    pub orbit_speed_factor: f64, // K
    pub time_scale: f64, // frame delta multiplier
    pub velocity_iterations: u32,
    pub position_iterations: u32,
    pub max_translation: f64, // physics units per step
    pub density: f64,
    pub friction: f64,
    pub restitution: f64,
    pub trail_capacity: usize,
    pub max_planets: Option<usize>,
    pub seed: Option<u64>,
}

impl Default for Parameters {
    fn default() -> Self {
        Self::from_sections(&ScenarioConfig::default())
    }
}

impl Parameters {
    /// Validate a scenario and extract the runtime constants
    pub fn from_config(cfg: &ScenarioConfig) -> Result<Self, ConfigError> {
        let c = &cfg.constants;
        let i = &cfg.integrator;

        positive("constants.scale", c.scale)?;
        positive("constants.sun_radius", c.sun_radius)?;
        positive("constants.planet_radius", c.planet_radius)?;
        non_negative("constants.G", c.g)?;
        non_negative("constants.orbit_speed_factor", c.orbit_speed_factor)?;
        non_negative("integrator.time_scale", i.time_scale)?;
        positive("integrator.max_translation", i.max_translation)?;
        positive("integrator.density", i.density)?;
        non_negative("integrator.friction", i.friction)?;
        non_negative("integrator.restitution", i.restitution)?;
        at_least_one("integrator.velocity_iterations", i.velocity_iterations as usize)?;
        at_least_one("integrator.position_iterations", i.position_iterations as usize)?;
        at_least_one("trail.capacity", cfg.trail.capacity)?;
        if let Some(max) = cfg.world.max_planets {
            at_least_one("world.max_planets", max)?;
        }

        Ok(Self::from_sections(cfg))
    }

    fn from_sections(cfg: &ScenarioConfig) -> Self {
        let c = &cfg.constants;
        let i = &cfg.integrator;
        Self {
            g: c.g,
            scale: c.scale,
            sun_radius: c.sun_radius,
            planet_radius: c.planet_radius,
            orbit_speed_factor: c.orbit_speed_factor,
            time_scale: i.time_scale,
            velocity_iterations: i.velocity_iterations,
            position_iterations: i.position_iterations,
            max_translation: i.max_translation,
            density: i.density,
            friction: i.friction,
            restitution: i.restitution,
            trail_capacity: cfg.trail.capacity,
            max_planets: cfg.world.max_planets,
            seed: cfg.world.seed,
        }
    }

    /// Render-space position -> physics-space position
    pub fn to_physics(&self, render: NVec2) -> NVec2 {
        render / self.scale
    }

    /// Physics-space position -> render-space position
    pub fn to_render(&self, physics: NVec2) -> NVec2 {
        physics * self.scale
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid { field, value, reason: "must be finite and > 0" })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid { field, value, reason: "must be finite and >= 0" })
    }
}

fn at_least_one(field: &'static str, value: usize) -> Result<(), ConfigError> {
    if value >= 1 {
        Ok(())
    } else {
        Err(ConfigError::Invalid { field, value: value as f64, reason: "must be >= 1" })
    }
}
