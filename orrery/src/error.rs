//! Error types for the orrery core and its configuration layer.

use thiserror::Error;

/// Rejections raised by the simulation loop.
///
/// None of these corrupt the world: a rejected spawn or tick leaves the
/// state exactly as it was before the call.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    #[error("spawn position ({x}, {y}) is not finite")]
    NonFiniteSpawn { x: f64, y: f64 },

    #[error("frame delta {0} must be finite and non-negative")]
    InvalidDelta(f64),

    #[error("planet limit of {0} reached")]
    PlanetLimit(usize),
}

/// Errors raised while loading or validating a scenario.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid `{field}` = {value}: {reason}")]
    Invalid {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
