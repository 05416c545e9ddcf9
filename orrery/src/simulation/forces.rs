//! Force contributors acting on planets
//!
//! Every term is a pure function of the planet's and the Sun's current
//! positions, in physics units. Terms are summed by [`ForceSet`]; planets
//! never see each other.

use crate::simulation::params::Parameters;
use crate::simulation::vector::{normalize, scale, NVec2};

/// Collection of force terms (gravity, drag, etc.)
/// Each term implements [`CentralForce`] and their contributions are summed
/// into a single force vector per planet
pub struct ForceSet {
    terms: Vec<Box<dyn CentralForce + Send + Sync>>,
}

impl Default for ForceSet {
    fn default() -> Self {
        Self::new()
    }
}

impl ForceSet {
    /// Create an empty force set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add a force term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: CentralForce + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Total force on a planet at `planet` from a center fixed at `sun`
    pub fn total_force(&self, planet: NVec2, sun: NVec2) -> NVec2 {
        self.terms
            .iter()
            .fold(NVec2::zeros(), |acc, term| acc + term.force(planet, sun))
    }
}

/// A force that depends only on a planet's position and the fixed center
pub trait CentralForce {
    fn force(&self, planet: NVec2, sun: NVec2) -> NVec2;
}

/// Inverse-square attraction toward the Sun
///
/// The radii stand in for masses, so the magnitude at distance `d` is
/// `g * sun_radius * planet_radius / d^2`. Coincident positions produce no
/// force at all.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunGravity {
    pub g: f64, // gravitational constant
    pub sun_radius: f64, // mass proxy of the Sun
    pub planet_radius: f64, // mass proxy of the planet
}

impl SunGravity {
    pub fn from_params(p: &Parameters) -> Self {
        Self {
            g: p.g,
            sun_radius: p.sun_radius,
            planet_radius: p.planet_radius,
        }
    }

    /// Magnitude at physics distance `d`, zero for `d == 0`
    pub fn magnitude(&self, d: f64) -> f64 {
        if d > 0.0 {
            (self.g * self.sun_radius * self.planet_radius) / (d * d)
        } else {
            0.0
        }
    }
}

impl CentralForce for SunGravity {
    fn force(&self, planet: NVec2, sun: NVec2) -> NVec2 {
        // Points from the planet toward the Sun
        let direction = sun - planet;
        let d = direction.norm();
        if d > 0.0 {
            scale(normalize(direction), self.magnitude(d))
        } else {
            NVec2::zeros()
        }
    }
}
