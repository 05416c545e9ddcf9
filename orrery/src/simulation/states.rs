//! Core state types for the orrery.
//!
//! - `Sun`    fixed central mass, never moves, lives for the whole run
//! - `Planet` orbiting point mass bound to a physics-backend body
//! - `Body`   borrowed view over either, for code that treats them alike
//! - `World`  the Sun plus live planets in spawn order
//!
//! Positions stored here are in render units. Velocities are in physics
//! units per second, exactly as read back from the backend.

use crate::simulation::integrator::BodyHandle;
use crate::simulation::trail::TrailBuffer;
use crate::simulation::vector::NVec2;

/// Stable identity of a planet for the whole run; ids are never reused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlanetId(pub u64);

/// Display color, carried for rendering only
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Debug, Clone)]
pub struct Sun {
    pub position: NVec2, // render units
    pub radius: f64, // render units
}

#[derive(Debug, Clone)]
pub struct Planet {
    pub id: PlanetId,
    pub handle: BodyHandle, // backend body this planet mirrors
    pub position: NVec2, // render units
    pub velocity: NVec2, // physics units / s
    pub radius: f64, // render units
    pub color: Rgb,
    pub trail: TrailBuffer,
}

/// Either kind of body, borrowed
#[derive(Debug, Clone, Copy)]
pub enum Body<'a> {
    Fixed(&'a Sun),
    Orbiting(&'a Planet),
}

impl Body<'_> {
    pub fn position(&self) -> NVec2 {
        match self {
            Body::Fixed(sun) => sun.position,
            Body::Orbiting(planet) => planet.position,
        }
    }

    pub fn radius(&self) -> f64 {
        match self {
            Body::Fixed(sun) => sun.radius,
            Body::Orbiting(planet) => planet.radius,
        }
    }

    /// Fixed bodies have no velocity
    pub fn velocity(&self) -> NVec2 {
        match self {
            Body::Fixed(_) => NVec2::zeros(),
            Body::Orbiting(planet) => planet.velocity,
        }
    }

    pub fn is_fixed(&self) -> bool {
        matches!(self, Body::Fixed(_))
    }
}

#[derive(Debug, Clone)]
pub struct World {
    pub sun: Sun,
    pub planets: Vec<Planet>, // spawn order
}

impl World {
    pub fn new(sun: Sun) -> Self {
        Self {
            sun,
            planets: Vec::new(),
        }
    }

    pub fn planet(&self, id: PlanetId) -> Option<&Planet> {
        self.planets.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: PlanetId) -> bool {
        self.planet(id).is_some()
    }

    /// Sun first, then planets in spawn order
    pub fn bodies(&self) -> impl Iterator<Item = Body<'_>> + '_ {
        std::iter::once(Body::Fixed(&self.sun)).chain(self.planets.iter().map(Body::Orbiting))
    }
}
