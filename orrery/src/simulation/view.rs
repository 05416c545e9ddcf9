//! Read-only frame snapshot handed to whatever draws the scene

use crate::simulation::states::{PlanetId, Rgb, World};
use crate::simulation::trail::TrailBuffer;
use crate::simulation::vector::NVec2;

#[derive(Debug, Clone, Copy)]
pub struct SunView {
    pub position: NVec2,
    pub radius: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct PlanetView<'a> {
    pub id: PlanetId,
    pub position: NVec2,
    pub radius: f64,
    pub color: Rgb,
    pub trail: &'a TrailBuffer, // oldest to newest
}

/// Everything a renderer needs for one frame, all in render units
#[derive(Debug, Clone)]
pub struct FrameView<'a> {
    pub frame: u64, // ticks completed so far
    pub sun: SunView,
    pub planets: Vec<PlanetView<'a>>,
}

impl<'a> FrameView<'a> {
    pub fn of(world: &'a World, frame: u64) -> Self {
        Self {
            frame,
            sun: SunView {
                position: world.sun.position,
                radius: world.sun.radius,
            },
            planets: world
                .planets
                .iter()
                .map(|p| PlanetView {
                    id: p.id,
                    position: p.position,
                    radius: p.radius,
                    color: p.color,
                    trail: &p.trail,
                })
                .collect(),
        }
    }

    pub fn planet(&self, id: PlanetId) -> Option<&PlanetView<'a>> {
        self.planets.iter().find(|p| p.id == id)
    }
}
