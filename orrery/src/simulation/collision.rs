//! Planet-vs-Sun hit test
//!
//! Center-to-center in render units: a planet counts as hit once its center
//! is strictly closer than the Sun's radius. The planet's own radius is not
//! part of the threshold.

use crate::simulation::states::Sun;
use crate::simulation::vector::NVec2;

/// Render-space distance between a planet center and the Sun center
pub fn distance_to_sun(planet: NVec2, sun: &Sun) -> f64 {
    (planet - sun.position).norm()
}

pub fn hits_sun(planet: NVec2, sun: &Sun) -> bool {
    distance_to_sun(planet, sun) < sun.radius
}
