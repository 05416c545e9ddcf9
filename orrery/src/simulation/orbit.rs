//! Launch velocity for freshly spawned planets
//!
//! A planet starts moving along the +90 degree rotation of the Sun->planet
//! line, at `sqrt(g * sun_radius / r) * orbit_speed_factor`, where `r` is
//! the separation in physics units. The factor is a tuning knob picked so
//! orbits look right at the default `g` and `scale`.

use crate::simulation::params::Parameters;
use crate::simulation::vector::{normalize, perpendicular, scale, NVec2};

/// Launch speed at physics distance `r`, zero when `r` is not positive
pub fn orbital_speed(p: &Parameters, r: f64) -> f64 {
    if r > 0.0 {
        ((p.g * p.sun_radius) / r).sqrt() * p.orbit_speed_factor
    } else {
        0.0
    }
}

/// Initial velocity (physics units / s) for a planet spawned at `planet`
/// with the Sun at `sun`, both in render units.
///
/// Spawning exactly on the Sun's center yields a zero velocity.
pub fn initial_velocity(p: &Parameters, planet: NVec2, sun: NVec2) -> NVec2 {
    let direction = planet - sun;
    let distance = direction.norm() / p.scale;
    if distance > 0.0 {
        let tangent = normalize(perpendicular(direction));
        scale(tangent, orbital_speed(p, distance))
    } else {
        NVec2::zeros()
    }
}
