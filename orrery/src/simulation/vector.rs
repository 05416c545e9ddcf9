//! 2D vector helpers shared by the force, orbit and collision code

use nalgebra::Vector2;

pub type NVec2 = Vector2<f64>;

/// Unit vector along `v`, or `v` unchanged when it has zero length
pub fn normalize(v: NVec2) -> NVec2 {
    let length = v.norm();
    if length != 0.0 {
        v / length
    } else {
        v
    }
}

/// `v` rescaled by `factor`
pub fn scale(v: NVec2, factor: f64) -> NVec2 {
    v * factor
}

/// `v` rotated by +90 degrees: (x, y) -> (-y, x)
pub fn perpendicular(v: NVec2) -> NVec2 {
    NVec2::new(-v.y, v.x)
}

/// True when both components are finite
pub fn is_finite(v: &NVec2) -> bool {
    v.x.is_finite() && v.y.is_finite()
}
