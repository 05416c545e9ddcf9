//! Rigid-body stepping behind a narrow backend interface
//!
//! The simulation loop only ever talks to a [`PhysicsBackend`]: it creates
//! bodies, feeds them forces and initial velocities, steps the whole world
//! once per frame and reads positions/velocities back. Everything handed
//! across this boundary is in physics units.
//!
//! [`EulerBackend`] is the built-in implementation: a fixed-step
//! semi-implicit Euler integrator with a per-step translation clamp.

use std::collections::BTreeMap;
use std::f64::consts::PI;

use crate::simulation::vector::NVec2;

/// Opaque handle to a body owned by a backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyHandle(pub u64);

/// Everything a backend needs to create a dynamic circular body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyDef {
    pub position: NVec2, // physics units
    pub radius: f64, // physics units
    pub density: f64,
    pub friction: f64,
    pub restitution: f64,
}

impl BodyDef {
    /// Mass of a uniform disc with this radius and density
    pub fn mass(&self) -> f64 {
        self.density * PI * self.radius * self.radius
    }
}

/// The physics-step primitive used by the simulation loop.
///
/// Forces applied between two `step` calls accumulate and are consumed by
/// the next `step`. Reads on a destroyed or unknown handle return `None`.
pub trait PhysicsBackend {
    fn create_body(&mut self, def: BodyDef) -> BodyHandle;
    fn destroy_body(&mut self, handle: BodyHandle);

    /// Continuous force, applied at the center of mass for the next step
    fn apply_force(&mut self, handle: BodyHandle, force: NVec2);
    fn set_velocity(&mut self, handle: BodyHandle, velocity: NVec2);

    /// Advance every body by `dt` seconds
    fn step(&mut self, dt: f64, velocity_iterations: u32, position_iterations: u32);

    fn position(&self, handle: BodyHandle) -> Option<NVec2>;
    fn velocity(&self, handle: BodyHandle) -> Option<NVec2>;
    fn body_count(&self) -> usize;
}

#[derive(Debug, Clone)]
struct RigidBody {
    def: BodyDef,
    inv_mass: f64,
    x: NVec2, // position
    v: NVec2, // velocity
    force: NVec2, // accumulated since last step
}

/// Semi-implicit Euler backend
///
/// Per step and per body:
/// - `v += dt * F / m`
/// - if `|v * dt|` exceeds `max_translation`, `v` is scaled down to it
/// - `x += dt * v`
/// - accumulated force is cleared
///
/// Bodies never collide with each other; the iteration counts are recorded
/// but there are no contacts for them to resolve.
#[derive(Debug, Clone)]
pub struct EulerBackend {
    bodies: BTreeMap<BodyHandle, RigidBody>,
    next_handle: u64,
    max_translation: f64,
    last_iterations: (u32, u32),
    steps: u64,
}

impl EulerBackend {
    pub fn new(max_translation: f64) -> Self {
        Self {
            bodies: BTreeMap::new(),
            next_handle: 0,
            max_translation,
            last_iterations: (0, 0),
            steps: 0,
        }
    }

    /// Iteration counts passed to the most recent `step`
    pub fn last_iterations(&self) -> (u32, u32) {
        self.last_iterations
    }

    /// Number of `step` calls so far
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn mass(&self, handle: BodyHandle) -> Option<f64> {
        self.bodies.get(&handle).map(|b| b.def.mass())
    }
}

impl Default for EulerBackend {
    fn default() -> Self {
        Self::new(2.0)
    }
}

impl PhysicsBackend for EulerBackend {
    fn create_body(&mut self, def: BodyDef) -> BodyHandle {
        let handle = BodyHandle(self.next_handle);
        self.next_handle += 1;

        let mass = def.mass();
        let inv_mass = if mass > 0.0 { mass.recip() } else { 0.0 };

        self.bodies.insert(
            handle,
            RigidBody {
                def,
                inv_mass,
                x: def.position,
                v: NVec2::zeros(),
                force: NVec2::zeros(),
            },
        );
        handle
    }

    fn destroy_body(&mut self, handle: BodyHandle) {
        self.bodies.remove(&handle);
    }

    fn apply_force(&mut self, handle: BodyHandle, force: NVec2) {
        if let Some(b) = self.bodies.get_mut(&handle) {
            b.force += force;
        }
    }

    fn set_velocity(&mut self, handle: BodyHandle, velocity: NVec2) {
        if let Some(b) = self.bodies.get_mut(&handle) {
            b.v = velocity;
        }
    }

    fn step(&mut self, dt: f64, velocity_iterations: u32, position_iterations: u32) {
        self.last_iterations = (velocity_iterations, position_iterations);
        self.steps += 1;
        if dt <= 0.0 {
            for b in self.bodies.values_mut() {
                b.force = NVec2::zeros();
            }
            return;
        }

        let max2 = self.max_translation * self.max_translation;
        for b in self.bodies.values_mut() {
            // Kick: v_n+1 = v_n + dt * F / m
            b.v += dt * b.inv_mass * b.force;

            // Clamp the distance covered this step
            let translation = dt * b.v;
            let t2 = translation.norm_squared();
            if t2 > max2 {
                b.v *= self.max_translation / t2.sqrt();
            }

            // Drift: x_n+1 = x_n + dt * v_n+1
            b.x += dt * b.v;

            b.force = NVec2::zeros();
        }
    }

    fn position(&self, handle: BodyHandle) -> Option<NVec2> {
        self.bodies.get(&handle).map(|b| b.x)
    }

    fn velocity(&self, handle: BodyHandle) -> Option<NVec2> {
        self.bodies.get(&handle).map(|b| b.v)
    }

    fn body_count(&self) -> usize {
        self.bodies.len()
    }
}
