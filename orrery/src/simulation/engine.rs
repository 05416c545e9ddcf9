//! The per-frame simulation loop
//!
//! One `tick` runs, in order:
//! 1. spawn phase: queued spawn requests become planets
//! 2. force phase: Sun gravity from the positions of the previous frame
//! 3. integration: a single backend step over every body
//! 4. read back, collision pruning and trail update, planet by planet
//!
//! The planet count is only bounded by `max_planets` when one is configured;
//! otherwise every spawn adds a planet for good unless it falls into the Sun.

use log::{debug, error, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{Result, SimError};
use crate::simulation::collision::hits_sun;
use crate::simulation::forces::{ForceSet, SunGravity};
use crate::simulation::integrator::{BodyDef, EulerBackend, PhysicsBackend};
use crate::simulation::orbit::initial_velocity;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Planet, PlanetId, Rgb, Sun, World};
use crate::simulation::trail::TrailBuffer;
use crate::simulation::vector::{is_finite, NVec2};
use crate::simulation::view::FrameView;

/// Ask for a planet at a render-space position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnRequest {
    pub position: NVec2,
}

impl SpawnRequest {
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            position: NVec2::new(x, y),
        }
    }
}

/// What a single tick did
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    pub frame: u64, // index of the tick, starting at 0
    pub dt: f64, // simulated seconds actually stepped
    pub spawned: Vec<PlanetId>,
    pub removed: Vec<PlanetId>,
}

pub struct Engine<B: PhysicsBackend = EulerBackend> {
    params: Parameters,
    forces: ForceSet,
    backend: B,
    world: World,
    pending: Vec<SpawnRequest>,
    rng: StdRng,
    next_id: u64,
    frame: u64,
}

impl Engine<EulerBackend> {
    /// Engine on the built-in Euler backend, Sun at `sun_position` (render units)
    pub fn new(params: Parameters, sun_position: NVec2) -> Self {
        let backend = EulerBackend::new(params.max_translation);
        Self::with_backend(params, sun_position, backend)
    }
}

impl<B: PhysicsBackend> Engine<B> {
    pub fn with_backend(params: Parameters, sun_position: NVec2, backend: B) -> Self {
        let forces = ForceSet::new().with(SunGravity::from_params(&params));
        let rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let sun = Sun {
            position: sun_position,
            radius: params.sun_radius,
        };

        Self {
            params,
            forces,
            backend,
            world: World::new(sun),
            pending: Vec::new(),
            rng,
            next_id: 0,
            frame: 0,
        }
    }

    /// Replace the force terms (Sun gravity by default)
    pub fn with_forces(mut self, forces: ForceSet) -> Self {
        self.forces = forces;
        self
    }

    pub fn params(&self) -> &Parameters {
        &self.params
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Ticks completed so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn planet_count(&self) -> usize {
        self.world.planets.len()
    }

    pub fn pending_spawns(&self) -> usize {
        self.pending.len()
    }

    pub fn view(&self) -> FrameView<'_> {
        FrameView::of(&self.world, self.frame)
    }

    /// Queue a planet for the spawn phase of the next tick
    pub fn request_spawn(&mut self, request: SpawnRequest) -> Result<()> {
        self.admit(&request)?;
        self.pending.push(request);
        Ok(())
    }

    /// Create a planet right away, outside of a tick
    pub fn spawn_now(&mut self, request: SpawnRequest) -> Result<PlanetId> {
        self.admit(&request)?;
        Ok(self.create_planet(request.position))
    }

    fn admit(&self, request: &SpawnRequest) -> Result<()> {
        if !is_finite(&request.position) {
            return Err(SimError::NonFiniteSpawn {
                x: request.position.x,
                y: request.position.y,
            });
        }
        if let Some(max) = self.params.max_planets {
            if self.world.planets.len() + self.pending.len() >= max {
                return Err(SimError::PlanetLimit(max));
            }
        }
        Ok(())
    }

    fn create_planet(&mut self, position: NVec2) -> PlanetId {
        let p = &self.params;
        let def = BodyDef {
            position: p.to_physics(position),
            radius: p.planet_radius / p.scale,
            density: p.density,
            friction: p.friction,
            restitution: p.restitution,
        };
        let handle = self.backend.create_body(def);

        let velocity = initial_velocity(p, position, self.world.sun.position);
        self.backend.set_velocity(handle, velocity);

        let color = Rgb {
            r: self.rng.gen(),
            g: self.rng.gen(),
            b: self.rng.gen(),
        };

        let id = PlanetId(self.next_id);
        self.next_id += 1;

        debug!(
            "planet {} spawned at ({:.1}, {:.1}), launch speed {:.4}",
            id.0,
            position.x,
            position.y,
            velocity.norm()
        );

        self.world.planets.push(Planet {
            id,
            handle,
            position,
            velocity,
            radius: p.planet_radius,
            color,
            trail: TrailBuffer::new(p.trail_capacity),
        });
        id
    }

    /// Advance the world by one frame of `frame_seconds` wall-clock time.
    ///
    /// The backend is stepped by `frame_seconds * time_scale`. A negative or
    /// non-finite delta is rejected before anything changes; queued spawns
    /// then wait for the next valid tick.
    pub fn tick(&mut self, frame_seconds: f64) -> Result<TickReport> {
        if !frame_seconds.is_finite() || frame_seconds < 0.0 {
            return Err(SimError::InvalidDelta(frame_seconds));
        }
        let dt = frame_seconds * self.params.time_scale;

        // Spawn phase
        let requests = std::mem::take(&mut self.pending);
        let spawned: Vec<PlanetId> = requests
            .into_iter()
            .map(|r| self.create_planet(r.position))
            .collect();

        // Force phase: every force is computed before any body moves
        let sun = self.params.to_physics(self.world.sun.position);
        for planet in &self.world.planets {
            let force = self
                .forces
                .total_force(self.params.to_physics(planet.position), sun);
            self.backend.apply_force(planet.handle, force);
        }

        self.backend.step(
            dt,
            self.params.velocity_iterations,
            self.params.position_iterations,
        );

        // Read back, prune, record
        let Self {
            params,
            backend,
            world,
            ..
        } = &mut *self;
        let sun = &world.sun;
        let mut removed = Vec::new();

        world.planets.retain_mut(|planet| {
            match (backend.position(planet.handle), backend.velocity(planet.handle)) {
                (Some(x), Some(v)) => {
                    planet.position = params.to_render(x);
                    planet.velocity = v;
                }
                _ => {
                    error!("planet {} lost its backend body, dropping it", planet.id.0);
                    removed.push(planet.id);
                    return false;
                }
            }

            if hits_sun(planet.position, sun) {
                debug!(
                    "planet {} hit the sun at ({:.1}, {:.1})",
                    planet.id.0, planet.position.x, planet.position.y
                );
                backend.destroy_body(planet.handle);
                removed.push(planet.id);
                return false;
            }

            planet.trail.push(planet.position);
            true
        });

        let report = TickReport {
            frame: self.frame,
            dt,
            spawned,
            removed,
        };
        self.frame += 1;

        trace!(
            "tick {}: dt {:.5}, {} planets, +{} -{}",
            report.frame,
            report.dt,
            self.world.planets.len(),
            report.spawned.len(),
            report.removed.len()
        );

        Ok(report)
    }
}
