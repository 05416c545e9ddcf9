pub mod error;
pub mod simulation;
pub mod configuration;
#[cfg(feature = "viewer")]
pub mod visualization;
pub mod benchmark;

pub use error::{ConfigError, SimError};
pub use simulation::vector::NVec2;
pub use simulation::states::{Body, Planet, PlanetId, Rgb, Sun, World};
pub use simulation::params::Parameters;
pub use simulation::forces::{CentralForce, ForceSet, SunGravity};
pub use simulation::integrator::{BodyDef, BodyHandle, EulerBackend, PhysicsBackend};
pub use simulation::trail::TrailBuffer;
pub use simulation::engine::{Engine, SpawnRequest, TickReport};
pub use simulation::view::{FrameView, PlanetView, SunView};
pub use simulation::scenario::Scenario;

pub use configuration::config::{ConstantsConfig, IntegratorConfig, ScenarioConfig, TrailConfig, WorldConfig};

#[cfg(feature = "viewer")]
pub use visualization::viewer::run_2d;

pub use benchmark::benchmark::bench_tick;
