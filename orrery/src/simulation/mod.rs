pub mod vector;
pub mod states;
pub mod params;
pub mod forces;
pub mod orbit;
pub mod integrator;
pub mod collision;
pub mod trail;
pub mod view;
pub mod engine;
pub mod scenario;
