use std::time::Instant;

use crate::simulation::engine::{Engine, SpawnRequest};
use crate::simulation::params::Parameters;
use crate::simulation::vector::NVec2;

/// Helper to build an engine with `n` planets on rings around the Sun
fn make_engine(n: usize) -> Engine {
    let params = Parameters {
        seed: Some(42),
        ..Parameters::default()
    };
    let sun = NVec2::new(400.0, 300.0);
    let mut engine = Engine::new(params, sun);

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed, all well outside the Sun
        let r = 120.0 + (i_f * 0.37).sin().abs() * 200.0;
        let theta = i_f * 0.13;
        let request = SpawnRequest::at(sun.x + r * theta.cos(), sun.y + r * theta.sin());
        if let Err(e) = engine.spawn_now(request) {
            log::warn!("bench spawn {i} dropped: {e}");
        }
    }
    engine
}

/// Time `Engine::tick` for a range of planet counts
/// Output is CSV, paste it straight into a spreadsheet
pub fn bench_tick() {
    println!("N,ms_per_tick,survivors");

    for n in [100, 200, 400, 800, 1600, 3200, 6400, 12800] {
        // Small n: average over more ticks to smooth noise
        let ticks = if n <= 1600 { 120 } else { 20 };
        let mut engine = make_engine(n);

        // Warm up
        let _ = engine.tick(1.0 / 60.0);

        let t0 = Instant::now();
        for _ in 0..ticks {
            if let Err(e) = engine.tick(1.0 / 60.0) {
                log::warn!("bench tick failed: {e}");
            }
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / ticks as f64;

        println!("{},{:.6},{}", n, ms, engine.planet_count());
    }
}
