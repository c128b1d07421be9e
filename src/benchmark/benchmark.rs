//! Step throughput benchmark
//!
//! Times `Simulation::simulate` on deterministic rings of bodies of growing
//! size. Bodies sit on distinct pixels far outside the central radius so the
//! numbers measure integration and collision detection, not merging.

use std::time::Instant;

use crate::simulation::engine::Simulation;
use crate::simulation::params::Parameters;
use crate::simulation::states::{CentralBody, MovingBody, NVec2};

/// Deterministic population of `n` bodies, no rand needed
pub fn bench_population(n: usize) -> Vec<MovingBody> {
    let mut bodies = Vec::with_capacity(n);
    for i in 0..n {
        let i_f = i as f64;
        let r = 1.0e3 + 10.0 * i_f;
        let angle = i_f * 0.37;
        let position = NVec2::new(r * angle.cos(), r * angle.sin());
        // roughly circular speed for g = 1, M = 1e6
        let speed = (1.0e6 / r).sqrt();
        let velocity = NVec2::new(-speed * angle.sin(), speed * angle.cos());

        if let Ok(body) = MovingBody::new(position, velocity, 1.0) {
            bodies.push(body);
        }
    }
    bodies
}

pub fn bench_simulate() {
    let ns = [100, 200, 400, 800, 1600, 3200, 6400];
    let steps = 100;

    for n in ns {
        let (Ok(central), Ok(parameters)) = (
            CentralBody::new(1.0e6, 1.0),
            Parameters::new(1.0e-3, 1.0e-3, (800, 800)),
        ) else {
            return;
        };
        let parameters = parameters.with_gravitational_constant(1.0);
        let mut sim = Simulation::new(central, bench_population(n), parameters);

        let t0 = Instant::now();
        let run = sim.simulate(steps);
        let elapsed = t0.elapsed().as_secs_f64();

        println!(
            "N = {n:5}, steps = {steps}, total = {:8.6} s, per step = {:10.8} s, collisions = {}",
            elapsed,
            elapsed / steps as f64,
            run.collisions.len()
        );
    }
}
