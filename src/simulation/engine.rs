//! Simulation driver
//!
//! `Simulation` owns the system, its parameters and the force set, and runs
//! the step loop. One step:
//!
//! 1. bodies strictly inside the central radius are accreted and dropped
//!    without being integrated,
//! 2. the rest are advanced by one semi-implicit Euler step and sampled,
//! 3. pixel/central collisions are detected on the new positions and resolved.
//!
//! Collision resolution runs after every step, not once per call.

use log::{debug, info};

use crate::simulation::collisions::{
    detect_collisions, resolve_collisions, swallowed_bodies, CollisionEvent, CollisionRecord,
};
use crate::simulation::forces::{AccelSet, CentralGravity};
use crate::simulation::integrator::euler_integrator;
use crate::simulation::params::Parameters;
use crate::simulation::states::{BodyId, CentralBody, Massive, MovingBody, System};
use crate::simulation::trajectory::{Trajectories, Trajectory};

/// Everything produced by one `simulate` call
#[derive(Debug, Clone, Default)]
pub struct SimulationRun {
    pub trajectories: Trajectories,
    pub collisions: Vec<CollisionRecord>,
}

impl SimulationRun {
    /// Empty run with one empty trajectory per id
    pub fn new(ids: impl IntoIterator<Item = BodyId>) -> Self {
        Self {
            trajectories: ids.into_iter().map(|id| (id, Trajectory::new())).collect(),
            collisions: Vec::new(),
        }
    }

    /// Collisions as report lines, oldest first
    pub fn collision_descriptions(&self) -> Vec<String> {
        self.collisions.iter().map(|c| c.to_string()).collect()
    }
}

pub struct Simulation {
    system: System,
    parameters: Parameters,
    forces: AccelSet,
}

impl Simulation {
    /// Build a simulation around `central` with `bodies` in the given order.
    /// Body ids follow that order.
    pub fn new(central: CentralBody, bodies: Vec<MovingBody>, parameters: Parameters) -> Self {
        let mut system = System::new(central);
        for body in bodies {
            system.add_body(body);
        }
        let forces = AccelSet::new().with(CentralGravity { g: parameters.g });

        Self {
            system,
            parameters,
            forces,
        }
    }

    pub fn central_body(&self) -> &CentralBody {
        &self.system.central
    }

    pub fn central_body_mut(&mut self) -> &mut CentralBody {
        &mut self.system.central
    }

    pub fn bodies(&self) -> &[MovingBody] {
        &self.system.bodies
    }

    pub fn system(&self) -> &System {
        &self.system
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn scale(&self) -> f64 {
        self.parameters.scale
    }

    pub fn dt(&self) -> f64 {
        self.parameters.dt
    }

    pub fn image_size(&self) -> (u32, u32) {
        self.parameters.image_size
    }

    pub fn gravitational_constant(&self) -> f64 {
        self.parameters.g
    }

    /// Collisions present in the current state, without resolving them
    pub fn detect_collisions(&self) -> Vec<CollisionEvent> {
        detect_collisions(&self.system, self.parameters.scale)
    }

    /// Run `steps` steps and return the trajectories and collisions they produced
    pub fn simulate(&mut self, steps: usize) -> SimulationRun {
        info!(
            "simulating {} steps with {} bodies (dt = {})",
            steps,
            self.system.body_count(),
            self.parameters.dt
        );

        let mut run = SimulationRun::new(self.system.bodies.iter().map(|b| b.id()));
        for _ in 0..steps {
            self.step(&mut run);
        }

        info!(
            "finished after {} steps: {} bodies left, {} collisions",
            steps,
            self.system.body_count(),
            run.collisions.len()
        );
        run
    }

    /// Advance one step, appending samples and collisions to `run`
    pub fn step(&mut self, run: &mut SimulationRun) {
        let step = self.system.step;
        debug!("step {}: {} bodies", step, self.system.body_count());

        // Swallowed bodies skip integration; fresh list keeps the survivors' order
        let swallowed = swallowed_bodies(&self.system);
        if !swallowed.is_empty() {
            let bodies = std::mem::take(&mut self.system.bodies);
            for body in bodies {
                if swallowed.contains(&body.id()) {
                    self.system.central.accrete(&body);
                    debug!("step {}: object {} fell into the central body", step, body.id().index() + 1);
                    run.collisions.push(CollisionRecord {
                        step,
                        event: CollisionEvent::Central { body: body.id() },
                    });
                } else {
                    self.system.bodies.push(body);
                }
            }
        }

        euler_integrator(&mut self.system, &self.forces, &self.parameters);

        for body in &self.system.bodies {
            run.trajectories
                .entry(body.id())
                .or_default()
                .push(body.position());
        }

        let events = detect_collisions(&self.system, self.parameters.scale);
        let applied = resolve_collisions(&mut self.system, events);
        run.collisions
            .extend(applied.into_iter().map(|event| CollisionRecord { step, event }));

        self.system.step += 1;
    }
}
