//! Build simulations from configuration and snapshot them back
//!
//! `SimulationConfig` is the file-facing shape; `Simulation` is the runtime
//! bundle (system state, parameters, force set). The two conversions here are
//! inverse to each other for the state they carry, which is what makes a
//! saved snapshot resumable.

use crate::configuration::config::{ObjectConfig, SimulationConfig};
use crate::error::ConfigError;
use crate::simulation::engine::Simulation;
use crate::simulation::params::Parameters;
use crate::simulation::states::{CentralBody, Massive, MovingBody, NVec2};

impl Simulation {
    /// Validate every body and setting, then assemble the simulation.
    /// Nothing runs if any part is rejected.
    pub fn from_config(cfg: &SimulationConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;

        let central = CentralBody::new(cfg.central_mass, cfg.central_radius)?;

        // Bodies: map `ObjectConfig` -> runtime `MovingBody` using nalgebra vectors
        let bodies = cfg
            .objects
            .iter()
            .map(|oc: &ObjectConfig| {
                MovingBody::new(NVec2::new(oc.x, oc.y), NVec2::new(oc.vx, oc.vy), oc.mass)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let parameters = Parameters::new(cfg.time_step, cfg.scale, cfg.image_size)?
            .with_gravitational_constant(cfg.gravitational_constant);

        Ok(Simulation::new(central, bodies, parameters))
    }

    /// Current state in configuration form, surviving bodies only
    pub fn to_config(&self) -> SimulationConfig {
        let central = self.central_body();
        let params = self.parameters();

        SimulationConfig {
            central_mass: central.mass(),
            central_radius: central.radius(),
            scale: params.scale,
            image_size: params.image_size,
            time_step: params.dt,
            gravitational_constant: params.g,
            objects: self
                .bodies()
                .iter()
                .map(|b| ObjectConfig {
                    x: b.x(),
                    y: b.y(),
                    vx: b.vx(),
                    vy: b.vy(),
                    mass: b.mass(),
                })
                .collect(),
        }
    }
}
