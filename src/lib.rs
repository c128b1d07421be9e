pub mod error;
pub mod simulation;
pub mod configuration;
pub mod output;
pub mod visualization;
pub mod benchmark;

pub use error::{ConfigError, ValidationError};

pub use simulation::states::{distance, Body, BodyId, CentralBody, Massive, MovingBody, NVec2, System};
pub use simulation::params::{Parameters, GRAVITATIONAL_CONSTANT};
pub use simulation::forces::{AccelSet, Acceleration, CentralGravity};
pub use simulation::integrator::euler_integrator;
pub use simulation::collisions::{
    detect_collisions, merge_bodies, pixel_of, resolve_collisions, CollisionEvent, CollisionRecord,
};
pub use simulation::trajectory::{Trajectories, Trajectory};
pub use simulation::engine::{Simulation, SimulationRun};

pub use configuration::config::{load_config, parse_config, ConfigFormat, ObjectConfig, SimulationConfig};

pub use output::report::{format_collision_report, write_collision_report};
pub use output::snapshot::{load_state, save_state};

pub use visualization::plot::render_trajectories;

pub use benchmark::benchmark::bench_simulate;
