//! JSON snapshot of the final simulation state
//!
//! The snapshot uses the configuration format, so `load_state` is simply
//! `load_config` and a saved run can be picked up where it stopped.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::configuration::config::{load_config, SimulationConfig};
use crate::error::ConfigError;
use crate::simulation::engine::Simulation;

pub fn save_state(sim: &Simulation, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .with_context(|| format!("failed to create state file {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, &sim.to_config())
        .with_context(|| format!("failed to serialize state to {}", path.display()))?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

pub fn load_state(path: impl AsRef<Path>) -> Result<SimulationConfig, ConfigError> {
    load_config(path)
}
