//! Configuration types for loading and saving simulation setups.
//!
//! A configuration describes:
//!
//! - the central body (`central_mass`, `central_radius`)
//! - numerical settings (`scale`, `time_step`, optional `gravitational_constant`)
//! - the output image size
//! - the ordered list of orbiting objects
//!
//! # JSON format
//!
//! ```json
//! {
//!   "central_mass": 5.972e24,
//!   "central_radius": 6.371e6,
//!   "scale": 1.0e5,
//!   "image_size": [800, 800],
//!   "time_step": 10.0,
//!   "objects": [
//!     { "x": 7.0e6, "y": 0.0, "vx": 0.0, "vy": 7546.0, "mass": 1000.0 },
//!     { "x": -4.2e7, "y": 0.0, "mass": 500.0, "vy": -3075.0 }
//!   ]
//! }
//! ```
//!
//! YAML files (`.yaml` / `.yml`) with the same keys are accepted as well.
//! The same shape is written back as the state snapshot, so a snapshot can be
//! loaded to resume a run.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ConfigError;
use crate::simulation::params::GRAVITATIONAL_CONSTANT;

/// Top-level keys that must be present, in the order they are checked
pub const REQUIRED_FIELDS: [&str; 6] = [
    "central_mass",
    "central_radius",
    "scale",
    "image_size",
    "time_step",
    "objects",
];

fn default_gravitational_constant() -> f64 {
    GRAVITATIONAL_CONSTANT
}

/// Initial state of one orbiting object
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ObjectConfig {
    pub x: f64,
    pub y: f64,
    #[serde(default, alias = "velocity_x")]
    pub vx: f64,
    #[serde(default, alias = "velocity_y")]
    pub vy: f64,
    pub mass: f64,
}

/// Complete simulation setup
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub central_mass: f64,
    pub central_radius: f64,
    pub scale: f64, // length units per pixel
    pub image_size: (u32, u32),
    pub time_step: f64,
    #[serde(default = "default_gravitational_constant")]
    pub gravitational_constant: f64,
    pub objects: Vec<ObjectConfig>,
}

impl SimulationConfig {
    /// Range checks on the numerical settings. Body masses and the central
    /// radius are checked when the simulation is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(ConfigError::InvalidField {
                field: "scale",
                reason: format!("expected a positive number, got {}", self.scale),
            });
        }
        if !(self.time_step.is_finite() && self.time_step > 0.0) {
            return Err(ConfigError::InvalidField {
                field: "time_step",
                reason: format!("expected a positive number, got {}", self.time_step),
            });
        }
        Ok(())
    }
}

/// Syntax of a configuration source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    /// YAML for `.yaml`/`.yml`, JSON for everything else
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                ConfigFormat::Yaml
            }
            _ => ConfigFormat::Json,
        }
    }
}

/// Parse and validate a configuration held in memory
pub fn parse_config(text: &str, format: ConfigFormat) -> Result<SimulationConfig, ConfigError> {
    let value: Value = match format {
        ConfigFormat::Json => serde_json::from_str(text)
            .map_err(|e| ConfigError::Malformed(format!("not valid JSON: {e}")))?,
        ConfigFormat::Yaml => serde_yaml::from_str(text)
            .map_err(|e| ConfigError::Malformed(format!("not valid YAML: {e}")))?,
    };

    let map = value
        .as_object()
        .ok_or_else(|| ConfigError::Malformed("top level must be a mapping".to_string()))?;
    for field in REQUIRED_FIELDS {
        if !map.contains_key(field) {
            return Err(ConfigError::MissingField(field));
        }
    }

    let config: SimulationConfig =
        serde_json::from_value(value).map_err(|e| ConfigError::Malformed(e.to_string()))?;
    config.validate()?;
    Ok(config)
}

/// Read, parse and validate a configuration file
///
/// A missing or unreadable file gives [`ConfigError::Resource`]; anything
/// wrong with the content gives one of the other variants.
pub fn load_config(path: impl AsRef<Path>) -> Result<SimulationConfig, ConfigError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Resource {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config(&text, ConfigFormat::from_path(path)).map_err(|err| match err {
        ConfigError::Malformed(msg) => ConfigError::Malformed(format!("{}: {msg}", path.display())),
        other => other,
    })
}
