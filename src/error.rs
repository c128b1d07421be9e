//! Error types for body construction and configuration loading
//!
//! - [`ValidationError`] – a physical quantity that must be positive was not
//! - [`ConfigError`]     – the configuration source is missing, unreadable or malformed

use std::fmt;
use std::io;
use std::path::PathBuf;

/// A value that has to stay strictly positive was rejected
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValidationError {
    NonPositiveMass(f64),
    NonPositiveRadius(f64),
    NonPositiveTimestep(f64),
    NonPositiveScale(f64),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NonPositiveMass(m) => write!(f, "mass must be positive, got {m}"),
            ValidationError::NonPositiveRadius(r) => write!(f, "radius must be positive, got {r}"),
            ValidationError::NonPositiveTimestep(dt) => {
                write!(f, "time step must be positive, got {dt}")
            }
            ValidationError::NonPositiveScale(s) => write!(f, "scale must be positive, got {s}"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Failure while turning a configuration source into a runnable simulation
#[derive(Debug)]
pub enum ConfigError {
    /// The file could not be opened or read at all
    Resource { path: PathBuf, source: io::Error },
    /// The content is not valid structured data, or a value has the wrong shape
    Malformed(String),
    /// A required top-level key is absent
    MissingField(&'static str),
    /// A key is present but its value is out of range
    InvalidField { field: &'static str, reason: String },
    /// A body described by the configuration violates a physical invariant
    Validation(ValidationError),
}

impl ConfigError {
    /// `true` when the source itself was unreachable, as opposed to broken content
    pub fn is_resource(&self) -> bool {
        matches!(self, ConfigError::Resource { .. })
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Resource { path, source } => {
                write!(f, "cannot read configuration file {}: {source}", path.display())
            }
            ConfigError::Malformed(msg) => write!(f, "malformed configuration: {msg}"),
            ConfigError::MissingField(field) => {
                write!(f, "missing required field '{field}' in configuration")
            }
            ConfigError::InvalidField { field, reason } => {
                write!(f, "invalid value for '{field}': {reason}")
            }
            ConfigError::Validation(err) => write!(f, "invalid body in configuration: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Resource { source, .. } => Some(source),
            ConfigError::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for ConfigError {
    fn from(err: ValidationError) -> Self {
        ConfigError::Validation(err)
    }
}
