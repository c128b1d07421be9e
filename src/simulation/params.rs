//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - integration step size `dt`,
//! - length units per display pixel (`scale`), used for collision binning and plotting,
//! - output image size,
//! - gravitational constant `g`, injected rather than global

use crate::error::ValidationError;

/// Newtonian gravitational constant in SI units
pub const GRAVITATIONAL_CONSTANT: f64 = 6.67430e-11;

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub g: f64, // gravitational constant
    pub dt: f64, // step size
    pub scale: f64, // length units per pixel
    pub image_size: (u32, u32), // width, height in pixels
}

impl Parameters {
    pub fn new(dt: f64, scale: f64, image_size: (u32, u32)) -> Result<Self, ValidationError> {
        if !(dt > 0.0) {
            return Err(ValidationError::NonPositiveTimestep(dt));
        }
        if !(scale > 0.0) {
            return Err(ValidationError::NonPositiveScale(scale));
        }
        Ok(Self {
            g: GRAVITATIONAL_CONSTANT,
            dt,
            scale,
            image_size,
        })
    }

    pub fn with_gravitational_constant(mut self, g: f64) -> Self {
        self.g = g;
        self
    }
}
