//! Force / acceleration contributors for the simulation
//!
//! Only the central body attracts; orbiting bodies do not pull on each other.

use log::trace;

use crate::simulation::states::{Massive, NVec2, System};

/// Collection of acceleration terms
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations for all bodies in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_accels(&self, sys: &System, out: &mut [NVec2]) {
        for a in out.iter_mut() {
            *a = NVec2::zeros();
        }
        for term in &self.terms {
            term.acceleration(sys, out);
        }
    }
}

/// Acceleration source operating on a [`System`]
/// Implementations add their contribution into `out[i]` for each body
pub trait Acceleration {
    fn acceleration(&self, sys: &System, out: &mut [NVec2]);
}

/// Newtonian attraction toward the central body, no softening
///
/// `F = g * M * m / r^2` along the unit vector toward the centre, so `a = F / m`.
pub struct CentralGravity {
    pub g: f64,
}

impl Acceleration for CentralGravity {
    fn acceleration(&self, sys: &System, out: &mut [NVec2]) {
        let centre = sys.central.position();
        let central_mass = sys.central.mass();

        for (b, a) in sys.bodies.iter().zip(out.iter_mut()) {
            let d = centre - b.position();
            let r = d.norm();
            // coincident with the centre: always swallowed before this point
            if r == 0.0 {
                continue;
            }

            let force = self.g * central_mass * b.mass() / (r * r);
            let acc = d / r * (force / b.mass());
            trace!("body {}: ax = {}, ay = {}", b.id().index() + 1, acc.x, acc.y);
            *a += acc;
        }
    }
}
