//! Per-body position history
//!
//! A trajectory only ever grows: one sample per step the body survived.
//! Records are keyed by [`BodyId`], so they stay attached to the body they
//! were created for no matter how the live collection shrinks.

use std::collections::BTreeMap;

use crate::simulation::states::{BodyId, NVec2};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    samples: Vec<NVec2>,
}

impl Trajectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, position: NVec2) {
        self.samples.push(position);
    }

    pub fn samples(&self) -> &[NVec2] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn last(&self) -> Option<&NVec2> {
        self.samples.last()
    }

    pub fn xs(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|p| p.x)
    }

    pub fn ys(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|p| p.y)
    }
}

/// Trajectories of one run, ordered by body id
pub type Trajectories = BTreeMap<BodyId, Trajectory>;
