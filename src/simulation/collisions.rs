//! Collision detection and resolution
//!
//! Two kinds of collision exist:
//! - an orbiting body reaches the central body and is accreted into it
//! - two orbiting bodies land on the same display pixel and merge
//!
//! Pixel binning is an approximation: moving bodies have no radius, so two of
//! them collide exactly when `position / scale`, truncated toward zero, gives
//! the same integer pixel.

use std::collections::HashMap;
use std::collections::HashSet;
use std::fmt;

use log::debug;

use crate::simulation::states::{BodyId, Massive, MovingBody, NVec2, System};

/// A single detected collision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionEvent {
    /// `body` hit the central body
    Central { body: BodyId },
    /// `absorbed` shares a pixel with `survivor`, which keeps the merged result
    Merge { survivor: BodyId, absorbed: BodyId },
}

/// An applied collision, stamped with the step it happened in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionRecord {
    pub step: usize,
    pub event: CollisionEvent,
}

impl fmt::Display for CollisionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.event {
            CollisionEvent::Central { body } => write!(
                f,
                "Step {}: object {} collided with the central body",
                self.step,
                body.index() + 1
            ),
            CollisionEvent::Merge { survivor, absorbed } => write!(
                f,
                "Step {}: object {} merged into object {}",
                self.step,
                absorbed.index() + 1,
                survivor.index() + 1
            ),
        }
    }
}

/// Integer pixel a position falls in; `as` truncates toward zero
pub fn pixel_of(position: &NVec2, scale: f64) -> (i64, i64) {
    ((position.x / scale) as i64, (position.y / scale) as i64)
}

/// Bodies strictly inside the central radius
pub fn swallowed_bodies(sys: &System) -> Vec<BodyId> {
    sys.bodies
        .iter()
        .filter(|b| sys.central.contains(*b))
        .map(|b| b.id())
        .collect()
}

/// Find every pixel-sharing pair and every body touching the central body
///
/// Bodies are visited in order. The first body seen on a pixel owns it; each
/// later body on the same pixel yields one `Merge` with that owner. A central
/// check (`r <= radius`) follows the pixel check of the same body.
pub fn detect_collisions(sys: &System, scale: f64) -> Vec<CollisionEvent> {
    let mut pixels: HashMap<(i64, i64), BodyId> = HashMap::with_capacity(sys.bodies.len());
    let mut events = Vec::new();

    for b in &sys.bodies {
        let key = pixel_of(&b.position(), scale);
        match pixels.get(&key) {
            Some(&owner) => events.push(CollisionEvent::Merge {
                survivor: owner,
                absorbed: b.id(),
            }),
            None => {
                pixels.insert(key, b.id());
            }
        }

        if sys.central.touches(b) {
            events.push(CollisionEvent::Central { body: b.id() });
        }
    }

    events
}

/// Merge two bodies, conserving mass and momentum
///
/// The result sits at the centre of mass, moves with the momentum-weighted
/// velocity and keeps the id of `a`.
pub fn merge_bodies(a: &MovingBody, b: &MovingBody) -> MovingBody {
    let total_mass = a.mass() + b.mass();
    let position = (a.position() * a.mass() + b.position() * b.mass()) / total_mass;
    let velocity = (a.momentum() + b.momentum()) / total_mass;
    MovingBody::from_parts(a.id(), position, velocity, total_mass)
}

/// Apply events in order and return the ones that took effect
///
/// An event that names a body already consumed earlier in the list is
/// skipped. Accretion leaves the central position untouched.
pub fn resolve_collisions(sys: &mut System, events: Vec<CollisionEvent>) -> Vec<CollisionEvent> {
    let mut consumed: HashSet<BodyId> = HashSet::new();
    let mut applied = Vec::with_capacity(events.len());

    for event in events {
        match event {
            CollisionEvent::Central { body } => {
                if consumed.contains(&body) {
                    continue;
                }
                if let Some(removed) = sys.remove_body(body) {
                    sys.central.accrete(&removed);
                    consumed.insert(body);
                    debug!(
                        "object {} accreted, central mass now {}",
                        body.index() + 1,
                        sys.central.mass()
                    );
                    applied.push(event);
                }
            }
            CollisionEvent::Merge { survivor, absorbed } => {
                if consumed.contains(&survivor) || consumed.contains(&absorbed) {
                    continue;
                }
                let Some(other) = sys.get_body(absorbed).cloned() else {
                    continue;
                };
                let Some(keeper) = sys.get_body_mut(survivor) else {
                    continue;
                };
                *keeper = merge_bodies(keeper, &other);
                let merged_mass = keeper.mass();
                sys.remove_body(absorbed);
                consumed.insert(absorbed);
                debug!(
                    "object {} merged into object {}, mass now {}",
                    absorbed.index() + 1,
                    survivor.index() + 1,
                    merged_mass
                );
                applied.push(event);
            }
        }
    }

    applied
}
