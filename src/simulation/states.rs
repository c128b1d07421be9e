//! Core state types for the central-body simulation.
//!
//! - `Body`        – position + mass, mass guarded at every mutation
//! - `CentralBody` – the dominant mass, adds a guarded radius and accretion
//! - `MovingBody`  – an orbiting point mass, adds a free velocity
//! - `System`      – one central body plus the ordered orbiting bodies
//!
//! The shared position/mass contract is expressed by the [`Massive`] trait.

use nalgebra::Vector2;

use crate::error::ValidationError;

pub type NVec2 = Vector2<f64>;

/// Stable identity of an orbiting body, assigned in insertion order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BodyId(pub usize);

impl BodyId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Anything with a position and a strictly positive mass
pub trait Massive {
    fn position(&self) -> NVec2;
    fn mass(&self) -> f64;

    /// Euclidean distance between the two positions
    fn distance_to<T: Massive>(&self, other: &T) -> f64
    where
        Self: Sized,
    {
        (self.position() - other.position()).norm()
    }
}

/// Euclidean distance between two massive objects
pub fn distance<A: Massive, B: Massive>(a: &A, b: &B) -> f64 {
    (a.position() - b.position()).norm()
}

fn check_mass(mass: f64) -> Result<f64, ValidationError> {
    // also rejects NaN
    if mass > 0.0 {
        Ok(mass)
    } else {
        Err(ValidationError::NonPositiveMass(mass))
    }
}

fn check_radius(radius: f64) -> Result<f64, ValidationError> {
    if radius > 0.0 {
        Ok(radius)
    } else {
        Err(ValidationError::NonPositiveRadius(radius))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub(crate) position: NVec2, // unvalidated, any sign
    pub(crate) mass: f64,       // always > 0
}

impl Body {
    pub fn new(position: NVec2, mass: f64) -> Result<Self, ValidationError> {
        Ok(Self {
            position,
            mass: check_mass(mass)?,
        })
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }
}

impl Massive for Body {
    fn position(&self) -> NVec2 {
        self.position
    }

    fn mass(&self) -> f64 {
        self.mass
    }
}

/// The single dominant mass. It never moves; its mass only grows through
/// accretion or an explicit, validated reset.
#[derive(Debug, Clone, PartialEq)]
pub struct CentralBody {
    body: Body,
    radius: f64, // always > 0
}

impl CentralBody {
    /// Central body at the coordinate origin
    pub fn new(mass: f64, radius: f64) -> Result<Self, ValidationError> {
        Self::at(NVec2::zeros(), mass, radius)
    }

    pub fn at(position: NVec2, mass: f64, radius: f64) -> Result<Self, ValidationError> {
        Ok(Self {
            body: Body::new(position, mass)?,
            radius: check_radius(radius)?,
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn set_mass(&mut self, mass: f64) -> Result<(), ValidationError> {
        self.body.mass = check_mass(mass)?;
        Ok(())
    }

    pub fn set_radius(&mut self, radius: f64) -> Result<(), ValidationError> {
        self.radius = check_radius(radius)?;
        Ok(())
    }

    /// Absorb an orbiting body's mass. Position is left untouched.
    pub fn accrete(&mut self, body: &MovingBody) {
        self.body.mass += body.mass();
    }

    /// `true` when `other` sits strictly inside the radius
    pub fn contains<T: Massive>(&self, other: &T) -> bool {
        distance(self, other) < self.radius
    }

    /// `true` when `other` sits inside or on the surface
    pub fn touches<T: Massive>(&self, other: &T) -> bool {
        distance(self, other) <= self.radius
    }
}

impl Massive for CentralBody {
    fn position(&self) -> NVec2 {
        self.body.position
    }

    fn mass(&self) -> f64 {
        self.body.mass
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MovingBody {
    id: BodyId,
    body: Body,
    velocity: NVec2,
}

impl MovingBody {
    /// A free body; it receives its `BodyId` when added to a [`System`]
    pub fn new(position: NVec2, velocity: NVec2, mass: f64) -> Result<Self, ValidationError> {
        Ok(Self {
            id: BodyId(0),
            body: Body::new(position, mass)?,
            velocity,
        })
    }

    /// Body with mass already known to be positive, e.g. the sum of two valid masses
    pub(crate) fn from_parts(id: BodyId, position: NVec2, velocity: NVec2, mass: f64) -> Self {
        debug_assert!(mass > 0.0);
        Self {
            id,
            body: Body { position, mass },
            velocity,
        }
    }

    pub fn id(&self) -> BodyId {
        self.id
    }

    pub fn x(&self) -> f64 {
        self.body.x()
    }

    pub fn y(&self) -> f64 {
        self.body.y()
    }

    pub fn set_position(&mut self, position: NVec2) {
        self.body.position = position;
    }

    pub fn set_x(&mut self, x: f64) {
        self.body.position.x = x;
    }

    pub fn set_y(&mut self, y: f64) {
        self.body.position.y = y;
    }

    pub fn velocity(&self) -> NVec2 {
        self.velocity
    }

    pub fn vx(&self) -> f64 {
        self.velocity.x
    }

    pub fn vy(&self) -> f64 {
        self.velocity.y
    }

    pub fn set_velocity(&mut self, velocity: NVec2) {
        self.velocity = velocity;
    }

    pub fn set_vx(&mut self, vx: f64) {
        self.velocity.x = vx;
    }

    pub fn set_vy(&mut self, vy: f64) {
        self.velocity.y = vy;
    }

    pub fn momentum(&self) -> NVec2 {
        self.velocity * self.body.mass
    }
}

impl Massive for MovingBody {
    fn position(&self) -> NVec2 {
        self.body.position
    }

    fn mass(&self) -> f64 {
        self.body.mass
    }
}

/// One central body plus its orbiting bodies, in insertion order
#[derive(Debug, Clone)]
pub struct System {
    pub central: CentralBody,
    pub bodies: Vec<MovingBody>,
    pub t: f64,       // elapsed time
    pub step: usize,  // completed steps
    next_id: usize,
}

impl System {
    pub fn new(central: CentralBody) -> Self {
        Self {
            central,
            bodies: Vec::new(),
            t: 0.0,
            step: 0,
            next_id: 0,
        }
    }

    /// Append a body and hand out its id
    pub fn add_body(&mut self, mut body: MovingBody) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        body.id = id;
        self.bodies.push(body);
        id
    }

    /// Remove a body, keeping the order of the others
    pub fn remove_body(&mut self, id: BodyId) -> Option<MovingBody> {
        self.bodies
            .iter()
            .position(|b| b.id == id)
            .map(|idx| self.bodies.remove(idx))
    }

    pub fn get_body(&self, id: BodyId) -> Option<&MovingBody> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn get_body_mut(&mut self, id: BodyId) -> Option<&mut MovingBody> {
        self.bodies.iter_mut().find(|b| b.id == id)
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Central mass plus every orbiting mass
    pub fn total_mass(&self) -> f64 {
        self.central.mass() + self.bodies.iter().map(|b| b.mass()).sum::<f64>()
    }

    pub fn total_momentum(&self) -> NVec2 {
        self.bodies
            .iter()
            .map(|b| b.momentum())
            .fold(NVec2::zeros(), |acc, p| acc + p)
    }
}
