//! # Kinematic Bodies
//!
//! A [`KinematicBody`] owns the velocity, position and mass of one movable
//! object. Position is the minimum corner of the body's bounding box, not its
//! center. Integration is explicit Euler with an implicit unit time step:
//! [`KinematicBody::move_once`] advances the position by exactly one velocity.

use crate::error::PhysicsError;
use crate::types::Vec3;

/// Largest finite mass a body may carry. Keeps `m1 + m2` and `2·m` in the
/// collision exchange finite.
pub const MAX_MASS: f32 = f32::MAX / 4.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KinematicBody {
    velocity: Vec3,
    position: Vec3,
    mass: f32,
}

impl KinematicBody {
    /// Creates a movable body.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::InvalidMass`] unless `mass` is strictly
    /// positive and at most [`MAX_MASS`], and [`PhysicsError::NonFiniteState`]
    /// if either vector carries a NaN or infinite component.
    pub fn new(velocity: Vec3, position: Vec3, mass: f32) -> Result<Self, PhysicsError> {
        if !(mass > 0.0 && mass <= MAX_MASS) {
            return Err(PhysicsError::InvalidMass(mass));
        }
        if !velocity.is_finite() {
            return Err(PhysicsError::NonFiniteState("velocity"));
        }
        if !position.is_finite() {
            return Err(PhysicsError::NonFiniteState("position"));
        }
        Ok(Self { velocity, position, mass })
    }

    /// Creates a body with infinite mass that never moves: impulses and
    /// collisions leave its velocity at zero.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::NonFiniteState`] if `position` is not finite.
    pub fn immovable(position: Vec3) -> Result<Self, PhysicsError> {
        if !position.is_finite() {
            return Err(PhysicsError::NonFiniteState("position"));
        }
        Ok(Self {
            velocity: Vec3::ZERO,
            position,
            mass: f32::INFINITY,
        })
    }

    #[must_use]
    pub fn is_immovable(&self) -> bool {
        self.mass.is_infinite()
    }

    pub fn translate(&mut self, delta: Vec3) {
        self.position += delta;
    }

    /// `velocity += force * (duration / mass)`.
    ///
    /// An immovable body ignores impulses.
    ///
    /// # Panics
    ///
    /// Panics if `force` or `duration` is not finite, or if the resulting
    /// velocity change overflows.
    pub fn apply_impulse(&mut self, force: Vec3, duration: f32) {
        assert!(
            force.is_finite() && duration.is_finite(),
            "impulse must be finite: force={force:?} duration={duration}"
        );
        if self.is_immovable() {
            return;
        }
        let dv = force * (duration / self.mass);
        let velocity = self.velocity + dv;
        assert!(
            velocity.is_finite(),
            "impulse overflowed velocity: mass={} dv={dv:?}",
            self.mass
        );
        self.velocity = velocity;
    }

    /// Advances the position by the current velocity for one tick.
    pub fn move_once(&mut self) {
        self.translate(self.velocity);
    }

    /// Ad hoc velocity decay, `velocity *= factor`.
    ///
    /// # Panics
    ///
    /// Panics unless `0 < factor <= 1`.
    pub fn damp(&mut self, factor: f32) {
        assert!(factor > 0.0 && factor <= 1.0, "damping factor out of range: {factor}");
        self.velocity *= factor;
    }

    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    #[must_use]
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// `f32::INFINITY` for immovable bodies.
    #[must_use]
    pub fn mass(&self) -> f32 {
        self.mass
    }

    /// Kinetic energy doubled, `m·|v|²`. Zero for immovable bodies.
    #[must_use]
    pub fn energy_term(&self) -> f32 {
        if self.is_immovable() {
            0.0
        } else {
            self.mass * self.velocity.length_squared()
        }
    }

    pub(crate) fn set_velocity(&mut self, velocity: Vec3) {
        if !self.is_immovable() {
            self.velocity = velocity;
        }
    }
}
