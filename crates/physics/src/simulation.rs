//! # Simulation Tick
//!
//! [`Simulation`] ties the body arena, the collision resolver and the
//! integrator together. One call to [`Simulation::step`] is one tick:
//!
//! 1. callers apply impulses beforehand (input, scripted behavior),
//! 2. the resolver scans all pairs and exchanges velocities on overlap,
//! 3. every body moves by its velocity.
//!
//! The render side reads positions afterwards through
//! [`crate::transform::RenderTransform`].

use crate::body::KinematicBody;
use crate::bounds::{validate_extent, OverlapAxes, UNIT_EXTENT};
use crate::collision::{CollisionResolver, HandleContact};
use crate::error::PhysicsError;
use crate::integrator::integrate_bodies;
use crate::store::{BodyHandle, BodyStore};
use crate::types::Vec3;

/// Simulation parameters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimParams {
    pub overlap_axes: OverlapAxes,
    /// Collision box extent shared by every body. Fixed for the lifetime of a
    /// simulation.
    pub extent: Vec3,
    /// Velocity decay factor applied after each move, if any.
    pub damping: Option<f32>,
}

impl SimParams {
    /// # Errors
    ///
    /// [`PhysicsError::DegenerateExtent`] for a non-positive extent and
    /// [`PhysicsError::InvalidDamping`] for a factor outside `(0, 1]`.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        validate_extent(self.extent)?;
        if let Some(factor) = self.damping {
            if !(factor > 0.0 && factor <= 1.0) {
                return Err(PhysicsError::InvalidDamping(factor));
            }
        }
        Ok(())
    }
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            overlap_axes: OverlapAxes::Planar,
            extent: UNIT_EXTENT,
            damping: None,
        }
    }
}

/// What happened during one tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StepReport {
    pub tick: u64,
    pub contacts: Vec<HandleContact>,
}

#[derive(Clone, Debug, Default)]
pub struct Simulation {
    store: BodyStore,
    resolver: CollisionResolver,
    params: SimParams,
    tick: u64,
}

impl Simulation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// # Errors
    ///
    /// Returns the validation error of `params`.
    pub fn with_params(params: SimParams) -> Result<Self, PhysicsError> {
        params.validate()?;
        Ok(Self {
            params,
            ..Self::default()
        })
    }

    /// Inserts `body` and registers it for collision checks.
    pub fn add_body(&mut self, body: KinematicBody) -> BodyHandle {
        let handle = self.store.insert(body);
        self.resolver.add(handle);
        tracing::trace!(?handle, position = ?body.position(), "body added");
        handle
    }

    pub fn remove_body(&mut self, handle: BodyHandle) -> Option<KinematicBody> {
        self.resolver.remove(handle);
        let removed = self.store.remove(handle);
        if removed.is_some() {
            tracing::debug!(?handle, "body removed");
        }
        removed
    }

    #[must_use]
    pub fn body(&self, handle: BodyHandle) -> Option<&KinematicBody> {
        self.store.get(handle)
    }

    /// Applies an impulse to a live body.
    ///
    /// # Errors
    ///
    /// [`PhysicsError::UnknownBody`] if `handle` no longer refers to a body.
    pub fn apply_impulse(
        &mut self,
        handle: BodyHandle,
        force: Vec3,
        duration: f32,
    ) -> Result<(), PhysicsError> {
        let body = self
            .store
            .get_mut(handle)
            .ok_or(PhysicsError::UnknownBody(handle))?;
        body.apply_impulse(force, duration);
        Ok(())
    }

    /// Moves a live body without touching its velocity.
    ///
    /// # Errors
    ///
    /// [`PhysicsError::UnknownBody`] if `handle` no longer refers to a body.
    pub fn translate(&mut self, handle: BodyHandle, delta: Vec3) -> Result<(), PhysicsError> {
        let body = self
            .store
            .get_mut(handle)
            .ok_or(PhysicsError::UnknownBody(handle))?;
        body.translate(delta);
        Ok(())
    }

    /// Resolves collisions, then integrates every body by one tick.
    pub fn step(&mut self) -> StepReport {
        let contacts = self.resolver.check_collisions(
            &mut self.store,
            self.params.extent,
            self.params.overlap_axes,
        );
        integrate_bodies(&mut self.store, self.params.damping);
        self.tick += 1;

        tracing::trace!(tick = self.tick, bodies = self.store.len(), "step complete");
        StepReport {
            tick: self.tick,
            contacts,
        }
    }

    /// Runs `steps` ticks and returns their reports.
    pub fn run(&mut self, steps: usize) -> Vec<StepReport> {
        (0..steps).map(|_| self.step()).collect()
    }

    #[must_use]
    pub fn store(&self) -> &BodyStore {
        &self.store
    }

    #[must_use]
    pub fn resolver(&self) -> &CollisionResolver {
        &self.resolver
    }

    #[must_use]
    pub fn params(&self) -> &SimParams {
        &self.params
    }

    #[must_use]
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Sum of `m·|v|²` over all movable bodies.
    #[must_use]
    pub fn energy(&self) -> f32 {
        self.store.iter().map(|(_, b)| b.energy_term()).sum()
    }
}
