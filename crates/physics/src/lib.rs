#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Brick-Breaker Physics Core
//!
//! Kinematic bodies, axis-aligned overlap tests and a pairwise elastic
//! collision exchange, driven one discrete tick at a time.
//!
//! ## Key Components
//!
//! -   **Bodies:** [`KinematicBody`] owns velocity, position (minimum corner
//!     of a unit box) and mass. Bodies live in a [`BodyStore`] arena and are
//!     referred to by [`BodyHandle`]s.
//! -   **Overlap:** [`BoundingVolume`] derives an axis-aligned box from a body
//!     position. Touching boxes count as overlapping.
//! -   **Collisions:** [`CollisionResolver`] tests every registered pair once
//!     per pass and applies [`elastic_exchange`] to each overlapping pair.
//! -   **Simulation:** [`Simulation::step`] resolves collisions and then moves
//!     every body by its velocity.
//! -   **Rendering:** [`RenderTransform`] recomputes a model matrix from the
//!     body position on demand; positions are never stored twice.
//!
//! ## Usage
//!
//! ```rust
//! use physics::{KinematicBody, Simulation, Vec3};
//!
//! let mut sim = Simulation::new();
//! let ball = sim.add_body(KinematicBody::new(Vec3::new(0.0, 1.0, 0.0), Vec3::ZERO, 1.0)?);
//! sim.add_body(KinematicBody::immovable(Vec3::new(0.0, 2.0, 0.0))?);
//!
//! sim.step();
//! let report = sim.step();
//! assert_eq!(report.contacts.len(), 1);
//! assert!(sim.body(ball).unwrap().velocity().y < 0.0);
//! # Ok::<(), physics::PhysicsError>(())
//! ```

pub mod body;
pub mod bounds;
pub mod collision;
pub mod error;
pub mod integrator;
pub mod simulation;
pub mod store;
pub mod transform;
pub mod types;

pub use body::{KinematicBody, MAX_MASS};
pub use bounds::{overlaps, BoundingVolume, OverlapAxes, UNIT_EXTENT};
pub use collision::{
    candidate_pairs, check_collisions, elastic_exchange, CollisionResolver, Contact, HandleContact,
};
pub use error::PhysicsError;
pub use simulation::{SimParams, Simulation, StepReport};
pub use store::{BodyHandle, BodyStore};
pub use transform::{instances, InstanceRaw, RenderTransform};
pub use types::Vec3;
