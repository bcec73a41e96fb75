use thiserror::Error;

use crate::store::BodyHandle;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PhysicsError {
    #[error("body mass must be finite and strictly positive, got {0}")]
    InvalidMass(f32),
    #[error("body {0} is not finite")]
    NonFiniteState(&'static str),
    #[error("bounding volume extent must be finite and strictly positive on every axis, got {0:?}")]
    DegenerateExtent([f32; 3]),
    #[error("damping factor must lie in (0, 1], got {0}")]
    InvalidDamping(f32),
    #[error("no live body for handle {0:?}")]
    UnknownBody(BodyHandle),
}
