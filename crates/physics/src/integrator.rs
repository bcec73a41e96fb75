//! # Position Integration
//!
//! Explicit Euler with an implicit unit time step: every body moves by its
//! velocity once per tick. Damping is an optional ad hoc decay applied after
//! the move.

use crate::store::BodyStore;

/// Moves every body in `store` by one tick.
pub fn integrate_bodies(store: &mut BodyStore, damping: Option<f32>) {
    for (_, body) in store.iter_mut() {
        body.move_once();
        if let Some(factor) = damping {
            body.damp(factor);
        }
    }
}
