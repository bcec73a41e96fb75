//! # Collision Detection and Response
//!
//! Brute-force pairwise overlap testing followed by an elastic velocity
//! exchange for every overlapping pair. No positional correction is applied;
//! bodies that overlap keep overlapping until their next move.
//!
//! Two immovable bodies never interact, so such pairs are skipped without an
//! overlap test.
//!
//! Pairs are resolved sequentially. A body that overlaps two others within one
//! pass enters its second exchange with the velocity left by the first.

mod broad_phase;
mod resolver;
mod response;

pub use broad_phase::*;
pub use resolver::*;
pub use response::*;

use crate::body::KinematicBody;
use crate::bounds::{BoundingVolume, OverlapAxes};
use crate::store::BodyHandle;
use crate::types::Vec3;

/// An overlapping pair found during one resolution pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Contact<K> {
    pub a: K,
    pub b: K,
}

impl<K: PartialEq + Copy> Contact<K> {
    #[must_use]
    pub fn involves(&self, key: K) -> bool {
        self.a == key || self.b == key
    }

    /// The other participant, if `key` is one of the two.
    #[must_use]
    pub fn other(&self, key: K) -> Option<K> {
        if self.a == key {
            Some(self.b)
        } else if self.b == key {
            Some(self.a)
        } else {
            None
        }
    }
}

pub type HandleContact = Contact<BodyHandle>;

/// Tests every pair of `bodies` and resolves each overlapping one.
///
/// Returns the overlapping pairs as slice indices, in the order they were
/// resolved.
pub fn check_collisions(
    bodies: &mut [KinematicBody],
    extent: Vec3,
    axes: OverlapAxes,
) -> Vec<Contact<usize>> {
    let mut contacts = Vec::new();
    for (i, j) in candidate_pairs(bodies.len()) {
        let (before, after) = bodies.split_at_mut(j);
        let (a, b) = (&mut before[i], &mut after[0]);
        if a.is_immovable() && b.is_immovable() {
            continue;
        }
        if BoundingVolume::of(a, extent).overlaps(&BoundingVolume::of(b, extent), axes) {
            resolve_pair(a, b);
            contacts.push(Contact { a: i, b: j });
        }
    }
    tracing::debug!(
        bodies = bodies.len(),
        pairs = pair_count(bodies.len()),
        contacts = contacts.len(),
        "collision pass"
    );
    contacts
}
