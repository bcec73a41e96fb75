//! Collision resolution over handles into a [`BodyStore`].

use crate::bounds::{BoundingVolume, OverlapAxes};
use crate::store::{BodyHandle, BodyStore};
use crate::types::Vec3;

use super::{candidate_pairs, pair_count, resolve_pair, HandleContact};

/// Ordered set of bodies considered for collision. The resolver never owns a
/// body; it borrows the store for the duration of each pass.
#[derive(Clone, Debug, Default)]
pub struct CollisionResolver {
    handles: Vec<BodyHandle>,
}

impl CollisionResolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handle`. Registering the same handle twice has no effect.
    pub fn add(&mut self, handle: BodyHandle) {
        if !self.contains(handle) {
            self.handles.push(handle);
        }
    }

    /// Unregisters `handle`, keeping the order of the rest.
    pub fn remove(&mut self, handle: BodyHandle) -> bool {
        let before = self.handles.len();
        self.handles.retain(|h| *h != handle);
        self.handles.len() != before
    }

    #[must_use]
    pub fn contains(&self, handle: BodyHandle) -> bool {
        self.handles.contains(&handle)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub fn handles(&self) -> &[BodyHandle] {
        &self.handles
    }

    /// Tests every registered pair once and resolves the overlapping ones in
    /// registration order. Handles whose bodies left the store are dropped
    /// before the pass.
    pub fn check_collisions(
        &mut self,
        store: &mut BodyStore,
        extent: Vec3,
        axes: OverlapAxes,
    ) -> Vec<HandleContact> {
        self.prune(store);

        let mut contacts = Vec::new();
        for (i, j) in candidate_pairs(self.handles.len()) {
            let (ha, hb) = (self.handles[i], self.handles[j]);
            let Some((a, b)) = store.get_pair_mut(ha, hb) else {
                continue;
            };
            if a.is_immovable() && b.is_immovable() {
                continue;
            }
            if BoundingVolume::of(a, extent).overlaps(&BoundingVolume::of(b, extent), axes) {
                resolve_pair(a, b);
                contacts.push(HandleContact { a: ha, b: hb });
            }
        }

        tracing::debug!(
            bodies = self.handles.len(),
            pairs = pair_count(self.handles.len()),
            contacts = contacts.len(),
            "collision pass"
        );
        contacts
    }

    fn prune(&mut self, store: &BodyStore) {
        let before = self.handles.len();
        self.handles.retain(|h| store.contains(*h));
        let dropped = before - self.handles.len();
        if dropped > 0 {
            tracing::warn!(dropped, "collision resolver held handles to removed bodies");
        }
    }
}
