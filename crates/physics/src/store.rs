//! Central arena owning every body in the simulation.
//!
//! Entities, the collision resolver and render transforms all refer to bodies
//! through [`BodyHandle`]s. Slots are recycled by the slab, so each handle also
//! carries the generation the body was inserted with; a handle that outlives
//! its body resolves to nothing instead of to whichever body reused the slot.

use slab::Slab;

use crate::body::KinematicBody;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyHandle {
    index: u32,
    generation: u32,
}

impl BodyHandle {
    #[must_use]
    pub fn index(self) -> u32 {
        self.index
    }

    #[must_use]
    pub fn generation(self) -> u32 {
        self.generation
    }
}

#[derive(Clone, Debug)]
struct Slot {
    generation: u32,
    body: KinematicBody,
}

#[derive(Clone, Debug, Default)]
pub struct BodyStore {
    slab: Slab<Slot>,
    next_generation: u32,
}

impl BodyStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// # Panics
    ///
    /// Panics if more than `u32::MAX` bodies are alive at once.
    pub fn insert(&mut self, body: KinematicBody) -> BodyHandle {
        let generation = self.next_generation;
        self.next_generation = self.next_generation.wrapping_add(1);
        let index = self.slab.insert(Slot { generation, body });
        BodyHandle {
            index: u32::try_from(index).expect("body store exceeded u32::MAX slots"),
            generation,
        }
    }

    pub fn remove(&mut self, handle: BodyHandle) -> Option<KinematicBody> {
        if !self.contains(handle) {
            return None;
        }
        Some(self.slab.remove(handle.index as usize).body)
    }

    #[must_use]
    pub fn contains(&self, handle: BodyHandle) -> bool {
        self.slot(handle).is_some()
    }

    #[must_use]
    pub fn get(&self, handle: BodyHandle) -> Option<&KinematicBody> {
        self.slot(handle).map(|slot| &slot.body)
    }

    pub fn get_mut(&mut self, handle: BodyHandle) -> Option<&mut KinematicBody> {
        match self.slab.get_mut(handle.index as usize) {
            Some(slot) if slot.generation == handle.generation => Some(&mut slot.body),
            _ => None,
        }
    }

    /// Mutable access to two distinct live bodies at once.
    pub fn get_pair_mut(
        &mut self,
        a: BodyHandle,
        b: BodyHandle,
    ) -> Option<(&mut KinematicBody, &mut KinematicBody)> {
        if a.index == b.index || !self.contains(a) || !self.contains(b) {
            return None;
        }
        let (slot_a, slot_b) = self.slab.get2_mut(a.index as usize, b.index as usize)?;
        Some((&mut slot_a.body, &mut slot_b.body))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slab.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slab.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (BodyHandle, &KinematicBody)> {
        self.slab.iter().map(|(index, slot)| (handle_for(index, slot), &slot.body))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (BodyHandle, &mut KinematicBody)> {
        self.slab.iter_mut().map(|(index, slot)| {
            let handle = handle_for(index, slot);
            (handle, &mut slot.body)
        })
    }

    fn slot(&self, handle: BodyHandle) -> Option<&Slot> {
        self.slab
            .get(handle.index as usize)
            .filter(|slot| slot.generation == handle.generation)
    }
}

#[allow(clippy::cast_possible_truncation)]
fn handle_for(index: usize, slot: &Slot) -> BodyHandle {
    // insert() refuses indices past u32::MAX
    BodyHandle {
        index: index as u32,
        generation: slot.generation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Vec3;

    fn body(x: f32) -> KinematicBody {
        KinematicBody::new(Vec3::ZERO, Vec3::new(x, 0.0, 0.0), 1.0).unwrap()
    }

    #[test]
    fn insert_get_remove() {
        let mut store = BodyStore::new();
        let a = store.insert(body(1.0));
        let b = store.insert(body(2.0));
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(b).map(KinematicBody::position), Some(Vec3::new(2.0, 0.0, 0.0)));

        let removed = store.remove(a).unwrap();
        assert_eq!(removed.position(), Vec3::new(1.0, 0.0, 0.0));
        assert!(!store.contains(a));
        assert!(store.remove(a).is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn stale_handle_does_not_alias_reused_slot() {
        let mut store = BodyStore::new();
        let old = store.insert(body(1.0));
        store.remove(old);
        let new = store.insert(body(5.0));

        assert_eq!(old.index(), new.index());
        assert_ne!(old, new);
        assert!(store.get(old).is_none());
        assert!(store.get_mut(old).is_none());
        assert_eq!(store.get(new).unwrap().position().x, 5.0);
    }

    #[test]
    fn pair_access_requires_two_distinct_live_bodies() {
        let mut store = BodyStore::new();
        let a = store.insert(body(1.0));
        let b = store.insert(body(2.0));
        assert!(store.get_pair_mut(a, a).is_none());

        let (ba, bb) = store.get_pair_mut(a, b).unwrap();
        ba.translate(Vec3::new(1.0, 0.0, 0.0));
        bb.translate(Vec3::new(-1.0, 0.0, 0.0));
        assert_eq!(store.get(a).unwrap().position().x, 2.0);
        assert_eq!(store.get(b).unwrap().position().x, 1.0);

        store.remove(b);
        assert!(store.get_pair_mut(a, b).is_none());
    }
}
