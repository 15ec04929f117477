//! Actor registry.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::actor::target::{SharedTarget, TargetHandle, TargetState};
use crate::types::EntityId;

/// Explicit registry of live actors, passed by reference to the systems
/// that need lookup.
///
/// The registry holds the only strong reference to each entry; everything
/// else holds [`TargetHandle`]s. Removing an entry therefore invalidates
/// every outstanding handle at once, even on abnormal teardown paths.
/// Backed by a `BTreeMap` so iteration order is stable across runs.
#[derive(Debug, Default)]
pub struct ActorRegistry {
    actors: BTreeMap<EntityId, SharedTarget>,
}

impl ActorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an actor on spawn. Replaces any previous entry with the
    /// same id, orphaning handles to the old entry.
    pub fn insert(&mut self, state: TargetState) -> SharedTarget {
        let id = state.id;
        let shared = Rc::new(RefCell::new(state));
        self.actors.insert(id, Rc::clone(&shared));
        shared
    }

    /// Unregisters an actor on destroy. Outstanding weak handles start
    /// failing to upgrade as soon as the returned strong handle is dropped.
    pub fn remove(&mut self, id: EntityId) -> Option<SharedTarget> {
        self.actors.remove(&id)
    }

    pub fn get(&self, id: EntityId) -> Option<&SharedTarget> {
        self.actors.get(&id)
    }

    /// Weak handle suitable for storing as an enemy's target.
    pub fn handle(&self, id: EntityId) -> Option<TargetHandle> {
        self.actors.get(&id).map(Rc::downgrade)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.actors.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    /// Live entries in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &SharedTarget)> {
        self.actors.iter().map(|(&id, shared)| (id, shared))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::Health;
    use crate::types::Vec2;

    fn actor(id: u32) -> TargetState {
        TargetState::new(EntityId(id), Vec2::ZERO, 0.5, Health::new(10))
    }

    #[test]
    fn removal_invalidates_outstanding_handles() {
        let mut registry = ActorRegistry::new();
        registry.insert(actor(1));
        let handle = registry.handle(EntityId(1)).unwrap();

        assert!(handle.upgrade().is_some());
        drop(registry.remove(EntityId(1)));
        assert!(handle.upgrade().is_none());
    }

    #[test]
    fn iteration_is_in_id_order() {
        let mut registry = ActorRegistry::new();
        registry.insert(actor(5));
        registry.insert(actor(2));
        registry.insert(actor(9));

        let ids: Vec<EntityId> = registry.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![EntityId(2), EntityId(5), EntityId(9)]);
    }
}
