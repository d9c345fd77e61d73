/// Ordered, exclusively-owned collection of every live entity.
///
/// Insertion order is draw order.  Removal is batched: callers collect the
/// ids to drop during a pass and hand them over afterwards, so no pass ever
/// mutates the vector it is walking.

use std::collections::HashSet;

use crate::entities::{Entity, EntityId, EntityKind, EntityView, KindTag, Point, PlayerState};

#[derive(Clone, Debug, Default)]
pub struct EntityStore {
    entities: Vec<Entity>,
    next_id: u64,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new entity and return its id.
    pub fn insert(&mut self, pos: Point, kind: EntityKind) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        self.entities.push(Entity { id, pos, kind });
        id
    }

    /// Id the next insert will receive.  Anything at or above a watermark
    /// taken earlier was inserted after it.
    pub fn watermark(&self) -> EntityId {
        EntityId(self.next_id)
    }

    /// Drop every entity whose id is in `ids`, preserving the order of the rest.
    pub fn remove_all(&mut self, ids: &HashSet<EntityId>) {
        if ids.is_empty() {
            return;
        }
        self.entities.retain(|e| !ids.contains(&e.id));
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.iter_mut()
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn count(&self, tag: KindTag) -> usize {
        self.entities.iter().filter(|e| e.tag() == tag).count()
    }

    pub fn of_kind(&self, tag: KindTag) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(move |e| e.tag() == tag)
    }

    /// The player entity, if still alive.
    pub fn player(&self) -> Option<&Entity> {
        self.of_kind(KindTag::Player).next()
    }

    pub fn player_mut(&mut self) -> Option<(&mut Point, &mut PlayerState)> {
        self.entities.iter_mut().find_map(|e| match &mut e.kind {
            EntityKind::Player(state) => Some((&mut e.pos, state)),
            _ => None,
        })
    }

    /// Render descriptors in insertion order.
    pub fn views(&self) -> Vec<EntityView> {
        self.entities.iter().map(Entity::view).collect()
    }
}
