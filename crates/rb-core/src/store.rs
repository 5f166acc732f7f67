//! Ordered entity store.
//!
//! A normalized collection keyed by each entity's stable key and iterated in
//! position order. Every operation is pure: it borrows the current store and
//! returns a new one. Absent keys are silent no-ops.
//!
//! The snapshot holds stores behind `Arc`. [`EntityStore::reduce`] applies an
//! [`EntityMessage`] and hands back the *same* `Arc` when nothing changed, so
//! derived views keyed on slice identity stay valid.

use rb_model::{DisplayField, DisplayFieldPatch, Filter, FilterPatch};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

// =============================================================================
// ENTITY TRAIT
// =============================================================================

/// An item that can live in an [`EntityStore`].
pub trait Entity: Clone + fmt::Debug + PartialEq {
    /// Stable identity within one store.
    type Key: Copy + Ord + Hash + fmt::Debug;
    /// Partial update merged by `update_one`/`update_many`.
    type Patch: Clone + fmt::Debug + PartialEq;

    fn key(&self) -> Self::Key;
    fn position(&self) -> u32;
    fn set_position(&mut self, position: u32);
    fn apply_patch(&mut self, patch: &Self::Patch);
}

impl Entity for DisplayField {
    type Key = u32;
    type Patch = DisplayFieldPatch;

    fn key(&self) -> u32 {
        self.position
    }

    fn position(&self) -> u32 {
        self.position
    }

    fn set_position(&mut self, position: u32) {
        self.position = position;
    }

    fn apply_patch(&mut self, patch: &DisplayFieldPatch) {
        patch.apply_to(self);
    }
}

impl Entity for Filter {
    type Key = u32;
    type Patch = FilterPatch;

    fn key(&self) -> u32 {
        self.position
    }

    fn position(&self) -> u32 {
        self.position
    }

    fn set_position(&mut self, position: u32) {
        self.position = position;
    }

    fn apply_patch(&mut self, patch: &FilterPatch) {
        patch.apply_to(self);
    }
}

/// A patch addressed to one key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T::Key: Serialize, T::Patch: Serialize",
    deserialize = "T::Key: DeserializeOwned, T::Patch: DeserializeOwned"
))]
pub struct Update<T: Entity> {
    pub key: T::Key,
    pub patch: T::Patch,
}

impl<T: Entity> Update<T> {
    pub fn new(key: T::Key, patch: T::Patch) -> Self {
        Self { key, patch }
    }
}

// =============================================================================
// STORE
// =============================================================================

/// Keyed collection iterated in ascending position order.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityStore<T: Entity> {
    /// Keys in iteration order.
    ids: Vec<T::Key>,
    entities: BTreeMap<T::Key, T>,
}

impl<T: Entity> Default for EntityStore<T> {
    fn default() -> Self {
        Self {
            ids: Vec::new(),
            entities: BTreeMap::new(),
        }
    }
}

impl<T: Entity> EntityStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole collection. A repeated key keeps the last entity.
    pub fn load_all(entities: impl IntoIterator<Item = T>) -> Self {
        let entities: BTreeMap<T::Key, T> = entities
            .into_iter()
            .map(|entity| (entity.key(), entity))
            .collect();
        let mut store = Self {
            ids: entities.keys().copied().collect(),
            entities,
        };
        store.sort_ids();
        store
    }

    /// Insert one entity, overwriting any entity already at its key.
    pub fn add_one(&self, entity: T) -> Self {
        let mut next = self.clone();
        let key = entity.key();
        if next.entities.insert(key, entity).is_none() {
            next.ids.push(key);
        }
        next.sort_ids();
        next
    }

    pub fn update_one(&self, update: &Update<T>) -> Self {
        self.update_many(std::slice::from_ref(update))
    }

    /// Merge each patch into its entity; patches for absent keys are skipped.
    pub fn update_many(&self, updates: &[Update<T>]) -> Self {
        let mut next = self.clone();
        let mut touched = false;
        for update in updates {
            if let Some(entity) = next.entities.get_mut(&update.key) {
                entity.apply_patch(&update.patch);
                touched = true;
            }
        }
        if touched {
            next.sort_ids();
        }
        next
    }

    /// Delete one entity. Remaining positions are not renumbered.
    pub fn remove_one(&self, key: T::Key) -> Self {
        let mut next = self.clone();
        if next.entities.remove(&key).is_some() {
            next.ids.retain(|id| *id != key);
        }
        next
    }

    /// Move one entity to `to_index` in iteration order and renumber every
    /// position contiguously from zero. Indices past the end clamp to the
    /// last slot.
    pub fn reorder(&self, key: T::Key, to_index: usize) -> Self {
        let Some(from_index) = self.ids.iter().position(|id| *id == key) else {
            return self.clone();
        };
        let mut ordered: Vec<T> = self.iter().cloned().collect();
        let moved = ordered.remove(from_index);
        let to_index = to_index.min(ordered.len());
        ordered.insert(to_index, moved);
        for (position, entity) in (0u32..).zip(ordered.iter_mut()) {
            entity.set_position(position);
        }
        Self::load_all(ordered)
    }

    /// Position for a newly appended entity: one past the highest position in
    /// use, or zero when empty. Equals `len()` while positions have no gaps.
    pub fn next_position(&self) -> u32 {
        self.entities
            .values()
            .map(Entity::position)
            .max()
            .map_or(0, |max| max.saturating_add(1))
    }

    pub fn get(&self, key: T::Key) -> Option<&T> {
        self.entities.get(&key)
    }

    pub fn contains(&self, key: T::Key) -> bool {
        self.entities.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Keys in iteration order.
    pub fn keys(&self) -> &[T::Key] {
        &self.ids
    }

    /// Entities in ascending position order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.ids.iter().filter_map(|id| self.entities.get(id))
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    fn sort_ids(&mut self) {
        let entities = &self.entities;
        self.ids.sort_by(|a, b| {
            let pa = entities.get(a).map(Entity::position);
            let pb = entities.get(b).map(Entity::position);
            pa.cmp(&pb).then_with(|| a.cmp(b))
        });
    }

    /// Apply one CRUD event to a shared store.
    ///
    /// Returns the input `Arc` untouched when the event does not change the
    /// collection.
    pub fn reduce(store: &Arc<Self>, msg: EntityMessage<T>) -> Arc<Self> {
        match msg {
            EntityMessage::LoadAll(entities) => Arc::new(Self::load_all(entities)),
            EntityMessage::AddOne(entity) => Arc::new(store.add_one(entity)),
            EntityMessage::UpdateOne(update) => {
                if store.contains(update.key) {
                    Arc::new(store.update_one(&update))
                } else {
                    tracing::trace!(key = ?update.key, "update for absent key ignored");
                    Arc::clone(store)
                }
            }
            EntityMessage::UpdateMany(updates) => {
                if updates.iter().any(|update| store.contains(update.key)) {
                    Arc::new(store.update_many(&updates))
                } else {
                    tracing::trace!(count = updates.len(), "updates for absent keys ignored");
                    Arc::clone(store)
                }
            }
            EntityMessage::DeleteOne(key) => {
                if store.contains(key) {
                    Arc::new(store.remove_one(key))
                } else {
                    tracing::trace!(key = ?key, "delete for absent key ignored");
                    Arc::clone(store)
                }
            }
            EntityMessage::Reorder { key, to_index } => {
                if store.contains(key) {
                    Arc::new(store.reorder(key, to_index))
                } else {
                    Arc::clone(store)
                }
            }
            EntityMessage::Unknown => Arc::clone(store),
        }
    }
}

impl<'a, T: Entity> IntoIterator for &'a EntityStore<T> {
    type Item = &'a T;
    type IntoIter = Box<dyn Iterator<Item = &'a T> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

impl<T: Entity> FromIterator<T> for EntityStore<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::load_all(iter)
    }
}

// =============================================================================
// CRUD EVENTS
// =============================================================================

/// CRUD event for one entity kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "kind",
    content = "payload",
    rename_all = "snake_case",
    bound(
        serialize = "T: Serialize, T::Key: Serialize, T::Patch: Serialize",
        deserialize = "T: DeserializeOwned, T::Key: DeserializeOwned, T::Patch: DeserializeOwned"
    )
)]
pub enum EntityMessage<T: Entity> {
    LoadAll(Vec<T>),
    AddOne(T),
    UpdateOne(Update<T>),
    UpdateMany(Vec<Update<T>>),
    DeleteOne(T::Key),
    Reorder { key: T::Key, to_index: usize },
    #[serde(other)]
    Unknown,
}

impl<T: Entity> EntityMessage<T> {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::LoadAll(_) => "load_all",
            Self::AddOne(_) => "add_one",
            Self::UpdateOne(_) => "update_one",
            Self::UpdateMany(_) => "update_many",
            Self::DeleteOne(_) => "delete_one",
            Self::Reorder { .. } => "reorder",
            Self::Unknown => "unknown",
        }
    }
}
