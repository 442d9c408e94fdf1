//! Identity-keyed workout selection cart.
//!
//! Insertion-ordered and deduplicated on canonical identity. Adds are
//! idempotent: the store silently keeps the existing entry and reports
//! [`AddOutcome::AlreadyPresent`] so the caller can surface feedback.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::catalog::{Difficulty, WorkoutDescriptor};

/// Snapshot of a descriptor's display fields at the moment of add, so a
/// later catalog change never retroactively alters a saved cart entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: String,
    pub name: String,
    pub equipment: String,
    pub difficulty: Difficulty,
    pub duration_label: String,
}

impl CartItem {
    fn from_descriptor(workout: &WorkoutDescriptor) -> Self {
        Self {
            id: workout.canonical_id(),
            name: workout.name.clone(),
            equipment: workout.equipment.clone(),
            difficulty: workout.difficulty,
            duration_label: workout.duration_label.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddOutcome {
    Added,
    AlreadyPresent,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CartStore {
    items: Vec<CartItem>,
    /// Membership index over `items`. Rebuilt on deserialize.
    #[serde(skip)]
    ids: HashSet<String>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        if self.ids.len() != self.items.len() {
            // Deserialized state: fall back to the ordered list.
            return self.items.iter().any(|i| i.id == id);
        }
        self.ids.contains(id)
    }

    /// Idempotent add. Appends at the end of insertion order unless the
    /// canonical identity is already present.
    pub fn add(&mut self, workout: &WorkoutDescriptor) -> AddOutcome {
        self.rebuild_index_if_stale();
        let item = CartItem::from_descriptor(workout);
        if self.ids.contains(&item.id) {
            return AddOutcome::AlreadyPresent;
        }
        self.ids.insert(item.id.clone());
        self.items.push(item);
        AddOutcome::Added
    }

    /// Removes the entry if present; absent ids are a quiet no-op.
    pub fn remove(&mut self, id: &str) -> bool {
        self.rebuild_index_if_stale();
        if !self.ids.remove(id) {
            return false;
        }
        self.items.retain(|i| i.id != id);
        true
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.ids.clear();
    }

    /// Items in insertion order, for deterministic display.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn rebuild_index_if_stale(&mut self) {
        if self.ids.len() != self.items.len() {
            self.ids = self.items.iter().map(|i| i.id.clone()).collect();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogProvider, StaticCatalog};

    fn squats() -> WorkoutDescriptor {
        StaticCatalog::builtin()
            .find_by_id("squats-dumbbells-beginner")
            .cloned()
            .unwrap()
    }

    fn press() -> WorkoutDescriptor {
        StaticCatalog::builtin()
            .find_by_id("shoulder-press-dumbbells-beginner")
            .cloned()
            .unwrap()
    }

    #[test]
    fn add_is_idempotent() {
        let mut cart = CartStore::new();
        assert_eq!(cart.add(&squats()), AddOutcome::Added);
        assert_eq!(cart.add(&squats()), AddOutcome::AlreadyPresent);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn items_keep_insertion_order() {
        let mut cart = CartStore::new();
        cart.add(&squats());
        cart.add(&squats());
        cart.add(&press());
        let names: Vec<_> = cart.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Squats", "Shoulder Press"]);
    }

    #[test]
    fn remove_then_readd_moves_item_to_end() {
        let mut cart = CartStore::new();
        cart.add(&squats());
        cart.add(&press());
        assert!(cart.remove("squats-dumbbells-beginner"));
        cart.add(&squats());
        let names: Vec<_> = cart.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Shoulder Press", "Squats"]);
    }

    #[test]
    fn remove_absent_is_noop() {
        let mut cart = CartStore::new();
        cart.add(&squats());
        assert!(!cart.remove("no-such-id"));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn clear_empties_unconditionally() {
        let mut cart = CartStore::new();
        cart.add(&squats());
        cart.add(&press());
        cart.clear();
        assert!(cart.is_empty());
        assert!(!cart.contains("squats-dumbbells-beginner"));
    }

    #[test]
    fn membership_survives_serde_round_trip() {
        let mut cart = CartStore::new();
        cart.add(&squats());
        let json = serde_json::to_string(&cart).unwrap();
        let mut restored: CartStore = serde_json::from_str(&json).unwrap();
        assert!(restored.contains("squats-dumbbells-beginner"));
        assert_eq!(restored.add(&squats()), AddOutcome::AlreadyPresent);
    }
}
