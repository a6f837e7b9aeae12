//! Assistant and pool models.
//!
//! The pool is an arena of assistant records plus a name→id lookup table.
//! Arena order is insertion order and doubles as the stable tie-break key
//! for the allocator: among equally loaded assistants, whoever was added
//! to the roster first wins a slot.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Opaque handle to an assistant record in a pool.
///
/// Indexes the pool's arena. Ids are only meaningful within the pool that
/// issued them and are stable for that pool's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AssistantId(usize);

impl AssistantId {
    /// Arena index backing this id.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// One teaching assistant in the pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assistant {
    /// Display name. Unique within a pool, exact-match (case-sensitive).
    pub name: String,
    /// Accumulated duty score for the current allocation run.
    pub load: f64,
    /// Which seeded load sources contributed to the starting load,
    /// e.g. `"MATH 219 (20p)"`. Append-only during seeding.
    pub course_duties: Vec<String>,
}

impl Assistant {
    /// Creates an assistant with zero load and no duties.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            load: 0.0,
            course_duties: Vec::new(),
        }
    }
}

/// The working set of assistants for one allocation run.
///
/// Owned exclusively by a single run: seeding and allocation both take
/// `&mut AssistantPool`, and correctness depends on strictly sequential
/// mutation. Concurrent runs must each build their own pool.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssistantPool {
    records: Vec<Assistant>,
    by_name: HashMap<String, AssistantId>,
}

impl AssistantPool {
    /// Creates an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a pool from an ordered roster of names.
    ///
    /// Duplicate names keep the first record (at most one record per
    /// unique name); insertion order is preserved for tie-breaking.
    pub fn from_roster<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut pool = Self::new();
        for name in names {
            pool.add(name);
        }
        pool
    }

    /// Adds an assistant, returning its id.
    ///
    /// If the name already exists, returns the existing id unchanged.
    pub fn add(&mut self, name: impl Into<String>) -> AssistantId {
        let name = name.into();
        if let Some(&id) = self.by_name.get(&name) {
            return id;
        }
        let id = AssistantId(self.records.len());
        self.by_name.insert(name.clone(), id);
        self.records.push(Assistant::new(name));
        id
    }

    /// Looks up an assistant by exact name match.
    pub fn id_of(&self, name: &str) -> Option<AssistantId> {
        self.by_name.get(name).copied()
    }

    /// Shared access to a record.
    pub fn get(&self, id: AssistantId) -> &Assistant {
        &self.records[id.0]
    }

    /// Mutable access to a record.
    pub fn get_mut(&mut self, id: AssistantId) -> &mut Assistant {
        &mut self.records[id.0]
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Assistant> {
        self.records.iter()
    }

    /// Ids in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = AssistantId> + '_ {
        (0..self.records.len()).map(AssistantId)
    }

    /// Number of assistants.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the pool has no assistants.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Adds `delta` to an assistant's load.
    pub fn credit(&mut self, id: AssistantId, delta: f64) {
        self.records[id.0].load += delta;
    }

    /// Resets every record to zero load and no duties.
    pub fn reset_loads(&mut self) {
        for record in &mut self.records {
            record.load = 0.0;
            record.course_duties.clear();
        }
    }

    /// Ids sorted ascending by current load.
    ///
    /// The sort is stable, so equally loaded assistants keep insertion
    /// order — this is the allocator's tie-break rule and what makes
    /// repeated runs on the same inputs reproducible.
    pub fn ids_by_load(&self) -> Vec<AssistantId> {
        let mut ids: Vec<AssistantId> = self.ids().collect();
        ids.sort_by(|&a, &b| {
            self.records[a.0]
                .load
                .partial_cmp(&self.records[b.0].load)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_lookup() {
        let mut pool = AssistantPool::new();
        let a = pool.add("Ada");
        let b = pool.add("Berk");

        assert_eq!(pool.len(), 2);
        assert_eq!(pool.id_of("Ada"), Some(a));
        assert_eq!(pool.id_of("Berk"), Some(b));
        assert_eq!(pool.id_of("ada"), None); // case-sensitive
        assert_eq!(pool.get(a).name, "Ada");
    }

    #[test]
    fn test_duplicate_name_keeps_first() {
        let mut pool = AssistantPool::new();
        let first = pool.add("Ada");
        let second = pool.add("Ada");
        assert_eq!(first, second);
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn test_from_roster_preserves_order() {
        let pool = AssistantPool::from_roster(["C", "A", "B"]);
        let names: Vec<&str> = pool.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_reset_loads() {
        let mut pool = AssistantPool::from_roster(["Ada"]);
        let id = pool.id_of("Ada").unwrap();
        pool.credit(id, 12.5);
        pool.get_mut(id).course_duties.push("X (5p)".into());

        pool.reset_loads();
        assert_eq!(pool.get(id).load, 0.0);
        assert!(pool.get(id).course_duties.is_empty());
    }

    #[test]
    fn test_ids_by_load_stable_tie_break() {
        let mut pool = AssistantPool::from_roster(["A", "B", "C"]);
        let c = pool.id_of("C").unwrap();
        pool.credit(c, 5.0);

        // A and B tie at 0.0 → insertion order
        let sorted = pool.ids_by_load();
        let names: Vec<&str> = sorted.iter().map(|&id| pool.get(id).name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_ids_by_load_orders_ascending() {
        let mut pool = AssistantPool::from_roster(["A", "B", "C"]);
        pool.credit(pool.id_of("A").unwrap(), 10.0);
        pool.credit(pool.id_of("B").unwrap(), 2.5);

        let sorted = pool.ids_by_load();
        let names: Vec<&str> = sorted.iter().map(|&id| pool.get(id).name.as_str()).collect();
        assert_eq!(names, vec!["C", "B", "A"]);
    }
}
