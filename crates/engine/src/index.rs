//! Relationship index
//!
//! Derived state kept next to the store:
//! - address space uid → container ids of its connections, in creation order
//! - address space uid → round-robin cursor used when attaching links

use rustc_hash::FxHashMap;
use uuid::Uuid;

/// Connection lists and link-assignment cursors per address space
#[derive(Debug, Clone, Default)]
pub struct RelationshipIndex {
    connections: FxHashMap<Uuid, Vec<String>>,
    cursors: FxHashMap<Uuid, usize>,
}

impl RelationshipIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking a new address space with no connections
    pub fn register_space(&mut self, space: Uuid) {
        self.connections.entry(space).or_default();
        self.cursors.entry(space).or_insert(0);
    }

    /// Record a connection opened against `space`
    pub fn add_connection(&mut self, space: Uuid, container_id: impl Into<String>) {
        self.connections
            .entry(space)
            .or_default()
            .push(container_id.into());
    }

    /// Container ids of the connections of `space`; empty if unknown
    pub fn connections_of(&self, space: &Uuid) -> &[String] {
        self.connections
            .get(space)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of connections of `space`
    pub fn connection_count(&self, space: &Uuid) -> usize {
        self.connections_of(space).len()
    }

    /// Pick the next of `candidates` for `space`, cycling through them
    ///
    /// Returns `None` when there are no candidates. The cursor advances on
    /// every successful pick and wraps at the end of the list.
    pub fn next_in_cycle<'a, T>(&mut self, space: Uuid, candidates: &'a [T]) -> Option<&'a T> {
        if candidates.is_empty() {
            return None;
        }
        let cursor = self.cursors.entry(space).or_insert(0);
        let picked = &candidates[*cursor % candidates.len()];
        *cursor = (*cursor + 1) % candidates.len();
        Some(picked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uid(n: u128) -> Uuid {
        Uuid::from_u128(n)
    }

    #[test]
    fn test_unknown_space_has_no_connections() {
        let index = RelationshipIndex::new();
        assert!(index.connections_of(&uid(1)).is_empty());
    }

    #[test]
    fn test_connections_keep_order() {
        let mut index = RelationshipIndex::new();
        index.register_space(uid(1));
        index.add_connection(uid(1), "b");
        index.add_connection(uid(1), "a");
        index.add_connection(uid(2), "c");
        assert_eq!(index.connections_of(&uid(1)), ["b", "a"]);
        assert_eq!(index.connection_count(&uid(2)), 1);
    }

    #[test]
    fn test_register_keeps_existing_connections() {
        let mut index = RelationshipIndex::new();
        index.add_connection(uid(1), "a");
        index.register_space(uid(1));
        assert_eq!(index.connection_count(&uid(1)), 1);
    }

    #[test]
    fn test_round_robin_wraps() {
        let mut index = RelationshipIndex::new();
        let items = ["x", "y", "z"];
        let picks: Vec<&str> = (0..7)
            .filter_map(|_| index.next_in_cycle(uid(1), &items).copied())
            .collect();
        assert_eq!(picks, ["x", "y", "z", "x", "y", "z", "x"]);
    }

    #[test]
    fn test_round_robin_is_per_space() {
        let mut index = RelationshipIndex::new();
        let items = [1, 2];
        assert_eq!(index.next_in_cycle(uid(1), &items), Some(&1));
        assert_eq!(index.next_in_cycle(uid(2), &items), Some(&1));
        assert_eq!(index.next_in_cycle(uid(1), &items), Some(&2));
    }

    #[test]
    fn test_round_robin_empty() {
        let mut index = RelationshipIndex::new();
        let items: [u8; 0] = [];
        assert_eq!(index.next_in_cycle(uid(1), &items), None);
    }
}
