//! A ready-made associative state record.
//!
//! Callers with their own domain types implement [`StateRecord`] directly;
//! [`MapRecord`] is for the rest: a small immutable map of named fields
//! plus the machine slot, updated only by building successors.

use crate::core::{Machine, StateRecord};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// An immutable associative record: one machine descriptor slot plus
/// opaque caller fields keyed by name.
///
/// Every update returns a new record; the original is never touched.
/// Cloning copies the field map but shares the descriptor tables, which
/// sit behind `Arc`.
///
/// # Example
///
/// ```rust
/// use statefold::record::MapRecord;
///
/// let empty: MapRecord<&str, i32> = MapRecord::new();
/// let one = empty.insert("count", 1);
/// let two = one.insert("count", 2);
///
/// assert_eq!(empty.get("count"), None);
/// assert_eq!(one.get("count"), Some(&1));
/// assert_eq!(two.get("count"), Some(&2));
/// ```
#[derive(Clone, Debug)]
pub struct MapRecord<N, V>
where
    N: Clone + Eq + Hash + Debug + Display,
    V: Clone,
{
    machine: Option<Machine<MapRecord<N, V>>>,
    fields: HashMap<N, V>,
}

impl<N, V> MapRecord<N, V>
where
    N: Clone + Eq + Hash + Debug + Display,
    V: Clone,
{
    /// An empty record with no machine descriptor and no fields.
    pub fn new() -> Self {
        Self {
            machine: None,
            fields: HashMap::new(),
        }
    }

    /// Read one field.
    pub fn get<Q>(&self, name: &Q) -> Option<&V>
    where
        N: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.fields.get(name)
    }

    /// Whether the record has a field under `name`.
    pub fn contains<Q>(&self, name: &Q) -> bool
    where
        N: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.fields.contains_key(name)
    }

    /// Successor record with `name` set to `value`.
    pub fn insert(&self, name: N, value: V) -> Self {
        let mut fields = self.fields.clone();
        fields.insert(name, value);
        Self {
            machine: self.machine.clone(),
            fields,
        }
    }

    /// Number of fields, not counting the machine slot.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields. The machine slot does not count.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<N, V> StateRecord for MapRecord<N, V>
where
    N: Clone + Eq + Hash + Debug + Display,
    V: Clone,
{
    type Name = N;
    type Payload = V;

    fn machine(&self) -> Option<&Machine<Self>> {
        self.machine.as_ref()
    }

    fn with_machine(&self, machine: Machine<Self>) -> Self {
        Self {
            machine: Some(machine),
            fields: self.fields.clone(),
        }
    }
}

impl<N, V> Default for MapRecord<N, V>
where
    N: Clone + Eq + Hash + Debug + Display,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::MachineBuilder;

    type Rec = MapRecord<&'static str, i32>;

    #[test]
    fn new_record_is_empty() {
        let record = Rec::new();
        assert!(record.is_empty());
        assert_eq!(record.len(), 0);
        assert!(record.machine().is_none());
    }

    #[test]
    fn insert_builds_a_successor() {
        let record = Rec::new();
        let updated = record.insert("count", 1);

        assert_eq!(updated.get("count"), Some(&1));
        assert_eq!(record.get("count"), None);
        assert_eq!(updated.len(), 1);
    }

    #[test]
    fn insert_replaces_in_the_successor_only() {
        let one = Rec::new().insert("count", 1);
        let two = one.insert("count", 2);

        assert_eq!(one.get("count"), Some(&1));
        assert_eq!(two.get("count"), Some(&2));
        assert_eq!(two.len(), 1);
    }

    #[test]
    fn contains_sees_inserted_fields() {
        let record = Rec::new().insert("count", 1);
        assert!(record.contains("count"));
        assert!(!record.contains("other"));
    }

    #[test]
    fn insert_keeps_the_machine_slot() {
        let machine = MachineBuilder::new()
            .current("new")
            .transition("begin", "new", "started")
            .build()
            .unwrap();
        let record: Rec = Rec::new().with_machine(machine);

        let updated = record.insert("count", 1);
        assert!(updated.machine().is_some());
        assert_eq!(updated.machine().unwrap().current, Some("new"));
    }

    #[test]
    fn with_machine_keeps_the_fields() {
        let machine = MachineBuilder::new()
            .current("new")
            .transition("begin", "new", "started")
            .build()
            .unwrap();
        let record: Rec = Rec::new().insert("count", 3).with_machine(machine);

        assert_eq!(record.get("count"), Some(&3));
    }
}
