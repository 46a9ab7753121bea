//! Builder for constructing machine descriptors.

use crate::builder::error::BuildError;
use crate::core::{
    AliasTable, Callback, CallbackError, CallbackTable, Machine, OneOrMany, StateKey, StateRecord,
    TransitionTable,
};
use std::collections::HashMap;
use std::sync::Arc;

/// Builder for machine descriptors with a fluent API.
///
/// A descriptor is plain data and can be written out literally; the
/// builder exists so the common path reads declaratively and so missing
/// required pieces fail at one place instead of at first use.
pub struct MachineBuilder<R: StateRecord> {
    current: Option<R::Name>,
    transitions: TransitionTable<R::Name>,
    callbacks: CallbackTable<R>,
    aliases: AliasTable<R::Name>,
}

impl<R: StateRecord> MachineBuilder<R> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            current: None,
            transitions: HashMap::new(),
            callbacks: HashMap::new(),
            aliases: HashMap::new(),
        }
    }

    /// Set the current (initial) state. Required.
    pub fn current(mut self, name: R::Name) -> Self {
        self.current = Some(name);
        self
    }

    /// Declare that `event` fired from `from` moves the record to `to`.
    ///
    /// `from` accepts a plain state name or [`StateKey::Any`] for a
    /// wildcard source. Declaring the same `(event, from)` pair again
    /// replaces the earlier target.
    pub fn transition(
        mut self,
        event: R::Name,
        from: impl Into<StateKey<R::Name>>,
        to: R::Name,
    ) -> Self {
        self.transitions
            .entry(event)
            .or_default()
            .insert(from.into(), to);
        self
    }

    /// Append a callback fired after the record arrives at a state
    /// matching `key`.
    ///
    /// Repeated calls for the same key pile up and fire in declaration
    /// order.
    pub fn callback<F>(mut self, key: impl Into<StateKey<R::Name>>, callback: F) -> Self
    where
        F: Fn(R, &R::Name, Option<&R::Payload>) -> Result<R, CallbackError>
            + Send
            + Sync
            + 'static,
    {
        self.callbacks
            .entry(key.into())
            .or_default()
            .push(Callback::new(callback));
        self
    }

    /// Append one prepared callback value, or an ordered list of them.
    pub fn callbacks(
        mut self,
        key: impl Into<StateKey<R::Name>>,
        callbacks: impl Into<OneOrMany<Callback<R>>>,
    ) -> Self {
        self.callbacks
            .entry(key.into())
            .or_default()
            .extend(callbacks.into().into_vec());
        self
    }

    /// Declare alias name(s) that `state` also answers to.
    ///
    /// Accepts a single name or a list; repeated calls append. Order is
    /// preserved and becomes the resolution order.
    pub fn alias(mut self, state: R::Name, names: impl Into<OneOrMany<R::Name>>) -> Self {
        self.aliases
            .entry(state)
            .or_default()
            .extend(names.into().into_vec());
        self
    }

    /// Build the descriptor.
    /// Returns an error if required pieces are missing.
    pub fn build(self) -> Result<Machine<R>, BuildError> {
        let current = self.current.ok_or(BuildError::MissingCurrent)?;

        if self.transitions.is_empty() {
            return Err(BuildError::NoTransitions);
        }

        Ok(Machine {
            current: Some(current),
            transitions: Some(Arc::new(self.transitions)),
            callbacks: Arc::new(self.callbacks),
            aliases: Arc::new(self.aliases),
        })
    }
}

impl<R: StateRecord> Default for MachineBuilder<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{resolve_next, validate};
    use crate::record::MapRecord;

    type Rec = MapRecord<&'static str, i32>;

    #[test]
    fn builder_requires_a_current_state() {
        let result = MachineBuilder::<Rec>::new()
            .transition("begin", "new", "started")
            .build();

        assert!(matches!(result, Err(BuildError::MissingCurrent)));
    }

    #[test]
    fn builder_requires_transitions() {
        let result = MachineBuilder::<Rec>::new().current("new").build();

        assert!(matches!(result, Err(BuildError::NoTransitions)));
    }

    #[test]
    fn built_machines_pass_validation() {
        let machine = MachineBuilder::new()
            .current("new")
            .transition("begin", "new", "started")
            .build()
            .unwrap();
        let record: Rec = MapRecord::new().with_machine(machine);

        assert!(validate(&record).is_ok());
    }

    #[test]
    fn redeclaring_a_source_replaces_the_target() {
        let machine = MachineBuilder::new()
            .current("new")
            .transition("begin", "new", "started")
            .transition("begin", "new", "elsewhere")
            .build()
            .unwrap();
        let record: Rec = MapRecord::new().with_machine(machine);

        assert_eq!(resolve_next(&record, "begin").unwrap(), Some("elsewhere"));
    }

    #[test]
    fn callbacks_accept_prepared_values() {
        let double = Callback::new(|record: Rec, _event, _payload| {
            let n = record.get("n").copied().unwrap_or(1);
            Ok(record.insert("n", n * 2))
        });
        let bump = Callback::new(|record: Rec, _event, _payload| {
            let n = record.get("n").copied().unwrap_or(1);
            Ok(record.insert("n", n + 1))
        });

        let machine = MachineBuilder::new()
            .current("new")
            .transition("begin", "new", "started")
            .callbacks("started", vec![double, bump])
            .build()
            .unwrap();
        let record: Rec = MapRecord::new().insert("n", 3).with_machine(machine);

        let next = crate::engine::trigger(&record, "begin", None).unwrap();
        assert_eq!(next.get("n"), Some(&7));
    }

    #[test]
    fn alias_accepts_one_name_or_many() {
        let machine = MachineBuilder::<Rec>::new()
            .current("step2")
            .transition("advance", "aliased", "recognized")
            .alias("step2", "aliased")
            .alias("step3", vec!["aliased", "blessed"])
            .build()
            .unwrap();

        assert_eq!(machine.aliases.get("step2"), Some(&vec!["aliased"]));
        assert_eq!(
            machine.aliases.get("step3"),
            Some(&vec!["aliased", "blessed"])
        );
    }

    #[test]
    fn repeated_alias_calls_append_in_order() {
        let machine = MachineBuilder::<Rec>::new()
            .current("step1")
            .transition("advance", "step1", "step2")
            .alias("step1", "first")
            .alias("step1", vec!["second", "third"])
            .build()
            .unwrap();

        assert_eq!(
            machine.aliases.get("step1"),
            Some(&vec!["first", "second", "third"])
        );
    }
}
