//! Read-only introspection over a record's machine descriptor.

use crate::core::{Machine, MachineError, StateRecord, TransitionTable};
use std::collections::HashSet;

use super::resolve::can_trigger;

/// The machine slot, or `InvalidMachine` when the record has none.
pub(crate) fn machine_slot<R: StateRecord>(record: &R) -> Result<&Machine<R>, MachineError> {
    record
        .machine()
        .ok_or_else(|| MachineError::invalid_machine("no machine descriptor on record"))
}

/// The record's current state name.
///
/// # Example
///
/// ```rust
/// use statefold::{current, MachineBuilder, MapRecord, StateRecord};
///
/// let machine = MachineBuilder::new()
///     .current("new")
///     .transition("begin", "new", "started")
///     .build()
///     .unwrap();
/// let record: MapRecord<&str, i32> = MapRecord::new().with_machine(machine);
///
/// assert_eq!(current(&record).unwrap(), &"new");
/// ```
pub fn current<R: StateRecord>(record: &R) -> Result<&R::Name, MachineError> {
    machine_slot(record)?
        .current
        .as_ref()
        .ok_or_else(|| MachineError::invalid_machine("no current state"))
}

/// The record's transition table.
pub fn transitions<R: StateRecord>(
    record: &R,
) -> Result<&TransitionTable<R::Name>, MachineError> {
    machine_slot(record)?
        .transitions
        .as_deref()
        .ok_or_else(|| MachineError::invalid_machine("no transition table"))
}

/// Every event name the machine defines, in no particular order.
pub fn events<R: StateRecord>(record: &R) -> Result<Vec<&R::Name>, MachineError> {
    Ok(transitions(record)?.keys().collect())
}

/// The subset of events that can fire from the current state.
pub fn triggerable_events<R: StateRecord>(record: &R) -> Result<Vec<&R::Name>, MachineError> {
    let table = transitions(record)?;
    let mut triggerable = Vec::new();
    for event in table.keys() {
        if can_trigger(record, event.clone())? {
            triggerable.push(event);
        }
    }
    Ok(triggerable)
}

/// Every distinct state name reachable as a transition target.
///
/// States that only ever appear as sources (or in alias declarations) are
/// not listed; this is the set of places a transition can land.
pub fn machine_states<R: StateRecord>(record: &R) -> Result<HashSet<&R::Name>, MachineError> {
    Ok(transitions(record)?
        .values()
        .flat_map(|sources| sources.values())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::MachineBuilder;
    use crate::record::MapRecord;

    type Rec = MapRecord<&'static str, i32>;

    fn record() -> Rec {
        let machine = MachineBuilder::new()
            .current("step1")
            .transition("begin", "new", "step1")
            .transition("advance", "step1", "step2")
            .transition("advance", "step2", "step3")
            .transition("finish", "step3", "done")
            .build()
            .unwrap();
        MapRecord::new().with_machine(machine)
    }

    #[test]
    fn current_reads_the_descriptor() {
        assert_eq!(current(&record()).unwrap(), &"step1");
    }

    #[test]
    fn current_without_machine_is_invalid() {
        let bare = Rec::new();
        let err = current(&bare).unwrap_err();
        assert!(matches!(err, MachineError::InvalidMachine { .. }));
    }

    #[test]
    fn current_without_state_is_invalid() {
        let machine = crate::core::Machine::default();
        let record = Rec::new().with_machine(machine);
        let err = current(&record).unwrap_err();
        assert!(matches!(err, MachineError::InvalidMachine { .. }));
    }

    #[test]
    fn events_lists_every_defined_event() {
        let record = record();
        let mut events = events(&record).unwrap();
        events.sort();
        assert_eq!(events, vec![&"advance", &"begin", &"finish"]);
    }

    #[test]
    fn triggerable_events_respects_the_current_state() {
        let record = record();
        let triggerable = triggerable_events(&record).unwrap();
        assert_eq!(triggerable, vec![&"advance"]);
    }

    #[test]
    fn machine_states_collects_distinct_targets_only() {
        let record = record();
        let states = machine_states(&record).unwrap();

        let mut sorted: Vec<_> = states.into_iter().collect();
        sorted.sort();
        // "new" is only ever a source, so it does not appear.
        assert_eq!(sorted, vec![&"done", &"step1", &"step2", &"step3"]);
    }

    #[test]
    fn transitions_missing_table_is_invalid() {
        let machine = crate::core::Machine {
            current: Some("new"),
            ..crate::core::Machine::default()
        };
        let record = Rec::new().with_machine(machine);
        let err = transitions(&record).unwrap_err();
        assert!(matches!(err, MachineError::InvalidMachine { .. }));
    }
}
