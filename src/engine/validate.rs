//! Structural validation of a record's machine descriptor.

use crate::core::{MachineError, StateRecord};

use super::inspect::machine_slot;

/// Check that `record` carries a usable machine descriptor.
///
/// Passing here is the definition of well-formed: a record this accepts
/// will never make the other engine operations fail with `InvalidMachine`
/// for structural reasons (a callback failing at runtime still can).
///
/// Only three structural faults are representable and checked: a missing
/// descriptor, a missing current state, and a missing transition table.
/// The rest of the well-formedness contract (tables keyed by names, alias
/// lists that are lists, callbacks that are callable) is carried by the
/// types and cannot be wrong by construction. An empty transition table is
/// accepted; such a machine answers introspection but can never move.
///
/// # Example
///
/// ```rust
/// use statefold::{validate, MachineBuilder, MapRecord, StateRecord};
///
/// let machine = MachineBuilder::new()
///     .current("new")
///     .transition("begin", "new", "started")
///     .build()
///     .unwrap();
///
/// let record: MapRecord<&str, i32> = MapRecord::new().with_machine(machine);
/// assert!(validate(&record).is_ok());
///
/// let bare: MapRecord<&str, i32> = MapRecord::new();
/// assert!(validate(&bare).is_err());
/// ```
pub fn validate<R: StateRecord>(record: &R) -> Result<(), MachineError> {
    let machine = machine_slot(record)?;
    if machine.current.is_none() {
        return Err(MachineError::invalid_machine("no current state"));
    }
    if machine.transitions.is_none() {
        return Err(MachineError::invalid_machine("no transition table"));
    }
    Ok(())
}
