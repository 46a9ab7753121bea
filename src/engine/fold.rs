//! Callback folding after a transition.

use crate::core::{Callback, MachineError, StateRecord};

use super::inspect::machine_slot;
use super::names::effective_names;

/// Fold every applicable callback over `record`, threading the result of
/// each into the next.
///
/// Applicable means the callback sits under a slot matching one of the
/// record's effective names, so this is normally called on the record
/// *after* its current state has moved. Slots fire in resolution order
/// (exact, aliases in declaration order, wildcard), and within a slot in
/// declaration order. Every match fires; there is no shadowing here.
///
/// The first callback error abandons the fold. Partial work is discarded
/// with the abandoned record, and the error surfaces as `InvalidMachine`
/// with the callback's own failure preserved as the source.
pub fn apply_callbacks<R: StateRecord>(
    record: R,
    event: R::Name,
    payload: Option<&R::Payload>,
) -> Result<R, MachineError> {
    let queue = callback_queue(&record)?;

    let mut state = record;
    for callback in queue {
        state = callback
            .call(state, &event, payload)
            .map_err(|source| MachineError::InvalidMachine {
                reason: format!("callback failed handling `{event}`"),
                source: Some(source),
            })?;
    }
    Ok(state)
}

/// All callbacks matching the record's effective names, concatenated in
/// firing order. Clones are cheap reference bumps.
fn callback_queue<R: StateRecord>(record: &R) -> Result<Vec<Callback<R>>, MachineError> {
    let callbacks = &machine_slot(record)?.callbacks;

    let mut queue = Vec::new();
    for name in effective_names(record)? {
        if let Some(slot) = callbacks.get(&name) {
            queue.extend(slot.iter().cloned());
        }
    }
    Ok(queue)
}
