//! Transition resolution: which state an event leads to, if any.

use crate::core::{MachineError, StateRecord};

use super::inspect::transitions;
use super::names::effective_names;

/// The state `event` would move the record to, or `None` when nothing
/// matches.
///
/// Resolution walks the record's effective names in order and takes the
/// first one with an entry in the event's source map, so an exact-state
/// entry always beats an alias entry, which always beats a wildcard entry.
/// An event missing from the table entirely also answers `None` here;
/// [`can_trigger`] is the operation that treats that as an error.
pub fn resolve_next<R: StateRecord>(
    record: &R,
    event: R::Name,
) -> Result<Option<R::Name>, MachineError> {
    let table = transitions(record)?;
    let Some(sources) = table.get(&event) else {
        return Ok(None);
    };

    for name in effective_names(record)? {
        if let Some(target) = sources.get(&name) {
            return Ok(Some(target.clone()));
        }
    }
    Ok(None)
}

/// Whether `event` can fire from the record's current state.
///
/// Asking about an event the machine does not define at all is a caller
/// mistake and fails with `InvalidEvent`; a defined event that simply has
/// no route from here answers `Ok(false)`.
///
/// # Example
///
/// ```rust
/// use statefold::{can_trigger, MachineBuilder, MapRecord, StateRecord};
///
/// let machine = MachineBuilder::new()
///     .current("new")
///     .transition("begin", "new", "started")
///     .transition("finish", "started", "done")
///     .build()
///     .unwrap();
/// let record: MapRecord<&str, i32> = MapRecord::new().with_machine(machine);
///
/// assert!(can_trigger(&record, "begin").unwrap());
/// assert!(!can_trigger(&record, "finish").unwrap());
/// assert!(can_trigger(&record, "bogus").is_err());
/// ```
pub fn can_trigger<R: StateRecord>(record: &R, event: R::Name) -> Result<bool, MachineError> {
    if !transitions(record)?.contains_key(&event) {
        return Err(MachineError::InvalidEvent {
            event: event.to_string(),
        });
    }
    Ok(resolve_next(record, event)?.is_some())
}
