//! Firing events: the full evaluation pipeline.

use crate::core::{MachineError, StateRecord};

use super::fold::apply_callbacks;
use super::inspect::{current, machine_slot};
use super::resolve::{can_trigger, resolve_next};

/// Fire `event` if it can fire, returning the successor record.
///
/// Answers `Ok(None)` when the event is defined but has no route from the
/// current state, which makes this the right call for opportunistic
/// advancement ("move on if you can"). The original record is never
/// touched either way.
///
/// # Errors
///
/// - `InvalidEvent` when the machine does not define `event` at all.
/// - `InvalidMachine` when the record has no usable descriptor, or a
///   callback fails mid-fold.
///
/// # Example
///
/// ```rust
/// use statefold::{current, try_trigger, MachineBuilder, MapRecord, StateRecord};
///
/// let machine = MachineBuilder::new()
///     .current("new")
///     .transition("begin", "new", "started")
///     .transition("finish", "started", "done")
///     .build()
///     .unwrap();
/// let record: MapRecord<&str, i32> = MapRecord::new().with_machine(machine);
///
/// // A route exists: a successor comes back, the original stays put.
/// let started = try_trigger(&record, "begin", None).unwrap().unwrap();
/// assert_eq!(current(&started).unwrap(), &"started");
/// assert_eq!(current(&record).unwrap(), &"new");
///
/// // Defined event, no route from "new": quietly declined.
/// assert!(try_trigger(&record, "finish", None).unwrap().is_none());
/// ```
pub fn try_trigger<R: StateRecord>(
    record: &R,
    event: R::Name,
    payload: Option<&R::Payload>,
) -> Result<Option<R>, MachineError> {
    if can_trigger(record, event.clone())? {
        change(record, event, payload).map(Some)
    } else {
        Ok(None)
    }
}

/// Fire `event`, treating "no route from here" as an error.
///
/// Same pipeline as [`try_trigger`], but a declined transition comes back
/// as `InvalidState` naming the event and the state it could not leave.
/// Use this when the caller believes the transition must be possible.
///
/// # Example
///
/// ```rust
/// use statefold::{trigger, MachineBuilder, MapRecord, MachineError, StateRecord};
///
/// let machine = MachineBuilder::new()
///     .current("new")
///     .transition("begin", "new", "started")
///     .transition("finish", "started", "done")
///     .build()
///     .unwrap();
/// let record: MapRecord<&str, i32> = MapRecord::new().with_machine(machine);
///
/// let err = trigger(&record, "finish", None).unwrap_err();
/// assert!(matches!(err, MachineError::InvalidState { .. }));
/// ```
pub fn trigger<R: StateRecord>(
    record: &R,
    event: R::Name,
    payload: Option<&R::Payload>,
) -> Result<R, MachineError> {
    match try_trigger(record, event.clone(), payload)? {
        Some(next) => Ok(next),
        None => Err(MachineError::InvalidState {
            event: event.to_string(),
            state: current(record)?.to_string(),
        }),
    }
}

/// Move the record to the event's target and fold the callbacks.
///
/// Assumes the caller has already established that the event can fire.
fn change<R: StateRecord>(
    record: &R,
    event: R::Name,
    payload: Option<&R::Payload>,
) -> Result<R, MachineError> {
    let target = match resolve_next(record, event.clone())? {
        Some(target) => target,
        None => {
            return Err(MachineError::InvalidState {
                event: event.to_string(),
                state: current(record)?.to_string(),
            })
        }
    };

    let moved = record.with_machine(machine_slot(record)?.with_current(target));
    apply_callbacks(moved, event, payload)
}
