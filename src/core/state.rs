//! Core StateRecord trait for machine-bearing state values.
//!
//! A state record is an immutable value owned by the caller. It carries an
//! optional machine descriptor alongside whatever domain payload the caller
//! keeps, and the engine never mutates it: every operation that changes
//! state returns a freshly built successor record.

use super::machine::Machine;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait connecting caller-owned state values to the evaluation engine.
///
/// Implementors expose exactly two things: read access to the machine
/// descriptor slot, and a pure way to build a successor record with a
/// replacement descriptor. Everything else about the record (its fields,
/// its history, how it is stored) stays the caller's business.
///
/// # Associated Types
///
/// - `Name`: the atom used for state names, event names, and aliases.
///   Names are treated as cheap values and cloned freely, so pick an
///   interned or `Copy`-like type (`&'static str`, a small enum, `Arc<str>`).
/// - `Payload`: opaque data handed through to callbacks. The engine only
///   ever passes it by shared reference, so callbacks cannot mutate it.
///
/// # Example
///
/// ```rust
/// use statefold::core::{Machine, StateRecord};
/// use statefold::{current, trigger, MachineBuilder};
///
/// /// A record with a fixed payload shape instead of a generic map.
/// #[derive(Clone, Debug)]
/// struct Ticket {
///     machine: Option<Machine<Ticket>>,
///     reopened: u32,
/// }
///
/// impl StateRecord for Ticket {
///     type Name = &'static str;
///     type Payload = String;
///
///     fn machine(&self) -> Option<&Machine<Self>> {
///         self.machine.as_ref()
///     }
///
///     fn with_machine(&self, machine: Machine<Self>) -> Self {
///         Self {
///             machine: Some(machine),
///             ..self.clone()
///         }
///     }
/// }
///
/// let machine = MachineBuilder::new()
///     .current("open")
///     .transition("close", "open", "closed")
///     .transition("reopen", "closed", "open")
///     .callback("open", |ticket: Ticket, _event, _payload| {
///         Ok(Ticket {
///             reopened: ticket.reopened + 1,
///             ..ticket
///         })
///     })
///     .build()
///     .unwrap();
///
/// let ticket = Ticket {
///     machine: None,
///     reopened: 0,
/// }
/// .with_machine(machine);
///
/// let closed = trigger(&ticket, "close", None).unwrap();
/// let reopened = trigger(&closed, "reopen", None).unwrap();
///
/// assert_eq!(current(&reopened).unwrap(), &"open");
/// assert_eq!(reopened.reopened, 1);
/// ```
pub trait StateRecord: Sized {
    /// Atom type for state names, event names, and aliases.
    type Name: Clone + Eq + Hash + Debug + Display;

    /// Opaque payload data passed by shared reference to callbacks.
    type Payload;

    /// The machine descriptor slot, if one has been attached.
    ///
    /// A record without a descriptor is a plain value; every engine
    /// operation on it fails with `InvalidMachine` rather than panicking.
    fn machine(&self) -> Option<&Machine<Self>>;

    /// Build a successor record carrying `machine`, leaving `self` intact.
    ///
    /// Implementations must not mutate `self`; the engine relies on the
    /// original record remaining valid after any operation.
    fn with_machine(&self, machine: Machine<Self>) -> Self;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug)]
    struct Counter {
        machine: Option<Machine<Counter>>,
        count: u32,
    }

    impl StateRecord for Counter {
        type Name = &'static str;
        type Payload = u32;

        fn machine(&self) -> Option<&Machine<Self>> {
            self.machine.as_ref()
        }

        fn with_machine(&self, machine: Machine<Self>) -> Self {
            Self {
                machine: Some(machine),
                count: self.count,
            }
        }
    }

    #[test]
    fn machine_slot_starts_empty() {
        let counter = Counter {
            machine: None,
            count: 0,
        };
        assert!(counter.machine().is_none());
    }

    #[test]
    fn with_machine_attaches_descriptor() {
        let counter = Counter {
            machine: None,
            count: 3,
        };
        let attached = counter.with_machine(Machine::default());

        assert!(attached.machine().is_some());
        assert_eq!(attached.count, 3);
    }

    #[test]
    fn with_machine_leaves_original_untouched() {
        let counter = Counter {
            machine: None,
            count: 7,
        };
        let _attached = counter.with_machine(Machine::default());

        assert!(counter.machine().is_none());
        assert_eq!(counter.count, 7);
    }

    #[test]
    fn with_machine_replaces_existing_descriptor() {
        let counter = Counter {
            machine: None,
            count: 0,
        }
        .with_machine(Machine::default());

        let replacement = Machine {
            current: Some("replaced"),
            ..Machine::default()
        };
        let updated = counter.with_machine(replacement);

        assert_eq!(updated.machine().unwrap().current, Some("replaced"));
        assert_eq!(counter.machine().unwrap().current, None);
    }
}
