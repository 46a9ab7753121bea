//! Statefold: a pure functional state machine engine
//!
//! Statefold evaluates finite state machines over caller-owned, immutable
//! state records. The machine descriptor travels with the record as plain
//! data; the engine is a set of stateless free functions that read it and
//! build successor records. Nothing is registered, nothing is cached, and
//! no record is ever mutated in place.
//!
//! # Core Concepts
//!
//! - **StateRecord**: the trait connecting caller-owned records to the engine
//! - **Machine**: the descriptor tables (current state, transitions,
//!   callbacks, aliases) a record carries
//! - **Engine**: free functions that fire events, fold callbacks, and
//!   answer introspection questions
//! - **Wildcard and aliases**: fallback names a state answers to, resolved
//!   most specific first
//!
//! # Example
//!
//! ```rust
//! use statefold::{current, trigger, try_trigger, MachineBuilder, MapRecord, StateRecord};
//!
//! // Describe the machine: plain tables, assembled fluently.
//! let machine = MachineBuilder::new()
//!     .current("draft")
//!     .transition("submit", "draft", "review")
//!     .transition("approve", "review", "published")
//!     .callback("review", |record: MapRecord<&str, u32>, _event, _payload| {
//!         let rounds = record.get("rounds").copied().unwrap_or(0);
//!         Ok(record.insert("rounds", rounds + 1))
//!     })
//!     .build()
//!     .unwrap();
//!
//! // The record owns the descriptor; the engine only ever builds successors.
//! let record = MapRecord::new().with_machine(machine);
//!
//! let reviewed = trigger(&record, "submit", None).unwrap();
//! assert_eq!(current(&reviewed).unwrap(), &"review");
//! assert_eq!(reviewed.get("rounds"), Some(&1));
//!
//! // The original record is untouched.
//! assert_eq!(current(&record).unwrap(), &"draft");
//!
//! // Known event with no route from here: a quiet None, not an error.
//! assert!(try_trigger(&record, "approve", None).unwrap().is_none());
//! ```

pub mod builder;
pub mod core;
pub mod engine;
pub mod record;

// Re-export commonly used types and the whole engine surface
pub use crate::builder::{BuildError, MachineBuilder};
pub use crate::core::{
    AliasTable, Callback, CallbackError, CallbackFn, CallbackTable, Machine, MachineError,
    OneOrMany, StateKey, StateRecord, TransitionTable,
};
pub use crate::engine::{
    apply_callbacks, can_trigger, current, effective_names, events, machine_states, resolve_next,
    transitions, trigger, triggerable_events, try_trigger, validate,
};
pub use crate::record::MapRecord;
