//! The evaluation engine: stateless free functions over state records.
//!
//! Every operation here takes a record (plus an event and optional payload)
//! and either answers a question about it or returns a successor record.
//! Nothing is cached between calls and nothing is ever mutated; two calls
//! with the same record always behave identically.
//!
//! The pipeline for firing an event:
//!
//! 1. [`effective_names`] lists the names the current state answers to,
//!    most specific first.
//! 2. [`resolve_next`] walks those names through the event's source map and
//!    takes the first hit.
//! 3. The record is rebuilt pointing at the target state.
//! 4. [`apply_callbacks`] folds every callback slot matching the new state
//!    over the rebuilt record.
//!
//! [`trigger`] and [`try_trigger`] run the whole pipeline; the rest are
//! exposed for callers that want the intermediate answers.

mod fold;
mod inspect;
mod names;
mod resolve;
mod trigger;
mod validate;

pub use fold::apply_callbacks;
pub use inspect::{current, events, machine_states, transitions, triggerable_events};
pub use names::effective_names;
pub use resolve::{can_trigger, resolve_next};
pub use trigger::{trigger, try_trigger};
pub use validate::validate;
