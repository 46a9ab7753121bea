//! Core data model for machine-bearing state records.
//!
//! This module contains the pure values everything else operates on:
//! - The `StateRecord` trait connecting caller-owned records to the engine
//! - The `Machine` descriptor and its lookup tables
//! - Callback values and the evaluation error taxonomy
//!
//! Nothing here performs evaluation; these are plain immutable values.
//! The free functions in [`crate::engine`] do the work.

mod callback;
mod error;
mod machine;
mod state;

pub use callback::{Callback, CallbackFn};
pub use error::{CallbackError, MachineError};
pub use machine::{AliasTable, CallbackTable, Machine, OneOrMany, StateKey, TransitionTable};
pub use state::StateRecord;
