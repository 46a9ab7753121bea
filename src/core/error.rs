//! Error taxonomy for machine evaluation.

use thiserror::Error;

/// Error type callbacks may return.
///
/// Boxed so callbacks can fail with whatever error type their own logic
/// produces; the engine wraps it without inspecting it.
pub type CallbackError = Box<dyn std::error::Error + Send + Sync>;

/// Everything that can go wrong while evaluating a machine.
///
/// The three variants separate whose fault the failure is:
///
/// - [`InvalidMachine`](MachineError::InvalidMachine): the record or its
///   descriptor is unusable. Configuration-time fault.
/// - [`InvalidEvent`](MachineError::InvalidEvent): the caller asked about
///   an event the machine has never heard of. Caller fault.
/// - [`InvalidState`](MachineError::InvalidState): the event exists but is
///   not legal from the current state. Runtime-condition fault, and the
///   only one of the three that the non-strict trigger reports as a plain
///   `None` instead.
#[derive(Debug, Error)]
pub enum MachineError {
    /// The descriptor is missing or structurally unusable, or a callback
    /// failed mid-fold and left the evaluation unfinishable.
    #[error("invalid machine: {reason}")]
    InvalidMachine {
        /// What made the descriptor unusable.
        reason: String,
        /// Underlying callback failure, when one caused this.
        #[source]
        source: Option<CallbackError>,
    },

    /// The event does not appear in the transition table at all.
    #[error("unknown event `{event}`")]
    InvalidEvent {
        /// The event name as given by the caller.
        event: String,
    },

    /// The event exists but has no transition out of the current state.
    #[error("event `{event}` cannot fire from state `{state}`")]
    InvalidState {
        /// The event that was asked to fire.
        event: String,
        /// The state the record was in.
        state: String,
    },
}

impl MachineError {
    pub(crate) fn invalid_machine(reason: impl Into<String>) -> Self {
        MachineError::InvalidMachine {
            reason: reason.into(),
            source: None,
        }
    }
}
