//! Build errors for machine descriptor construction.

use thiserror::Error;

/// Errors that can occur when assembling a machine descriptor.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Current state not specified. Call .current(state) before .build()")]
    MissingCurrent,

    #[error("No transitions defined. Add at least one transition")]
    NoTransitions,
}
