//! Builder API for ergonomic machine descriptor construction.
//!
//! This module provides a fluent builder for assembling the descriptor
//! tables with minimal boilerplate while keeping the result plain data.

pub mod error;
pub mod machine;

pub use error::BuildError;
pub use machine::MachineBuilder;
