//! Command implementations.

pub mod extract;
pub mod probe;
