//! CLI command implementations.

pub mod check;
pub mod column;
pub mod participant;
pub mod stats;
pub mod task;
pub mod validate;
