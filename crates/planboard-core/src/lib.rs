//! # Planboard Core Library
//!
//! Core engine for Planboard, a day-view scheduling board: tasks are
//! time-boxed activities with participants, grouped into columns, inside
//! a per-project day window. The surrounding application (board UI,
//! persistence, export) owns all state; this library only computes over
//! snapshots it is handed.
//!
//! ## Key Components
//!
//! - [`interval`]: minute-of-day interval math with half-open overlap
//! - [`ConflictDetector`]: participant double-booking checks
//! - [`ParticipantLoadAnalyzer`]: per-participant workload aggregation
//! - [`ProjectConfig`]: day window / segment configuration and save-time
//!   task validation
//! - [`roster`]: pure roster maintenance helpers
//!
//! Everything here is synchronous and side-effect free; calls may be
//! repeated on every edit without any locking discipline.

pub mod board;
pub mod conflict;
pub mod error;
pub mod interval;
pub mod project;
pub mod roster;
pub mod stats;

pub use board::{BoardSnapshot, Column, Participant, Task};
pub use conflict::{CandidateSlot, ConflictDetector};
pub use error::{ConfigError, CoreError, Result, ValidationError};
pub use interval::MinuteSpan;
pub use project::{Project, ProjectConfig};
pub use stats::{ParticipantLoad, ParticipantLoadAnalyzer, TaskLoad};
