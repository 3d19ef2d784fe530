//! Statistics module for Planboard
//!
//! Provides per-participant workload analytics: total assigned minutes
//! and the chronologically ordered task list for every participant.

mod participant_load;

pub use participant_load::{ParticipantLoad, ParticipantLoadAnalyzer, TaskLoad};
