//! Ignition accounting for the engine igniter.
//!
//! Implements the per-engine ignition state machine and the text
//! descriptions presentation layers show for it.

pub mod describe;
pub mod tracker;

pub use igniter_core as core;
pub use tracker::IgnitionTracker;
