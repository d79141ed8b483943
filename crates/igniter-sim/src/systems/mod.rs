//! ECS systems that operate on the engine world each tick.
//!
//! Systems are plain functions over `&mut World` (or `&World` for read-only).
//! They do not own state; all state lives in components.

pub mod host_effects;
pub mod ignition;
pub mod snapshot;
