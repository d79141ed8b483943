//! Headless host simulation for the engine igniter.
//!
//! Owns the hecs ECS world of engine parts, feeds each ignition tracker its
//! throttle once per tick, applies the resulting decisions through the
//! `EngineHost` capability interface and produces `IgnitionSnapshot`s.

pub mod engine;
pub mod host;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use igniter_core as core;
