//! ECS components for hecs engine entities.
//!
//! Components are plain data structs. Ignition logic lives in the tracker,
//! host effects live in systems.

use serde::{Deserialize, Serialize};

/// Identity of an engine part.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineIdentity {
    /// Unique part name, used as the persistence key.
    pub name: String,
    /// Display title shown to the pilot.
    pub title: String,
}

/// Throttle requested of this engine by the host, read once per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Throttle {
    pub requested: f32,
}

/// A named host action on the engine (e.g. "Shutdown Engine").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineAction {
    pub name: String,
    /// How many times the host has invoked this action.
    #[serde(default)]
    pub invocations: u32,
}

impl EngineAction {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            invocations: 0,
        }
    }
}

/// Host-side running state and actions of an engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineControls {
    /// Whether the engine's "running" behavior groups are active.
    pub running_groups_active: bool,
    pub actions: Vec<EngineAction>,
}
