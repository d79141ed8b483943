//! Commands sent from the host to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::SimulationMode;

/// All host-side inputs the simulation accepts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum HostCommand {
    /// Attach every engine's tracker under the given lifecycle mode.
    Attach { mode: SimulationMode },
    /// Set the requested throttle of a single engine (0.0 - 1.0).
    SetThrottle { engine: String, throttle: f32 },
    /// Set the requested throttle of every engine.
    SetAllThrottles { throttle: f32 },
}
