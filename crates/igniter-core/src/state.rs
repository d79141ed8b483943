//! Ignition snapshot: the visible state handed to presentation after each tick,
//! plus the per-engine record the host persists between sessions.

use serde::{Deserialize, Serialize};

use crate::enums::{IgnitionState, SimulationMode};
use crate::events::{EngineDecision, ScreenMessage};
use crate::types::{Remaining, SimTime};

/// Complete ignition state broadcast to the host after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IgnitionSnapshot {
    pub time: SimTime,
    pub mode: SimulationMode,
    pub engines: Vec<EngineIgnitionView>,
    /// Non-trivial decisions taken this tick.
    pub decisions: Vec<EngineDecision>,
    /// Messages posted this tick.
    pub messages: Vec<ScreenMessage>,
}

/// One engine as shown in the "Ignitions Available" field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineIgnitionView {
    pub name: String,
    pub title: String,
    pub state: IgnitionState,
    pub ignitions_permitted: i32,
    pub ignitions_used: u32,
    pub remaining: Remaining,
    pub startable: bool,
    pub running: bool,
    pub description: String,
}

/// Persisted ignition counter for one engine. `ignitions_permitted` is
/// configuration and is not written back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedIgnition {
    pub engine: String,
    pub ignitions_used: u32,
}
