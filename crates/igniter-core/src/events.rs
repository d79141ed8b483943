//! Decisions produced by the ignition tracker and messages for the host UI.

use serde::{Deserialize, Serialize};

use crate::types::Remaining;

/// Outcome of one tracker tick. The host applies it; the tracker never
/// touches the engine itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Decision {
    /// Nothing to do this tick.
    NoOp,
    /// Rising throttle edge accepted; one ignition consumed if rationed.
    Ignited { remaining: Remaining },
    /// Falling throttle edge; the engine is considered shut down.
    Deignited,
    /// Ignition attempted with no budget left. The host must force the
    /// engine off and tell the pilot.
    ForceShutdown,
}

/// A decision tagged with the engine it applies to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineDecision {
    pub engine: String,
    pub decision: Decision,
    pub tick: u64,
}

/// Transient user-facing message posted by the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenMessage {
    pub text: String,
    pub duration_secs: f32,
    pub tick: u64,
}
