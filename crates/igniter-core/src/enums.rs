//! Enumeration types used throughout the igniter.

use serde::{Deserialize, Serialize};

/// Host lifecycle the tracker is attached under.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimulationMode {
    /// Not yet attached to a live engine. Treated as inert.
    #[default]
    Uninitialized,
    /// Vehicle editor: ignition budget is shown full and never consumed.
    EditorMode,
    /// Active simulation: throttle edges consume ignitions.
    ActiveMode,
}

impl SimulationMode {
    /// Whether trackers react to throttle in this mode.
    pub fn is_active(self) -> bool {
        self == SimulationMode::ActiveMode
    }
}

/// Volatile per-session ignition state. Never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum IgnitionState {
    #[default]
    NotIgnited,
    Ignited,
}
