//! Ignition tracker finite state machine.
//!
//! Decides, once per tick, whether a throttle edge is an ignition attempt,
//! whether the budget allows it, and what the host must do about it.
//! No ECS dependency and no side effects beyond its own counters.

use igniter_core::config::EngineConfig;
use igniter_core::constants::THROTTLE_ON_THRESHOLD;
use igniter_core::enums::{IgnitionState, SimulationMode};
use igniter_core::events::Decision;
use igniter_core::types::Remaining;

/// Ignition budget and edge state for one engine.
///
/// Stores ignitions *used* and derives what remains, so the counter can
/// never go negative or be decremented twice for one edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnitionTracker {
    ignitions_permitted: i32,
    ignitions_used: u32,
    state: IgnitionState,
    mode: SimulationMode,
}

impl IgnitionTracker {
    /// Create a tracker from a configured budget (`<= 0` is unlimited) and a
    /// previously persisted usage count.
    pub fn new(ignitions_permitted: i32, ignitions_used: u32) -> Self {
        Self {
            ignitions_permitted,
            ignitions_used,
            state: IgnitionState::NotIgnited,
            mode: SimulationMode::Uninitialized,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.ignitions_permitted, config.ignitions_used)
    }

    /// Attach to a live engine under the given host mode.
    ///
    /// A mode change starts a new session at `NotIgnited`. Attaching in the
    /// editor always zeroes the usage counter so staging previews show the
    /// full budget.
    pub fn attach(&mut self, mode: SimulationMode) {
        if mode != self.mode || mode == SimulationMode::EditorMode {
            self.state = IgnitionState::NotIgnited;
        }
        self.mode = mode;
        if mode == SimulationMode::EditorMode {
            self.ignitions_used = 0;
        }
    }

    /// Advance one tick with the throttle the host currently requests.
    pub fn tick(&mut self, requested_throttle: f32) -> Decision {
        if !self.mode.is_active() {
            return Decision::NoOp;
        }

        let commanded_on = requested_throttle > THROTTLE_ON_THRESHOLD;

        match (self.state, commanded_on) {
            (IgnitionState::NotIgnited, true) => self.attempt_ignition(),
            (IgnitionState::Ignited, false) => {
                self.state = IgnitionState::NotIgnited;
                Decision::Deignited
            }
            _ => Decision::NoOp,
        }
    }

    fn attempt_ignition(&mut self) -> Decision {
        // Exhausted: stay NotIgnited so the next tick with throttle up
        // enforces the shutdown again.
        if !self.is_startable() {
            return Decision::ForceShutdown;
        }

        // Unlimited budgets never count, so the counter cannot grow unbounded.
        if self.requires_ignition() {
            self.ignitions_used = self.ignitions_used.saturating_add(1);
        }
        self.state = IgnitionState::Ignited;

        Decision::Ignited {
            remaining: self.ignitions_remaining(),
        }
    }

    /// Whether the engine could be lit right now.
    pub fn is_startable(&self) -> bool {
        self.ignitions_remaining().allows_ignition()
    }

    pub fn ignitions_remaining(&self) -> Remaining {
        if self.requires_ignition() {
            let permitted = self.ignitions_permitted as u32;
            Remaining::Limited(permitted.saturating_sub(self.ignitions_used))
        } else {
            Remaining::Unlimited
        }
    }

    /// Whether ignitions are rationed at all.
    pub fn requires_ignition(&self) -> bool {
        self.ignitions_permitted > 0
    }

    pub fn ignitions_permitted(&self) -> i32 {
        self.ignitions_permitted
    }

    pub fn ignitions_used(&self) -> u32 {
        self.ignitions_used
    }

    pub fn state(&self) -> IgnitionState {
        self.state
    }

    pub fn mode(&self) -> SimulationMode {
        self.mode
    }
}
