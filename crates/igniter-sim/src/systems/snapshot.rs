//! Snapshot system: builds the `IgnitionSnapshot` handed to presentation.

use hecs::World;

use igniter_core::components::{EngineControls, EngineIdentity};
use igniter_core::enums::SimulationMode;
use igniter_core::events::{EngineDecision, ScreenMessage};
use igniter_core::state::{EngineIgnitionView, IgnitionSnapshot};
use igniter_core::types::SimTime;
use igniter_fsm::IgnitionTracker;

/// Build a snapshot of every engine, ordered by name.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    mode: SimulationMode,
    decisions: Vec<EngineDecision>,
    messages: Vec<ScreenMessage>,
) -> IgnitionSnapshot {
    let mut query = world.query::<(&EngineIdentity, &IgnitionTracker, &EngineControls)>();
    let mut engines: Vec<EngineIgnitionView> = query
        .iter()
        .map(|(_entity, (identity, tracker, controls))| EngineIgnitionView {
            name: identity.name.clone(),
            title: identity.title.clone(),
            state: tracker.state(),
            ignitions_permitted: tracker.ignitions_permitted(),
            ignitions_used: tracker.ignitions_used(),
            remaining: tracker.ignitions_remaining(),
            startable: tracker.is_startable(),
            running: controls.running_groups_active,
            description: tracker.describe(),
        })
        .collect();
    engines.sort_by(|a, b| a.name.cmp(&b.name));

    IgnitionSnapshot {
        time: *time,
        mode,
        engines,
        decisions,
        messages,
    }
}
