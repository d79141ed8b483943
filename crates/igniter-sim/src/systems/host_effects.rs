//! Host effects system: applies tracker decisions to the engine entities.

use hecs::{Entity, World};

use igniter_core::components::{EngineControls, EngineIdentity};
use igniter_core::events::{Decision, EngineDecision, ScreenMessage};

use crate::host::{apply_force_shutdown, WorldEngineHost};

/// Apply this tick's decisions. Never alters tracker state.
pub fn run(
    world: &mut World,
    decisions: &[(Entity, EngineDecision)],
    messages: &mut Vec<ScreenMessage>,
    current_tick: u64,
) {
    for (entity, engine_decision) in decisions {
        let Ok((identity, controls)) =
            world.query_one_mut::<(&EngineIdentity, &mut EngineControls)>(*entity)
        else {
            continue;
        };

        match engine_decision.decision {
            Decision::Ignited { .. } => controls.running_groups_active = true,
            Decision::Deignited => controls.running_groups_active = false,
            Decision::ForceShutdown => {
                let mut host = WorldEngineHost {
                    engine_name: &identity.name,
                    controls,
                    messages: &mut *messages,
                    tick: current_tick,
                };
                apply_force_shutdown(&mut host, &identity.name, &identity.title);
            }
            Decision::NoOp => {}
        }
    }
}
