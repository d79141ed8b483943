//! Ignition system: ticks every engine's tracker with its requested throttle.
//!
//! Only the tracker decides. Effects on the engine are applied afterwards by
//! the host effects system.

use hecs::{Entity, World};
use tracing::{debug, info};

use igniter_core::components::{EngineIdentity, Throttle};
use igniter_core::events::{Decision, EngineDecision};
use igniter_fsm::IgnitionTracker;

/// Tick each tracker once and collect the decisions that need applying.
pub fn run(
    world: &mut World,
    current_tick: u64,
    decisions: &mut Vec<(Entity, EngineDecision)>,
) {
    for (entity, (identity, throttle, tracker)) in
        world.query_mut::<(&EngineIdentity, &Throttle, &mut IgnitionTracker)>()
    {
        let decision = tracker.tick(throttle.requested);
        match decision {
            Decision::NoOp => continue,
            Decision::Ignited { remaining } => {
                info!(
                    engine = %identity.name,
                    "Igniting {}: {remaining} ignitions remaining",
                    identity.name
                );
            }
            Decision::Deignited => {
                debug!(engine = %identity.name, "{} throttled down", identity.name);
            }
            // Logged by the host when the shutdown is applied.
            Decision::ForceShutdown => {}
        }

        decisions.push((
            entity,
            EngineDecision {
                engine: identity.name.clone(),
                decision,
                tick: current_tick,
            },
        ));
    }
}
