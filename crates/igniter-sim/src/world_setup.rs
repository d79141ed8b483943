//! Entity spawn factories for setting up the engine world.

use hecs::{Entity, World};
use tracing::info;

use igniter_core::components::{EngineAction, EngineControls, EngineIdentity, Throttle};
use igniter_core::config::EngineConfig;
use igniter_fsm::IgnitionTracker;

/// Spawn one entity per configured engine.
pub fn setup_engines(world: &mut World, engines: &[EngineConfig]) {
    for config in engines {
        spawn_engine(world, config);
    }
}

/// Spawn an engine at zero throttle with its tracker loaded from config.
pub fn spawn_engine(world: &mut World, config: &EngineConfig) -> Entity {
    let tracker = IgnitionTracker::from_config(config);
    info!(engine = %config.name, "{}", tracker.load_summary(&config.name));

    let controls = EngineControls {
        running_groups_active: false,
        actions: config.actions.iter().map(EngineAction::new).collect(),
    };

    world.spawn((
        EngineIdentity {
            name: config.name.clone(),
            title: config.display_title().to_string(),
        },
        Throttle::default(),
        controls,
        tracker,
    ))
}
