//! Capability interface between ignition decisions and the host's engine.
//!
//! The tracker never touches the engine. When it decides an engine must be
//! forced off, the integration layer drives these host capabilities.

use tracing::{debug, warn};

use igniter_core::components::EngineControls;
use igniter_core::constants::{SCREEN_MESSAGE_DURATION_SECS, SHUTDOWN_ACTION_KEYWORD};
use igniter_core::events::ScreenMessage;

/// What the host lets the integration layer do to an engine.
pub trait EngineHost {
    /// Activate or deactivate the engine's "running" behavior groups.
    fn set_running_active(&mut self, active: bool);
    /// Invoke every action tagged as a shutdown action. Returns how many ran.
    fn invoke_shutdown_actions(&mut self) -> usize;
    /// Show a transient message to the pilot.
    fn post_user_message(&mut self, text: String, duration_secs: f32);
}

/// Whether a host action name denotes a shutdown (case-insensitive).
pub fn is_shutdown_action(name: &str) -> bool {
    name.to_lowercase().contains(SHUTDOWN_ACTION_KEYWORD)
}

/// Force an engine with no ignitions left off and tell the pilot why.
pub fn apply_force_shutdown<H: EngineHost + ?Sized>(
    host: &mut H,
    engine_name: &str,
    title: &str,
) {
    warn!(engine = engine_name, "{engine_name} has no ignitions remaining");

    host.post_user_message(
        format!("{title} has no ignitions remaining!"),
        SCREEN_MESSAGE_DURATION_SECS,
    );

    // Shutdown actions may re-enable running groups; clear them again after.
    host.set_running_active(false);
    let invoked = host.invoke_shutdown_actions();
    host.set_running_active(false);

    if invoked == 0 {
        warn!(engine = engine_name, "no shutdown action found on {engine_name}");
    }
}

/// `EngineHost` backed by an engine entity's components in the ECS world.
pub struct WorldEngineHost<'a> {
    pub engine_name: &'a str,
    pub controls: &'a mut EngineControls,
    pub messages: &'a mut Vec<ScreenMessage>,
    pub tick: u64,
}

impl EngineHost for WorldEngineHost<'_> {
    fn set_running_active(&mut self, active: bool) {
        self.controls.running_groups_active = active;
    }

    fn invoke_shutdown_actions(&mut self) -> usize {
        let mut invoked = 0;
        for action in self
            .controls
            .actions
            .iter_mut()
            .filter(|a| is_shutdown_action(&a.name))
        {
            debug!(action = %action.name, "Shutting down engine {}", self.engine_name);
            action.invocations += 1;
            invoked += 1;
        }
        invoked
    }

    fn post_user_message(&mut self, text: String, duration_secs: f32) {
        self.messages.push(ScreenMessage {
            text,
            duration_secs,
            tick: self.tick,
        });
    }
}
