//! Simulation engine: the host-side loop around the ignition trackers.
//!
//! `SimulationEngine` owns the hecs world of engine parts, processes host
//! commands, runs the ignition systems and produces `IgnitionSnapshot`s.
//! Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use hecs::{Entity, World};
use tracing::{info, warn};

use igniter_core::commands::HostCommand;
use igniter_core::components::{EngineControls, EngineIdentity, Throttle};
use igniter_core::config::{EngineConfig, IgniterConfig};
use igniter_core::enums::{IgnitionState, SimulationMode};
use igniter_core::error::ConfigError;
use igniter_core::events::{EngineDecision, ScreenMessage};
use igniter_core::state::{IgnitionSnapshot, PersistedIgnition};
use igniter_core::types::SimTime;
use igniter_fsm::IgnitionTracker;

use crate::systems;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Default)]
pub struct SimConfig {
    /// Engines to spawn, with their budgets and persisted usage.
    pub engines: Vec<EngineConfig>,
}

impl From<IgniterConfig> for SimConfig {
    fn from(config: IgniterConfig) -> Self {
        Self {
            engines: config.engines,
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    mode: SimulationMode,
    command_queue: VecDeque<HostCommand>,
    decisions: Vec<(Entity, EngineDecision)>,
    messages: Vec<ScreenMessage>,
}

impl SimulationEngine {
    /// Create a new simulation with every configured engine spawned and
    /// not yet attached.
    pub fn new(config: SimConfig) -> Self {
        let mut world = World::new();
        world_setup::setup_engines(&mut world, &config.engines);

        Self {
            world,
            time: SimTime::default(),
            mode: SimulationMode::default(),
            command_queue: VecDeque::new(),
            decisions: Vec::new(),
            messages: Vec::new(),
        }
    }

    pub fn from_config(config: &IgniterConfig) -> Self {
        Self::new(SimConfig::from(config.clone()))
    }

    /// Queue a host command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: HostCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = HostCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> IgnitionSnapshot {
        self.process_commands();
        self.run_systems();

        let decisions = self
            .decisions
            .drain(..)
            .map(|(_entity, decision)| decision)
            .collect();
        let messages = std::mem::take(&mut self.messages);

        if self.mode.is_active() {
            self.time.advance();
        }

        systems::snapshot::build_snapshot(&self.world, &self.time, self.mode, decisions, messages)
    }

    /// Current state without advancing time.
    pub fn snapshot(&self) -> IgnitionSnapshot {
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.mode,
            Vec::new(),
            Vec::new(),
        )
    }

    /// Get the mode the trackers are attached under.
    pub fn mode(&self) -> SimulationMode {
        self.mode
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Copy of the named engine's tracker.
    pub fn tracker(&self, engine: &str) -> Option<IgnitionTracker> {
        let entity = self.find_engine(engine)?;
        let tracker = self.world.get::<&IgnitionTracker>(entity).ok()?;
        Some((*tracker).clone())
    }

    /// Copy of the named engine's host controls.
    pub fn controls(&self, engine: &str) -> Option<EngineControls> {
        let entity = self.find_engine(engine)?;
        let controls = self.world.get::<&EngineControls>(entity).ok()?;
        Some((*controls).clone())
    }

    /// Ignition usage of every engine, for the host's save step.
    pub fn persisted_records(&self) -> Vec<PersistedIgnition> {
        let mut query = self.world.query::<(&EngineIdentity, &IgnitionTracker)>();
        let mut records: Vec<PersistedIgnition> = query
            .iter()
            .map(|(_entity, (identity, tracker))| PersistedIgnition {
                engine: identity.name.clone(),
                ignitions_used: tracker.ignitions_used(),
            })
            .collect();
        records.sort_by(|a, b| a.engine.cmp(&b.engine));
        records
    }

    /// Load persisted ignition usage back onto the engines.
    ///
    /// All records are checked before any is applied. Ignition state
    /// restarts at `NotIgnited` and the current mode is re-applied.
    pub fn restore(&mut self, records: &[PersistedIgnition]) -> Result<(), ConfigError> {
        let mut targets = Vec::with_capacity(records.len());
        for record in records {
            let entity = self.find_engine(&record.engine).ok_or_else(|| {
                ConfigError::UnknownEngine {
                    name: record.engine.clone(),
                }
            })?;
            targets.push((entity, record.ignitions_used));
        }

        for (entity, ignitions_used) in targets {
            if let Ok((identity, tracker, controls)) = self.world.query_one_mut::<(
                &EngineIdentity,
                &mut IgnitionTracker,
                &mut EngineControls,
            )>(entity)
            {
                let mut restored =
                    IgnitionTracker::new(tracker.ignitions_permitted(), ignitions_used);
                if self.mode != SimulationMode::Uninitialized {
                    restored.attach(self.mode);
                }
                *tracker = restored;
                controls.running_groups_active = false;
                info!(engine = %identity.name, "{}", tracker.load_summary(&identity.name));
            }
        }
        Ok(())
    }

    fn find_engine(&self, name: &str) -> Option<Entity> {
        let mut query = self.world.query::<&EngineIdentity>();
        let found = query
            .iter()
            .find(|(_entity, identity)| identity.name == name)
            .map(|(entity, _identity)| entity);
        found
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single host command.
    fn handle_command(&mut self, command: HostCommand) {
        match command {
            HostCommand::Attach { mode } => {
                self.mode = mode;
                let mut attached = 0;
                for (_entity, (tracker, controls)) in self
                    .world
                    .query_mut::<(&mut IgnitionTracker, &mut EngineControls)>()
                {
                    tracker.attach(mode);
                    if tracker.state() == IgnitionState::NotIgnited {
                        controls.running_groups_active = false;
                    }
                    attached += 1;
                }
                info!("Attached {attached} engine(s) in {mode:?}");
            }
            HostCommand::SetThrottle { engine, throttle } => {
                let mut matched = false;
                for (_entity, (identity, requested)) in
                    self.world.query_mut::<(&EngineIdentity, &mut Throttle)>()
                {
                    if identity.name == engine {
                        requested.requested = throttle;
                        matched = true;
                    }
                }
                if !matched {
                    warn!("SetThrottle for unknown engine '{engine}'");
                }
            }
            HostCommand::SetAllThrottles { throttle } => {
                for (_entity, requested) in self.world.query_mut::<&mut Throttle>() {
                    requested.requested = throttle;
                }
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Tracker decisions
        systems::ignition::run(&mut self.world, self.time.tick, &mut self.decisions);
        // 2. Host effects (running groups, shutdown actions, messages)
        systems::host_effects::run(
            &mut self.world,
            &self.decisions,
            &mut self.messages,
            self.time.tick,
        );
    }
}
