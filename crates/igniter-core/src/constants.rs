//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 50;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Ignition ---

/// Throttle values strictly above this count as "commanded on".
pub const THROTTLE_ON_THRESHOLD: f32 = 0.0;

// --- Shutdown ---

/// Host actions whose name contains this keyword (case-insensitive) are
/// invoked when an engine is forced off.
pub const SHUTDOWN_ACTION_KEYWORD: &str = "shutdown";

/// Actions an engine exposes when its configuration lists none.
pub const DEFAULT_ENGINE_ACTIONS: [&str; 2] = ["Activate Engine", "Shutdown Engine"];

/// How long the "no ignitions remaining" message stays on screen (seconds).
pub const SCREEN_MESSAGE_DURATION_SECS: f32 = 5.0;
