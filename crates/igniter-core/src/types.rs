//! Fundamental simulation and accounting types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Ignitions left on an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Remaining {
    /// Rationed budget with this many ignitions left (may be zero).
    Limited(u32),
    /// No rationing applies.
    Unlimited,
}

impl Remaining {
    /// Whether at least one more ignition is allowed.
    pub fn allows_ignition(self) -> bool {
        match self {
            Remaining::Limited(n) => n > 0,
            Remaining::Unlimited => true,
        }
    }

    /// Numeric count, `None` for unlimited.
    pub fn count(self) -> Option<u32> {
        match self {
            Remaining::Limited(n) => Some(n),
            Remaining::Unlimited => None,
        }
    }
}

impl fmt::Display for Remaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Remaining::Limited(n) => write!(f, "{n}"),
            Remaining::Unlimited => f.write_str("unlimited"),
        }
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each active tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Seconds per tick at the default tick rate.
    pub fn dt(&self) -> f64 {
        crate::constants::DT
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}
