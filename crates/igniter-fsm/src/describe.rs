//! Human-readable descriptions of an ignition tracker.
//!
//! Used by presentation and logging only; nothing here feeds back into
//! the state machine.

use igniter_core::types::Remaining;

use crate::tracker::IgnitionTracker;

impl IgnitionTracker {
    /// Current budget, e.g. "This engine can start 2 more times."
    pub fn describe(&self) -> String {
        match self.ignitions_remaining() {
            Remaining::Limited(n) => format!(
                "This engine can start {n} more {}.",
                pluralise("time", n as i64)
            ),
            Remaining::Unlimited => {
                "This engine can start an unlimited number of times.".to_string()
            }
        }
    }

    /// Part info text shown in the editor, based on the configured budget.
    pub fn part_info(&self) -> String {
        let mut info = String::from("This engine can be started ");
        if self.requires_ignition() {
            let permitted = self.ignitions_permitted();
            info.push_str(&format!(
                "{permitted} {}.",
                pluralise("time", permitted as i64)
            ));
        } else {
            info.push_str("an unlimited number of times.");
        }
        info
    }

    /// Summary logged when the tracker is loaded onto a part.
    pub fn load_summary(&self, part_name: &str) -> String {
        match self.ignitions_remaining() {
            Remaining::Limited(n) => format!(
                "Loaded on {part_name}; {} ignitions permitted, {n} ignitions remaining.",
                self.ignitions_permitted(),
            ),
            Remaining::Unlimited => {
                format!("Loaded on {part_name}; infinite ignitions available.")
            }
        }
    }
}

/// Append an "s" unless `count` is exactly one.
pub fn pluralise(noun: &str, count: i64) -> String {
    if count == 1 {
        noun.to_string()
    } else {
        format!("{noun}s")
    }
}
