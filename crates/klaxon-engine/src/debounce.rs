//! Per-category debounce clock.
//!
//! Rate-limits how often each category's audio fires, independent of how
//! many ticks report it active. One keyed clock instead of a loose scalar
//! per category, so the gating logic exists exactly once.

use klaxon_core::enums::WarningCategory;

/// Last-trigger timestamps, keyed by category, on one shared monotonic
/// clock (seconds). The only mutation is recording a dispatched trigger.
#[derive(Debug, Clone, Default)]
pub struct DebounceClock {
    last_trigger: [Option<f64>; WarningCategory::COUNT],
}

impl DebounceClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an active category may trigger its audio action now.
    ///
    /// Returns `true` at most once per the category's debounce interval
    /// while it stays active, and `false` immediately once inactive (no
    /// trailing trigger). A `true` result records `now` as the last
    /// trigger time — callers must dispatch exactly once per `true` and
    /// must not ask twice for the same decision.
    pub fn should_trigger(&mut self, category: WarningCategory, active: bool, now: f64) -> bool {
        if !active {
            return false;
        }
        let idx = category.index();
        let ready = match self.last_trigger[idx] {
            None => true,
            Some(last) => now - last >= category.debounce_interval(),
        };
        if ready {
            self.last_trigger[idx] = Some(now);
        }
        ready
    }

    /// Last time this category actually dispatched, if ever.
    pub fn last_trigger(&self, category: WarningCategory) -> Option<f64> {
        self.last_trigger[category.index()]
    }
}
