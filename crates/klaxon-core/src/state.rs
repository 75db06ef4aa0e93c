//! Per-tick warning state and the tick report handed back to the host.

use serde::{Deserialize, Serialize};

use crate::enums::{WarningCategory, WarningLevel};

/// The level of every category for one tick.
///
/// Recomputed in full from each telemetry snapshot; carries no memory of
/// the previous tick (only the debounce clock does).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarningState {
    levels: [WarningLevel; WarningCategory::COUNT],
}

impl WarningState {
    /// Current level for a category.
    pub fn level(&self, category: WarningCategory) -> WarningLevel {
        self.levels[category.index()]
    }

    /// Set a category's level outright.
    pub fn set(&mut self, category: WarningCategory, level: WarningLevel) {
        self.levels[category.index()] = level;
    }

    /// Raise a category to at least `floor`, never lowering it.
    pub fn raise(&mut self, category: WarningCategory, floor: WarningLevel) {
        let idx = category.index();
        self.levels[idx] = self.levels[idx].max(floor);
    }

    /// Whether the category is driving audio this tick.
    pub fn is_active(&self, category: WarningCategory) -> bool {
        self.level(category).is_active()
    }

    /// Iterate categories with their levels, in dispatch order.
    pub fn iter(&self) -> impl Iterator<Item = (WarningCategory, WarningLevel)> + '_ {
        WarningCategory::ALL
            .into_iter()
            .map(move |c| (c, self.level(c)))
    }

    /// Count of currently active categories.
    pub fn active_count(&self) -> usize {
        self.levels.iter().filter(|l| l.is_active()).count()
    }
}

/// What one engine tick produced: the evaluated state (absent when no
/// telemetry was available) and the categories whose audio actually fired.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TickReport {
    pub state: Option<WarningState>,
    pub triggered: Vec<WarningCategory>,
}
