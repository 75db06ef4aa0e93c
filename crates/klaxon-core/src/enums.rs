//! Enumeration types used throughout the alerting engine.

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// The eight independent hazard categories evaluated each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WarningCategory {
    /// Excess G-force (tiered: solid at 4.5G, blinking at 6.5G).
    Gee,
    /// Low-altitude terrain proximity with gear up.
    Altitude,
    /// Imminent impact (descending, time-to-impact under threshold).
    PullUp,
    /// Aerodynamic stall (low horizontal speed, gear up).
    Stall,
    /// Excess surface speed in the lower atmosphere.
    Overspeed,
    /// Brakes engaged (continuous tone, not one-shot).
    Brake,
    /// Gear deployed at high speed (conflicting configuration).
    Gear,
    /// Part overheating (tiered: solid at 50%, blinking at 80%).
    Temperature,
}

impl WarningCategory {
    /// All categories in dispatch order.
    pub const ALL: [WarningCategory; 8] = [
        WarningCategory::Gee,
        WarningCategory::Altitude,
        WarningCategory::PullUp,
        WarningCategory::Stall,
        WarningCategory::Overspeed,
        WarningCategory::Brake,
        WarningCategory::Gear,
        WarningCategory::Temperature,
    ];

    /// Number of categories (array index space).
    pub const COUNT: usize = Self::ALL.len();

    /// Stable index for per-category storage.
    pub fn index(self) -> usize {
        match self {
            WarningCategory::Gee => 0,
            WarningCategory::Altitude => 1,
            WarningCategory::PullUp => 2,
            WarningCategory::Stall => 3,
            WarningCategory::Overspeed => 4,
            WarningCategory::Brake => 5,
            WarningCategory::Gear => 6,
            WarningCategory::Temperature => 7,
        }
    }

    /// Short on-screen label posted when this category triggers.
    pub fn label(self) -> &'static str {
        match self {
            WarningCategory::Gee => "OVERGEE",
            WarningCategory::Altitude => "TERRAIN",
            WarningCategory::PullUp => "PULL UP",
            WarningCategory::Stall => "STALL",
            WarningCategory::Overspeed => "OVERSPEED",
            WarningCategory::Brake => "BRAKES",
            WarningCategory::Gear => "GEAR SPEED",
            WarningCategory::Temperature => "OVERHEAT",
        }
    }

    /// Minimum seconds between successive audio triggers for this category.
    pub fn debounce_interval(self) -> f64 {
        match self {
            WarningCategory::Gee => GEE_INTERVAL_SECS,
            WarningCategory::Altitude => ALTITUDE_INTERVAL_SECS,
            WarningCategory::PullUp => PULL_UP_INTERVAL_SECS,
            WarningCategory::Stall => STALL_INTERVAL_SECS,
            WarningCategory::Overspeed => OVERSPEED_INTERVAL_SECS,
            WarningCategory::Brake => BRAKE_INTERVAL_SECS,
            WarningCategory::Gear => GEAR_INTERVAL_SECS,
            WarningCategory::Temperature => TEMPERATURE_INTERVAL_SECS,
        }
    }
}

/// Severity level for a warning category.
///
/// Boolean categories use `Off`/`Solid`; only Gee and Temperature ever
/// reach `Blinking`. Ordered so `max()` expresses severity escalation.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum WarningLevel {
    #[default]
    Off,
    Solid,
    Blinking,
}

impl WarningLevel {
    /// Whether this level should drive any audio at all.
    pub fn is_active(self) -> bool {
        self != WarningLevel::Off
    }
}
