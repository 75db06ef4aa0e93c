//! Fixed synthesized-pattern recipes, one per warning category.
//!
//! These are the fallbacks the dispatcher plays when no recorded beep
//! clip exists for a category. Recipes are deliberately distinct from
//! one another so a pilot can tell hazards apart by ear alone.

use klaxon_core::constants::{BRAKE_TONE_GAIN, BRAKE_TONE_HZ};
use klaxon_core::enums::{WarningCategory, WarningLevel};

use crate::tone::{beep, composite, loop_tone, sweep, ToneBuffer};

/// One-shot pattern for an active category at the given level.
///
/// Only Gee and Temperature vary by level; for every other category the
/// level is ignored. Callers only pass active levels — an `Off` level
/// yields that category's solid recipe. Brake is not a one-shot category;
/// asking for it returns the loop buffer (see [`brake_loop`]).
pub fn pattern_for(sample_rate: u32, category: WarningCategory, level: WarningLevel) -> ToneBuffer {
    match category {
        WarningCategory::Gee => match level {
            // Two quick high beeps, military style.
            WarningLevel::Blinking => {
                composite(sample_rate, &[(1200.0, 0.06), (900.0, 0.06)], 0.04)
            }
            // Single slower beep for sustained high gee.
            _ => beep(sample_rate, 1000.0, 0.12),
        },
        WarningCategory::Altitude => sweep(sample_rate, 500.0, 1000.0, 0.25),
        // Ascending staccato to convey urgency.
        WarningCategory::PullUp => composite(
            sample_rate,
            &[(800.0, 0.08), (1000.0, 0.08), (1200.0, 0.08)],
            0.03,
        ),
        // Three quick 800 Hz beeps, 120 ms apart.
        WarningCategory::Stall => composite(
            sample_rate,
            &[(800.0, 0.08), (800.0, 0.08), (800.0, 0.08)],
            0.12,
        ),
        WarningCategory::Overspeed => beep(sample_rate, 1500.0, 0.15),
        WarningCategory::Brake => brake_loop(sample_rate),
        WarningCategory::Gear => beep(sample_rate, 700.0, 0.15),
        WarningCategory::Temperature => match level {
            WarningLevel::Blinking => {
                composite(sample_rate, &[(1400.0, 0.07), (1400.0, 0.07)], 0.05)
            }
            _ => beep(sample_rate, 950.0, 0.12),
        },
    }
}

/// The continuous brake tone: quiet, low, looped until stopped.
pub fn brake_loop(sample_rate: u32) -> ToneBuffer {
    loop_tone(sample_rate, BRAKE_TONE_HZ, BRAKE_TONE_GAIN)
}
