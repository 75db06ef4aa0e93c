//! Warning evaluator — maps one telemetry snapshot to warning levels.
//!
//! Pure function, no side effects, no I/O. Recomputed in full every tick;
//! cross-tick memory lives only in the debounce clock.

use klaxon_core::constants::*;
use klaxon_core::enums::{WarningCategory, WarningLevel};
use klaxon_core::state::WarningState;
use klaxon_core::types::TelemetrySnapshot;

/// Evaluate every hazard category against one snapshot.
pub fn evaluate(snapshot: &TelemetrySnapshot) -> WarningState {
    let mut state = WarningState::default();

    let altitude = snapshot.clamped_altitude();
    let gear = snapshot.gear_deployed;

    // G-force: tiered on absolute load factor.
    let gee = if snapshot.gee_force >= GEE_BLINKING_THRESHOLD {
        WarningLevel::Blinking
    } else if snapshot.gee_force >= GEE_SOLID_THRESHOLD {
        WarningLevel::Solid
    } else {
        WarningLevel::Off
    };
    state.set(WarningCategory::Gee, gee);

    // Terrain proximity: gear up, low but positive radar altitude.
    // The clamp keeps negative (underwater) readings from triggering.
    if !gear && altitude > 0.0 && altitude < LOW_ALTITUDE_THRESHOLD_M {
        state.set(WarningCategory::Altitude, WarningLevel::Solid);
    }

    // Pull up: descending with impact imminent. `time_to_impact` is None
    // unless strictly descending, which doubles as the division guard.
    if !gear {
        if let Some(tti) = snapshot.time_to_impact() {
            if tti < TIME_TO_IMPACT_THRESHOLD_SECS {
                state.set(WarningCategory::PullUp, WarningLevel::Solid);
            }
        }
    }

    // Stall: low horizontal speed with gear up. The vertical component is
    // removed so a fast dive is not mistaken for forward flight.
    if !gear && snapshot.horizontal_speed() < STALL_SPEED_THRESHOLD_MS {
        state.set(WarningCategory::Stall, WarningLevel::Solid);
    }

    // Overspeed: too fast, too low.
    let overspeed = snapshot.surface_speed > OVERSPEED_SPEED_THRESHOLD_MS
        && altitude < OVERSPEED_ALTITUDE_CEILING_M;
    if overspeed {
        state.set(WarningCategory::Overspeed, WarningLevel::Solid);
    }

    // Brake: direct mirror of the input.
    if snapshot.brakes_engaged {
        state.set(WarningCategory::Brake, WarningLevel::Solid);
    }

    // Gear-speed conflict: gear deployed at high speed.
    if gear && snapshot.surface_speed > GEAR_SPEED_THRESHOLD_MS {
        state.set(WarningCategory::Gear, WarningLevel::Solid);
    }

    // Temperature: tiered on the hottest part.
    let temp_percent = snapshot.max_temp_percent();
    let temp = if temp_percent >= TEMP_BLINKING_PERCENT {
        WarningLevel::Blinking
    } else if temp_percent >= TEMP_SOLID_PERCENT {
        WarningLevel::Solid
    } else {
        WarningLevel::Off
    };
    state.set(WarningCategory::Temperature, temp);

    // Overspeed implies thermal risk even before sensors catch up:
    // raise Temperature to at least Solid, never lowering a Blinking.
    if overspeed {
        state.raise(WarningCategory::Temperature, WarningLevel::Solid);
    }

    state
}
