//! Telemetry snapshot types and derived quantities.

use serde::{Deserialize, Serialize};

/// Opaque handle to a pre-loaded audio clip, owned by the asset store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClipHandle(pub u64);

/// Per-part thermal readings (absolute, same units for current and max).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PartThermal {
    pub temp: f64,
    pub max_temp: f64,
    pub skin_temp: f64,
    pub skin_max_temp: f64,
}

impl PartThermal {
    /// Worst of internal and skin temperature as a percentage of max.
    /// A non-positive max reads as 0% rather than dividing by zero.
    pub fn percent(&self) -> f64 {
        let internal = ratio_percent(self.temp, self.max_temp);
        let skin = ratio_percent(self.skin_temp, self.skin_max_temp);
        internal.max(skin)
    }
}

fn ratio_percent(current: f64, max: f64) -> f64 {
    if max <= 0.0 {
        return 0.0;
    }
    100.0 * current / max
}

/// One vehicle telemetry reading, produced once per simulation tick.
///
/// Ephemeral: evaluated and discarded. The engine never stores one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    /// Vertical speed in m/s (negative = descending).
    pub vertical_speed: f64,
    /// Radar altitude in meters. May be negative (underwater); clamped
    /// to zero before any comparison via [`clamped_altitude`].
    ///
    /// [`clamped_altitude`]: TelemetrySnapshot::clamped_altitude
    pub radar_altitude: f64,
    /// Load factor as a multiple of standard gravity.
    pub gee_force: f64,
    /// Speed over the surface in m/s (non-negative).
    pub surface_speed: f64,
    /// Whether landing gear is deployed.
    pub gear_deployed: bool,
    /// Whether brakes are engaged.
    pub brakes_engaged: bool,
    /// Thermal readings for every part on the vehicle.
    pub parts: Vec<PartThermal>,
}

impl TelemetrySnapshot {
    /// Radar altitude clamped to ≥ 0.
    pub fn clamped_altitude(&self) -> f64 {
        self.radar_altitude.max(0.0)
    }

    /// Horizontal speed with the vertical component removed, so a fast
    /// dive is not mistaken for forward flight.
    pub fn horizontal_speed(&self) -> f64 {
        let squared =
            self.surface_speed * self.surface_speed - self.vertical_speed * self.vertical_speed;
        squared.max(0.0).sqrt()
    }

    /// Seconds until ground contact at the current descent rate.
    /// `None` when not descending (strictly), which also rules out
    /// division by zero.
    pub fn time_to_impact(&self) -> Option<f64> {
        if self.vertical_speed < 0.0 {
            Some(self.clamped_altitude() / -self.vertical_speed)
        } else {
            None
        }
    }

    /// Maximum temperature percentage across all parts, clamped to
    /// [0, 100]. Zero parts reads as 0.
    pub fn max_temp_percent(&self) -> f64 {
        self.parts
            .iter()
            .map(PartThermal::percent)
            .fold(0.0, f64::max)
            .clamp(0.0, 100.0)
    }
}
