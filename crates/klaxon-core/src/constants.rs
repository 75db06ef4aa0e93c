//! Warning thresholds and audio tuning parameters.

// --- G-force ---

/// Sustained high-G threshold (solid warning, slow beep).
pub const GEE_SOLID_THRESHOLD: f64 = 4.5;

/// Extreme G threshold (blinking warning, fast pattern).
pub const GEE_BLINKING_THRESHOLD: f64 = 6.5;

// --- Terrain / pull-up ---

/// TERRAIN warning: below this radar altitude in meters, gear up.
pub const LOW_ALTITUDE_THRESHOLD_M: f64 = 200.0;

/// PULL UP warning: time to impact below this many seconds while descending.
pub const TIME_TO_IMPACT_THRESHOLD_SECS: f64 = 5.0;

// --- Stall ---

/// Miles-per-hour to meters-per-second conversion factor.
pub const MPH_TO_MS: f64 = 0.44704;

/// Stall warning below this horizontal speed (100 mph in m/s).
pub const STALL_SPEED_THRESHOLD_MS: f64 = 100.0 * MPH_TO_MS;

// --- Overspeed ---

/// Overspeed warning above this surface speed (m/s).
pub const OVERSPEED_SPEED_THRESHOLD_MS: f64 = 900.0;

/// Overspeed warning only below this altitude (m).
pub const OVERSPEED_ALTITUDE_CEILING_M: f64 = 15_000.0;

// --- Gear ---

/// Gear-speed conflict: gear deployed above this surface speed (m/s).
pub const GEAR_SPEED_THRESHOLD_MS: f64 = 100.0;

// --- Temperature ---

/// Solid temperature warning at this percentage of part max temp.
pub const TEMP_SOLID_PERCENT: f64 = 50.0;

/// Blinking temperature warning at this percentage of part max temp.
pub const TEMP_BLINKING_PERCENT: f64 = 80.0;

// --- Replay intervals (seconds per category) ---

pub const GEE_INTERVAL_SECS: f64 = 3.0;
pub const ALTITUDE_INTERVAL_SECS: f64 = 3.0;
/// Longer interval to reduce pull-up stutter.
pub const PULL_UP_INTERVAL_SECS: f64 = 5.0;
pub const STALL_INTERVAL_SECS: f64 = 3.0;
pub const OVERSPEED_INTERVAL_SECS: f64 = 3.0;
/// Brake tone is continuous; this only guards against restart thrash.
pub const BRAKE_INTERVAL_SECS: f64 = 0.1;
pub const GEAR_INTERVAL_SECS: f64 = 3.0;
pub const TEMPERATURE_INTERVAL_SECS: f64 = 2.0;

// --- Audio output ---

/// Sample rate assumed when the output device reports none.
pub const DEFAULT_SAMPLE_RATE: u32 = 44_100;

/// One-shot voice playback is force-stopped after this many seconds.
pub const VOICE_STOP_SECS: f64 = 2.0;

/// Gain for single beeps and sweeps.
pub const BEEP_GAIN: f64 = 0.5;

/// Gain for tones inside composite patterns.
pub const COMPOSITE_GAIN: f64 = 0.6;

/// Brake loop frequency (Hz) and gain (kept quiet).
pub const BRAKE_TONE_HZ: f64 = 600.0;
pub const BRAKE_TONE_GAIN: f64 = 0.1;

/// Brake loop buffer length in seconds (looped by the sink).
pub const BRAKE_LOOP_SECS: f64 = 1.0;

// --- Notifications ---

/// Default on-screen display duration for warning labels (seconds).
pub const NOTIFY_SECS: f64 = 2.0;

/// PULL UP gets a slightly longer display.
pub const NOTIFY_PULL_UP_SECS: f64 = 2.5;
