//! klaxon-demo: run a scripted flight profile through the alerting engine.
//!
//! Usage:
//!   klaxon-demo [--seed N]
//!
//! Drives the engine at 30 Hz through a descent-and-dash scenario with no
//! recorded clips, so every warning exercises the synthesis fallback. The
//! sink and notifier here just log what a real audio backend would play.

use std::process;

use tracing::info;

use klaxon_core::types::{ClipHandle, PartThermal, TelemetrySnapshot};
use klaxon_engine::engine::{AlertEngine, EngineConfig};
use klaxon_engine::sink::{AudioChannel, AudioSink, NoAssets, Notifier, NotifyError, SinkError};
use klaxon_synth::tone::ToneBuffer;

const TICK_RATE: u32 = 30;

/// Sink that logs playback instead of touching an audio device.
struct LoggingSink;

impl AudioSink for LoggingSink {
    fn sample_rate(&self) -> Option<u32> {
        None
    }

    fn play_clip(&mut self, channel: AudioChannel, clip: ClipHandle) -> Result<(), SinkError> {
        info!(?channel, ?clip, "play clip");
        Ok(())
    }

    fn play_buffer(&mut self, channel: AudioChannel, buffer: &ToneBuffer) -> Result<(), SinkError> {
        info!(
            ?channel,
            samples = buffer.len(),
            secs = buffer.duration_secs(),
            "play synthesized pattern"
        );
        Ok(())
    }

    fn start_loop(&mut self, channel: AudioChannel, buffer: ToneBuffer) -> Result<(), SinkError> {
        info!(?channel, samples = buffer.len(), "start loop");
        Ok(())
    }

    fn stop(&mut self, channel: AudioChannel) {
        info!(?channel, "stop");
    }
}

/// Notifier that logs the on-screen label.
struct LoggingNotifier;

impl Notifier for LoggingNotifier {
    fn notify(&mut self, label: &str, duration_secs: f64) -> Result<(), NotifyError> {
        info!(label, duration_secs, "notify");
        Ok(())
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let mut seed = 42u64;
    let args: Vec<String> = std::env::args().collect();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                seed = match args.get(i).map(|s| s.parse()) {
                    Some(Ok(v)) => v,
                    _ => {
                        eprintln!("--seed requires an integer");
                        process::exit(1);
                    }
                };
            }
            "help" | "--help" | "-h" => {
                eprintln!("klaxon-demo: scripted flight profile for the alerting engine\n\n  --seed N   RNG seed for voice selection (default 42)");
                return;
            }
            other => {
                eprintln!("Unknown argument: {other}");
                process::exit(1);
            }
        }
        i += 1;
    }

    let mut engine = AlertEngine::new(
        EngineConfig {
            seed,
            enabled: true,
        },
        &NoAssets,
        LoggingSink,
        LoggingNotifier,
    );

    let dt = 1.0 / TICK_RATE as f64;
    let total_ticks = 20 * TICK_RATE as u64; // 20 seconds of flight

    for tick in 0..total_ticks {
        let now = tick as f64 * dt;
        let snapshot = profile_at(now);
        let report = engine.tick(Some(&snapshot), now);
        for category in &report.triggered {
            info!(t = now, ?category, "triggered");
        }
    }

    engine.shutdown();
}

/// A 20-second scripted profile that walks through every hazard:
/// fast low dash, hard pull, terminal dive, slow approach with brakes,
/// then a gear-down high-speed pass.
fn profile_at(t: f64) -> TelemetrySnapshot {
    if t < 5.0 {
        // Overspeed dash at low altitude; skin heating up.
        TelemetrySnapshot {
            vertical_speed: 0.0,
            radar_altitude: 8_000.0,
            gee_force: 1.2,
            surface_speed: 950.0,
            gear_deployed: false,
            brakes_engaged: false,
            parts: vec![PartThermal {
                temp: 300.0,
                max_temp: 1000.0,
                skin_temp: 550.0,
                skin_max_temp: 1000.0,
            }],
        }
    } else if t < 9.0 {
        // Hard 7G pull out of the dash.
        TelemetrySnapshot {
            vertical_speed: 20.0,
            radar_altitude: 6_000.0,
            gee_force: 7.0,
            surface_speed: 600.0,
            gear_deployed: false,
            brakes_engaged: false,
            parts: Vec::new(),
        }
    } else if t < 13.0 {
        // Terminal dive: terrain and pull-up territory.
        TelemetrySnapshot {
            vertical_speed: -60.0,
            radar_altitude: 180.0,
            gee_force: 2.0,
            surface_speed: 250.0,
            gear_deployed: false,
            brakes_engaged: false,
            parts: Vec::new(),
        }
    } else if t < 17.0 {
        // Slow flare with brakes on: stall plus the continuous tone.
        TelemetrySnapshot {
            vertical_speed: -2.0,
            radar_altitude: 400.0,
            gee_force: 1.0,
            surface_speed: 35.0,
            gear_deployed: false,
            brakes_engaged: true,
            parts: Vec::new(),
        }
    } else {
        // Gear down, too fast.
        TelemetrySnapshot {
            vertical_speed: 0.0,
            radar_altitude: 500.0,
            gee_force: 1.0,
            surface_speed: 160.0,
            gear_deployed: true,
            brakes_engaged: false,
            parts: Vec::new(),
        }
    }
}
